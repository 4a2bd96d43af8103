//! Record command handlers
//!
//! Handles listing, viewing, creating, updating and deleting records.

use anyhow::{Context, Result};
use clap::Args;
use colored::*;
use crud_client::CrudClient;
use crud_core::domain::record::Record;
use crud_core::dto::record::RecordPayload;

use super::Commands;
use crate::config::Config;
use crate::listing::{filter_records, sort_records};
use crate::types::SortOrder;
use crate::validation::validate_payload;

/// Fields shared by `create` and `update`
///
/// All three are required because an update overwrites every field.
#[derive(Args)]
pub struct RecordFields {
    /// Person name
    #[arg(short, long)]
    name: String,

    /// Age in years
    #[arg(short, long)]
    age: i32,

    /// City of residence
    #[arg(short, long)]
    city: String,
}

impl From<RecordFields> for RecordPayload {
    fn from(fields: RecordFields) -> Self {
        RecordPayload {
            name: Some(fields.name.trim().to_string()),
            age: fields.age,
            city: Some(fields.city.trim().to_string()),
        }
    }
}

/// Routes record commands to their handlers
pub async fn handle_record_command(command: Commands, config: &Config) -> Result<()> {
    let client = CrudClient::new(&config.server_url);

    match command {
        Commands::List { search, sort } => {
            list_records(&client, config, search.as_deref(), sort).await
        }
        Commands::Get { id } => get_record(&client, config, id).await,
        Commands::Create { fields } => create_record(&client, config, fields.into()).await,
        Commands::Update { id, fields } => {
            update_record(&client, config, id, fields.into()).await
        }
        Commands::Delete { id } => delete_record(&client, config, id).await,
    }
}

/// List records, optionally filtered, in the requested order
async fn list_records(
    client: &CrudClient,
    config: &Config,
    search: Option<&str>,
    sort: SortOrder,
) -> Result<()> {
    let records = client
        .list_records()
        .await
        .context("Failed to fetch records")?;

    let mut records = filter_records(records, search.unwrap_or_default());
    sort_records(&mut records, sort);

    if config.json {
        return print_json(&records);
    }

    if records.is_empty() {
        println!("{}", "No records found.".yellow());
        return Ok(());
    }

    println!("{}", format!("Found {} record(s):", records.len()).bold());
    println!();
    for record in &records {
        print_record_summary(record);
    }

    Ok(())
}

/// Get and display a single record
async fn get_record(client: &CrudClient, config: &Config, id: i64) -> Result<()> {
    let record = client
        .get_record(id)
        .await
        .with_context(|| format!("Failed to fetch record {}", id))?;

    if config.json {
        return print_json(&record);
    }

    print_record_details(&record);

    Ok(())
}

async fn create_record(client: &CrudClient, config: &Config, payload: RecordPayload) -> Result<()> {
    validate_payload(&payload)?;

    let record = client
        .create_record(&payload)
        .await
        .context("Failed to create record")?;

    if config.json {
        return print_json(&record);
    }

    println!("{}", "✓ Record created successfully!".green().bold());
    print_record_details(&record);

    Ok(())
}

async fn update_record(
    client: &CrudClient,
    config: &Config,
    id: i64,
    payload: RecordPayload,
) -> Result<()> {
    validate_payload(&payload)?;

    let record = client
        .update_record(id, &payload)
        .await
        .with_context(|| format!("Failed to update record {}", id))?;

    if config.json {
        return print_json(&record);
    }

    println!("{}", "✓ Record updated successfully!".green().bold());
    print_record_details(&record);

    Ok(())
}

async fn delete_record(client: &CrudClient, config: &Config, id: i64) -> Result<()> {
    client
        .delete_record(id)
        .await
        .with_context(|| format!("Failed to delete record {}", id))?;

    // The server answers with no content, so JSON mode stays silent
    if config.json {
        return Ok(());
    }

    println!(
        "{}",
        format!("✓ Record {} deleted successfully!", id).green().bold()
    );

    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn display_id(record: &Record) -> String {
    record
        .id
        .map(|id| id.to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Print a record summary
fn print_record_summary(record: &Record) {
    println!(
        "  {} {}",
        "▸".cyan(),
        record.name.as_deref().unwrap_or("(unnamed)").bold()
    );
    println!("    ID:   {}", display_id(record).dimmed());
    println!("    Age:  {}", record.age);
    println!("    City: {}", record.city.as_deref().unwrap_or("-").dimmed());
    println!();
}

/// Print detailed record information
fn print_record_details(record: &Record) {
    println!("  ID:   {}", display_id(record).cyan());
    println!("  Name: {}", record.name.as_deref().unwrap_or("-").bold());
    println!("  Age:  {}", record.age);
    println!("  City: {}", record.city.as_deref().unwrap_or("-"));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_are_trimmed_into_payload() {
        let fields = RecordFields {
            name: "  Alice ".to_string(),
            age: 30,
            city: "Paris ".to_string(),
        };

        let payload = RecordPayload::from(fields);
        assert_eq!(payload.name.as_deref(), Some("Alice"));
        assert_eq!(payload.age, 30);
        assert_eq!(payload.city.as_deref(), Some("Paris"));
    }

    #[test]
    fn test_display_id_for_unsaved_record() {
        let record = Record {
            id: None,
            name: None,
            age: 0,
            city: None,
        };
        assert_eq!(display_id(&record), "-");
    }
}
