//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod record;

use anyhow::Result;
use clap::Subcommand;

use crate::config::Config;
use crate::types::SortOrder;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// List all records
    List {
        /// Only show records whose name, city or age contains this text
        #[arg(short, long)]
        search: Option<String>,

        /// Ordering of the listing
        #[arg(long, value_enum, default_value_t = SortOrder::NameAsc)]
        sort: SortOrder,
    },
    /// Show a single record
    Get {
        /// Record ID
        id: i64,
    },
    /// Create a new record
    Create {
        #[command(flatten)]
        fields: record::RecordFields,
    },
    /// Overwrite name, age and city of a record
    Update {
        /// Record ID
        id: i64,

        #[command(flatten)]
        fields: record::RecordFields,
    },
    /// Delete a record
    Delete {
        /// Record ID
        id: i64,
    },
}

/// Handle a CLI command
///
/// # Arguments
/// * `command` - The command to execute
/// * `config` - The CLI configuration
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    record::handle_record_command(command, config).await
}
