//! CRUD CLI
//!
//! Command-line interface for managing records on a CRUD server.

mod commands;
mod config;
mod listing;
mod types;
mod validation;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;

#[derive(Parser)]
#[command(name = "crud")]
#[command(about = "Record management CLI", long_about = None)]
struct Cli {
    /// Server URL
    #[arg(
        long,
        env = "CRUD_SERVER_URL",
        default_value = "http://localhost:8080",
        global = true
    )]
    server_url: String,

    /// Print raw JSON instead of formatted output
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config {
        server_url: cli.server_url,
        json: cli.json,
    };

    handle_command(cli.command, &config).await
}
