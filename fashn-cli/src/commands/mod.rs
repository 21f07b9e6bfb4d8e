//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod account;
mod batch;
mod status;
mod tryon;

pub use batch::BatchArgs;
pub use tryon::TryOnArgs;

use anyhow::Result;
use clap::Subcommand;
use serde_json::Value;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Generate a virtual try-on and wait for the result
    #[command(name = "tryon")]
    TryOn(TryOnArgs),
    /// Run every try-on listed in a JSON file, one after the other
    Batch(BatchArgs),
    /// Show the current status of a job
    Status {
        /// Job ID returned on submission
        id: String,
    },
    /// Show the remaining credits (also checks the API key)
    Credits,
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::TryOn(args) => tryon::handle_tryon(args, config).await,
        Commands::Batch(args) => batch::handle_batch(args, config).await,
        Commands::Status { id } => status::handle_status(&id, config).await,
        Commands::Credits => account::handle_credits(config).await,
    }
}

/// Print a JSON value on stdout
fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
