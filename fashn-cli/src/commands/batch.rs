//! Batch command handler

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use colored::*;
use fashn_client::{ErrorMode, run_batch};
use fashn_core::TryOnParams;

use super::print_json;
use crate::config::Config;

/// Batch arguments
#[derive(Debug, Args)]
pub struct BatchArgs {
    /// JSON file holding an array of try-on parameter objects
    pub file: PathBuf,

    /// Record failing items and keep going instead of stopping at the first error
    #[arg(long)]
    pub continue_on_fail: bool,
}

/// Run every item of the batch file and print the per-item results
pub async fn handle_batch(args: BatchArgs, config: &Config) -> Result<()> {
    let items = load_items(&args.file)?;
    let mode = if args.continue_on_fail {
        ErrorMode::ContinueOnFail
    } else {
        ErrorMode::Strict
    };

    eprintln!(
        "{}",
        format!("Running {} item(s) from {}", items.len(), args.file.display()).bold()
    );

    let client = config.client()?;
    let results = run_batch(&client, items, &config.poll, mode).await?;

    let failed = results.iter().filter(|r| !r.outcome.is_completed()).count();
    if failed == 0 {
        eprintln!("{} All {} item(s) completed", "✓".green(), results.len());
    } else {
        eprintln!(
            "{} {} of {} item(s) failed",
            "✗".red(),
            failed,
            results.len()
        );
    }

    print_json(&serde_json::to_value(&results)?)
}

/// Read the batch file
fn load_items(path: &Path) -> Result<Vec<TryOnParams>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read batch file {}", path.display()))?;

    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse batch file {}", path.display()))
}
