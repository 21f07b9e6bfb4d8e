//! Account command handlers

use anyhow::{Context, Result};
use colored::*;

use crate::config::Config;

/// Show the credit balance
pub async fn handle_credits(config: &Config) -> Result<()> {
    let client = config.client()?;
    let credits = client
        .credits()
        .await
        .context("Failed to fetch credits, check the API key and base URL")?;

    eprintln!("{} Credentials are valid", "✓".green());
    println!("{}: {}", "Total".bold(), credits.total);
    println!("  Subscription: {}", credits.subscription);
    println!("  On demand:    {}", credits.on_demand);

    Ok(())
}
