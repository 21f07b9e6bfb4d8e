//! FASHN CLI
//!
//! Command-line interface for the FASHN virtual try-on API.

mod commands;
mod config;

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use fashn_client::{DEFAULT_BASE_URL, PollPolicy};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "fashn")]
#[command(about = "FASHN virtual try-on CLI", long_about = None)]
struct Cli {
    /// API base URL
    #[arg(long, env = "FASHN_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// API key
    #[arg(long, env = "FASHN_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Seconds to wait for a job before giving up
    #[arg(long, env = "FASHN_DEADLINE", default_value_t = 25)]
    deadline: u64,

    /// Seconds between two status requests
    #[arg(long, env = "FASHN_POLL_INTERVAL", default_value_t = 5)]
    interval: u64,

    /// Timeout of a single HTTP request, in seconds
    #[arg(long, env = "FASHN_HTTP_TIMEOUT", default_value_t = 30)]
    http_timeout: u64,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout only carries results
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fashn_cli=info,fashn_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = Config {
        base_url: cli.base_url,
        api_key: cli.api_key,
        poll: PollPolicy::new(
            Duration::from_secs(cli.deadline),
            Duration::from_secs(cli.interval),
        ),
        http_timeout: Duration::from_secs(cli.http_timeout),
    };
    config.validate()?;
    debug!(
        base_url = %config.base_url,
        deadline = ?config.poll.deadline,
        interval = ?config.poll.interval,
        "Loaded configuration"
    );

    handle_command(cli.command, &config).await
}
