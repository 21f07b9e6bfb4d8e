//! Configuration module
//!
//! Holds the credential, endpoint and polling settings shared by every
//! command.

use std::time::Duration;

use anyhow::{Context, Result};
use fashn_client::{FashnClient, PollPolicy};

/// CLI configuration
#[derive(Clone)]
pub struct Config {
    /// Base URL of the API
    pub base_url: String,
    /// API key sent as a bearer token
    pub api_key: String,
    /// Deadline and interval for status polling
    pub poll: PollPolicy,
    /// Timeout of a single HTTP request
    pub http_timeout: Duration,
}

impl Config {
    /// Validates the configuration
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            anyhow::bail!("api key cannot be empty");
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            anyhow::bail!("base_url must start with http:// or https://");
        }

        if self.http_timeout.is_zero() {
            anyhow::bail!("http_timeout must be greater than 0");
        }

        self.poll.validate()?;

        Ok(())
    }

    /// Builds the API client
    pub fn client(&self) -> Result<FashnClient> {
        let http = reqwest::Client::builder()
            .timeout(self.http_timeout)
            .user_agent(concat!("fashn-cli/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(FashnClient::with_client(
            self.base_url.clone(),
            self.api_key.clone(),
            http,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            base_url: "https://api.fashn.ai".to_string(),
            api_key: "fa-key".to_string(),
            poll: PollPolicy::default(),
            http_timeout: Duration::from_secs(30),
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = config();

        // Valid config should pass
        assert!(config.validate().is_ok());

        // Empty key should fail
        config.api_key = "  ".to_string();
        assert!(config.validate().is_err());

        config.api_key = "fa-key".to_string();

        // Invalid URL should fail
        config.base_url = "api.fashn.ai".to_string();
        assert!(config.validate().is_err());

        config.base_url = "http://localhost:8080".to_string();
        assert!(config.validate().is_ok());

        // Zero interval should fail
        config.poll.interval = Duration::ZERO;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_client_uses_configured_base_url() {
        let client = config().client().unwrap();
        assert_eq!(client.base_url(), "https://api.fashn.ai");
    }
}
