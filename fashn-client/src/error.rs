//! Error types for the FASHN client

use std::time::Duration;

use fashn_core::ValidationError;
use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when using the FASHN client
///
/// Every variant is terminal for the job it was raised for; nothing is
/// retried inside the client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// API returned an error status code
    #[error("API error (status {status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error message from the API
        message: String,
    },

    /// Response body was not a JSON object
    #[error("Invalid response from API: {0}")]
    InvalidResponse(String),

    /// Submission response carried no job identifier
    #[error("No prediction ID returned from API")]
    MissingIdentifier,

    /// The remote job reached `failed`
    #[error("Job failed: {0}")]
    JobFailed(String),

    /// No terminal status before the deadline
    #[error("Job timed out after {} seconds", .deadline.as_secs_f64())]
    Timeout {
        /// Polling budget that was exhausted
        deadline: Duration,
    },

    /// A status request failed while polling
    #[error("Error polling status: {0}")]
    PollError(#[source] Box<ClientError>),

    /// Parameters were rejected before anything was sent
    #[error("Invalid request: {0}")]
    InvalidRequest(#[from] ValidationError),

    /// Polling deadline or interval is unusable
    #[error("Invalid poll policy: {0}")]
    InvalidPolicy(String),
}

impl ClientError {
    /// Create an API error from status code and message
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Wrap an error raised by a status call
    pub fn poll(cause: ClientError) -> Self {
        Self::PollError(Box::new(cause))
    }

    /// Check if the remote reported the job itself as failed
    pub fn is_job_failure(&self) -> bool {
        matches!(self, Self::JobFailed(_))
    }

    /// Check if this error is a timeout
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }

    /// Check if this error is a client error (4xx status), also when wrapped by polling
    pub fn is_client_error(&self) -> bool {
        match self {
            Self::Api { status, .. } => (400..500).contains(status),
            Self::PollError(cause) => cause.is_client_error(),
            _ => false,
        }
    }

    /// Check if this error is a server error (5xx status), also when wrapped by polling
    pub fn is_server_error(&self) -> bool {
        match self {
            Self::Api { status, .. } => *status >= 500,
            Self::PollError(cause) => cause.is_server_error(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            ClientError::JobFailed("bad image".into()).to_string(),
            "Job failed: bad image"
        );
        assert_eq!(
            ClientError::Timeout {
                deadline: Duration::from_secs(25)
            }
            .to_string(),
            "Job timed out after 25 seconds"
        );
        assert_eq!(
            ClientError::poll(ClientError::api_error(502, "bad gateway")).to_string(),
            "Error polling status: API error (status 502): bad gateway"
        );
    }

    #[test]
    fn test_status_classification_sees_through_poll_errors() {
        let err = ClientError::poll(ClientError::api_error(503, "unavailable"));
        assert!(err.is_server_error());
        assert!(!err.is_client_error());

        let err = ClientError::api_error(401, "unauthorized");
        assert!(err.is_client_error());
        assert!(!err.is_job_failure());
    }
}
