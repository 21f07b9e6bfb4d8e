//! Job domain types

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Payload submitted to `POST /v1/run`
///
/// The remote service owns validation of the inputs; this type only carries
/// them. Build it from [`TryOnParams`](crate::TryOnParams) to get typed checks
/// first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRequest {
    pub model_name: String,
    pub inputs: Map<String, Value>,
}

impl JobRequest {
    pub fn new(model_name: impl Into<String>) -> Self {
        Self {
            model_name: model_name.into(),
            inputs: Map::new(),
        }
    }

    /// Adds (or replaces) a single input value
    pub fn with_input(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.inputs.insert(key.into(), value.into());
        self
    }
}

/// Identifier returned by the remote service for a submitted job
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobHandle(String);

impl JobHandle {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for JobHandle {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Job execution status as reported by the status endpoint
///
/// Only `Completed` and `Failed` are terminal.
#[derive(Debug, Clone, PartialEq)]
pub enum JobStatus {
    Pending,
    Processing,
    Completed { output: Value },
    Failed { message: String },
}

impl JobStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed { .. } | Self::Failed { .. })
    }

    /// Short lowercase name, as used on the wire
    pub fn name(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Completed { .. } => "completed",
            Self::Failed { .. } => "failed",
        }
    }
}

/// Result of a job that reached `completed`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobOutput {
    pub id: JobHandle,
    pub output: Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_serializes_model_name_and_inputs() {
        let request = JobRequest::new("tryon-v1.6")
            .with_input("seed", 7)
            .with_input("segmentation_free", true);

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(
            body,
            json!({
                "model_name": "tryon-v1.6",
                "inputs": { "seed": 7, "segmentation_free": true }
            })
        );
    }

    #[test]
    fn test_handle_is_a_plain_string_on_the_wire() {
        let handle = JobHandle::new("abc-123");
        assert_eq!(serde_json::to_value(&handle).unwrap(), json!("abc-123"));
        assert_eq!(handle.to_string(), "abc-123");
    }

    #[test]
    fn test_only_completed_and_failed_are_terminal() {
        assert!(!JobStatus::Pending.is_terminal());
        assert!(!JobStatus::Processing.is_terminal());
        assert!(JobStatus::Completed { output: json!([]) }.is_terminal());
        assert!(
            JobStatus::Failed {
                message: "boom".into()
            }
            .is_terminal()
        );
    }
}
