//! Status DTOs
//!
//! Body of `GET /v1/status/{id}`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::job::JobStatus;

const UNKNOWN_ERROR: &str = "Unknown error";

/// Raw status response
///
/// `error` is either a plain string or an object carrying a `message`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
    #[serde(default)]
    pub output: Option<Value>,
    #[serde(default)]
    pub error: Option<Value>,
}

impl StatusResponse {
    /// Whether `status` is one of the values the client knows about
    pub fn is_recognised(&self) -> bool {
        matches!(
            self.status.as_str(),
            "starting" | "in_queue" | "pending" | "processing" | "completed" | "failed"
        )
    }

    /// Converts into a domain status
    ///
    /// Anything that is neither `completed` nor `failed` is non-terminal.
    pub fn into_status(self) -> JobStatus {
        match self.status.as_str() {
            "completed" => JobStatus::Completed {
                output: self.output.unwrap_or(Value::Null),
            },
            "failed" => JobStatus::Failed {
                message: error_message(self.error.as_ref()),
            },
            "processing" => JobStatus::Processing,
            _ => JobStatus::Pending,
        }
    }
}

fn error_message(error: Option<&Value>) -> String {
    match error {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        Some(Value::Object(obj)) => match obj.get("message").and_then(Value::as_str) {
            Some(message) => match obj.get("name").and_then(Value::as_str) {
                Some(name) => format!("{name}: {message}"),
                None => message.to_string(),
            },
            None => Value::Object(obj.clone()).to_string(),
        },
        _ => UNKNOWN_ERROR.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(body: Value) -> StatusResponse {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_completed_carries_output() {
        let status = parse(json!({
            "id": "abc",
            "status": "completed",
            "output": ["https://cdn.example.com/out.png"],
            "error": null
        }))
        .into_status();

        assert_eq!(
            status,
            JobStatus::Completed {
                output: json!(["https://cdn.example.com/out.png"])
            }
        );
    }

    #[test]
    fn test_failed_with_string_error() {
        let status = parse(json!({ "status": "failed", "error": "bad image" })).into_status();
        assert_eq!(
            status,
            JobStatus::Failed {
                message: "bad image".into()
            }
        );
    }

    #[test]
    fn test_failed_with_object_error() {
        let status = parse(json!({
            "status": "failed",
            "error": { "name": "ImageLoadError", "message": "could not fetch" }
        }))
        .into_status();
        assert_eq!(
            status,
            JobStatus::Failed {
                message: "ImageLoadError: could not fetch".into()
            }
        );
    }

    #[test]
    fn test_failed_without_error_is_unknown() {
        let status = parse(json!({ "status": "failed", "error": null })).into_status();
        assert_eq!(
            status,
            JobStatus::Failed {
                message: "Unknown error".into()
            }
        );
    }

    #[test]
    fn test_non_terminal_statuses() {
        for s in ["starting", "in_queue", "pending"] {
            let response = parse(json!({ "status": s }));
            assert!(response.is_recognised());
            assert_eq!(response.into_status(), JobStatus::Pending);
        }

        assert_eq!(
            parse(json!({ "status": "processing" })).into_status(),
            JobStatus::Processing
        );

        let odd = parse(json!({ "status": "paused" }));
        assert!(!odd.is_recognised());
        assert_eq!(odd.into_status(), JobStatus::Pending);
    }
}
