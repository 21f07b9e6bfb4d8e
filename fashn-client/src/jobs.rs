//! Job-related API endpoints

use async_trait::async_trait;
use fashn_core::dto::status::StatusResponse;
use fashn_core::{JobHandle, JobOutput, JobRequest, JobStatus};
use serde_json::Value;
use tracing::{info, warn};

use crate::FashnClient;
use crate::api::JobApi;
use crate::error::{ClientError, Result};
use crate::poll::{self, PollPolicy};

impl FashnClient {
    // =============================================================================
    // Job Lifecycle
    // =============================================================================

    /// Submit a job
    ///
    /// # Arguments
    /// * `request` - The job payload
    ///
    /// # Returns
    /// The identifier of the created job
    ///
    /// # Errors
    /// * `InvalidResponse` if the body is not a JSON object
    /// * `MissingIdentifier` if the object has no usable `id`
    pub async fn submit(&self, request: &JobRequest) -> Result<JobHandle> {
        let response = self
            .authorize(self.client.post(self.url("/v1/run")))
            .json(request)
            .send()
            .await?;

        let body = self.read_body(response).await?;
        let handle = parse_submission(&body)?;

        info!(job_id = %handle, model = %request.model_name, "Submitted job");
        Ok(handle)
    }

    /// Get the current status of a job
    ///
    /// # Arguments
    /// * `handle` - The job identifier returned by [`submit`](Self::submit)
    pub async fn job_status(&self, handle: &JobHandle) -> Result<JobStatus> {
        let url = self.url(&format!("/v1/status/{}", handle));
        let response = self.authorize(self.client.get(&url)).send().await?;

        let status: StatusResponse = self.handle_response(response).await?;
        if !status.is_recognised() {
            warn!(
                job_id = %handle,
                status = %status.status,
                "Unrecognised job status, treating as pending"
            );
        }

        Ok(status.into_status())
    }

    /// Poll a job until it completes, fails, or the policy's deadline passes
    pub async fn await_completion(
        &self,
        handle: &JobHandle,
        policy: &PollPolicy,
    ) -> Result<JobOutput> {
        poll::await_completion(self, handle, policy).await
    }

    /// Submit a job and wait for its result
    ///
    /// # Example
    /// ```no_run
    /// # use fashn_client::{FashnClient, PollPolicy};
    /// # use fashn_core::JobRequest;
    /// # use std::time::Duration;
    /// # async fn example() -> fashn_client::Result<()> {
    /// let client = FashnClient::new("https://api.fashn.ai", "fa-...");
    /// let request = JobRequest::new("tryon-v1.6")
    ///     .with_input("model_image", "https://example.com/model.jpg")
    ///     .with_input("garment_image", "https://example.com/garment.jpg");
    ///
    /// let policy = PollPolicy::new(Duration::from_secs(60), Duration::from_secs(3));
    /// let output = client.run(&request, &policy).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn run(&self, request: &JobRequest, policy: &PollPolicy) -> Result<JobOutput> {
        poll::run_job(self, request, policy).await
    }
}

#[async_trait]
impl JobApi for FashnClient {
    async fn submit(&self, request: &JobRequest) -> Result<JobHandle> {
        FashnClient::submit(self, request).await
    }

    async fn job_status(&self, handle: &JobHandle) -> Result<JobStatus> {
        FashnClient::job_status(self, handle).await
    }
}

/// Extract the job identifier from a submission body
fn parse_submission(body: &str) -> Result<JobHandle> {
    let value: Value = serde_json::from_str(body).map_err(|_| {
        ClientError::InvalidResponse("Expected object with prediction ID".to_string())
    })?;

    let Value::Object(object) = value else {
        return Err(ClientError::InvalidResponse(
            "Expected object with prediction ID".to_string(),
        ));
    };

    match object.get("id") {
        Some(Value::String(id)) if !id.is_empty() => Ok(JobHandle::new(id.as_str())),
        Some(Value::Number(id)) => Ok(JobHandle::new(id.to_string())),
        _ => Err(ClientError::MissingIdentifier),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_submission_reads_id() {
        let handle = parse_submission(r#"{"id": "123a-456b", "error": null}"#).unwrap();
        assert_eq!(handle.as_str(), "123a-456b");
    }

    #[test]
    fn test_parse_submission_rejects_non_objects() {
        for body in ["[1, 2]", "\"id\"", "null", "not json", ""] {
            assert!(
                matches!(parse_submission(body), Err(ClientError::InvalidResponse(_))),
                "body {body:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_submission_requires_id() {
        for body in [r#"{}"#, r#"{"id": null}"#, r#"{"id": ""}"#, r#"{"id": false}"#] {
            assert!(
                matches!(parse_submission(body), Err(ClientError::MissingIdentifier)),
                "body {body:?} should be missing an id"
            );
        }
    }
}
