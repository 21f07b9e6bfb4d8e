//! The submit/status seam
//!
//! The polling loop and the batch driver only need two calls from the remote
//! service. They are expressed as a trait so the loop can run against the
//! HTTP client or any other implementation (tests use a scripted one).

use async_trait::async_trait;
use fashn_core::{JobHandle, JobRequest, JobStatus};

use crate::error::Result;

/// Remote job service
#[async_trait]
pub trait JobApi: Send + Sync {
    /// Submits a job and returns its identifier
    async fn submit(&self, request: &JobRequest) -> Result<JobHandle>;

    /// Fetches the current status of a job
    async fn job_status(&self, handle: &JobHandle) -> Result<JobStatus>;
}
