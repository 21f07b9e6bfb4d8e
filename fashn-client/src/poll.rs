//! Bounded status polling
//!
//! Drives one job from handle to terminal state. The first status request is
//! issued immediately; after that the loop sleeps `interval` between requests,
//! or only what is left of the deadline when that is shorter. Each status
//! request is itself bounded by the time left, so nothing outlives the
//! deadline.

use std::time::Duration;

use fashn_core::{JobHandle, JobOutput, JobRequest, JobStatus};
use tokio::time::{Instant, sleep, timeout};
use tracing::{debug, info, warn};

use crate::api::JobApi;
use crate::error::{ClientError, Result};

/// Deadline and interval for one polling loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    /// Wall-clock budget, measured from the first status request
    pub deadline: Duration,
    /// Pause between two status requests
    pub interval: Duration,
}

impl PollPolicy {
    pub const DEFAULT_DEADLINE: Duration = Duration::from_secs(25);
    pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(5);

    pub fn new(deadline: Duration, interval: Duration) -> Self {
        Self { deadline, interval }
    }

    /// Validates the policy
    pub fn validate(&self) -> Result<()> {
        if self.deadline.is_zero() {
            return Err(ClientError::InvalidPolicy(
                "deadline must be greater than 0".to_string(),
            ));
        }

        if self.interval.is_zero() {
            return Err(ClientError::InvalidPolicy(
                "interval must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DEADLINE, Self::DEFAULT_INTERVAL)
    }
}

/// Polls `handle` until the job completes, fails, or the deadline passes
///
/// `pending` and `processing` both lead to another wait-and-poll cycle.
/// Errors from the status call are wrapped in [`ClientError::PollError`] and
/// end the loop.
pub async fn await_completion<A>(
    api: &A,
    handle: &JobHandle,
    policy: &PollPolicy,
) -> Result<JobOutput>
where
    A: JobApi + ?Sized,
{
    policy.validate()?;

    let start = Instant::now();
    let mut attempt = 0u32;

    while start.elapsed() < policy.deadline {
        attempt += 1;
        debug!(job_id = %handle, attempt, "Polling job status");

        let remaining = policy.deadline.saturating_sub(start.elapsed());
        let status = match timeout(remaining, api.job_status(handle)).await {
            Ok(result) => result.map_err(ClientError::poll)?,
            Err(_) => {
                debug!(job_id = %handle, attempt, "Status request outlived the deadline");
                break;
            }
        };
        debug!(job_id = %handle, status = status.name(), "Received job status");

        match status {
            JobStatus::Completed { output } => {
                info!(
                    job_id = %handle,
                    attempts = attempt,
                    elapsed = ?start.elapsed(),
                    "Job completed"
                );
                return Ok(JobOutput {
                    id: handle.clone(),
                    output,
                });
            }
            JobStatus::Failed { message } => {
                warn!(job_id = %handle, error = %message, "Job failed");
                return Err(ClientError::JobFailed(message));
            }
            JobStatus::Pending | JobStatus::Processing => {}
        }

        let remaining = policy.deadline.saturating_sub(start.elapsed());
        sleep(remaining.min(policy.interval)).await;
    }

    warn!(
        job_id = %handle,
        attempts = attempt,
        deadline = ?policy.deadline,
        "Job timed out"
    );
    Err(ClientError::Timeout {
        deadline: policy.deadline,
    })
}

/// Submits `request` and waits for its result
pub async fn run_job<A>(api: &A, request: &JobRequest, policy: &PollPolicy) -> Result<JobOutput>
where
    A: JobApi + ?Sized,
{
    policy.validate()?;

    let handle = api.submit(request).await?;
    await_completion(api, &handle, policy).await
}
