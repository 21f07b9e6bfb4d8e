//! Scripted in-memory job service for unit tests

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use fashn_core::{JobHandle, JobRequest, JobStatus};
use tokio::time::Instant;

use crate::api::JobApi;
use crate::error::{ClientError, Result};

/// Answers status requests from a fixed script, then `processing` forever
pub struct ScriptedApi {
    statuses: Mutex<VecDeque<Result<JobStatus>>>,
    poll_times: Mutex<Vec<Instant>>,
    submitted: Mutex<Vec<JobRequest>>,
    handles: Mutex<Vec<JobHandle>>,
    rejected_submissions: HashMap<usize, String>,
    delay: Duration,
}

impl ScriptedApi {
    pub fn new(statuses: Vec<Result<JobStatus>>) -> Self {
        Self {
            statuses: Mutex::new(statuses.into()),
            poll_times: Mutex::new(Vec::new()),
            submitted: Mutex::new(Vec::new()),
            handles: Mutex::new(Vec::new()),
            rejected_submissions: HashMap::new(),
            delay: Duration::ZERO,
        }
    }

    /// Makes the nth submission (zero-based) fail with a 400
    pub fn reject_submission(mut self, index: usize, message: &str) -> Self {
        self.rejected_submissions.insert(index, message.to_string());
        self
    }

    /// Makes every status answer take `delay`
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn polls(&self) -> usize {
        self.poll_times.lock().unwrap().len()
    }

    pub fn poll_offsets(&self, start: Instant) -> Vec<Duration> {
        self.poll_times
            .lock()
            .unwrap()
            .iter()
            .map(|t| t.duration_since(start))
            .collect()
    }

    pub fn submitted(&self) -> Vec<JobRequest> {
        self.submitted.lock().unwrap().clone()
    }

    pub fn last_handle(&self) -> Option<JobHandle> {
        self.handles.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl JobApi for ScriptedApi {
    async fn submit(&self, request: &JobRequest) -> Result<JobHandle> {
        let mut submitted = self.submitted.lock().unwrap();
        let index = submitted.len();
        submitted.push(request.clone());

        if let Some(message) = self.rejected_submissions.get(&index) {
            return Err(ClientError::api_error(400, message.clone()));
        }

        let handle = JobHandle::new(format!("job-{}", index + 1));
        self.handles.lock().unwrap().push(handle.clone());
        Ok(handle)
    }

    async fn job_status(&self, _handle: &JobHandle) -> Result<JobStatus> {
        self.poll_times.lock().unwrap().push(Instant::now());
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.statuses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(JobStatus::Processing))
    }
}
