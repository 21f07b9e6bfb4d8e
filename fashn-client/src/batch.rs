//! Sequential batch processing
//!
//! Runs one full submit/poll cycle per item, in order. What happens when an
//! item fails is the caller's choice through [`ErrorMode`].

use fashn_core::{JobOutput, TryOnParams};
use serde::Serialize;
use tracing::{info, warn};

use crate::api::JobApi;
use crate::error::Result;
use crate::poll::{PollPolicy, run_job};

/// How a batch reacts to a failing item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Abort the batch and return the first error
    #[default]
    Strict,
    /// Record the error for the item and move on to the next one
    ContinueOnFail,
}

/// Outcome of one batch item, paired with its position in the input
#[derive(Debug, Serialize)]
pub struct ItemResult {
    pub item: usize,
    #[serde(flatten)]
    pub outcome: ItemOutcome,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ItemOutcome {
    Completed(JobOutput),
    Failed { error: String },
}

impl ItemOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed(_))
    }
}

/// Runs every item of `items` through `api`, one after the other
///
/// Each item is validated before submission; a validation failure counts as
/// an item error like any remote failure.
pub async fn run_batch<A, I>(
    api: &A,
    items: I,
    policy: &PollPolicy,
    mode: ErrorMode,
) -> Result<Vec<ItemResult>>
where
    A: JobApi + ?Sized,
    I: IntoIterator<Item = TryOnParams>,
{
    policy.validate()?;

    let mut results = Vec::new();

    for (item, params) in items.into_iter().enumerate() {
        let outcome = match run_item(api, &params, policy).await {
            Ok(output) => ItemOutcome::Completed(output),
            Err(e) => match mode {
                ErrorMode::Strict => return Err(e),
                ErrorMode::ContinueOnFail => {
                    warn!(item, error = %e, "Batch item failed, continuing");
                    ItemOutcome::Failed {
                        error: e.to_string(),
                    }
                }
            },
        };

        results.push(ItemResult { item, outcome });
    }

    let completed = results.iter().filter(|r| r.outcome.is_completed()).count();
    info!(
        total = results.len(),
        completed,
        failed = results.len() - completed,
        "Batch finished"
    );

    Ok(results)
}

async fn run_item<A>(api: &A, params: &TryOnParams, policy: &PollPolicy) -> Result<JobOutput>
where
    A: JobApi + ?Sized,
{
    let request = params.to_request()?;
    run_job(api, &request, policy).await
}
