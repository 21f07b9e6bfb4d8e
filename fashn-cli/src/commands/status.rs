//! Status command handler

use anyhow::Result;
use colored::*;
use fashn_core::{JobHandle, JobStatus};
use serde_json::json;

use super::print_json;
use crate::config::Config;

/// Fetch and display a single status, without polling
pub async fn handle_status(id: &str, config: &Config) -> Result<()> {
    let client = config.client()?;
    let handle = JobHandle::new(id);

    let status = client.job_status(&handle).await?;
    eprintln!("Job {}: {}", handle.to_string().dimmed(), colorize_status(&status));
    if !status.is_terminal() {
        eprintln!("{}", "  Still running, check again later".dimmed());
    }

    let body = match status {
        JobStatus::Completed { output } => json!({ "id": id, "status": "completed", "output": output }),
        JobStatus::Failed { message } => json!({ "id": id, "status": "failed", "error": message }),
        other => json!({ "id": id, "status": other.name() }),
    };
    print_json(&body)
}

/// Colorize a job status for display
fn colorize_status(status: &JobStatus) -> ColoredString {
    match status {
        JobStatus::Pending => "pending".yellow(),
        JobStatus::Processing => "processing".blue(),
        JobStatus::Completed { .. } => "completed".green(),
        JobStatus::Failed { .. } => "failed".red(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colorize_keeps_status_name() {
        colored::control::set_override(false);
        assert_eq!(colorize_status(&JobStatus::Processing).to_string(), "processing");
        assert_eq!(
            colorize_status(&JobStatus::Failed {
                message: "x".into()
            })
            .to_string(),
            "failed"
        );
    }
}
