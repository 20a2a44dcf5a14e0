use std::collections::HashMap;

use futures::future::join_all;
use tracing::warn;

use super::catalog::ListingClient;
use super::domain::{Job, JobId};

/// Per-job application status for the authenticated caller. Absent keys read
/// as not-applied, which also covers checks that have not resolved yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationStatusIndex {
    applied: HashMap<JobId, bool>,
}

impl ApplicationStatusIndex {
    pub fn has_applied(&self, job_id: &JobId) -> bool {
        self.applied.get(job_id).copied().unwrap_or(false)
    }

    pub fn mark_applied(&mut self, job_id: JobId) {
        self.applied.insert(job_id, true);
    }

    pub fn applied_count(&self) -> usize {
        self.applied.values().filter(|applied| **applied).count()
    }
}

/// Check application status for every job concurrently. Each check fails
/// independently: a failure is logged and that job reads as not-applied,
/// without disturbing its siblings.
pub async fn annotate<C>(client: &C, jobs: &[Job]) -> ApplicationStatusIndex
where
    C: ListingClient + ?Sized,
{
    let checks = jobs.iter().map(|job| async {
        let status = client.check_application(&job.id).await;
        (job.id.clone(), status)
    });

    let mut index = ApplicationStatusIndex::default();
    for (job_id, status) in join_all(checks).await {
        match status {
            Ok(status) if status.has_applied => index.mark_applied(job_id),
            Ok(_) => {}
            Err(error) => {
                warn!(job_id = %job_id.as_str(), %error, "application status check failed");
            }
        }
    }

    index
}
