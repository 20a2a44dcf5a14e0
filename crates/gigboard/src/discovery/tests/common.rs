use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::discovery::catalog::{
    ApplicationStatus, JobsPage, ListingClient, RawJob, TransportError,
};
use crate::discovery::domain::{Job, JobCategory, JobDuration, JobId, JobType, WorkLocation};

/// Scripted collaborator double: serves a fixed raw catalog, answers status
/// checks from an applied set, and can be told to fail per job or wholesale.
#[derive(Default)]
pub(super) struct ScriptedListingClient {
    jobs: Mutex<Vec<RawJob>>,
    applied: HashSet<String>,
    failing_checks: HashSet<String>,
    fail_fetch: bool,
    fail_delete: bool,
}

impl ScriptedListingClient {
    pub(super) fn with_jobs(jobs: Vec<RawJob>) -> Self {
        Self {
            jobs: Mutex::new(jobs),
            ..Self::default()
        }
    }

    pub(super) fn failing_fetch() -> Self {
        Self {
            fail_fetch: true,
            ..Self::default()
        }
    }

    pub(super) fn mark_applied(mut self, job_id: &str) -> Self {
        self.applied.insert(job_id.to_string());
        self
    }

    pub(super) fn fail_check_for(mut self, job_id: &str) -> Self {
        self.failing_checks.insert(job_id.to_string());
        self
    }

    pub(super) fn fail_delete(mut self) -> Self {
        self.fail_delete = true;
        self
    }
}

#[async_trait]
impl ListingClient for ScriptedListingClient {
    async fn fetch_jobs(&self, _page: u32, limit: u32) -> Result<JobsPage, TransportError> {
        if self.fail_fetch {
            return Err(TransportError::Unavailable("scripted outage".to_string()));
        }
        let jobs = self.jobs.lock().expect("jobs mutex poisoned");
        Ok(JobsPage {
            jobs: jobs.iter().take(limit as usize).cloned().collect(),
        })
    }

    async fn check_application(
        &self,
        job_id: &JobId,
    ) -> Result<ApplicationStatus, TransportError> {
        if self.failing_checks.contains(job_id.as_str()) {
            return Err(TransportError::Unavailable(format!(
                "status check down for {}",
                job_id.as_str()
            )));
        }
        Ok(ApplicationStatus {
            has_applied: self.applied.contains(job_id.as_str()),
        })
    }

    async fn delete_job(&self, job_id: &JobId) -> Result<(), TransportError> {
        if self.fail_delete {
            return Err(TransportError::Unavailable("delete rejected".to_string()));
        }
        let mut jobs = self.jobs.lock().expect("jobs mutex poisoned");
        jobs.retain(|job| job.id != job_id.as_str());
        Ok(())
    }
}

pub(super) fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0)
        .single()
        .expect("valid base time")
}

/// Canonical job fixture: `age_days` counts backwards from the shared base
/// time so newest-first ordering is easy to reason about.
pub(super) fn job(
    id: &str,
    title: &str,
    category: JobCategory,
    budget: u32,
    age_days: i64,
) -> Job {
    Job {
        id: JobId(id.to_string()),
        title: title.to_string(),
        description: format!("{title} description"),
        category,
        budget,
        duration: JobDuration::LessThanOneMonth,
        job_type: JobType::FullTime,
        work_location: WorkLocation::Remote,
        experience: None,
        education: None,
        gender: None,
        vacancies: None,
        skills: Vec::new(),
        created_at: base_time() - Duration::days(age_days),
        posted_by: "poster-1".to_string(),
        external_link: None,
    }
}

/// Raw fixture mirroring what the collaborator ships.
pub(super) fn raw_job(id: &str, title: &str, budget: u32, age_days: i64) -> RawJob {
    let raw = serde_json::json!({
        "_id": id,
        "title": title,
        "budget": budget,
        "createdAt": (base_time() - Duration::days(age_days)).to_rfc3339(),
        "postedBy": "poster-1",
    });
    serde_json::from_value(raw).expect("raw job fixture deserializes")
}
