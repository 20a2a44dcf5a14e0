use std::collections::HashSet;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{Duration, Utc};
use gigboard::discovery::{
    ApplicationStatus, JobId, JobsPage, ListingClient, RawJob, TransportError,
};
use metrics_exporter_prometheus::PrometheusHandle;
use serde_json::json;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// In-memory stand-in for the listing collaborator, used by the demo CLI and
/// the self-contained server mode.
pub(crate) struct InMemoryListingClient {
    records: Mutex<Vec<RawJob>>,
    applied: Mutex<HashSet<String>>,
}

impl InMemoryListingClient {
    pub(crate) fn with_jobs(jobs: Vec<RawJob>) -> Self {
        Self {
            records: Mutex::new(jobs),
            applied: Mutex::new(HashSet::new()),
        }
    }

    pub(crate) fn mark_applied(&self, job_id: &str) {
        let mut applied = self.applied.lock().expect("applied mutex poisoned");
        applied.insert(job_id.to_string());
    }
}

#[async_trait]
impl ListingClient for InMemoryListingClient {
    async fn fetch_jobs(&self, _page: u32, limit: u32) -> Result<JobsPage, TransportError> {
        let records = self.records.lock().expect("records mutex poisoned");
        Ok(JobsPage {
            jobs: records.iter().take(limit as usize).cloned().collect(),
        })
    }

    async fn check_application(
        &self,
        job_id: &JobId,
    ) -> Result<ApplicationStatus, TransportError> {
        let applied = self.applied.lock().expect("applied mutex poisoned");
        Ok(ApplicationStatus {
            has_applied: applied.contains(job_id.as_str()),
        })
    }

    async fn delete_job(&self, job_id: &JobId) -> Result<(), TransportError> {
        let mut records = self.records.lock().expect("records mutex poisoned");
        records.retain(|record| record.id != job_id.as_str());
        Ok(())
    }
}

/// Built-in sample catalog mimicking collaborator payloads, legacy field
/// shapes included, so the normalizer has something to chew on.
pub(crate) fn sample_jobs() -> Vec<RawJob> {
    let now = Utc::now();
    let posted = |days: i64| (now - Duration::days(days)).to_rfc3339();

    let records = json!([
        {
            "_id": "gig-1001",
            "title": "Storefront redesign for a coffee chain",
            "description": "Rework the web storefront with a mobile-first layout.",
            "category": "Web Development",
            "budget": 24000,
            "duration": "3 months",
            "jobType": "Contract",
            "workLocation": "Hybrid",
            "experience": "Senior",
            "education": "Bachelor's Degree",
            "vacancies": 1,
            "skills": ["React", "Tailwind", "Figma"],
            "createdAt": posted(1),
            "postedBy": "user-201",
        },
        {
            "_id": "gig-1002",
            "title": "Amharic social media captions",
            "description": "Weekly caption batches for three brand accounts.",
            "category": "Social Media Marketing",
            "budget": 4500,
            "duration": "1 month",
            "jobType": "Freelance",
            "workLocation": "Remote",
            "experience": "Entry Level",
            "skills": ["Copywriting", "Amharic"],
            "createdAt": posted(2),
            "postedBy": "user-202",
        },
        {
            // Legacy document: salary instead of budget, city instead of workLocation.
            "_id": "gig-1003",
            "title": "Payroll cleanup for a retail group",
            "description": "Reconcile six months of payroll records.",
            "category": "Payroll & Benefits Administration",
            "salary": 15000,
            "duration": "2 months",
            "jobType": "Part-time",
            "city": "On-site",
            "experience": "Mid-level",
            "education": "Associate Degree",
            "createdAt": posted(3),
            "postedBy": { "_id": "user-203", "name": "Selam HR" },
        },
        {
            "_id": "gig-1004",
            "title": "Logo and brand kit",
            "description": "Logo, palette, and typography for a startup.",
            "category": "Graphic Design",
            "budget": 8000,
            "duration": "Less than 1 month",
            "jobType": "Freelance",
            "workLocation": "Remote",
            "experience": "Junior",
            "gender": "Any",
            "skills": ["Illustrator", "Branding"],
            "createdAt": posted(4),
            "postedBy": "user-204",
        },
        {
            "_id": "gig-1005",
            "title": "Warehouse inventory audit",
            "description": "Physical count and system reconciliation.",
            "category": "Operations Management",
            "budget": 12500,
            "duration": "1 month",
            "jobType": "Temporary",
            "workLocation": "On-site",
            "experience": "Senior",
            "gender": "Male",
            "vacancies": 4,
            "createdAt": posted(6),
            "postedBy": "user-205",
        },
        {
            "_id": "gig-1006",
            "title": "Childcare center curriculum design",
            "description": "Develop a play-based curriculum outline.",
            "category": "Education & Training",
            "budget": 9500,
            "duration": "2 months",
            "jobType": "Contract",
            "workLocation": "Hybrid",
            "experience": "Mid-level",
            "education": "Master's Degree",
            "gender": "Female",
            "createdAt": posted(8),
            "postedBy": "user-206",
        },
        {
            // Legacy timestamp shape from the old document store.
            "_id": "gig-1007",
            "title": "ERP data migration",
            "description": "Move ledger data into the new ERP.",
            "category": "Database Administration",
            "budget": 30000,
            "duration": "More than 3 months",
            "jobType": "Full-time",
            "workLocation": "Remote",
            "experience": "Lead",
            "skills": ["PostgreSQL", "ETL"],
            "createdAt": { "seconds": (now - Duration::days(10)).timestamp() },
            "postedBy": "user-207",
        },
        {
            "_id": "gig-1008",
            "title": "Event photography, product launch",
            "description": "Half-day shoot plus edited gallery.",
            "category": "Other",
            "budget": 5000,
            "jobType": "Freelance",
            "workLocation": "On-site",
            "createdAt": posted(12),
            "postedBy": "user-208",
            "jobLink": "https://jobs.example.test/gig-1008",
        },
        {
            "_id": "gig-1009",
            "title": "SEO overhaul for a travel blog",
            "description": "Technical audit and content plan.",
            "category": "SEO & SEM",
            "budget": 7000,
            "duration": "1 month",
            "jobType": "Freelance",
            "workLocation": "Remote",
            "experience": "Mid-level",
            "skills": ["SEO", "Analytics"],
            "createdAt": posted(14),
            "postedBy": "user-209",
        },
        {
            "_id": "gig-1010",
            "title": "Mobile wallet penetration test",
            "description": "Scoped assessment of the Android app.",
            "category": "Cybersecurity",
            "budget": 45000,
            "duration": "1 month",
            "jobType": "Contract",
            "workLocation": "Remote",
            "experience": "Senior",
            "education": "Bachelor's Degree",
            "createdAt": posted(16),
            "postedBy": "user-210",
        },
        {
            "_id": "gig-1011",
            "title": "Office reception cover",
            "description": "Front-desk cover during staff leave.",
            "category": "Customer Service",
            "budget": 3000,
            "duration": "Less than 1 month",
            "jobType": "Temporary",
            "workLocation": "On-site",
            "experience": "Entry Level",
            "gender": "Female",
            "vacancies": 2,
            "createdAt": posted(18),
            "postedBy": "user-211",
        },
        {
            "_id": "gig-1012",
            "title": "Financial model review",
            "description": "Stress-test the fundraising model.",
            "category": "Financial Analysis",
            "budget": 18000,
            "duration": "Less than 1 month",
            "jobType": "Freelance",
            "workLocation": "Remote",
            "experience": "Executive",
            "education": "Master's Degree",
            "createdAt": posted(21),
            "postedBy": "user-212",
        },
    ]);

    serde_json::from_value(records).expect("sample catalog deserializes")
}
