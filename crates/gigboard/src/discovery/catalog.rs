use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use tracing::warn;

use super::domain::{
    EducationLevel, ExperienceLevel, GenderPreference, Job, JobCategory, JobDuration, JobId,
    JobType, WorkLocation,
};

/// Failure talking to the listing collaborator. Always recoverable: the
/// caller degrades to an empty/default state instead of propagating.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("listing service unavailable: {0}")]
    Unavailable(String),
    #[error("malformed listing payload: {0}")]
    Malformed(String),
}

/// Answer to a per-job application-status check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ApplicationStatus {
    pub has_applied: bool,
}

/// One page of raw job records from the listing collaborator.
#[derive(Debug, Clone, Deserialize)]
pub struct JobsPage {
    pub jobs: Vec<RawJob>,
}

/// Boundary to the listing collaborator. Authorization for destructive
/// operations is enforced on the collaborator side.
#[async_trait]
pub trait ListingClient: Send + Sync {
    async fn fetch_jobs(&self, page: u32, limit: u32) -> Result<JobsPage, TransportError>;
    async fn check_application(&self, job_id: &JobId)
        -> Result<ApplicationStatus, TransportError>;
    async fn delete_job(&self, job_id: &JobId) -> Result<(), TransportError>;
}

/// Raw record as the collaborator ships it, including the legacy aliases
/// (`salary` for `budget`, `city` for `workLocation`) still present in old
/// documents.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawJob {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub category: Option<String>,
    #[serde(default)]
    pub budget: Option<RawAmount>,
    #[serde(default)]
    pub salary: Option<RawAmount>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub duration: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub job_type: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub work_location: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub experience: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub education: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub gender: Option<String>,
    #[serde(default)]
    pub vacancies: Option<u32>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub created_at: Option<RawTimestamp>,
    #[serde(default)]
    pub posted_by: Option<RawPoster>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub job_link: Option<String>,
}

/// Budget values arrive as numbers or numeric strings depending on the
/// document's age.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawAmount {
    Number(f64),
    Text(String),
}

impl RawAmount {
    fn as_etb(&self) -> u32 {
        let value = match self {
            RawAmount::Number(number) => *number,
            RawAmount::Text(text) => text.trim().parse::<f64>().unwrap_or(0.0),
        };
        if value.is_finite() && value > 0.0 {
            value as u32
        } else {
            0
        }
    }
}

/// Creation timestamps arrive as RFC 3339 strings, epoch seconds, or the
/// legacy document-store `{ "seconds": n }` shape.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawTimestamp {
    Text(String),
    Epoch(i64),
    Document { seconds: i64 },
}

impl RawTimestamp {
    fn resolve(&self) -> DateTime<Utc> {
        match self {
            RawTimestamp::Text(text) => DateTime::parse_from_rfc3339(text.trim())
                .map(|parsed| parsed.with_timezone(&Utc))
                .unwrap_or(DateTime::<Utc>::UNIX_EPOCH),
            RawTimestamp::Epoch(seconds) | RawTimestamp::Document { seconds } => {
                DateTime::<Utc>::from_timestamp(*seconds, 0).unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
            }
        }
    }
}

/// The poster arrives as a plain id or an embedded user record.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawPoster {
    Id(String),
    Record {
        #[serde(rename = "_id")]
        id: String,
    },
}

impl RawPoster {
    fn id(&self) -> &str {
        match self {
            RawPoster::Id(id) => id,
            RawPoster::Record { id } => id,
        }
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

/// Catalog snapshot produced by a load attempt. A transport failure leaves
/// the jobs empty and the error attached; it is never raised to the caller.
#[derive(Debug, Clone)]
pub struct LoadedCatalog {
    pub jobs: Vec<Job>,
    pub error: Option<TransportError>,
}

impl LoadedCatalog {
    pub fn degraded(&self) -> bool {
        self.error.is_some()
    }
}

/// Fetch one collaborator page and normalize it into canonical jobs.
pub async fn load<C>(client: &C, page: u32, limit: u32) -> LoadedCatalog
where
    C: ListingClient + ?Sized,
{
    match client.fetch_jobs(page, limit).await {
        Ok(raw_page) => LoadedCatalog {
            jobs: raw_page.jobs.into_iter().map(normalize).collect(),
            error: None,
        },
        Err(error) => {
            warn!(%error, "catalog load failed, serving empty catalog");
            LoadedCatalog {
                jobs: Vec::new(),
                error: Some(error),
            }
        }
    }
}

/// Normalize a raw record into the canonical shape, applying the legacy
/// fallbacks and defaults.
pub fn normalize(raw: RawJob) -> Job {
    // A zero budget falls through to the legacy salary field.
    let budget = raw
        .budget
        .as_ref()
        .map(RawAmount::as_etb)
        .filter(|amount| *amount > 0)
        .or_else(|| raw.salary.as_ref().map(RawAmount::as_etb))
        .unwrap_or(0);

    let category = raw
        .category
        .as_deref()
        .and_then(JobCategory::from_label)
        .unwrap_or(JobCategory::Other);

    let duration = raw
        .duration
        .as_deref()
        .and_then(JobDuration::from_label)
        .unwrap_or(JobDuration::LessThanOneMonth);

    let job_type = raw
        .job_type
        .as_deref()
        .and_then(JobType::from_label)
        .unwrap_or(JobType::FullTime);

    let work_location = raw
        .work_location
        .as_deref()
        .or(raw.city.as_deref())
        .and_then(WorkLocation::from_label)
        .unwrap_or(WorkLocation::Remote);

    Job {
        id: JobId(raw.id),
        title: raw.title,
        description: raw.description,
        category,
        budget,
        duration,
        job_type,
        work_location,
        experience: raw.experience.as_deref().and_then(ExperienceLevel::from_label),
        education: raw.education.as_deref().and_then(EducationLevel::from_label),
        gender: raw.gender.as_deref().and_then(GenderPreference::from_label),
        vacancies: raw.vacancies,
        skills: raw.skills,
        created_at: raw
            .created_at
            .as_ref()
            .map(RawTimestamp::resolve)
            .unwrap_or(DateTime::<Utc>::UNIX_EPOCH),
        posted_by: raw
            .posted_by
            .as_ref()
            .map(|poster| poster.id().to_string())
            .unwrap_or_default(),
        external_link: raw.job_link,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw_from(value: serde_json::Value) -> RawJob {
        serde_json::from_value(value).expect("raw job deserializes")
    }

    #[test]
    fn zero_budget_falls_back_to_legacy_salary() {
        let raw = raw_from(json!({
            "_id": "job-1",
            "title": "Logo refresh",
            "budget": 0,
            "salary": "7500",
        }));
        assert_eq!(normalize(raw).budget, 7500);
    }

    #[test]
    fn blank_work_location_falls_back_to_legacy_city() {
        let raw = raw_from(json!({
            "_id": "job-2",
            "title": "Office network setup",
            "workLocation": "",
            "city": "On-site",
        }));
        assert_eq!(normalize(raw).work_location, WorkLocation::OnSite);
    }

    #[test]
    fn missing_fields_receive_documented_defaults() {
        let raw = raw_from(json!({ "_id": "job-3", "title": "Bare record" }));
        let job = normalize(raw);
        assert_eq!(job.budget, 0);
        assert_eq!(job.duration, JobDuration::LessThanOneMonth);
        assert_eq!(job.job_type, JobType::FullTime);
        assert_eq!(job.work_location, WorkLocation::Remote);
        assert_eq!(job.category, JobCategory::Other);
        assert!(job.experience.is_none());
        assert_eq!(job.created_at, DateTime::<Utc>::UNIX_EPOCH);
    }

    #[test]
    fn timestamps_accept_all_legacy_shapes() {
        for created_at in [
            json!("2025-06-01T12:00:00Z"),
            json!(1748779200),
            json!({ "seconds": 1748779200 }),
        ] {
            let raw = raw_from(json!({
                "_id": "job-4",
                "title": "Timestamp shapes",
                "createdAt": created_at,
            }));
            assert!(normalize(raw).created_at > DateTime::<Utc>::UNIX_EPOCH);
        }
    }

    #[test]
    fn poster_accepts_plain_id_and_embedded_record() {
        let plain = raw_from(json!({
            "_id": "job-5",
            "title": "Poster as id",
            "postedBy": "user-9",
        }));
        assert_eq!(normalize(plain).posted_by, "user-9");

        let embedded = raw_from(json!({
            "_id": "job-6",
            "title": "Poster as record",
            "postedBy": { "_id": "user-10", "name": "Poster" },
        }));
        assert_eq!(normalize(embedded).posted_by, "user-10");
    }
}
