use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, TimeZone, Utc};
use gigboard::discovery::{
    ApplicationStatus, BudgetBand, DiscoverySession, GenderPreference, JobId, JobsPage,
    ListingClient, RawJob, SortKey, TransportError,
};

/// Fixture collaborator with a fixed catalog, an applied set, and per-job
/// failure injection for status checks.
#[derive(Default)]
struct FixtureListingClient {
    jobs: Vec<RawJob>,
    applied: HashSet<String>,
    failing_checks: HashSet<String>,
}

#[async_trait]
impl ListingClient for FixtureListingClient {
    async fn fetch_jobs(&self, _page: u32, limit: u32) -> Result<JobsPage, TransportError> {
        Ok(JobsPage {
            jobs: self.jobs.iter().take(limit as usize).cloned().collect(),
        })
    }

    async fn check_application(
        &self,
        job_id: &JobId,
    ) -> Result<ApplicationStatus, TransportError> {
        if self.failing_checks.contains(job_id.as_str()) {
            return Err(TransportError::Unavailable("status check down".to_string()));
        }
        Ok(ApplicationStatus {
            has_applied: self.applied.contains(job_id.as_str()),
        })
    }

    async fn delete_job(&self, _job_id: &JobId) -> Result<(), TransportError> {
        Ok(())
    }
}

fn raw_job(id: &str, title: &str, budget: u32, age_days: i64, gender: Option<&str>) -> RawJob {
    let base = Utc
        .with_ymd_and_hms(2025, 6, 1, 12, 0, 0)
        .single()
        .expect("valid base time");
    let mut record = serde_json::json!({
        "_id": id,
        "title": title,
        "budget": budget,
        "createdAt": (base - Duration::days(age_days)).to_rfc3339(),
        "postedBy": "poster-1",
    });
    if let Some(gender) = gender {
        record["gender"] = serde_json::Value::String(gender.to_string());
    }
    serde_json::from_value(record).expect("raw fixture deserializes")
}

#[tokio::test]
async fn infinite_scroll_reveals_newest_first_in_pages_of_ten() {
    let jobs = (0..25)
        .map(|index| {
            raw_job(
                &format!("job-{index:02}"),
                &format!("Posting {index:02}"),
                1_000,
                index,
                None,
            )
        })
        .collect();
    let client = Arc::new(FixtureListingClient {
        jobs,
        ..FixtureListingClient::default()
    });
    let mut session = DiscoverySession::new(client, false, 50);
    session.reload().await;
    session.set_sort(SortKey::Newest);

    let first_window = session.visible();
    assert_eq!(first_window.len(), 10);
    assert!(first_window
        .windows(2)
        .all(|pair| pair[0].created_at >= pair[1].created_at));
    // Ages count backwards, so the ten most recent postings are job-00..09.
    assert_eq!(first_window[0].id.as_str(), "job-00");
    assert_eq!(first_window[9].id.as_str(), "job-09");

    assert!(session.request_more());
    assert_eq!(session.visible().len(), 20);
    assert!(session.has_more());

    assert!(session.request_more());
    assert_eq!(session.visible().len(), 25);
    assert!(!session.has_more());
}

#[tokio::test]
async fn under_five_thousand_band_selects_the_half_open_interval() {
    let jobs = vec![
        raw_job("job-zero", "Zero budget", 0, 0, None),
        raw_job("job-edge", "Just under", 4_999, 1, None),
        raw_job("job-at", "Exactly five", 5_000, 2, None),
        raw_job("job-mid", "Mid range", 12_000, 3, None),
    ];
    let client = Arc::new(FixtureListingClient {
        jobs,
        ..FixtureListingClient::default()
    });
    let mut session = DiscoverySession::new(client, false, 50);
    session.reload().await;

    session.toggle_budget_band(BudgetBand::UnderFiveThousand);
    let ids: Vec<&str> = session.visible().iter().map(|job| job.id.as_str()).collect();
    assert_eq!(ids, vec!["job-zero", "job-edge"]);
}

#[tokio::test]
async fn gender_any_selection_admits_every_posting() {
    let jobs = vec![
        raw_job("job-unset", "No preference", 1_000, 0, None),
        raw_job("job-male", "Male preference", 1_000, 1, Some("Male")),
        raw_job("job-female", "Female preference", 1_000, 2, Some("Female")),
    ];
    let client = Arc::new(FixtureListingClient {
        jobs,
        ..FixtureListingClient::default()
    });
    let mut session = DiscoverySession::new(client, false, 50);
    session.reload().await;

    session.toggle_gender(GenderPreference::Any);
    assert_eq!(session.total_matches(), 3);
}

#[tokio::test]
async fn one_failing_status_check_never_marks_or_aborts_the_rest() {
    let jobs = vec![
        raw_job("job-a", "First", 1_000, 0, None),
        raw_job("job-b", "Second", 2_000, 1, None),
    ];
    let mut applied = HashSet::new();
    applied.insert("job-b".to_string());
    let mut failing_checks = HashSet::new();
    failing_checks.insert("job-a".to_string());

    let client = Arc::new(FixtureListingClient {
        jobs,
        applied,
        failing_checks,
    });
    let mut session = DiscoverySession::new(client, true, 50);
    session.reload().await;

    assert!(session.has_applied(&JobId("job-b".to_string())));
    assert!(!session.has_applied(&JobId("job-a".to_string())));
    assert_eq!(session.applied_count(), 1);
}

#[tokio::test]
async fn search_preset_and_clear_walk_through() {
    let mut jobs: Vec<RawJob> = (0..12)
        .map(|index| {
            raw_job(
                &format!("job-{index:02}"),
                &format!("Campaign {index:02}"),
                30_000,
                index,
                None,
            )
        })
        .collect();
    jobs.push(raw_job("job-cheap", "Quick logo fix", 2_500, 20, None));

    let client = Arc::new(FixtureListingClient {
        jobs,
        ..FixtureListingClient::default()
    });
    let mut session = DiscoverySession::new(client, false, 50);
    session.reload().await;
    assert_eq!(session.total_matches(), 13);

    session.apply_preset("High Budget").expect("known preset");
    assert_eq!(session.total_matches(), 12);
    assert_eq!(session.visible().len(), 10);
    assert!(session.has_more());

    session.set_query("logo");
    // The query mutation replaced the revealed window atomically.
    assert_eq!(session.total_matches(), 0);
    assert!(session.visible().is_empty());
    assert!(!session.has_more());

    session.clear_filters();
    assert_eq!(session.total_matches(), 13);
    assert_eq!(session.visible().len(), 10);
}
