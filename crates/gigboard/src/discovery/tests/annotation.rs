use super::common::{job, ScriptedListingClient};
use crate::discovery::annotate::{annotate, ApplicationStatusIndex};
use crate::discovery::domain::{JobCategory, JobId};

#[tokio::test]
async fn failed_checks_do_not_disturb_their_siblings() {
    let client = ScriptedListingClient::default()
        .mark_applied("job-b")
        .fail_check_for("job-a");
    let jobs = vec![
        job("job-a", "First", JobCategory::Other, 1_000, 0),
        job("job-b", "Second", JobCategory::Other, 2_000, 1),
        job("job-c", "Third", JobCategory::Other, 3_000, 2),
    ];

    let index = annotate(&client, &jobs).await;

    assert!(index.has_applied(&JobId("job-b".to_string())));
    // The failed check degrades to not-applied instead of poisoning the map.
    assert!(!index.has_applied(&JobId("job-a".to_string())));
    assert!(!index.has_applied(&JobId("job-c".to_string())));
    assert_eq!(index.applied_count(), 1);
}

#[tokio::test]
async fn all_checks_failing_yields_an_empty_index() {
    let client = ScriptedListingClient::default()
        .fail_check_for("job-a")
        .fail_check_for("job-b");
    let jobs = vec![
        job("job-a", "First", JobCategory::Other, 1_000, 0),
        job("job-b", "Second", JobCategory::Other, 2_000, 1),
    ];

    let index = annotate(&client, &jobs).await;
    assert_eq!(index, ApplicationStatusIndex::default());
}

#[test]
fn unknown_jobs_read_as_not_applied() {
    let index = ApplicationStatusIndex::default();
    assert!(!index.has_applied(&JobId("never-checked".to_string())));
}
