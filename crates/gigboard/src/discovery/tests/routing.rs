use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use serde_json::{json, Value};
use tokio::sync::Mutex;
use tower::ServiceExt;

use super::common::{raw_job, ScriptedListingClient};
use crate::discovery::router::discovery_router;
use crate::discovery::session::DiscoverySession;

async fn seeded_router(count: usize) -> axum::Router {
    let jobs = (0..count)
        .map(|index| {
            raw_job(
                &format!("job-{index:02}"),
                &format!("Posting {index:02}"),
                1_000 + index as u32 * 500,
                index as i64,
            )
        })
        .collect();
    let client = Arc::new(ScriptedListingClient::with_jobs(jobs));
    let mut session = DiscoverySession::new(client, false, 50);
    session.reload().await;
    discovery_router(Arc::new(Mutex::new(session)))
}

async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("response body reads");
    serde_json::from_slice(&bytes).expect("response body is JSON")
}

#[tokio::test]
async fn window_endpoint_returns_the_first_page() {
    let router = seeded_router(25).await;
    let response = router
        .oneshot(
            Request::builder()
                .uri("/api/v1/jobs")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("handler responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["jobs"].as_array().expect("jobs array").len(), 10);
    assert_eq!(body["total_matches"], json!(25));
    assert_eq!(body["has_more"], json!(true));
}

#[tokio::test]
async fn reveal_endpoint_grows_the_window() {
    let router = seeded_router(25).await;
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/jobs/reveal")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("handler responds");

    let body = body_json(response).await;
    assert_eq!(body["jobs"].as_array().expect("jobs array").len(), 20);
    assert_eq!(body["has_more"], json!(true));
}

#[tokio::test]
async fn search_endpoint_replaces_the_filter_state() {
    let router = seeded_router(25).await;
    let request_body = json!({
        "filters": { "query": "posting 07" },
        "sort": "budget_high",
    });
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/jobs/search")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(request_body.to_string()))
                .expect("request builds"),
        )
        .await
        .expect("handler responds");

    let body = body_json(response).await;
    let jobs = body["jobs"].as_array().expect("jobs array");
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0]["title"], json!("Posting 07"));
    assert_eq!(body["has_more"], json!(false));
}

#[tokio::test]
async fn suggestions_endpoint_answers_partial_queries() {
    let router = seeded_router(3).await;
    let response = router
        .oneshot(
            Request::builder()
                .uri("/api/v1/jobs/suggestions?q=posting")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("handler responds");

    let body = body_json(response).await;
    let suggestions = body["suggestions"].as_array().expect("suggestions array");
    assert_eq!(suggestions.len(), 3);
}

#[tokio::test]
async fn unknown_preset_maps_to_not_found() {
    let router = seeded_router(3).await;
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/jobs/presets/Night%20Shift")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("handler responds");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert!(body["error"]
        .as_str()
        .expect("error message")
        .contains("Night Shift"));
}

#[tokio::test]
async fn delete_endpoint_drops_the_job_from_the_window() {
    let router = seeded_router(5).await;
    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/v1/jobs/job-02")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("handler responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["total_matches"], json!(4));
    assert!(body["jobs"]
        .as_array()
        .expect("jobs array")
        .iter()
        .all(|job| job["id"] != json!("job-02")));
}
