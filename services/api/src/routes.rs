use std::sync::Arc;

use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use gigboard::discovery::{discovery_router, DiscoverySession, ListingClient};
use serde_json::json;
use tokio::sync::Mutex;

use crate::infra::AppState;

pub(crate) fn with_discovery_routes<C>(session: Arc<Mutex<DiscoverySession<C>>>) -> axum::Router
where
    C: ListingClient + 'static,
{
    discovery_router(session)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::{sample_jobs, InMemoryListingClient};
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    #[tokio::test]
    async fn healthcheck_reports_ok() {
        let Json(body) = healthcheck().await;
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn discovery_routes_serve_the_sample_catalog() {
        let client = Arc::new(InMemoryListingClient::with_jobs(sample_jobs()));
        let mut session = DiscoverySession::new(client, false, 50);
        session.reload().await;
        let router = with_discovery_routes(Arc::new(Mutex::new(session)));

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
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body reads");
        let body: serde_json::Value = serde_json::from_slice(&bytes).expect("body is JSON");
        assert_eq!(body["catalog_size"], serde_json::json!(12));
        assert_eq!(body["jobs"].as_array().expect("jobs array").len(), 10);
        assert_eq!(body["has_more"], serde_json::json!(true));
    }
}
