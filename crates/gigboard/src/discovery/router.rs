use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::sync::Mutex;

use super::catalog::ListingClient;
use super::domain::{Job, JobId, SortKey};
use super::filter::FilterState;
use super::presets::PresetError;
use super::reveal::RevealPhase;
use super::session::DiscoverySession;

type SharedSession<C> = Arc<Mutex<DiscoverySession<C>>>;

/// Router builder exposing the discovery engine over HTTP.
pub fn discovery_router<C>(session: SharedSession<C>) -> Router
where
    C: ListingClient + 'static,
{
    Router::new()
        .route("/api/v1/jobs", get(window_handler::<C>))
        .route("/api/v1/jobs/refresh", post(refresh_handler::<C>))
        .route("/api/v1/jobs/search", post(search_handler::<C>))
        .route("/api/v1/jobs/reveal", post(reveal_handler::<C>))
        .route("/api/v1/jobs/suggestions", get(suggestions_handler::<C>))
        .route("/api/v1/jobs/presets/:name", post(preset_handler::<C>))
        .route("/api/v1/jobs/:job_id", delete(delete_handler::<C>))
        .with_state(session)
}

/// One revealed job plus the caller's application status.
#[derive(Debug, Clone, Serialize)]
pub struct JobCardView {
    #[serde(flatten)]
    pub job: Job,
    pub has_applied: bool,
}

/// The revealed window and its surrounding pagination state.
#[derive(Debug, Serialize)]
pub struct JobsView {
    pub jobs: Vec<JobCardView>,
    pub total_matches: usize,
    pub catalog_size: usize,
    pub has_more: bool,
    pub phase: RevealPhase,
    /// Set when the last catalog load degraded to an empty snapshot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_error: Option<String>,
}

impl JobsView {
    fn from_session<C>(session: &DiscoverySession<C>) -> Self
    where
        C: ListingClient,
    {
        let jobs = session
            .visible()
            .iter()
            .map(|job| JobCardView {
                job: job.clone(),
                has_applied: session.has_applied(&job.id),
            })
            .collect();

        Self {
            jobs,
            total_matches: session.total_matches(),
            catalog_size: session.catalog_len(),
            has_more: session.has_more(),
            phase: session.reveal_phase(),
            load_error: session.load_error().map(ToString::to_string),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub filters: FilterState,
    #[serde(default)]
    pub sort: SortKey,
}

#[derive(Debug, Deserialize)]
pub struct SuggestionParams {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Serialize)]
pub struct SuggestionsView {
    pub suggestions: Vec<String>,
}

pub(crate) async fn window_handler<C>(State(session): State<SharedSession<C>>) -> Response
where
    C: ListingClient + 'static,
{
    let session = session.lock().await;
    (StatusCode::OK, axum::Json(JobsView::from_session(&session))).into_response()
}

pub(crate) async fn refresh_handler<C>(State(session): State<SharedSession<C>>) -> Response
where
    C: ListingClient + 'static,
{
    let mut session = session.lock().await;
    session.reload().await;
    (StatusCode::OK, axum::Json(JobsView::from_session(&session))).into_response()
}

pub(crate) async fn search_handler<C>(
    State(session): State<SharedSession<C>>,
    axum::Json(request): axum::Json<SearchRequest>,
) -> Response
where
    C: ListingClient + 'static,
{
    let mut session = session.lock().await;
    session.set_filters(request.filters, request.sort);
    (StatusCode::OK, axum::Json(JobsView::from_session(&session))).into_response()
}

pub(crate) async fn reveal_handler<C>(State(session): State<SharedSession<C>>) -> Response
where
    C: ListingClient + 'static,
{
    let mut session = session.lock().await;
    session.request_more();
    (StatusCode::OK, axum::Json(JobsView::from_session(&session))).into_response()
}

pub(crate) async fn suggestions_handler<C>(
    State(session): State<SharedSession<C>>,
    Query(params): Query<SuggestionParams>,
) -> Response
where
    C: ListingClient + 'static,
{
    let session = session.lock().await;
    let view = SuggestionsView {
        suggestions: session.suggestions(&params.q),
    };
    (StatusCode::OK, axum::Json(view)).into_response()
}

pub(crate) async fn preset_handler<C>(
    State(session): State<SharedSession<C>>,
    Path(name): Path<String>,
) -> Response
where
    C: ListingClient + 'static,
{
    let mut session = session.lock().await;
    match session.apply_preset(&name) {
        Ok(()) => (StatusCode::OK, axum::Json(JobsView::from_session(&session))).into_response(),
        Err(PresetError::UnknownPreset(name)) => {
            let payload = json!({ "error": format!("preset with name {name} not found") });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn delete_handler<C>(
    State(session): State<SharedSession<C>>,
    Path(job_id): Path<String>,
) -> Response
where
    C: ListingClient + 'static,
{
    let mut session = session.lock().await;
    match session.delete_job(&JobId(job_id)).await {
        Ok(()) => (StatusCode::OK, axum::Json(JobsView::from_session(&session))).into_response(),
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::BAD_GATEWAY, axum::Json(payload)).into_response()
        }
    }
}
