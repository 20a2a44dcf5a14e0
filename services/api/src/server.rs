use crate::cli::ServeArgs;
use crate::infra::{sample_jobs, AppState, InMemoryListingClient};
use crate::routes::with_discovery_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use gigboard::config::AppConfig;
use gigboard::discovery::DiscoverySession;
use gigboard::error::AppError;
use gigboard::seed::JobSeedImporter;
use gigboard::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let jobs = match args.seed_csv.take() {
        Some(path) => JobSeedImporter::from_path(path)?,
        None => sample_jobs(),
    };
    let client = Arc::new(InMemoryListingClient::with_jobs(jobs));

    let mut session = DiscoverySession::new(client, args.authenticated, config.catalog.page_limit);
    session.reload().await;
    info!(
        catalog = session.catalog_len(),
        degraded = session.load_error().is_some(),
        "catalog loaded"
    );

    let app = with_discovery_routes(Arc::new(Mutex::new(session)))
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "job discovery service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
