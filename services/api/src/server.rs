use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemorySessionRepository};
use crate::routes::with_studio_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use scholar_studio::config::AppConfig;
use scholar_studio::error::AppError;
use scholar_studio::telemetry;
use scholar_studio::workflows::authoring::AuthoringService;
use scholar_studio::workflows::quality::QualityEngine;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
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
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let repository = Arc::new(InMemorySessionRepository::default());
    let authoring = Arc::new(AuthoringService::new(
        repository,
        config.generation.simulated_latency,
    ));
    let engine = Arc::new(QualityEngine::default());

    let app = with_studio_routes(authoring, engine)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        latency_ms = config.generation.simulated_latency.as_millis() as u64,
        "scholar studio ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
