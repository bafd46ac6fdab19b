use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::site_router;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;
use youth_advocacy::config::AppConfig;
use youth_advocacy::error::AppError;
use youth_advocacy::intake::{ApplicationIntakeService, SupabaseClient};
use youth_advocacy::telemetry;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry, config.environment)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let supabase = Arc::new(SupabaseClient::from_config(&config.backend)?);
    let intake = Arc::new(ApplicationIntakeService::new(
        supabase.clone(),
        supabase,
        config.intake,
    ));

    let app = site_router(intake)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        backend = %config.backend.url,
        "landing page ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
