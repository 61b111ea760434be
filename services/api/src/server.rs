use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryDraftRepository};
use crate::routes::with_resume_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use resume_ats::config::AppConfig;
use resume_ats::error::AppError;
use resume_ats::resume::ResumeService;
use resume_ats::telemetry;
use std::sync::atomic::Ordering;
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
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let repository = Arc::new(InMemoryDraftRepository::default());
    let resume_service = Arc::new(ResumeService::new(repository));

    let app = with_resume_routes(resume_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(environment = config.environment.label(), %addr, "resume scoring service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
