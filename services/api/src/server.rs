use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryLeadRepository, LeadDispatch};
use crate::routes::with_service_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use itrisk::config::AppConfig;
use itrisk::error::AppError;
use itrisk::telemetry;
use itrisk::workflows::leads::LeadCaptureService;
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

    let repository = Arc::new(InMemoryLeadRepository::default());
    let notifier = LeadDispatch::from_config(&config.leads);
    let notifier_kind = notifier.label();
    let lead_service = Arc::new(LeadCaptureService::new(repository, Arc::new(notifier)));

    let app = with_service_routes(lead_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        environment = config.environment.label(),
        %addr,
        lead_notifier = notifier_kind,
        "IT risk assessment service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
