use crate::cli::ServeArgs;
use crate::infra::{load_cases, AppState, InMemoryCaseStore, InMemoryPetitionerStore};
use crate::routes::with_case_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use rakshak::config::AppConfig;
use rakshak::error::AppError;
use rakshak::litigation::{GeminiClient, LitigationService};
use rakshak::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::{info, warn};

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

    let policy = config.cases.match_policy;
    let records = match &config.cases.csv_path {
        Some(path) => load_cases(path)?,
        None => {
            warn!("RAKSHAK_CASES_CSV not set; serving an empty case store");
            Vec::new()
        }
    };
    let cases = InMemoryCaseStore::new(records, policy);
    info!(cases = cases.len(), ?policy, "case store loaded");

    if config.model.api_key.is_empty() {
        warn!("GEMINI_API_KEY not set; remark analysis requests will fail");
    }
    let model = GeminiClient::new(&config.model);

    let service = Arc::new(LitigationService::new(
        Arc::new(cases),
        Arc::new(InMemoryPetitionerStore::new(policy)),
        Arc::new(model),
    ));

    let app = with_case_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "litigation analysis service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
