use crate::cli::ServeArgs;
use crate::infra::{load_rules, AppState};
use crate::routes::with_scorecard_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use revenue_alignment::config::AppConfig;
use revenue_alignment::error::AppError;
use revenue_alignment::telemetry;
use revenue_alignment::workflows::scorecard::{ScorecardService, ScorecardState};
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

    let rules = Arc::new(load_rules(config.scorecard.rules_path.as_deref())?);
    if config.scorecard.api_token.is_none() {
        warn!("SCORECARD_API_TOKEN is not set; scorecard requests are accepted without a token");
    }

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let scorecard_state = ScorecardState::new(
        Arc::new(ScorecardService::new(rules)),
        config.scorecard.api_token.clone(),
    );

    let app = with_scorecard_routes(scorecard_state)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "revenue alignment scorecard ready");

    axum::serve(listener, app).await?;
    Ok(())
}
