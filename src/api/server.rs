use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::{
    channel::HttpReportingChannel,
    config::Config,
    distribution::PercentFormat,
    metrics,
    models::StateRow,
    source::{
        AlarmStateDistributionSource, Column, InputValues, SourceContext, SourceDescriptor,
    },
    DistributionError, Result,
};

#[derive(Clone)]
pub struct AppState {
    pub source: Arc<AlarmStateDistributionSource>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionResponse {
    pub columns: Vec<String>,
    pub rows: Vec<StateRow>,
    pub has_next_page: bool,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/sources", get(describe_source))
        .route("/distribution", get(get_distribution))
        .route("/metrics", get(get_metrics))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn describe_source() -> Json<SourceDescriptor> {
    Json(AlarmStateDistributionSource::descriptor())
}

async fn get_distribution(
    State(state): State<AppState>,
    query: std::result::Result<Query<InputValues>, QueryRejection>,
) -> Result<Json<DistributionResponse>> {
    let Query(values) = query.map_err(|e| DistributionError::InvalidInput(e.body_text()))?;
    info!(
        "Distribution query: element={:?} start={} end={}",
        values.element, values.start, values.end
    );

    let bound = AlarmStateDistributionSource::bind_inputs(&values);
    let page = state.source.fetch_rows(&bound).await;

    Ok(Json(DistributionResponse {
        columns: AlarmStateDistributionSource::columns()
            .iter()
            .map(|c: &Column| c.name.to_string())
            .collect(),
        rows: page.rows,
        has_next_page: page.has_next_page,
    }))
}

async fn get_metrics() -> Result<String> {
    metrics::gather_text()
}

pub async fn start_server(config: Config) -> Result<()> {
    let channel = HttpReportingChannel::from_config(&config)?;
    info!("Reporting service at {}", channel.base_url());

    let context = SourceContext::new(Arc::new(channel))
        .with_percent_format(PercentFormat::new(config.percent_decimals));
    let state = AppState {
        source: Arc::new(AlarmStateDistributionSource::initialize(context)),
    };

    let app = router(state);
    let addr = config.bind_addr();
    info!("Starting alarm state distribution service on {}", addr);

    let listener = TcpListener::bind(&addr).await.map_err(|e|
        DistributionError::Internal(format!("Failed to bind to address: {}", e)))?;

    axum::serve(listener, app).await.map_err(|e|
        DistributionError::Internal(format!("Server error: {}", e)))?;

    Ok(())
}
