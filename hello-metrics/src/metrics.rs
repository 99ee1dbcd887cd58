use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::error;

/// Content type identifying the text exposition format version.
pub const EXPOSITION_CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

/// Handler for the /metrics endpoint. Renders every registered metric in
/// the Prometheus text exposition format. Performs no mutation.
pub async fn metrics_handler(State(state): State<Arc<AppState>>) -> Result<Response, StatusCode> {
    let body = state.encode_metrics().map_err(|e| {
        error!("Failed to encode metrics: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    Ok(([("content-type", EXPOSITION_CONTENT_TYPE)], body).into_response())
}
