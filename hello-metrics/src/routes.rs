use crate::greeting::greeting_handler;
use crate::metrics::metrics_handler;
use crate::state::AppState;
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Build the request dispatcher: `/` goes to the greeting handler,
/// `/metrics` to the exporter, anything else falls through to the
/// router's not-found response. Routing is fixed at startup.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(greeting_handler))
        .route("/metrics", get(metrics_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
