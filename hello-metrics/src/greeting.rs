use crate::state::AppState;
use axum::extract::State;
use std::sync::Arc;
use tracing::debug;

/// Handler for the root route. Counts the request, then greets the caller.
pub async fn greeting_handler(State(state): State<Arc<AppState>>) -> &'static str {
    state.http_requests.inc();
    debug!("Served greeting");
    "Hello, World!"
}
