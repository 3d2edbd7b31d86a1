use std::sync::Arc;

use axum::Router;
use taskboard_server::{app_state::AppState, data_access::data_context::DataContext, map_routes};

/// Full router over a fresh transient store. Each test gets its own.
pub async fn test_app() -> Router {
    let data_context = DataContext::in_memory()
        .await
        .expect("Failed to open in-memory store");
    map_routes(Arc::new(AppState { data_context }))
}
