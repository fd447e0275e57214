//! Route table.

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::{
    handler::{clear_history, get_history, health_check, websocket_handler},
    state::AppState,
};

/// Build the application router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/ws", get(websocket_handler))
        .route("/api/info_list", get(get_history))
        .route("/api/empty_info", get(clear_history))
        .route("/api/health", get(health_check))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
