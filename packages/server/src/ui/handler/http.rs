//! HTTP API endpoint handlers.
//!
//! None of these return an error status: failures to reach the registry
//! degrade to empty results.

use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::header,
    response::IntoResponse,
};

use crate::{
    infrastructure::dto::http::{HISTORY_CLEARED_MESSAGE, HealthDto, encode_history},
    ui::state::AppState,
    usecase::{ClearHistoryUseCase, GetHistoryUseCase},
};

/// Health check endpoint
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthDto> {
    let clients = state.registry.client_count().await.unwrap_or_else(|e| {
        tracing::warn!("Failed to count clients: {}", e);
        0
    });

    Json(HealthDto {
        status: "ok".to_string(),
        clients,
    })
}

/// Recent messages as a JSON array of strings, oldest first
pub async fn get_history(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let messages = GetHistoryUseCase::new(state.registry.clone()).execute().await;

    (
        [(header::CONTENT_TYPE, "application/json")],
        encode_history(&messages),
    )
}

/// Empty the history
pub async fn clear_history(State(state): State<Arc<AppState>>) -> &'static str {
    ClearHistoryUseCase::new(state.registry.clone())
        .execute()
        .await;

    HISTORY_CLEARED_MESSAGE
}
