//! Class directory routes

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::infrastructure::state::AppState;

/// List class names offered by the rules API, empty when it is unreachable
pub async fn list_classes(State(state): State<Arc<AppState>>) -> Json<Vec<String>> {
    let names = state
        .class_directory
        .list_class_names()
        .await
        .unwrap_or_else(|e| {
            tracing::warn!("Class directory unavailable: {:#}", e);
            Vec::new()
        });

    Json(names)
}
