//! HTTP REST API routes

mod character_routes;
mod class_routes;

use axum::{routing::get, Router};
use std::sync::Arc;

use crate::infrastructure::state::AppState;

/// Create all API routes
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        // Class directory
        .route("/api/classes", get(class_routes::list_classes))
        // Character routes
        .route(
            "/api/characters",
            get(character_routes::list_characters).post(character_routes::create_character),
        )
        .route(
            "/api/characters/{id}",
            get(character_routes::get_character)
                .put(character_routes::update_character)
                // Same JSON body as PUT, for clients limited to GET and POST
                .post(character_routes::update_character)
                .delete(character_routes::delete_character),
        )
        .route(
            "/api/characters/{id}/sheet",
            get(character_routes::get_character_sheet),
        )
}
