//! Character API routes

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::application::dto::{
    CharacterRequestDto, CharacterResponseDto, CharacterSheetResponseDto,
};
use crate::application::services::CharacterServiceError;
use crate::domain::value_objects::CharacterId;
use crate::infrastructure::state::AppState;

fn parse_character_id(id: &str) -> Result<CharacterId, (StatusCode, String)> {
    Uuid::parse_str(id)
        .map(CharacterId::from_uuid)
        .map_err(|_| (StatusCode::BAD_REQUEST, "Invalid character ID".to_string()))
}

fn service_error(e: CharacterServiceError) -> (StatusCode, String) {
    match e {
        CharacterServiceError::Validation(e) => (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()),
        CharacterServiceError::NotFound(_) => {
            (StatusCode::NOT_FOUND, "Character not found".to_string())
        }
        CharacterServiceError::Repository(_) => {
            tracing::error!("Character storage failure: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

/// List all characters
pub async fn list_characters(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<CharacterResponseDto>>, (StatusCode, String)> {
    let characters = state
        .character_service
        .list_characters()
        .await
        .map_err(service_error)?;

    Ok(Json(characters.into_iter().map(CharacterResponseDto::from).collect()))
}

/// Create a character from one class selection per level
pub async fn create_character(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CharacterRequestDto>,
) -> Result<(StatusCode, Json<CharacterResponseDto>), (StatusCode, String)> {
    let character = state
        .character_service
        .create_character(req.into())
        .await
        .map_err(service_error)?;

    Ok((
        StatusCode::CREATED,
        Json(CharacterResponseDto::from(character)),
    ))
}

/// Get a stored character by ID
pub async fn get_character(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<CharacterResponseDto>, (StatusCode, String)> {
    let id = parse_character_id(&id)?;

    let character = state
        .character_service
        .get_character(id)
        .await
        .map_err(service_error)?
        .ok_or_else(|| (StatusCode::NOT_FOUND, "Character not found".to_string()))?;

    Ok(Json(CharacterResponseDto::from(character)))
}

/// Get a character with spell slots and features for every level
pub async fn get_character_sheet(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<CharacterSheetResponseDto>, (StatusCode, String)> {
    let id = parse_character_id(&id)?;

    let sheet = state
        .character_service
        .get_character_sheet(id)
        .await
        .map_err(service_error)?
        .ok_or_else(|| (StatusCode::NOT_FOUND, "Character not found".to_string()))?;

    Ok(Json(CharacterSheetResponseDto::from(sheet)))
}

/// Replace a character's name and progression
pub async fn update_character(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<CharacterRequestDto>,
) -> Result<Json<CharacterResponseDto>, (StatusCode, String)> {
    let id = parse_character_id(&id)?;

    let character = state
        .character_service
        .update_character(id, req.into())
        .await
        .map_err(service_error)?;

    Ok(Json(CharacterResponseDto::from(character)))
}

/// Delete a character
pub async fn delete_character(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, (StatusCode, String)> {
    let id = parse_character_id(&id)?;

    state
        .character_service
        .delete_character(id)
        .await
        .map_err(service_error)?;

    Ok(StatusCode::NO_CONTENT)
}
