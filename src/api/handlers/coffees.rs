use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use mongodb::bson::Document;

use super::parse_object_id;
use crate::api::errors::ApiError;
use crate::api::AppState;
use crate::domain::repositories::{DeleteAck, InsertAck, UpdateAck};

/// Create a new coffee
///
/// POST /coffees
pub async fn create_coffee(
    State(state): State<AppState>,
    Json(document): Json<Document>,
) -> Result<(StatusCode, Json<InsertAck>), ApiError> {
    let ack = state
        .coffees
        .insert(document)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Failed to create coffee: {}", e)))?;

    Ok((StatusCode::CREATED, Json(ack)))
}

/// List all coffees
///
/// GET /coffees
pub async fn list_coffees(
    State(state): State<AppState>,
) -> Result<Json<Vec<Document>>, ApiError> {
    let coffees = state
        .coffees
        .find_all()
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?;

    Ok(Json(coffees))
}

/// Get a coffee by ID; absent ids yield a JSON null body, not a 404
///
/// GET /coffees/:id
pub async fn get_coffee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Option<Document>>, ApiError> {
    let id = parse_object_id(&id)?;

    let coffee = state
        .coffees
        .find_by_id(id)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?;

    Ok(Json(coffee))
}

/// Replace a coffee by ID, creating it when absent (upsert)
///
/// PUT /coffees/:id
pub async fn replace_coffee(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(document): Json<Document>,
) -> Result<Json<UpdateAck>, ApiError> {
    let id = parse_object_id(&id)?;

    let ack = state
        .coffees
        .replace_by_id(id, document)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Failed to replace coffee: {}", e)))?;

    Ok(Json(ack))
}

/// Delete a coffee by ID; deleting an absent id acknowledges zero deletions
///
/// DELETE /coffees/:id
pub async fn delete_coffee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteAck>, ApiError> {
    let id = parse_object_id(&id)?;

    let ack = state
        .coffees
        .delete_by_id(id)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Failed to delete coffee: {}", e)))?;

    Ok(Json(ack))
}
