use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use mongodb::bson::Document;
use serde::Deserialize;

use super::parse_object_id;
use crate::api::errors::ApiError;
use crate::api::AppState;
use crate::domain::repositories::{DeleteAck, InsertAck, UpdateAck};
use crate::domain::user::User;
use crate::identity::{IdentityError, IdentityProvider};

/// Query parameters for listing users
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListUsersQuery {
    pub search_query: Option<String>,
}

/// Request body for updating a user's last sign-in time
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LastSignInRequest {
    pub email: String,
    pub last_sign_in_time: String,
}

/// Create a new user
///
/// POST /users
pub async fn create_user(
    State(state): State<AppState>,
    Json(document): Json<Document>,
) -> Result<(StatusCode, Json<InsertAck>), ApiError> {
    let ack = state
        .users
        .insert(document)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Failed to create user: {}", e)))?;

    Ok((StatusCode::CREATED, Json(ack)))
}

/// List users, optionally filtered by a case-insensitive substring match
/// over name, email, phoneNumber and address
///
/// GET /users?searchQuery=S
pub async fn list_users(
    State(state): State<AppState>,
    Query(params): Query<ListUsersQuery>,
) -> Result<Json<Vec<User>>, ApiError> {
    let users = match params.search_query.as_deref() {
        Some(query) => state.users.search(query).await,
        None => state.users.find_all().await,
    }
    .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?;

    Ok(Json(users))
}

/// Update a user's last sign-in time by email; an unknown email is a
/// zero-match acknowledgment, not an error
///
/// PATCH /users
pub async fn update_last_sign_in(
    State(state): State<AppState>,
    Json(req): Json<LastSignInRequest>,
) -> Result<Json<UpdateAck>, ApiError> {
    let ack = state
        .users
        .set_last_sign_in(&req.email, &req.last_sign_in_time)
        .await
        .map_err(|e| {
            ApiError::internal_server_error(format!("Failed to update last sign-in: {}", e))
        })?;

    Ok(Json(ack))
}

/// Delete a user, cascading to the identity provider
///
/// DELETE /users/:id
///
/// The flow is: find the user (404 when absent), remove the linked
/// identity-provider account, then delete the database record. A failed
/// delete-by-uid aborts the whole operation; a failed resolve-by-email is
/// logged and the database delete proceeds.
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteAck>, ApiError> {
    let id = parse_object_id(&id)?;

    let user = state
        .users
        .find_by_id(id)
        .await
        .map_err(|e| ApiError::internal_server_error("Failed to delete user").with_detail(e))?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    match remove_identity_account(state.identity.as_ref(), &user).await {
        Ok(IdentityCleanup::Deleted) => {}
        Ok(IdentityCleanup::Skipped) => {
            tracing::info!(user_id = %id, "user has no identity-provider link");
        }
        Ok(IdentityCleanup::Unresolved(reason)) => {
            tracing::warn!(
                user_id = %id,
                reason,
                "could not remove identity-provider account, deleting record anyway"
            );
        }
        Err(e) => {
            tracing::error!(user_id = %id, error = %e, "identity-provider deletion failed");
            return Err(ApiError::internal_server_error("Failed to delete user")
                .with_detail(e.to_string()));
        }
    }

    let ack = state
        .users
        .delete_by_id(id)
        .await
        .map_err(|e| ApiError::internal_server_error("Failed to delete user").with_detail(e))?;

    Ok(Json(ack))
}

/// Outcome of the identity-provider step of a user delete
#[derive(Debug)]
enum IdentityCleanup {
    /// The linked account was removed
    Deleted,
    /// Resolution by email failed; logged, delete proceeds
    Unresolved(String),
    /// The document carries neither a uid nor an email
    Skipped,
}

/// Removes the identity-provider account linked to `user`, if any.
///
/// The uid branch is fatal: its errors propagate and abort the delete.
/// The email branch is best-effort: every failure collapses into
/// `Unresolved` so the caller continues.
async fn remove_identity_account(
    identity: &dyn IdentityProvider,
    user: &User,
) -> Result<IdentityCleanup, IdentityError> {
    if let Some(uid) = user.firebase_uid.as_deref() {
        identity.delete_account(uid).await?;
        return Ok(IdentityCleanup::Deleted);
    }

    let Some(email) = user.email.as_deref() else {
        return Ok(IdentityCleanup::Skipped);
    };

    let attempt: Result<Option<()>, IdentityError> = async {
        match identity.find_uid_by_email(email).await? {
            Some(uid) => identity.delete_account(&uid).await.map(Some),
            None => Ok(None),
        }
    }
    .await;

    Ok(match attempt {
        Ok(Some(())) => IdentityCleanup::Deleted,
        Ok(None) => IdentityCleanup::Unresolved(format!("no account registered for {}", email)),
        Err(e) => IdentityCleanup::Unresolved(e.to_string()),
    })
}
