//! Axum handlers for the counselor directory

use axum::{
    extract::{Path, State},
    response::Json,
};
use counsel_common::error::{database_error, not_found, validation_error, AppError};
use counsel_common::models::Counselor;
use counsel_common::ValidJson;
use counsel_db::{CounselorRepository, SqlCounselorRepository};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::info;

/// Shared state for the directory handlers.
#[derive(Clone)]
pub struct DirectoryState {
    pub repo: SqlCounselorRepository,
}

#[derive(Debug, Deserialize)]
pub struct UpdateBioRequest {
    pub bio: String,
}

/// Handler to list every counselor.
#[axum::debug_handler]
pub async fn list_counselors_handler(
    State(state): State<Arc<DirectoryState>>,
) -> Result<Json<Vec<Counselor>>, AppError> {
    let counselors = state.repo.find_all().await.map_err(database_error)?;
    Ok(Json(counselors))
}

/// Handler to fetch a single counselor profile.
#[axum::debug_handler]
pub async fn get_counselor_handler(
    State(state): State<Arc<DirectoryState>>,
    Path(id): Path<i64>,
) -> Result<Json<Counselor>, AppError> {
    let counselor = state
        .repo
        .find_by_id(id)
        .await
        .map_err(database_error)?
        .ok_or_else(|| not_found("Counselor not found"))?;

    Ok(Json(counselor))
}

/// Handler for a counselor updating their own bio.
#[axum::debug_handler]
pub async fn update_bio_handler(
    State(state): State<Arc<DirectoryState>>,
    Path(id): Path<i64>,
    ValidJson(payload): ValidJson<UpdateBioRequest>,
) -> Result<Json<Value>, AppError> {
    if payload.bio.trim().is_empty() {
        return Err(validation_error("Bio must not be empty"));
    }

    let updated = state
        .repo
        .update_bio(id, &payload.bio)
        .await
        .map_err(database_error)?;

    if !updated {
        return Err(not_found("Counselor not found"));
    }

    info!("Updated bio for counselor {}", id);
    Ok(Json(json!({ "message": "Counselor bio updated successfully" })))
}
