use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use shared_config::AppConfig;
use shared_models::error::AppError;

use crate::services::DirectoryService;

#[derive(Debug, Deserialize)]
pub struct DoctorSearchParams {
    pub branch: String,
    pub reason: Option<String>,
}

#[axum::debug_handler]
pub async fn list_branches(State(state): State<Arc<AppConfig>>) -> Result<Json<Value>, AppError> {
    let directory = DirectoryService::new(&state);

    let branches = directory
        .list_branches()
        .await
        .map_err(|e| AppError::ExternalService(e.to_string()))?;

    Ok(Json(json!(branches)))
}

#[axum::debug_handler]
pub async fn list_specialties(
    State(state): State<Arc<AppConfig>>,
) -> Result<Json<Value>, AppError> {
    let directory = DirectoryService::new(&state);

    let specialties = directory
        .list_specialties()
        .await
        .map_err(|e| AppError::ExternalService(e.to_string()))?;

    Ok(Json(json!(specialties)))
}

/// Doctor options for the booking form: the branch roster, narrowed to
/// the visit reason when one is selected.
#[axum::debug_handler]
pub async fn search_doctors(
    State(state): State<Arc<AppConfig>>,
    Query(params): Query<DoctorSearchParams>,
) -> Result<Json<Value>, AppError> {
    let directory = DirectoryService::new(&state);

    let doctors = match params.reason.as_deref() {
        Some(reason) => directory.eligible_doctors(&params.branch, reason).await,
        None => directory.doctors_in_branch(&params.branch).await,
    }
    .map_err(|e| AppError::ExternalService(e.to_string()))?;

    Ok(Json(json!(doctors)))
}
