use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};

use directory_cell::services::DirectoryService;
use shared_config::AppConfig;
use shared_models::error::AppError;

use crate::models::{BookingError, BookingRequest};
use crate::services::booking::BookingService;
use crate::services::slots;
use crate::viewmodel;

// ==============================================================================
// QUERY PARAMETER STRUCTS
// ==============================================================================

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub branch: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CancelParams {
    pub confirm: Option<bool>,
}

fn booking_error(e: BookingError) -> AppError {
    match e {
        BookingError::NotFound => AppError::NotFound("Appointment not found".to_string()),
        BookingError::SlotTaken => AppError::Conflict(
            "This time slot is already booked. Please select a different time.".to_string(),
        ),
        BookingError::InvalidTime(msg) => AppError::BadRequest(msg),
        BookingError::InvalidDate(msg) => AppError::BadRequest(msg),
        BookingError::ConfirmationRequired => {
            AppError::BadRequest("Cancellation requires confirmation".to_string())
        }
        BookingError::ValidationError(msg) => AppError::BadRequest(msg),
        BookingError::BackendError(msg) => AppError::ExternalService(msg),
    }
}

// ==============================================================================
// BOOKING HANDLERS
// ==============================================================================

#[axum::debug_handler]
pub async fn create_appointment(
    State(state): State<Arc<AppConfig>>,
    Json(request): Json<BookingRequest>,
) -> Result<Json<Value>, AppError> {
    let booking_service = BookingService::new(&state);

    let appointment = booking_service
        .create(request)
        .await
        .map_err(booking_error)?;

    Ok(Json(json!({
        "success": true,
        "appointment": appointment,
        "message": "Appointment booked successfully"
    })))
}

#[axum::debug_handler]
pub async fn update_appointment(
    State(state): State<Arc<AppConfig>>,
    Path(appointment_id): Path<String>,
    Json(request): Json<BookingRequest>,
) -> Result<Json<Value>, AppError> {
    let booking_service = BookingService::new(&state);

    let appointment = booking_service
        .update(&appointment_id, request)
        .await
        .map_err(booking_error)?;

    Ok(Json(json!({
        "success": true,
        "appointment": appointment,
        "message": "Appointment updated successfully"
    })))
}

#[axum::debug_handler]
pub async fn cancel_appointment(
    State(state): State<Arc<AppConfig>>,
    Path(appointment_id): Path<String>,
    Query(params): Query<CancelParams>,
) -> Result<Json<Value>, AppError> {
    let booking_service = BookingService::new(&state);

    booking_service
        .cancel(&appointment_id, params.confirm.unwrap_or(false))
        .await
        .map_err(booking_error)?;

    Ok(Json(json!({
        "success": true,
        "message": "Appointment cancelled"
    })))
}

/// Raw appointment record, used to prefill the form when editing.
#[axum::debug_handler]
pub async fn get_appointment(
    State(state): State<Arc<AppConfig>>,
    Path(appointment_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let booking_service = BookingService::new(&state);

    let appointment = booking_service
        .get(&appointment_id)
        .await
        .map_err(booking_error)?;

    Ok(Json(json!(appointment)))
}

/// The appointment list view: one row per appointment with the doctor id
/// resolved to a display name.
#[axum::debug_handler]
pub async fn list_appointments(
    State(state): State<Arc<AppConfig>>,
    Query(params): Query<ListParams>,
) -> Result<Json<Value>, AppError> {
    let directory = DirectoryService::new(&state);
    let booking_service = BookingService::new(&state);

    // Roster first, then appointments; the rows need the name index.
    let doctor_names = directory
        .doctor_name_index()
        .await
        .map_err(|e| AppError::ExternalService(e.to_string()))?;
    let appointments = booking_service
        .list(params.branch.as_deref())
        .await
        .map_err(booking_error)?;

    let rows = viewmodel::appointment_rows(appointments, &doctor_names);

    Ok(Json(json!(rows)))
}

/// Everything the booking form needs up front: branches, visit reasons,
/// the day's time slots, and the earliest selectable date.
#[axum::debug_handler]
pub async fn booking_form_context(
    State(state): State<Arc<AppConfig>>,
) -> Result<Json<Value>, AppError> {
    let directory = DirectoryService::new(&state);

    let branches = directory
        .list_branches()
        .await
        .map_err(|e| AppError::ExternalService(e.to_string()))?;
    let reasons = directory
        .list_specialties()
        .await
        .map_err(|e| AppError::ExternalService(e.to_string()))?;

    Ok(Json(json!({
        "branches": branches,
        "reasons": reasons,
        "timeSlots": slots::daily_slots(),
        "minDate": Utc::now().date_naive().to_string(),
    })))
}
