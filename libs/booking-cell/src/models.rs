use serde::{Deserialize, Serialize};

// ==============================================================================
// CORE APPOINTMENT MODELS
// ==============================================================================

/// A booked appointment as stored by the clinic backend. The backend
/// assigns `id`; everything else comes from the booking form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
    pub contact: String,
    pub email: String,
    pub residence: String,
    pub reason: String,
    pub branch: String,
    pub doctor_id: String,
    /// Calendar date, ISO "YYYY-MM-DD".
    pub date: String,
    /// On-the-hour time label, "HH:00".
    pub time: String,
}

/// The booking form payload: an appointment without its backend-assigned
/// id. Used as the body for both create and update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
    pub contact: String,
    pub email: String,
    pub residence: String,
    pub reason: String,
    pub branch: String,
    pub doctor_id: String,
    pub date: String,
    pub time: String,
}

// ==============================================================================
// VIEW MODELS
// ==============================================================================

/// One row of the appointment list view, with the doctor id resolved to
/// a display name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentRow {
    pub id: String,
    pub date: String,
    pub time: String,
    pub doctor_name: String,
    pub branch: String,
    pub reason: String,
}

// ==============================================================================
// ERROR TYPES
// ==============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, thiserror::Error)]
pub enum BookingError {
    #[error("Appointment not found")]
    NotFound,

    #[error("This time slot is already booked")]
    SlotTaken,

    #[error("Invalid appointment time: {0}")]
    InvalidTime(String),

    #[error("Invalid appointment date: {0}")]
    InvalidDate(String),

    #[error("Cancellation requires confirmation")]
    ConfirmationRequired,

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Backend error: {0}")]
    BackendError(String),
}
