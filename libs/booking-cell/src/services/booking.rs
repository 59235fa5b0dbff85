use std::sync::Arc;

use reqwest::Method;
use serde_json::Value;
use tracing::{debug, info};

use shared_backend::client::ClinicClient;
use shared_config::AppConfig;

use crate::models::{Appointment, BookingError, BookingRequest};
use crate::services::conflict::ConflictService;
use crate::services::slots;

/// Appointment record management against the clinic backend: create,
/// update, cancel, list. Create and update run the conflict check first;
/// only cancel skips it.
pub struct BookingService {
    backend: Arc<ClinicClient>,
    conflict_service: ConflictService,
}

impl BookingService {
    pub fn new(config: &AppConfig) -> Self {
        let backend = Arc::new(ClinicClient::new(config));
        let conflict_service = ConflictService::new(Arc::clone(&backend));

        Self {
            backend,
            conflict_service,
        }
    }

    /// Book a new appointment. The requested slot is validated and
    /// conflict-checked before anything is persisted; a taken slot
    /// rejects the booking with no side effects.
    pub async fn create(&self, request: BookingRequest) -> Result<Appointment, BookingError> {
        info!(
            "Booking appointment with doctor {} on {} at {}",
            request.doctor_id, request.date, request.time
        );

        self.validate_slot(&request)?;
        self.conflict_service
            .check_slot(
                &request.branch,
                &request.doctor_id,
                &request.date,
                &request.time,
                None,
            )
            .await?;

        let body = self.to_body(&request)?;
        let appointment: Appointment = self
            .backend
            .request(Method::POST, "/appointments", Some(body))
            .await
            .map_err(|e| BookingError::BackendError(e.to_string()))?;

        info!("Appointment {} booked", appointment.id);
        Ok(appointment)
    }

    /// Update an existing appointment. The record's own slot is exempt
    /// from the conflict check, so keeping the original time is always
    /// allowed; colliding with any other appointment is not.
    pub async fn update(
        &self,
        appointment_id: &str,
        request: BookingRequest,
    ) -> Result<Appointment, BookingError> {
        info!("Updating appointment {}", appointment_id);

        self.validate_slot(&request)?;

        // Unknown ids fail here, before the slot is ever considered.
        self.get(appointment_id).await?;

        self.conflict_service
            .check_slot(
                &request.branch,
                &request.doctor_id,
                &request.date,
                &request.time,
                Some(appointment_id),
            )
            .await?;

        let path = format!("/appointments/{}", appointment_id);
        let body = self.to_body(&request)?;
        let appointment: Appointment = self
            .backend
            .request(Method::PUT, &path, Some(body))
            .await
            .map_err(|e| BookingError::BackendError(e.to_string()))?;

        info!("Appointment {} updated", appointment_id);
        Ok(appointment)
    }

    /// Cancel an appointment. Deletion is irreversible, so it only
    /// proceeds once the caller has confirmed. Cancelling an id that no
    /// longer exists is an error, never a silent no-op.
    pub async fn cancel(&self, appointment_id: &str, confirmed: bool) -> Result<(), BookingError> {
        if !confirmed {
            debug!(
                "Cancellation of {} not confirmed, leaving record untouched",
                appointment_id
            );
            return Err(BookingError::ConfirmationRequired);
        }

        self.get(appointment_id).await?;

        let path = format!("/appointments/{}", appointment_id);
        let _: Value = self
            .backend
            .request(Method::DELETE, &path, None)
            .await
            .map_err(|e| BookingError::BackendError(e.to_string()))?;

        info!("Appointment {} cancelled", appointment_id);
        Ok(())
    }

    /// All appointments, optionally narrowed to one branch, in backend
    /// insertion order.
    pub async fn list(&self, branch: Option<&str>) -> Result<Vec<Appointment>, BookingError> {
        let path = match branch {
            Some(branch) => format!("/appointments?branch={}", urlencoding::encode(branch)),
            None => "/appointments".to_string(),
        };

        self.backend
            .request(Method::GET, &path, None)
            .await
            .map_err(|e| BookingError::BackendError(e.to_string()))
    }

    /// A single appointment, e.g. to prefill the form when editing.
    pub async fn get(&self, appointment_id: &str) -> Result<Appointment, BookingError> {
        let path = format!("/appointments/{}", appointment_id);

        let appointment: Option<Appointment> = self
            .backend
            .request_optional(Method::GET, &path, None)
            .await
            .map_err(|e| BookingError::BackendError(e.to_string()))?;

        appointment.ok_or(BookingError::NotFound)
    }

    fn validate_slot(&self, request: &BookingRequest) -> Result<(), BookingError> {
        slots::validate_booking_time(&request.time)?;
        slots::validate_booking_date(&request.date)?;
        Ok(())
    }

    fn to_body(&self, request: &BookingRequest) -> Result<Value, BookingError> {
        serde_json::to_value(request).map_err(|e| BookingError::ValidationError(e.to_string()))
    }
}
