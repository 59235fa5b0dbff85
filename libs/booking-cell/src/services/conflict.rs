use std::sync::Arc;

use reqwest::Method;
use tracing::{debug, warn};

use shared_backend::client::ClinicClient;

use crate::models::{Appointment, BookingError};

/// True when some appointment already occupies `(doctor_id, date, time)`.
///
/// `exempt_id` names the appointment currently being edited; its own slot
/// never counts against it, so an update may keep its original time.
pub fn slot_taken(
    appointments: &[Appointment],
    doctor_id: &str,
    date: &str,
    time: &str,
    exempt_id: Option<&str>,
) -> bool {
    appointments.iter().any(|appointment| {
        appointment.doctor_id == doctor_id
            && appointment.date == date
            && appointment.time == time
            && exempt_id != Some(appointment.id.as_str())
    })
}

/// Double-booking prevention against the backend's current records.
pub struct ConflictService {
    backend: Arc<ClinicClient>,
}

impl ConflictService {
    pub fn new(backend: Arc<ClinicClient>) -> Self {
        Self { backend }
    }

    /// Fetch the branch's appointments and scan for a slot collision.
    /// Detection never mutates anything; a taken slot is reported as
    /// `SlotTaken` for the caller to surface.
    pub async fn check_slot(
        &self,
        branch: &str,
        doctor_id: &str,
        date: &str,
        time: &str,
        exempt_id: Option<&str>,
    ) -> Result<(), BookingError> {
        debug!(
            "Checking slot {} {} for doctor {} at branch {}",
            date, time, doctor_id, branch
        );

        let path = format!("/appointments?branch={}", urlencoding::encode(branch));
        let existing: Vec<Appointment> = self
            .backend
            .request(Method::GET, &path, None)
            .await
            .map_err(|e| BookingError::BackendError(e.to_string()))?;

        if slot_taken(&existing, doctor_id, date, time, exempt_id) {
            warn!(
                "Slot {} {} already booked for doctor {}",
                date, time, doctor_id
            );
            return Err(BookingError::SlotTaken);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Appointment;

    fn appointment(id: &str, doctor_id: &str, date: &str, time: &str) -> Appointment {
        Appointment {
            id: id.to_string(),
            first_name: "Amina".to_string(),
            last_name: "Hassan".to_string(),
            age: 34,
            contact: "0712345678".to_string(),
            email: "amina@example.com".to_string(),
            residence: "Kilimani".to_string(),
            reason: "Dermatology".to_string(),
            branch: "Westlands".to_string(),
            doctor_id: doctor_id.to_string(),
            date: date.to_string(),
            time: time.to_string(),
        }
    }

    #[test]
    fn occupied_slot_blocks_new_booking() {
        let existing = vec![appointment("1", "d1", "2025-01-10", "09:00")];

        assert!(slot_taken(&existing, "d1", "2025-01-10", "09:00", None));
    }

    #[test]
    fn editing_appointment_is_exempt_from_its_own_slot() {
        let existing = vec![appointment("1", "d1", "2025-01-10", "09:00")];

        assert!(!slot_taken(&existing, "d1", "2025-01-10", "09:00", Some("1")));
    }

    #[test]
    fn exemption_does_not_cover_other_appointments() {
        let existing = vec![
            appointment("1", "d1", "2025-01-10", "09:00"),
            appointment("2", "d1", "2025-01-10", "10:00"),
        ];

        assert!(slot_taken(&existing, "d1", "2025-01-10", "10:00", Some("1")));
    }

    #[test]
    fn free_slot_is_allowed() {
        let existing = vec![appointment("1", "d1", "2025-01-10", "09:00")];

        assert!(!slot_taken(&existing, "d1", "2025-01-10", "10:00", None));
        assert!(!slot_taken(&existing, "d2", "2025-01-10", "09:00", None));
        assert!(!slot_taken(&existing, "d1", "2025-01-11", "09:00", None));
    }

    #[test]
    fn empty_schedule_never_conflicts() {
        assert!(!slot_taken(&[], "d1", "2025-01-10", "09:00", None));
    }
}
