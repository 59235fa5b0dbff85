//! Data-to-view mapping for the appointment list.

use std::collections::HashMap;

use crate::models::{Appointment, AppointmentRow};

/// Display name used when an appointment references a doctor missing
/// from the roster.
pub const UNKNOWN_DOCTOR: &str = "Unknown Doctor";

/// Map appointments onto list rows, resolving doctor ids to display
/// names. Input order is preserved.
pub fn appointment_rows(
    appointments: Vec<Appointment>,
    doctor_names: &HashMap<String, String>,
) -> Vec<AppointmentRow> {
    appointments
        .into_iter()
        .map(|appointment| AppointmentRow {
            doctor_name: doctor_names
                .get(&appointment.doctor_id)
                .cloned()
                .unwrap_or_else(|| UNKNOWN_DOCTOR.to_string()),
            id: appointment.id,
            date: appointment.date,
            time: appointment.time,
            branch: appointment.branch,
            reason: appointment.reason,
        })
        .collect()
}
