//! Doctor eligibility rules for the booking form.

use crate::models::Doctor;

/// Visit reason offered for complaints outside the listed specialties.
pub const OTHER_REASON: &str = "Other";

/// Specialty that handles "Other" visit reasons.
pub const GENERAL_PRACTITIONER: &str = "General Practitioner";

/// Map a visit reason to the specialty that handles it.
pub fn specialty_for_reason(reason: &str) -> &str {
    if reason == OTHER_REASON {
        GENERAL_PRACTITIONER
    } else {
        reason
    }
}

/// Narrow a doctor roster to those able to handle the given visit reason.
///
/// Matching is exact and case-sensitive. An empty result means no doctors
/// are available for that specialty, not an error.
pub fn eligible_doctors(doctors: Vec<Doctor>, reason: &str) -> Vec<Doctor> {
    let specialty = specialty_for_reason(reason);
    doctors
        .into_iter()
        .filter(|doctor| doctor.specialty == specialty)
        .collect()
}
