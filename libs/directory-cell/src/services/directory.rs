use std::collections::HashMap;

use anyhow::Result;
use reqwest::Method;
use tracing::debug;

use shared_backend::client::ClinicClient;
use shared_config::AppConfig;

use crate::models::{Branch, Doctor, Specialty};
use crate::services::eligibility;

/// Read-only reference data for the booking form: branches, visit
/// reasons, and the doctor roster, all served by the clinic backend.
pub struct DirectoryService {
    backend: ClinicClient,
}

impl DirectoryService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            backend: ClinicClient::new(config),
        }
    }

    /// All clinic branches.
    pub async fn list_branches(&self) -> Result<Vec<Branch>> {
        debug!("Fetching branches");
        self.backend.request(Method::GET, "/branches", None).await
    }

    /// All visit reasons (doctor specialties).
    pub async fn list_specialties(&self) -> Result<Vec<Specialty>> {
        debug!("Fetching specialties");
        self.backend
            .request(Method::GET, "/docSpecialties", None)
            .await
    }

    /// The full doctor roster across branches.
    pub async fn list_doctors(&self) -> Result<Vec<Doctor>> {
        debug!("Fetching doctor roster");
        self.backend.request(Method::GET, "/doctors", None).await
    }

    /// Doctors practicing at the given branch.
    pub async fn doctors_in_branch(&self, branch: &str) -> Result<Vec<Doctor>> {
        debug!("Fetching doctors at branch {}", branch);

        let path = format!("/doctors?branch={}", urlencoding::encode(branch));
        self.backend.request(Method::GET, &path, None).await
    }

    /// Doctors at a branch able to handle the given visit reason.
    pub async fn eligible_doctors(&self, branch: &str, reason: &str) -> Result<Vec<Doctor>> {
        let doctors = self.doctors_in_branch(branch).await?;
        debug!(
            "{} doctors at branch {}, filtering for reason {}",
            doctors.len(),
            branch,
            reason
        );

        Ok(eligibility::eligible_doctors(doctors, reason))
    }

    /// id -> display name index, used to resolve doctor names in the
    /// appointment list view.
    pub async fn doctor_name_index(&self) -> Result<HashMap<String, String>> {
        let doctors = self.list_doctors().await?;

        Ok(doctors
            .into_iter()
            .map(|doctor| (doctor.id, doctor.name))
            .collect())
    }
}
