use std::sync::Arc;

use serde_json::{json, Value};

use shared_config::AppConfig;

pub struct TestConfig {
    pub backend_url: String,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            backend_url: "http://localhost:3000".to_string(),
        }
    }
}

impl TestConfig {
    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            backend_base_url: self.backend_url.clone(),
        }
    }

    pub fn to_arc(&self) -> Arc<AppConfig> {
        Arc::new(self.to_app_config())
    }
}

/// Canned JSON bodies matching what the clinic backend serves, for
/// wiremock-based tests.
pub struct MockBackendResponses;

impl MockBackendResponses {
    pub fn branch(name: &str) -> Value {
        json!({ "name": name })
    }

    pub fn specialty(name: &str) -> Value {
        json!({ "name": name })
    }

    pub fn doctor(id: &str, name: &str, specialty: &str, branch: &str) -> Value {
        json!({
            "id": id,
            "name": name,
            "specialty": specialty,
            "branch": branch
        })
    }

    pub fn appointment(id: &str, doctor_id: &str, branch: &str, date: &str, time: &str) -> Value {
        json!({
            "id": id,
            "firstName": "Amina",
            "lastName": "Hassan",
            "age": 34,
            "contact": "0712345678",
            "email": "amina@example.com",
            "residence": "Kilimani",
            "reason": "Dermatology",
            "branch": branch,
            "doctorId": doctor_id,
            "date": date,
            "time": time
        })
    }
}
