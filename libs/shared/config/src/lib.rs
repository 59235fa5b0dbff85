use std::env;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub backend_base_url: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let config = Self {
            backend_base_url: env::var("CLINIC_BACKEND_URL")
                .unwrap_or_else(|_| {
                    warn!("CLINIC_BACKEND_URL not set, using default");
                    "http://localhost:3000".to_string()
                }),
        };

        if !config.is_configured() {
            warn!("Application not fully configured - missing environment variables");
        }

        config
    }

    pub fn is_configured(&self) -> bool {
        !self.backend_base_url.is_empty()
    }
}
