use anyhow::{anyhow, Result};
use reqwest::{
    header::{HeaderMap, HeaderValue, CONTENT_TYPE},
    Client, Method, StatusCode,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error};

use shared_config::AppConfig;

/// Client for the clinic's REST backend (branches, specialties, doctors,
/// appointments).
pub struct ClinicClient {
    client: Client,
    base_url: String,
}

impl ClinicClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.backend_base_url.clone(),
        }
    }

    fn get_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers
    }

    pub async fn request<T>(&self, method: Method, path: &str, body: Option<Value>) -> Result<T>
    where
        T: DeserializeOwned,
    {
        match self.execute(method, path, body).await? {
            Some(data) => Ok(data),
            None => Err(anyhow!("Resource not found: {}", path)),
        }
    }

    /// Like `request`, but resolves an upstream 404 to `None` instead of
    /// an error, so callers can report missing records precisely.
    pub async fn request_optional<T>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        self.execute(method, path, body).await
    }

    async fn execute<T>(&self, method: Method, path: &str, body: Option<Value>) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!("Making request to {}", url);

        let mut req = self.client.request(method, &url).headers(self.get_headers());

        if let Some(body_data) = body {
            req = req.json(&body_data);
        }

        let response = req.send().await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            let error_text = response.text().await?;
            error!("Backend error ({}): {}", status, error_text);

            return Err(anyhow!("Backend error ({}): {}", status, error_text));
        }

        let data = response.json::<T>().await?;
        Ok(Some(data))
    }

    pub fn get_base_url(&self) -> &str {
        &self.base_url
    }
}
