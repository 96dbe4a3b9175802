use dioxus::prelude::{info, warn};
use reqwest::Client;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use shared_http::api::{ApiError, AppInfoResponse, HealthResponse};

use crate::api::BackendApi;
use crate::config::Config;

/// Per-request budget. The browser fetch backend has no equivalent knob, so
/// this only applies to native builds.
#[cfg(not(target_arch = "wasm32"))]
const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(10);

/// Single point of contact with the backend.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &Config) -> Self {
        Self {
            client: build_http_client(),
            base_url: config.api_base_url.clone(),
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.get(&url).send().await.map_err(normalize)?;
        let response = response.error_for_status().map_err(normalize)?;
        response.json().await.map_err(normalize)
    }
}

impl BackendApi for ApiClient {
    async fn check_health(&self) -> Result<HealthResponse, ApiError> {
        info!("Checking health at URL: {}/health", self.base_url);
        match self.get_json("/health").await {
            Ok(health) => Ok(health),
            Err(error) => {
                warn!("Health check failed, reporting DOWN: {error}");
                Ok(HealthResponse::down_now())
            }
        }
    }

    async fn app_info(&self) -> Result<AppInfoResponse, ApiError> {
        self.get_json("/api/v1/app/info").await
    }
}

/// Collapse any transport failure into the shared error shape. The status
/// code is only present when the server actually answered.
fn normalize(error: reqwest::Error) -> ApiError {
    ApiError::new(error.to_string(), error.status().map(|code| code.as_u16()))
}

fn build_http_client() -> Client {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    let builder = Client::builder().default_headers(headers);
    #[cfg(not(target_arch = "wasm32"))]
    let builder = builder.timeout(REQUEST_TIMEOUT);
    builder
        .build()
        .expect("failed to build HTTP client")
}
