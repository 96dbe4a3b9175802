mod client;

pub use client::ApiClient;

use shared_http::api::{ApiError, AppInfoResponse, HealthResponse};

/// Seam between the dashboard and the backend. Implemented by [`ApiClient`]
/// and by in-memory stubs in tests.
pub trait BackendApi {
    /// Probe the backend. The real client never returns `Err`: any transport
    /// failure comes back as a DOWN result. The error branch exists so
    /// callers still have to decide what a failing implementation means.
    async fn check_health(&self) -> Result<HealthResponse, ApiError>;

    /// Fetch descriptive metadata. Unlike the health probe, failures here
    /// surface to the caller.
    async fn app_info(&self) -> Result<AppInfoResponse, ApiError>;
}
