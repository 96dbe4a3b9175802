use dioxus::prelude::warn;
use shared_http::api::{AppInfoResponse, HealthResponse};

use crate::api::BackendApi;

/// Shown when the health call itself errors out instead of settling.
pub const CONNECT_FAILED: &str = "Failed to connect to backend";

/// Everything the dashboard needs to render the current check cycle.
///
/// Moves Idle -> Checking -> Settled: [`begin_check`](Self::begin_check) on
/// entry, [`run_check`](Self::run_check) to produce the settled value. There
/// is no terminal state; the next trigger starts a new cycle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HealthView {
    pub health: Option<HealthResponse>,
    pub app_info: Option<AppInfoResponse>,
    pub loading: bool,
    pub error: Option<String>,
}

impl HealthView {
    /// Enter the checking state. The previous result stays visible until the
    /// cycle settles; the previous error does not.
    pub fn begin_check(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Run one check cycle to completion and return the settled view.
    ///
    /// App info is only fetched when the backend reports UP, and its failure
    /// is logged and swallowed. The error branch fires only when the API
    /// implementation itself fails, which the real client never does.
    pub async fn run_check(api: &impl BackendApi) -> Self {
        match api.check_health().await {
            Ok(health) => {
                let app_info = if health.is_up() {
                    match api.app_info().await {
                        Ok(info) => Some(info),
                        Err(error) => {
                            warn!("Could not fetch app info: {error}");
                            None
                        }
                    }
                } else {
                    None
                };

                Self {
                    health: Some(health),
                    app_info,
                    loading: false,
                    error: None,
                }
            }
            Err(error) => {
                warn!("Health check error: {error}");
                Self {
                    health: None,
                    app_info: None,
                    loading: false,
                    error: Some(CONNECT_FAILED.to_string()),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::collections::HashMap;

    use shared_http::api::{ApiError, STATUS_UP};

    use super::*;

    struct StubApi {
        health: Result<HealthResponse, ApiError>,
        info: Result<AppInfoResponse, ApiError>,
        info_calls: Cell<u32>,
    }

    impl StubApi {
        fn new(
            health: Result<HealthResponse, ApiError>,
            info: Result<AppInfoResponse, ApiError>,
        ) -> Self {
            Self {
                health,
                info,
                info_calls: Cell::new(0),
            }
        }
    }

    impl BackendApi for StubApi {
        async fn check_health(&self) -> Result<HealthResponse, ApiError> {
            self.health.clone()
        }

        async fn app_info(&self) -> Result<AppInfoResponse, ApiError> {
            self.info_calls.set(self.info_calls.get() + 1);
            self.info.clone()
        }
    }

    fn up() -> HealthResponse {
        HealthResponse {
            status: STATUS_UP.to_string(),
            timestamp: Some("2026-01-01T00:00:00Z".to_string()),
            checks: HashMap::new(),
        }
    }

    fn lib_info() -> AppInfoResponse {
        AppInfoResponse {
            name: "Lib".to_string(),
            version: "1.0".to_string(),
            description: None,
            environment: None,
        }
    }

    #[tokio::test]
    async fn test_up_backend_attaches_app_info() {
        let api = StubApi::new(Ok(up()), Ok(lib_info()));

        let view = HealthView::run_check(&api).await;
        assert_eq!(view.health.as_ref().unwrap().status, STATUS_UP);
        let info = view.app_info.unwrap();
        assert_eq!(info.name, "Lib");
        assert_eq!(info.version, "1.0");
        assert!(!view.loading);
        assert_eq!(view.error, None);
    }

    #[tokio::test]
    async fn test_app_info_failure_is_swallowed() {
        let api = StubApi::new(Ok(up()), Err(ApiError::new("boom", Some(500))));

        let view = HealthView::run_check(&api).await;
        assert_eq!(view.health.as_ref().unwrap().status, STATUS_UP);
        assert_eq!(view.app_info, None);
        assert_eq!(view.error, None);
        assert!(!view.loading);
    }

    #[tokio::test]
    async fn test_down_backend_skips_the_app_info_call() {
        let api = StubApi::new(Ok(HealthResponse::down_now()), Ok(lib_info()));

        let view = HealthView::run_check(&api).await;
        assert!(!view.health.unwrap().is_up());
        assert_eq!(view.app_info, None);
        assert_eq!(api.info_calls.get(), 0);
    }

    #[tokio::test]
    async fn test_unexpected_health_error_sets_the_connect_message() {
        let api = StubApi::new(Err(ApiError::new("socket closed", None)), Ok(lib_info()));

        let view = HealthView::run_check(&api).await;
        assert_eq!(view.health, None);
        assert_eq!(view.app_info, None);
        assert_eq!(view.error.as_deref(), Some(CONNECT_FAILED));
        assert!(!view.loading);
        assert_eq!(api.info_calls.get(), 0);
    }

    #[tokio::test]
    async fn test_begin_check_clears_error_and_keeps_the_last_result() {
        let api = StubApi::new(Ok(up()), Ok(lib_info()));
        let mut view = HealthView::run_check(&api).await;
        view.error = Some("stale".to_string());

        view.begin_check();
        assert!(view.loading);
        assert_eq!(view.error, None);
        assert!(view.health.is_some());
    }
}
