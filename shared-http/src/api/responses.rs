use std::collections::HashMap;

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Status reported by a reachable, healthy backend.
pub const STATUS_UP: &str = "UP";

/// Status reported (or synthesized client-side) when the backend is not
/// serving traffic.
pub const STATUS_DOWN: &str = "DOWN";

/// Response body of `GET /health`.
///
/// The status string is carried verbatim; it is not validated against a
/// closed set, so a backend that starts reporting new states keeps working.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    /// Per-component detail the backend may attach (database, keycloak, ...).
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub checks: HashMap<String, String>,
}

impl HealthResponse {
    /// Healthy payload, stamped with the current time.
    pub fn up_now() -> Self {
        Self {
            status: STATUS_UP.to_string(),
            timestamp: Some(Utc::now().to_rfc3339()),
            checks: HashMap::new(),
        }
    }

    /// Fail-safe payload used when the health call itself fails. Callers of
    /// the health check receive this instead of an error.
    pub fn down_now() -> Self {
        Self {
            status: STATUS_DOWN.to_string(),
            timestamp: Some(Utc::now().to_rfc3339()),
            checks: HashMap::new(),
        }
    }

    pub fn is_up(&self) -> bool {
        self.status == STATUS_UP
    }
}

/// Response body of `GET /api/v1/app/info`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppInfoResponse {
    pub name: String,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_down_now_is_fully_populated() {
        let health = HealthResponse::down_now();
        assert_eq!(health.status, STATUS_DOWN);
        assert!(!health.is_up());
        assert!(!health.timestamp.unwrap().is_empty());
    }

    #[test]
    fn test_health_accepts_unrecognized_status() {
        let health: HealthResponse =
            serde_json::from_str(r#"{"status":"DEGRADED"}"#).unwrap();
        assert_eq!(health.status, "DEGRADED");
        assert_eq!(health.timestamp, None);
        assert!(health.checks.is_empty());
    }

    #[test]
    fn test_health_carries_component_checks() {
        let health: HealthResponse = serde_json::from_str(
            r#"{"status":"UP","timestamp":"2026-01-01T00:00:00Z","checks":{"database":"UP"}}"#,
        )
        .unwrap();
        assert!(health.is_up());
        assert_eq!(health.checks.get("database").map(String::as_str), Some("UP"));
    }

    #[test]
    fn test_empty_checks_are_omitted_on_the_wire() {
        let body = serde_json::to_string(&HealthResponse::up_now()).unwrap();
        assert!(!body.contains("checks"));
    }

    #[test]
    fn test_app_info_optionals_default_to_none() {
        let info: AppInfoResponse =
            serde_json::from_str(r#"{"name":"Lib","version":"1.0"}"#).unwrap();
        assert_eq!(info.name, "Lib");
        assert_eq!(info.version, "1.0");
        assert_eq!(info.description, None);
        assert_eq!(info.environment, None);
    }
}
