use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Transport-agnostic error produced at the HTTP client boundary.
///
/// The underlying client error never crosses this boundary: its message and
/// HTTP status (when a response was received) are captured here, together
/// with the capture time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[error("backend request failed: {message}")]
pub struct ApiError {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    /// RFC 3339 timestamp taken when the error was normalized.
    pub timestamp: String,
}

impl ApiError {
    pub fn new(message: impl Into<String>, status: Option<u16>) -> Self {
        Self {
            message: message.into(),
            status,
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}
