use dioxus::prelude::*;
use shared_http::api::{STATUS_DOWN, STATUS_UP};
use strum_macros::Display;

/// Semantic color class for a backend status string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum StatusLevel {
    Success,
    Danger,
    Warning,
}

impl StatusLevel {
    /// Exact match on UP/DOWN; every other string renders as a warning.
    pub fn for_status(status: &str) -> Self {
        match status {
            STATUS_UP => StatusLevel::Success,
            STATUS_DOWN => StatusLevel::Danger,
            _ => StatusLevel::Warning,
        }
    }
}

/// Colored pill showing the raw status string.
#[component]
pub fn StatusIndicator(status: String) -> Element {
    let level = StatusLevel::for_status(&status);

    rsx! {
        span { class: "status-indicator {level}", "{status}" }
    }
}
