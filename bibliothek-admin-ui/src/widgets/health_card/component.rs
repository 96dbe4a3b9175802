use chrono::{DateTime, NaiveDateTime};
use dioxus::prelude::*;
use shared_http::api::{AppInfoResponse, HealthResponse};

use crate::widgets::status_indicator::StatusIndicator;

/// Card showing the outcome of the last health-check cycle: a loading line,
/// an error line, or the settled result with optional app info. The refresh
/// button is always rendered and disabled while a check is running.
#[component]
pub fn HealthCard(
    health: Option<HealthResponse>,
    app_info: Option<AppInfoResponse>,
    loading: bool,
    error: Option<String>,
    on_refresh: EventHandler<MouseEvent>,
) -> Element {
    let checked_at = health
        .as_ref()
        .and_then(|health| health.timestamp.as_deref())
        .map(format_timestamp);

    rsx! {
        div { class: "health-card",
            h2 { "Backend Health Status" }

            if loading {
                p { class: "loading", "Checking backend status..." }
            }
            if let Some(message) = error {
                p { class: "error", "{message}" }
            }
            if !loading {
                if let Some(health) = health {
                    div { class: "status-info",
                        StatusIndicator { status: health.status.clone() }
                        if let Some(checked_at) = checked_at {
                            p { class: "timestamp", "Last checked: {checked_at}" }
                        }
                        if let Some(info) = app_info {
                            div { class: "app-info",
                                h3 { "Application Information" }
                                ul {
                                    li {
                                        strong { "Name: " }
                                        "{info.name}"
                                    }
                                    li {
                                        strong { "Version: " }
                                        "{info.version}"
                                    }
                                    if let Some(description) = &info.description {
                                        li {
                                            strong { "Description: " }
                                            "{description}"
                                        }
                                    }
                                    if let Some(environment) = &info.environment {
                                        li {
                                            strong { "Environment: " }
                                            "{environment}"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            button {
                class: "refresh-button",
                disabled: loading,
                onclick: move |event| on_refresh.call(event),
                if loading { "Checking..." } else { "Refresh Health Status" }
            }
        }
    }
}

/// Render a backend timestamp for display. The backend sends RFC 3339 or a
/// bare local date-time; anything else passes through untouched.
fn format_timestamp(raw: &str) -> String {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return timestamp.format("%Y-%m-%d %H:%M:%S").to_string();
    }
    if let Ok(timestamp) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return timestamp.format("%Y-%m-%d %H:%M:%S").to_string();
    }
    raw.to_string()
}
