use dioxus::prelude::*;

use crate::api::ApiClient;
use crate::config::Config;
use crate::health::HealthView;
use crate::widgets::health_card::HealthCard;

/// Kick off one health-check cycle. Cycles already in flight keep running;
/// whichever settles last wins the displayed state.
fn start_check(mut view: Signal<HealthView>, api: ApiClient) {
    view.write().begin_check();
    spawn(async move {
        let settled = HealthView::run_check(&api).await;
        view.set(settled);
    });
}

#[component]
pub fn Dashboard() -> Element {
    let api = use_context::<ApiClient>();
    let config = use_context::<Config>();
    let view = use_signal(HealthView::default);

    // First check on mount; later cycles come from the refresh button.
    let mount_api = api.clone();
    use_effect(move || start_check(view, mount_api.clone()));

    let environment = config.environment_name();
    let current = view();

    rsx! {
        div { class: "dashboard",
            div { class: "dashboard-container",
                h1 { "School Library Admin" }
                p { class: "subtitle", "Backend monitoring ({environment})" }
                if config.is_mock() {
                    p { class: "mock-note", "Running against the local mock backend." }
                }

                HealthCard {
                    health: current.health,
                    app_info: current.app_info,
                    loading: current.loading,
                    error: current.error,
                    on_refresh: move |_| start_check(view, api.clone()),
                }

                div { class: "info-card",
                    h3 { "Quick Start" }
                    ul {
                        li {
                            "Backend API: "
                            code { "{config.api_base_url}" }
                        }
                        li {
                            "Health Endpoint: "
                            code { "GET /health" }
                        }
                        li {
                            "App Info Endpoint: "
                            code { "GET /api/v1/app/info" }
                        }
                    }
                }
            }
        }
    }
}
