use dioxus::prelude::*;

mod api;
mod config;
mod health;
mod pages;
mod widgets;

use api::ApiClient;
use config::Config;
use pages::Dashboard;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Dashboard {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    // Load environment variables from .env file (if exists)
    match dotenvy::dotenv() {
        Ok(_) => info!("Loaded environment variables from .env file"),
        Err(_) => info!("No .env file found, using system environment variables"),
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Composition point: resolve config once, build the one API client, and
    // hand both down through context.
    let config = Config::from_env();
    use_context_provider(|| ApiClient::new(&config));
    use_context_provider(|| config);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}

/// Unknown paths land on the dashboard.
#[component]
fn NotFound(segments: Vec<String>) -> Element {
    info!("Unknown route /{}", segments.join("/"));

    rsx! {
        Dashboard {}
    }
}
