use crate::handlers;
use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::normalize_path::NormalizePathLayer;
use tower_http::trace::TraceLayer;

/// Build and configure the mock backend router
pub fn build_router() -> Router {
    Router::new()
        // Health check, at the root and under the API prefix
        .route("/health", get(handlers::health))
        .route("/api/v1/health", get(handlers::health))
        // Application info
        .route("/api/v1/app/info", get(handlers::app_info))
        // Middleware; CORS stays permissive, the dashboard runs on another origin
        .layer(NormalizePathLayer::trim_trailing_slash())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
