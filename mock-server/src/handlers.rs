use axum::Json;

use shared_http::api::{AppInfoResponse, HealthResponse};

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    let mut health = HealthResponse::up_now();
    health.checks.insert("database".to_string(), "UP".to_string());
    health.checks.insert("keycloak".to_string(), "UP".to_string());
    Json(health)
}

/// GET /api/v1/app/info
pub async fn app_info() -> Json<AppInfoResponse> {
    Json(AppInfoResponse {
        name: "Digital School Library".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        description: Some("Mock backend for the admin dashboard".to_string()),
        environment: Some("mock".to_string()),
    })
}
