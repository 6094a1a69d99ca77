//! Liveness and placeholder handlers.

use axum::Json;

/// Root endpoint, basic liveness check.
///
/// `GET /`
pub async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "Toric Scope API is running" }))
}

/// Health check endpoint.
///
/// `GET /api/health`
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "toric-scope-api"
    }))
}

/// Placeholder for future toric variety operations. Static response, not
/// backed by storage.
///
/// `GET /api/varieties`
pub async fn varieties() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "varieties": [],
        "message": "Toric variety endpoints coming soon"
    }))
}
