//! Liveness endpoints.

use axum::Json;
use serde_json::{json, Value};

/// GET / - Banner for anyone hitting the bare host.
pub async fn root() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "app": "Pixel Pets Backend",
        "message": "Backend is running 🎉",
    }))
}

/// GET /api/health
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "UP" }))
}
