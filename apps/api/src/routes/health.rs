use axum::Json;
use serde_json::{json, Value};

/// GET /health
/// Returns a simple status object with service version.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": env!("CARGO_PKG_NAME")
    }))
}

/// GET /api/
pub async fn liveness_handler() -> Json<Value> {
    Json(json!({
        "message": "AI Resume Insight & Job Matcher API"
    }))
}
