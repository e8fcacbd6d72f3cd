use axum::Json;
use chrono::Utc;
use serde_json::{json, Value};

/// Service banner; no auth required.
pub async fn index() -> Json<Value> {
    Json(json!({
        "message": "Freight Loadboard API",
        "version": "1.0.0",
        "endpoints": {
            "loads": "GET /api/loads - Find best available load (auth required)",
            "book": "POST /api/loads/:load_id/book - Book a load (auth required)",
            "analytics": "POST /api/analytics - Log a search/booking event (auth required)"
        },
        "authentication": "Include X-API-Key or Authorization header with your API key"
    }))
}

/// Health check; no auth required.
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339()
    }))
}
