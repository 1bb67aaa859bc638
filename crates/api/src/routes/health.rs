use axum::{routing::get, Json, Router};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;

use crate::ApiState;

#[derive(Serialize)]
struct HealthResponse {
    status: String,
}

#[derive(Serialize)]
struct VersionResponse {
    version: String,
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse {
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Root endpoint with the service name and endpoint map.
async fn api_info() -> Json<serde_json::Value> {
    Json(json!({
        "message": "Sports Facility Booking API",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "active",
        "endpoints": {
            "court_status": "/api/court-status",
            "update_booking": "/api/update-booking",
            "sports_list": "/api/sports",
            "time_slots": "/api/time-slots",
            "debug": "/api/debug",
            "create_sample_data": "/api/create-sample-data",
        }
    }))
}

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/", get(api_info))
        .route("/health", get(health_check))
        .route("/version", get(version))
}
