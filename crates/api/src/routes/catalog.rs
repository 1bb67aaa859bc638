use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/sports", get(handlers::catalog::list_sports))
        .route("/api/time-slots", get(handlers::catalog::list_time_slots))
        .route("/api/debug", get(handlers::catalog::debug_data))
        .route(
            "/api/create-sample-data",
            post(handlers::catalog::create_sample_data),
        )
}
