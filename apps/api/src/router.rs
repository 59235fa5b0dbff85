use std::sync::Arc;

use axum::{routing::get, Router};

use booking_cell::router::booking_routes;
use directory_cell::router::directory_routes;
use shared_config::AppConfig;

pub fn create_router(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/", get(|| async { "Clinic booking gateway is running!" }))
        .nest("/directory", directory_routes(state.clone()))
        .nest("/appointments", booking_routes(state))
}
