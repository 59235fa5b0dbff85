use std::sync::Arc;

use axum::{routing::get, Router};

use shared_config::AppConfig;

use crate::handlers;

pub fn directory_routes(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/branches", get(handlers::list_branches))
        .route("/specialties", get(handlers::list_specialties))
        .route("/doctors", get(handlers::search_doctors))
        .with_state(state)
}
