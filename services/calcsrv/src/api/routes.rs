//! API routes configuration

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::api::handlers::{calculate, health_check, list_operations};
use crate::api::AppState;

/// Create API routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/calculate", post(calculate))
        .route("/api/operations", get(list_operations))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
