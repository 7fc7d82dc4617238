//! HTTP API: shared state, routes, handlers, and wire models.

pub mod handlers;
pub mod models;
pub mod routes;

use std::sync::Arc;

use calc_remote::FallbackEvaluator;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Upstream delegation with local fallback; `None` evaluates locally.
    pub upstream: Option<Arc<FallbackEvaluator>>,
}

impl AppState {
    pub fn new(upstream: Option<FallbackEvaluator>) -> Self {
        Self {
            upstream: upstream.map(Arc::new),
        }
    }

    /// State that evaluates everything locally.
    pub fn local() -> Self {
        Self::new(None)
    }
}
