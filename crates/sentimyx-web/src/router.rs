//! Axum router — maps all URL paths to handlers.

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::CorsLayer,
    trace::TraceLayer,
};
use std::sync::Arc;
use crate::state::{AppState, SharedState};
use crate::handlers::{
    system::{root, health, docs},
    sentiment::sentiment,
};

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let shared: SharedState = Arc::new(state);

    Router::new()
        .route("/",          get(root))
        .route("/health",    get(health))
        .route("/docs",      get(docs))
        .route("/sentiment", post(sentiment))

        // Middleware. Any origin, method and header, with credentials:
        // the origin is mirrored since `*` cannot carry credentials.
        .layer(CorsLayer::very_permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}
