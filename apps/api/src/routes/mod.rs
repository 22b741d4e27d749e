pub mod health;
pub mod index;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::generation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index::index_handler))
        .route("/health", get(health::health_handler))
        // Generation API
        .route(
            "/api/generate",
            post(handlers::handle_generate).fallback(handlers::handle_method_not_allowed),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
