pub mod health;
pub mod invoke;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

/// Local development surface. In Lambda the runtime loop replaces this.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/invoke", post(invoke::handle_invoke))
        .with_state(state)
}
