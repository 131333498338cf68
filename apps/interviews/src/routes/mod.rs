pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::interviews::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/", get(handlers::handle_home))
        .route("/submit", post(handlers::handle_submit))
        .with_state(state)
}
