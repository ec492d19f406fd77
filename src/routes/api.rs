use crate::{handlers::{get_message, health_check, ready_check}, state::SharedState};
use axum::{routing::get, Router};

/// Create API routes
pub fn create_api_routes(state: SharedState) -> Router {
    Router::<SharedState>::new()
        .route("/health", get(health_check))
        .route("/ready", get(ready_check))
        .route("/message", get(get_message))
        .with_state(state)
}
