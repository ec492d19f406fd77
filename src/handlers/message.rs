use axum::{extract::State, Json};
use crate::{models::MessageResponse, state::SharedState};
use tracing::debug;

/// Message endpoint
pub async fn get_message(State(state): State<SharedState>) -> Json<MessageResponse> {
    debug!(service = %state.service_name, "Message requested");
    Json(MessageResponse {
        message: state.message.clone(),
    })
}
