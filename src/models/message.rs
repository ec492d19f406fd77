use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// API response for the message endpoint
#[derive(Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "You've successfully integrated the backend!")]
    pub message: String,
}
