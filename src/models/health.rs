use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Status reported while the service can answer requests
pub const HEALTHY: &str = "healthy";

/// API response for health check
#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "healthy")]
    pub status: String,
    pub message: String,
}
