use axum::{http::{StatusCode, Uri}, Json};
use crate::models::ErrorResponse;
use tracing::warn;

/// JSON 404 for any path without a route
pub async fn not_found(uri: Uri) -> (StatusCode, Json<ErrorResponse>) {
    warn!("No route for {}", uri.path());
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::new(
            StatusCode::NOT_FOUND,
            format!("No route for {}", uri.path()),
        )),
    )
}
