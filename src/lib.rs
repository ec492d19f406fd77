pub mod config;
pub mod docs;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod state;

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use config::Config;
use docs::ApiDoc;
use handlers::not_found;
use routes::{cors_layer, create_api_routes};
use state::AppState;

/// Build the full application router for the given configuration.
///
/// The API lives under `/api`, Swagger UI under `/swagger`, and any other
/// path answers with a JSON 404.
pub fn build_app(config: &Config) -> Router {
    let state = Arc::new(AppState::from_config(config));

    Router::new()
        // Mount API routes
        .nest("/api", create_api_routes(state))
        // Mount Swagger UI
        .merge(SwaggerUi::new("/swagger").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback(not_found)
        .layer(cors_layer(&config.allowed_origins()))
        // Add tracing layer
        .layer(TraceLayer::new_for_http())
}
