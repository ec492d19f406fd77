//! Shared application state.

use std::sync::Arc;

use crate::config::Config;

/// Read-only state handed to request handlers via Axum's `State` extractor.
pub struct AppState {
    /// Text returned by `GET /api/message`.
    pub message: String,
    /// Name reported in log lines.
    pub service_name: String,
}

impl AppState {
    pub fn from_config(config: &Config) -> Self {
        Self {
            message: config.message_text(),
            service_name: config.service_name.clone(),
        }
    }
}

/// Thread-safe alias for `AppState`.
pub type SharedState = Arc<AppState>;
