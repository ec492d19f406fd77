use serde::{Deserialize, Serialize};

/// Text served by `GET /api/message` when nothing else is configured
pub const DEFAULT_MESSAGE: &str = "You've successfully integrated the backend!";

/// Origin of the frontend dev server
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

/// Application configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Environment (dev, staging, prod)
    #[serde(default = "default_environment")]
    pub environment: String,

    /// CORS allowed origins, comma separated
    pub cors_origins: Option<String>,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default = "default_service_name")]
    pub service_name: String,

    /// Override for the message endpoint text
    pub message: Option<String>,
}

impl Config {
    /// Load configuration from environment variables or app.env file
    pub fn load() -> Result<Self, ConfigError> {
        // Try to load from app.env file first
        if std::path::Path::new("app.env").exists() {
            dotenvy::from_filename("app.env").ok();
        } else {
            // Fallback to .env file
            dotenvy::dotenv().ok();
        }

        // Runs before tracing is initialised, so the caller reports the outcome
        envy::from_env::<Config>().map_err(ConfigError::EnvError)
    }

    /// Build a configuration from explicit key/value pairs
    pub fn from_pairs<I>(pairs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter::<_, Config>(pairs).map_err(ConfigError::EnvError)
    }

    /// Get the full server address
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Check if running in production mode
    pub fn is_production(&self) -> bool {
        self.environment.to_lowercase() == "prod" || self.environment.to_lowercase() == "production"
    }

    /// Origins the CORS layer should accept. `["*"]` means any origin.
    /// An unset or blank `CORS_ORIGINS` falls back to the frontend origin.
    pub fn allowed_origins(&self) -> Vec<String> {
        let origins: Vec<String> = self
            .cors_origins
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(|o| o.trim())
            .filter(|o| !o.is_empty())
            .map(str::to_string)
            .collect();

        if origins.is_empty() {
            vec![DEFAULT_CORS_ORIGIN.to_string()]
        } else {
            origins
        }
    }

    /// Default tracing filter directives, applied when `RUST_LOG` is unset
    pub fn log_filter(&self) -> String {
        let level = self.log_level.trim().to_lowercase();
        format!(
            "devops_backend={level},tower_http={level},axum::rejection=trace,info"
        )
    }

    /// Text for the message endpoint, never empty
    pub fn message_text(&self) -> String {
        match self.message.as_deref().map(str::trim) {
            Some(m) if !m.is_empty() => m.to_string(),
            _ => DEFAULT_MESSAGE.to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            environment: default_environment(),
            log_level: default_log_level(),
            cors_origins: None,
            service_name: default_service_name(),
            message: None,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    EnvError(envy::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::EnvError(e) => write!(f, "Environment variable error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_service_name() -> String {
    "devops-backend".to_string()
}

fn default_environment() -> String {
    "development".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn empty_env_uses_defaults() {
        let config = Config::from_pairs(Vec::new()).unwrap();
        assert_eq!(config.server_address(), "0.0.0.0:8000");
        assert_eq!(config.service_name, "devops-backend");
        assert!(!config.is_production());
        assert_eq!(config.allowed_origins(), vec!["http://localhost:3000"]);
        assert_eq!(config.message_text(), DEFAULT_MESSAGE);
    }

    #[test]
    fn env_pairs_override_defaults() {
        let config = Config::from_pairs(pairs(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "9090"),
            ("ENVIRONMENT", "Production"),
            ("CORS_ORIGINS", "http://a.test, ,http://b.test"),
            ("MESSAGE", "hello"),
        ]))
        .unwrap();
        assert_eq!(config.server_address(), "127.0.0.1:9090");
        assert!(config.is_production());
        assert_eq!(config.allowed_origins(), vec!["http://a.test", "http://b.test"]);
        assert_eq!(config.message_text(), "hello");
    }

    #[test]
    fn blank_message_falls_back_to_default() {
        let config = Config::from_pairs(pairs(&[("MESSAGE", "   ")])).unwrap();
        assert_eq!(config.message_text(), DEFAULT_MESSAGE);
    }

    #[test]
    fn blank_cors_origins_fall_back_to_frontend() {
        let config = Config::from_pairs(pairs(&[("CORS_ORIGINS", " , ")])).unwrap();
        assert_eq!(config.allowed_origins(), vec!["http://localhost:3000"]);

        let config = Config::from_pairs(pairs(&[("CORS_ORIGINS", "")])).unwrap();
        assert_eq!(config.allowed_origins(), vec!["http://localhost:3000"]);
    }

    #[test]
    fn log_level_drives_default_filter() {
        let config = Config::default();
        assert_eq!(
            config.log_filter(),
            "devops_backend=info,tower_http=info,axum::rejection=trace,info"
        );

        let config = Config::from_pairs(pairs(&[("LOG_LEVEL", "DEBUG")])).unwrap();
        assert_eq!(
            config.log_filter(),
            "devops_backend=debug,tower_http=debug,axum::rejection=trace,info"
        );
    }

    #[test]
    fn bad_port_is_an_error() {
        let err = Config::from_pairs(pairs(&[("PORT", "not-a-port")])).unwrap_err();
        assert!(err.to_string().starts_with("Environment variable error"));
    }
}
