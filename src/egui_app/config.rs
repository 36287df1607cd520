use crate::shared::config::{AppConfig, AppConfigBuilder, ConfigError};

/// Environment variable holding the API base URL
pub const API_URL_VAR: &str = "AUTHPORTAL_API_URL";

/// Environment variable holding the route base path
pub const BASE_PATH_VAR: &str = "AUTHPORTAL_BASE_PATH";

/// Application configuration wrapper.
#[derive(Debug, Clone)]
pub struct Config {
    app: AppConfig,
}

impl Config {
    /// Read configuration from the process environment.
    ///
    /// Fails when no API URL is set.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut builder = AppConfig::builder();
        if let Ok(url) = std::env::var(API_URL_VAR) {
            builder = builder.api_url(url);
        }
        if let Ok(path) = std::env::var(BASE_PATH_VAR) {
            builder = builder.base_path(path);
        }
        Self::with_builder(builder)
    }

    pub fn with_builder(builder: AppConfigBuilder) -> Result<Self, ConfigError> {
        let app = builder.build()?;
        Ok(Self { app })
    }

    /// Get the full URL for an API endpoint
    ///
    /// Any path prefix on the base URL is kept: `https://host/api` and
    /// `/login` give `https://host/api/login`.
    pub fn api_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.server_url().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    pub fn server_url(&self) -> &str {
        self.app.api_url.as_str()
    }

    pub fn base_path(&self) -> &str {
        &self.app.base_path
    }
}
