//! Application configuration module
//!
//! Provides the configuration types read at startup: the remote API base URL
//! and the base path the app's routes are exposed under.

use reqwest::Url;
use thiserror::Error;

/// Base path used when none is configured
pub const DEFAULT_BASE_PATH: &str = "/";

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Root address all API requests resolve against
    pub api_url: Url,
    /// Prefix for browser-visible route paths, always starts and ends with `/`
    pub base_path: String,
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_url.cannot_be_a_base() {
            return Err(ConfigError::InvalidUrl(self.api_url.to_string()));
        }
        if !self.base_path.starts_with('/') || !self.base_path.ends_with('/') {
            return Err(ConfigError::InvalidBasePath(self.base_path.clone()));
        }
        Ok(())
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    api_url: Option<String>,
    base_path: Option<String>,
}

impl AppConfigBuilder {
    /// Set the API base URL
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = Some(url.into());
        self
    }

    /// Set the route base path
    pub fn base_path(mut self, path: impl Into<String>) -> Self {
        self.base_path = Some(path.into());
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let raw = self
            .api_url
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::MissingValue("api_url"))?;
        let api_url = Url::parse(raw.trim()).map_err(|_| ConfigError::InvalidUrl(raw.clone()))?;

        let config = AppConfig {
            api_url,
            base_path: normalize_base_path(self.base_path.as_deref().unwrap_or(DEFAULT_BASE_PATH)),
        };
        config.validate()?;
        Ok(config)
    }
}

/// `app` and `/app` both become `/app/`; empty becomes `/`.
pub fn normalize_base_path(path: &str) -> String {
    let trimmed = path.trim().trim_matches('/');
    if trimmed.is_empty() {
        DEFAULT_BASE_PATH.to_string()
    } else {
        format!("/{}/", trimmed)
    }
}

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("invalid base path: {0}")]
    InvalidBasePath(String),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_with_api_url() {
        let config = AppConfig::builder()
            .api_url("https://api.example.com")
            .build()
            .unwrap();
        assert_eq!(config.api_url.as_str(), "https://api.example.com/");
        assert_eq!(config.base_path, "/");
    }

    #[test]
    fn test_missing_api_url() {
        let err = AppConfig::builder().build().unwrap_err();
        assert_eq!(err, ConfigError::MissingValue("api_url"));

        let err = AppConfig::builder().api_url("   ").build().unwrap_err();
        assert_eq!(err, ConfigError::MissingValue("api_url"));
    }

    #[test]
    fn test_invalid_api_url() {
        let err = AppConfig::builder().api_url("not a url").build().unwrap_err();
        assert_eq!(err, ConfigError::InvalidUrl("not a url".to_string()));

        let err = AppConfig::builder().api_url("mailto:a@b.com").build().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl(_)));
    }

    #[test]
    fn test_base_path_normalized() {
        assert_eq!(normalize_base_path(""), "/");
        assert_eq!(normalize_base_path("/"), "/");
        assert_eq!(normalize_base_path("app"), "/app/");
        assert_eq!(normalize_base_path("/app"), "/app/");
        assert_eq!(normalize_base_path("/nested/app/"), "/nested/app/");
    }
}
