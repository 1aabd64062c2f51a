//! Build-time Configuration
//!
//! API base URL and log level, read from the environment at compile time
//! (`TODOS_API_BASE`, `TODOS_LOG_LEVEL`).

use std::str::FromStr;

use log::LevelFilter;
use thiserror::Error;

pub const DEFAULT_API_BASE: &str = "https://jsonplaceholder.typicode.com";

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Invalid API base URL {0:?}: expected an http:// or https:// URL")]
    InvalidBaseUrl(String),
    #[error("Invalid log level {0:?}")]
    InvalidLogLevel(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL without trailing slash
    pub api_base: String,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            log_level: LevelFilter::Info,
        }
    }
}

impl AppConfig {
    /// Configuration baked in when the WASM bundle was built
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_values(option_env!("TODOS_API_BASE"), option_env!("TODOS_LOG_LEVEL"))
    }

    /// Missing or blank values use the defaults
    pub fn from_values(api_base: Option<&str>, log_level: Option<&str>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let api_base = match api_base.map(str::trim).filter(|v| !v.is_empty()) {
            Some(raw) => parse_base_url(raw)?,
            None => defaults.api_base,
        };

        let log_level = match log_level.map(str::trim).filter(|v| !v.is_empty()) {
            Some(raw) => LevelFilter::from_str(raw)
                .map_err(|_| ConfigError::InvalidLogLevel(raw.to_string()))?,
            None => defaults.log_level,
        };

        Ok(Self { api_base, log_level })
    }
}

fn parse_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim_end_matches('/');
    let host = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"));

    match host {
        Some(rest) if !rest.is_empty() => Ok(trimmed.to_string()),
        _ => Err(ConfigError::InvalidBaseUrl(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_values(None, None).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.api_base, "https://jsonplaceholder.typicode.com");
    }

    #[test]
    fn test_blank_values_use_defaults() {
        let config = AppConfig::from_values(Some("  "), Some("")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = AppConfig::from_values(Some("http://localhost:3000/"), None).unwrap();
        assert_eq!(config.api_base, "http://localhost:3000");
    }

    #[test]
    fn test_rejects_non_http_base() {
        let err = AppConfig::from_values(Some("ftp://example.com"), None).unwrap_err();
        assert_eq!(err, ConfigError::InvalidBaseUrl("ftp://example.com".to_string()));

        assert!(AppConfig::from_values(Some("https://"), None).is_err());
    }

    #[test]
    fn test_log_level_parsing() {
        let config = AppConfig::from_values(None, Some("DEBUG")).unwrap();
        assert_eq!(config.log_level, LevelFilter::Debug);

        let err = AppConfig::from_values(None, Some("loud")).unwrap_err();
        assert_eq!(err, ConfigError::InvalidLogLevel("loud".to_string()));
    }
}
