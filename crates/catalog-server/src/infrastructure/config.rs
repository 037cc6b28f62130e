//! Configuration loading for the catalog server
//!
//! A JSON file supplies the base settings; environment variables
//! (`HOST`, `PORT`, `FEED_BASE_URL`, `FEED_TIMEOUT_MS`, `SEED_DEMO_DATA`)
//! override individual fields afterwards.

use catalog_feed::{DEFAULT_BASE_URL, FeedConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {error}")]
    Io { path: String, error: String },
    #[error("Failed to parse config: {0}")]
    Parse(String),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Root configuration for the catalog server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub feed: FeedSettings,

    /// Create the demo categories and products on startup
    #[serde(default = "default_seed")]
    pub seed_demo_data: bool,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// External feed connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_ms() -> u64 {
    5000
}

fn default_seed() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for FeedSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl FeedSettings {
    pub fn to_feed_config(&self) -> FeedConfig {
        FeedConfig {
            base_url: self.base_url.clone(),
            timeout: Duration::from_millis(self.timeout_ms),
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            feed: FeedSettings::default(),
            seed_demo_data: default_seed(),
        }
    }
}

impl ServiceConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            error: e.to_string(),
        })?;

        Self::from_json(&content)
    }

    /// Parse configuration from JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply overrides from the process environment
    pub fn with_env_overrides(self) -> Result<Self, ConfigError> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from any key lookup
    pub fn with_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(host) = lookup("HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.server.port = parse_var("PORT", &port)?;
        }
        if let Some(url) = lookup("FEED_BASE_URL") {
            self.feed.base_url = url;
        }
        if let Some(timeout) = lookup("FEED_TIMEOUT_MS") {
            self.feed.timeout_ms = parse_var("FEED_TIMEOUT_MS", &timeout)?;
        }
        if let Some(seed) = lookup("SEED_DEMO_DATA") {
            self.seed_demo_data = parse_var("SEED_DEMO_DATA", &seed)?;
        }
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.feed.base_url.trim().is_empty() {
            return Err(ConfigError::Invalid("feed.base_url must not be empty".into()));
        }
        if self.feed.timeout_ms == 0 {
            return Err(ConfigError::Invalid(
                "feed.timeout_ms must be greater than zero".into(),
            ));
        }
        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn parse_var<T: std::str::FromStr>(key: &str, raw: &str) -> Result<T, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::Invalid(format!("{} has an invalid value: {}", key, raw)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_parse_minimal_config() {
        let config = ServiceConfig::from_json("{}").unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.feed.base_url, "https://fakestoreapi.com");
        assert_eq!(config.feed.timeout_ms, 5000);
        assert!(config.seed_demo_data);
    }

    #[test]
    fn test_parse_full_config() {
        let json = r#"{
            "server": { "host": "127.0.0.1", "port": 9000 },
            "feed": { "base_url": "http://localhost:3000", "timeout_ms": 250 },
            "seed_demo_data": false
        }"#;

        let config = ServiceConfig::from_json(json).unwrap();
        assert_eq!(config.bind_address(), "127.0.0.1:9000");
        assert!(!config.seed_demo_data);

        let feed = config.feed.to_feed_config();
        assert_eq!(feed.timeout, Duration::from_millis(250));
        assert_eq!(feed.base_url, "http://localhost:3000");
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = ServiceConfig::from_json("{ server: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = ServiceConfig::from_file("/nonexistent/catalog.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_overrides_replace_file_values() {
        let vars: HashMap<&str, &str> = [
            ("PORT", "9100"),
            ("FEED_BASE_URL", "http://feed.local"),
            ("SEED_DEMO_DATA", "false"),
        ]
        .into_iter()
        .collect();

        let config = ServiceConfig::default()
            .with_overrides(|key| vars.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9100);
        assert_eq!(config.feed.base_url, "http://feed.local");
        assert!(!config.seed_demo_data);
    }

    #[test]
    fn test_bad_override_is_rejected() {
        let err = ServiceConfig::default()
            .with_overrides(|key| (key == "PORT").then(|| "eighty".to_string()))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_validate() {
        let mut config = ServiceConfig::default();
        assert!(config.validate().is_ok());

        config.feed.timeout_ms = 0;
        assert!(config.validate().is_err());

        config.feed.timeout_ms = 100;
        config.feed.base_url = "  ".into();
        assert!(config.validate().is_err());
    }
}
