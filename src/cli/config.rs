//! Configuration file
//!
//! A JSON object; every field is optional:
//!
//! ```json
//! {
//!   "data_file": "papers_processed.csv",
//!   "host": "0.0.0.0",
//!   "port": 5000,
//!   "cors_origins": [],
//!   "page_size": 20,
//!   "fallback_to_sample": false
//! }
//! ```
//!
//! Precedence, lowest first: defaults, config file, `PORT` environment
//! variable, command-line flags.

use std::env;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::http_server::config::{default_host, default_port};
use crate::http_server::HttpServerConfig;
use crate::query::DEFAULT_PAGE_SIZE;

use super::errors::{CliError, CliResult};

/// Environment variable that overrides the configured port
pub const PORT_ENV: &str = "PORT";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// CSV file with the records. Without one, only the sample dataset is
    /// available.
    #[serde(default)]
    pub data_file: Option<String>,

    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Empty allows any origin
    #[serde(default)]
    pub cors_origins: Vec<String>,

    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Serve the sample dataset when the data file cannot be loaded
    #[serde(default)]
    pub fallback_to_sample: bool,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: None,
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
            page_size: default_page_size(),
            fallback_to_sample: false,
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> CliResult<Self> {
        let config: Config = serde_json::from_str(content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Loads `path` when given, defaults otherwise
    pub fn resolve(path: Option<&Path>) -> CliResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> CliResult<()> {
        if self.page_size == 0 {
            return Err(CliError::config_error("page_size must be > 0"));
        }

        if self.host.trim().is_empty() {
            return Err(CliError::config_error("host must not be empty"));
        }

        if let Some(data_file) = &self.data_file {
            if data_file.trim().is_empty() {
                return Err(CliError::config_error("data_file must not be empty when set"));
            }
        }

        Ok(())
    }

    /// Applies the `PORT` environment variable, if set
    pub fn apply_env(&mut self) -> CliResult<()> {
        self.apply_port_override(env::var(PORT_ENV).ok())
    }

    /// Replaces the port with `value` when present
    pub fn apply_port_override(&mut self, value: Option<String>) -> CliResult<()> {
        if let Some(raw) = value {
            self.port = raw.trim().parse().map_err(|_| {
                CliError::config_error(format!("Invalid {}: '{}' is not a port number", PORT_ENV, raw))
            })?;
        }
        Ok(())
    }

    /// Get data file as Path
    pub fn data_path(&self) -> Option<&Path> {
        self.data_file.as_deref().map(Path::new)
    }

    pub fn http_config(&self) -> HttpServerConfig {
        HttpServerConfig {
            host: self.host.clone(),
            port: self.port,
            cors_origins: self.cors_origins.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::from_json("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.port, 5000);
        assert_eq!(config.page_size, 20);
        assert!(!config.fallback_to_sample);
        assert!(config.data_path().is_none());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"data_file": "papers.csv", "port": 8081, "fallback_to_sample": true}}"#
        )
        .unwrap();

        let config = Config::resolve(Some(file.path())).unwrap();
        assert_eq!(config.data_path(), Some(Path::new("papers.csv")));
        assert_eq!(config.port, 8081);
        assert!(config.fallback_to_sample);
        assert_eq!(config.http_config().socket_addr(), "0.0.0.0:8081");
    }

    #[test]
    fn test_invalid_config() {
        assert!(Config::from_json(r#"{"page_size": 0}"#).is_err());
        assert!(Config::from_json(r#"{"host": " "}"#).is_err());
        assert!(Config::from_json(r#"{"data_file": ""}"#).is_err());
        assert!(Config::from_json("not json").is_err());
        assert!(Config::resolve(Some(Path::new("/nonexistent/archive.json"))).is_err());
    }

    #[test]
    fn test_port_override() {
        let mut config = Config::default();
        config.apply_port_override(None).unwrap();
        assert_eq!(config.port, 5000);

        config.apply_port_override(Some("7000".to_string())).unwrap();
        assert_eq!(config.port, 7000);

        let err = config.apply_port_override(Some("http".to_string())).unwrap_err();
        assert_eq!(err.code_str(), "ARCHIVE_CLI_CONFIG_ERROR");
    }
}
