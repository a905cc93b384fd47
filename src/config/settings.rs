//! Service settings structure
//!
//! Defines the settings structure and loading logic for the service.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main settings for the configuration service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Server configuration
    #[serde(default)]
    pub server: ServerSettings,
    /// Storage configuration
    #[serde(default)]
    pub storage: StorageSettings,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Server host address
    pub host: String,
    /// Server port
    pub port: u16,
}

/// Durable storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageSettings {
    /// Path of the JSON file holding the college configuration
    pub path: PathBuf,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log level
    pub level: String,
    /// Enable verbose logging
    pub verbose: bool,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "::".to_string(),
            port: 5000,
        }
    }
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from("data/college_config.json"),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            verbose: false,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerSettings::default(),
            storage: StorageSettings::default(),
            logging: LoggingSettings::default(),
        }
    }
}

impl Settings {
    /// Create new settings with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load settings from environment variables
    pub fn from_env() -> crate::Result<Self> {
        Self::default().merge_with_env()
    }

    /// Load settings from a TOML file
    pub fn from_file(path: &Path) -> crate::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| crate::Error::Config(format!("reading settings file: {}", e)))?;
        toml::from_str(&contents)
            .map_err(|e| crate::Error::Config(format!("parsing settings file: {}", e)))
    }

    /// Apply environment variable overrides to these settings
    pub fn merge_with_env(mut self) -> crate::Result<Self> {
        if let Ok(host) = std::env::var("CONFIG_SERVER_HOST") {
            self.server.host = host;
        }

        if let Ok(port) = std::env::var("CONFIG_SERVER_PORT") {
            self.server.port = port
                .parse()
                .map_err(|e| crate::Error::Config(format!("Invalid port: {}", e)))?;
        }

        if let Ok(path) = std::env::var("CONFIG_STORE_PATH") {
            self.storage.path = PathBuf::from(path);
        }

        Ok(self)
    }

    /// Validate the final settings
    pub fn validate(&self) -> crate::Result<()> {
        if self.server.port == 0 {
            return Err(crate::Error::Config("Port must be non-zero".to_string()));
        }
        if self.storage.path.as_os_str().is_empty() {
            return Err(crate::Error::Config(
                "Storage path must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
