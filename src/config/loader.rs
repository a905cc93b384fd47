//! Settings loading utilities
//!
//! Provides helper functions for loading service settings from various
//! sources with proper error handling and validation.

use crate::{Result, config::Settings};
use std::path::Path;
use tracing::{debug, info, warn};

/// Settings loader with multiple source support
#[derive(Debug)]
pub struct ConfigLoader {
    /// Default settings
    defaults: Settings,
}

impl ConfigLoader {
    /// Create new settings loader
    pub fn new() -> Self {
        Self {
            defaults: Settings::default(),
        }
    }

    /// Load settings with precedence order:
    /// 1. Command line arguments (highest priority, applied by the caller)
    /// 2. Environment variables
    /// 3. Settings file
    /// 4. Default values (lowest priority)
    pub fn load(&self, settings_file: Option<&Path>) -> Result<Settings> {
        let mut settings = self.defaults.clone();

        // Load from settings file if provided
        if let Some(path) = settings_file {
            if path.exists() {
                info!("Loading settings from file: {:?}", path);
                settings = Settings::from_file(path)?;
            } else {
                warn!("Settings file not found: {:?}, using defaults", path);
            }
        }

        // Override with environment variables
        debug!("Applying environment variable overrides");
        settings = settings.merge_with_env()?;

        // Validate final settings
        settings.validate()?;

        info!("Settings loaded successfully");
        debug!("Final settings: {:?}", settings);

        Ok(settings)
    }

    /// Load settings from environment only
    pub fn from_env_only(&self) -> Result<Settings> {
        let settings = Settings::from_env()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Get default settings
    pub fn defaults(&self) -> &Settings {
        &self.defaults
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
