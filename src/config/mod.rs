//! Service settings for the configuration service
//!
//! This module handles loading and managing the service's own settings
//! (listen address, storage path, logging). Not to be confused with the
//! college configuration document the service stores for its callers.

pub mod loader;
pub mod settings;

pub use loader::ConfigLoader;
pub use settings::Settings;
