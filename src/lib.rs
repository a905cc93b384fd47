//! College Configuration Service
//!
//! A minimal HTTP service that persists a single college configuration
//! document to disk and serves it back. The configuration is an opaque
//! JSON value; the service enforces no schema and keeps exactly one slot
//! of durable state (one file).
//!
//! # Architecture
//!
//! - **Config Store**: owns the backing JSON file. Reads return `{}` when
//!   nothing has been written yet; writes replace the whole document.
//! - **HTTP Facade**: two endpoints (`GET`/`POST` under `/api/config`)
//!   translating requests into store operations, plus a `/ping` health
//!   check.
//!
//! # Usage
//!
//! ```bash
//! college-config-server --port 5000 --data-file data/college_config.json
//! ```
//!
//! # Examples
//!
//! ```rust
//! use college_config_service::{ConfigStore, Settings};
//!
//! # fn example() -> college_config_service::Result<()> {
//! let settings = Settings::default();
//! let store = ConfigStore::new(&settings.storage.path);
//! let current = store.read()?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod server;
pub mod store;
pub mod types;
pub mod utils;

pub use config::Settings;
pub use error::{Error, Result};
pub use store::ConfigStore;
pub use types::{ErrorResponse, MessageResponse, PingResponse};
