//! Shared type definitions
//!
//! Request and response types for the HTTP API. The configuration document
//! itself is an untyped `serde_json::Value`; only the envelope types live
//! here.

pub mod response;

pub use response::{ErrorResponse, MessageResponse, PingResponse};
