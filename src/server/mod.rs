//! HTTP facade
//!
//! Axum application setup and request handlers translating HTTP requests
//! into Config Store operations.

pub mod app;
pub mod handlers;

pub use app::{AppState, create_app};
