//! Version information

/// Version string from the crate manifest
pub fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
