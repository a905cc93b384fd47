//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

/// Test helper functions
pub mod helpers {
    use college_config_service::{config::Settings, server::app::create_app};
    use std::net::SocketAddr;
    use std::path::Path;

    /// Create test settings pointing at a store file under a temp directory
    pub fn create_test_settings(store_path: &Path) -> Settings {
        let mut settings = Settings::default();
        settings.storage.path = store_path.to_path_buf();
        settings
    }

    /// Spawn the service on an ephemeral local port and return its address
    pub async fn spawn_server(store_path: &Path) -> SocketAddr {
        let settings = create_test_settings(store_path);
        let app = create_app(settings);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind test listener");
        let addr = listener.local_addr().expect("local addr");

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("serve test app");
        });

        addr
    }
}
