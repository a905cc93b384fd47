//! HTTP server binary for the college configuration service
//!
//! Starts an HTTP server that persists and serves a single college
//! configuration document.
//!
//! # Usage
//!
//! ```bash
//! college-config-server --port 5000 --host 0.0.0.0
//! ```
//!
//! # API Endpoints
//!
//! - `GET /api/config`: Fetch the stored configuration
//! - `POST /api/config`: Replace the stored configuration
//! - `GET /ping`: Health check endpoint

use clap::Parser;
use college_config_service::config::ConfigLoader;
use std::path::PathBuf;

/// HTTP server for the college configuration service
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Port to listen on [default: 5000]
    #[arg(short, long)]
    port: Option<u16>,

    /// Host to bind to [default: ::]
    #[arg(long)]
    host: Option<String>,

    /// Path of the JSON file holding the configuration
    #[arg(short, long)]
    data_file: Option<PathBuf>,

    /// Path of a TOML settings file
    #[arg(short, long)]
    settings_file: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Resolve final settings with precedence CLI > env > file > defaults
///
/// The loader applies file and environment sources; CLI flags are layered
/// on top only when explicitly passed.
fn resolve_settings(cli: &Cli) -> college_config_service::Result<college_config_service::Settings> {
    let loader = ConfigLoader::new();
    let mut settings = loader.load(cli.settings_file.as_deref())?;

    if let Some(host) = &cli.host {
        settings.server.host = host.clone();
    }
    if let Some(port) = cli.port {
        settings.server.port = port;
    }
    if let Some(path) = &cli.data_file {
        settings.storage.path = path.clone();
    }

    settings.validate()?;
    Ok(settings)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .init();
    }

    // Load settings (CLI > env > file > defaults)
    let settings = resolve_settings(&cli)?;

    tracing::info!(
        "Starting college config server v{}",
        college_config_service::utils::version::get_version()
    );
    tracing::info!("Config file: {:?}", settings.storage.path);

    // Create the Axum application
    let app = college_config_service::server::app::create_app(settings.clone());

    // Parse address with IPv6/IPv4 fallback
    let addr = parse_and_bind_address(&settings.server.host, settings.server.port).await?;

    tracing::info!(
        "College config server v{} listening on {}",
        college_config_service::utils::version::get_version(),
        addr
    );

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Parse host string and attempt to bind to the address
///
/// - First try to bind to IPv6 (::)
/// - If that fails, fall back to IPv4 (0.0.0.0)
pub async fn parse_and_bind_address(host: &str, port: u16) -> anyhow::Result<std::net::SocketAddr> {
    use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};

    // Try to parse as IP address first
    if let Ok(ip) = host.parse::<IpAddr>() {
        let addr = SocketAddr::new(ip, port);
        tracing::debug!("Parsed address: {}", addr);
        return Ok(addr);
    }

    // Handle special cases like "::" for IPv6 any
    match host {
        "::" => {
            let addr = SocketAddr::new(IpAddr::V6(Ipv6Addr::UNSPECIFIED), port);
            tracing::debug!("Using IPv6 any address: {}", addr);

            // Test if we can bind to IPv6
            match tokio::net::TcpListener::bind(addr).await {
                Ok(_) => {
                    tracing::info!("Successfully bound to IPv6 address {}", addr);
                    Ok(addr)
                }
                Err(e) => {
                    tracing::warn!(
                        "Could not listen on [::]:{} (Caused by {}), falling back to 0.0.0.0",
                        port,
                        e
                    );
                    let fallback_addr = SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), port);
                    tracing::info!("Using IPv4 fallback address: {}", fallback_addr);
                    Ok(fallback_addr)
                }
            }
        }
        "0.0.0.0" => {
            let addr = SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), port);
            tracing::info!("Using IPv4 any address: {}", addr);
            Ok(addr)
        }
        _ => {
            anyhow::bail!(
                "Invalid host address: {}. Use '::' for IPv6 or '0.0.0.0' for IPv4",
                host
            );
        }
    }
}
