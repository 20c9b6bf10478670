//! Partner Payment Server
//!
//! Partner-facing proxy in front of an upstream payment gateway: direct
//! card payments with 3D Secure, hosted checkout sessions and a demo API
//! for integration testing.

mod api;
mod config;
mod server;
mod shutdown;
mod state;

use clap::Parser;
use config::{ConfigLoader, ConfigOverrides};
use ppay_core::gateway::HttpGateway;
use server::{build_router, run_server};
use shutdown::spawn_config_reload_handler;
use state::AppState;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Partner Payment Server - proxy to the upstream payment gateway
#[derive(Parser, Debug)]
#[command(name = "ppay-server")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the configuration file
    #[arg(short, long, default_value = "./ppay-config.toml")]
    config: PathBuf,

    /// Override the listen address (e.g., 0.0.0.0:5010)
    #[arg(short, long)]
    listen: Option<SocketAddr>,

    /// Override the upstream payment API base URL
    #[arg(long, env = "GOODPASS_API_URL")]
    upstream_url: Option<String>,

    /// Override the partner API key used against the upstream
    #[arg(long, env = "PARTNER_API_KEY", hide_env_values = true)]
    api_key: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    init_tracing();

    // Parse command line arguments
    let args = Args::parse();

    tracing::info!("Starting ppay-server v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let overrides = ConfigOverrides {
        listen: args.listen,
        upstream_url: args.upstream_url,
        api_key: args.api_key,
    };
    let config_loader = Arc::new(ConfigLoader::new(&args.config, overrides));
    let loaded_config = config_loader.load().map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        e
    })?;

    let listen_addr = loaded_config.server.listen;
    tracing::info!(
        upstream = %loaded_config.upstream.base_url,
        "Configuration loaded from {:?}",
        args.config
    );

    // Build the upstream client
    let gateway = HttpGateway::new(&loaded_config.upstream).map_err(|e| {
        tracing::error!("Failed to build upstream client: {}", e);
        e
    })?;

    // Create application state
    let state = AppState::new(loaded_config.into_shared(), Arc::new(gateway));

    // Spawn config reload handler (listens for SIGHUP)
    let shutdown_notify = spawn_config_reload_handler(state.clone(), config_loader);

    // Build the router
    let router = build_router(state);

    // Run the server
    tracing::info!("Starting HTTP server on {}", listen_addr);
    let result = run_server(router, listen_addr).await;

    // Signal the config reload handler to stop
    shutdown_notify.notify_one();
    tracing::info!("Server shutdown complete");

    result.map_err(Into::into)
}

/// Initialize the tracing subscriber with environment-based filtering.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
