//! Ring API (ring-api) - Main entry point
//!
//! Serves `GET /api/ring`, which plays the configured audio file through the
//! host's command-line player (aplay on Linux, ffplay on Windows).

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use ring_api::{build_router, AppState, PlaybackCoordinator, Platform};
use ring_common::config::{Overrides, ServiceConfig, TomlConfig};
use tokio::runtime::Handle;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Command-line arguments for ring-api
#[derive(Parser, Debug)]
#[command(name = "ring-api")]
#[command(about = "HTTP trigger for local audio playback")]
#[command(version)]
struct Args {
    /// Audio file played on every ring
    #[arg(short, long, env = "AUDIO_PATH")]
    audio_path: Option<PathBuf>,

    /// Port to listen on
    #[arg(short, long, env = "HTTP_PORT")]
    port: Option<u16>,

    /// TOML config file (default: platform config directory)
    #[arg(short, long, env = "RING_API_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let file = TomlConfig::discover(args.config.as_deref())
        .context("Failed to load configuration file")?;
    let overrides = Overrides {
        audio_path: args.audio_path,
        port: args.port,
    };
    let config = ServiceConfig::resolve(&overrides, file.as_ref());

    // Initialize tracing; RUST_LOG wins over the configured level
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("ring_api={},tower_http={}", config.log_level, config.log_level).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting ring-api v{}", env!("CARGO_PKG_VERSION"));
    match file.as_ref().and_then(|f| f.source.as_ref()) {
        Some(source) => info!("Config file: {}", source.display()),
        None => info!("No config file found, using defaults"),
    }
    info!("Audio file: {}", config.audio_path.display());

    // Not fatal: the file may appear later, and each ring re-checks it
    if !config.audio_path.exists() {
        warn!(
            "Audio file {} does not exist; rings will fail until it does",
            config.audio_path.display()
        );
    }

    let platform = Platform::current();
    info!("Platform: {}", platform);

    let coordinator = Arc::new(PlaybackCoordinator::new(platform, Handle::current()));
    let state = AppState::new(coordinator, &*config.audio_path.to_string_lossy());
    let app = build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Starting HTTP server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
