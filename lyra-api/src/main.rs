//! lyra-api - Main entry point
//!
//! Resolves configuration (command line / environment, then TOML file, then
//! defaults), installs tracing and serves the JSON API until Ctrl+C or
//! SIGTERM.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use lyra_common::config::{load_bootstrap_config, ConfigOverrides, ServiceConfig};
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lyra_api::{build_router, AppState};

/// Command-line arguments for lyra-api
#[derive(Parser, Debug)]
#[command(name = "lyra-api")]
#[command(about = "Artist, song and lyrics proxy")]
#[command(version)]
struct Args {
    /// TOML configuration file
    #[arg(short, long, env = "LYRA_CONFIG")]
    config: Option<PathBuf>,

    /// Address to bind
    #[arg(long, env = "LYRA_BIND_ADDR")]
    bind_addr: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "PORT")]
    port: Option<u16>,

    /// Upstream search-by-name endpoint
    #[arg(long, env = "SEARCH_ARTIST_URL")]
    search_artist_url: Option<String>,

    /// Upstream artist base URL
    #[arg(long, env = "ARTIST_URL")]
    artist_url: Option<String>,

    /// Upstream song base URL
    #[arg(long, env = "SONG_URL")]
    song_url: Option<String>,

    /// Upstream lyrics page base URL
    #[arg(long, env = "LYRICS_URL")]
    lyrics_url: Option<String>,

    /// Per-call upstream timeout in seconds
    #[arg(long, env = "LYRA_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, env = "LYRA_LOG_LEVEL")]
    log_level: Option<String>,
}

impl Args {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            bind_addr: self.bind_addr.clone(),
            port: self.port,
            search_artist_url: self.search_artist_url.clone(),
            artist_url: self.artist_url.clone(),
            song_url: self.song_url.clone(),
            lyrics_url: self.lyrics_url.clone(),
            timeout_secs: self.timeout_secs,
            log_level: self.log_level.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let toml = load_bootstrap_config(args.config.as_deref())
        .context("Failed to load configuration file")?;
    let config = ServiceConfig::resolve(args.overrides(), toml)
        .context("Invalid configuration")?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("lyra_api={0},lyra_common={0},tower_http={0}", config.log_level).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting lyra-api v{} [{}] built {}",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP")
    );
    info!("Search endpoint: {}", config.upstream.search_artist_url);
    info!("Artist endpoint: {}", config.upstream.artist_url);
    info!("Song endpoint: {}", config.upstream.song_url);
    info!("Lyrics endpoint: {}", config.upstream.lyrics_url);
    info!("Upstream timeout: {:?}", config.upstream.timeout);

    let state = AppState::new(config.upstream.clone()).context("Failed to create upstream client")?;
    let app = build_router(state);

    let addr = format!("{}:{}", config.bind_addr, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    info!("lyra-api listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

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
