//! calcsrv main binary
//!
//! Loads configuration, wires the optional upstream evaluator, and serves
//! the calculation API.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tokio::signal;
use tracing::{error, info};

use calc_remote::{FallbackEvaluator, RemoteClient, RemoteConfig};
use calcsrv::api::routes::create_router;
use calcsrv::api::AppState;
use calcsrv::config::Config;
use calcsrv::{SERVICE_NAME, SERVICE_VERSION};

#[derive(Parser, Debug)]
#[command(author, version, about = "calcsrv - calculation service")]
struct Args {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let args = Args::parse();
    let config = Config::load(args.config.as_deref())?;

    info!("Starting {} v{}", SERVICE_NAME, SERVICE_VERSION);

    let upstream = match &config.upstream {
        Some(upstream) => {
            info!("Delegating calculations to upstream {}", upstream.url);
            let client = RemoteClient::new(
                RemoteConfig::new(upstream.url.clone()).with_timeout(upstream.timeout),
            )?;
            Some(FallbackEvaluator::new(Some(client)))
        }
        None => None,
    };

    let app = create_router(AppState::new(upstream));

    let addr: SocketAddr = format!("{}:{}", config.service.host, config.service.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("{} listening on {}", SERVICE_NAME, addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("{} stopped", SERVICE_NAME);
    Ok(())
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => info!("Received shutdown signal"),
        Err(e) => error!("Failed to listen for shutdown signal: {}", e),
    }
}

/// Initialize the logging system
fn init_logging() {
    let log_level = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| format!("{}=info,tower_http=info", env!("CARGO_PKG_NAME")));

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(false)
        .init();
}
