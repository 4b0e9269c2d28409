//! Helios dApp backend
//!
//! Loads configuration, installs logging and serves the HTTP API the
//! browser frontend talks to.

use std::net::IpAddr;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use helios_api::{start_server, AppState};
use helios_core::AppConfig;

/// Command line options
#[derive(Parser, Debug)]
#[command(name = "helios")]
#[command(about = "Cron deposit estimation and token factory API for Helios")]
pub struct Cli {
    /// JSON config file; defaults are used when omitted
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Overrides the API bind address from the config
    #[arg(long)]
    pub host: Option<IpAddr>,

    /// Overrides the API port from the config
    #[arg(short, long)]
    pub port: Option<u16>,
}

/// Install the global tracing subscriber. `RUST_LOG` adds to the defaults.
pub fn init_tracing() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("helios=debug".parse()?)
                .add_directive("chronos=debug".parse()?)
                .add_directive("erc20=debug".parse()?)
                .add_directive("info".parse()?),
        )
        .init();
    Ok(())
}

/// Resolve the effective config from the CLI options
pub fn load_config(cli: &Cli) -> anyhow::Result<AppConfig> {
    let mut config = match &cli.config {
        Some(path) => AppConfig::from_json_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => AppConfig::default(),
    };

    if let Some(host) = cli.host {
        config.api_host = host;
    }
    if let Some(port) = cli.port {
        config.api_port = port;
    }

    config.check().context("invalid configuration")?;
    Ok(config)
}

/// Run the API server until it exits
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    init_tracing()?;

    let config = load_config(&cli)?;
    tracing::info!(network = %config.network, addr = %config.api_addr(), "Starting Helios");

    start_server(AppState::with_config(config))
        .await
        .context("API server failed")
}
