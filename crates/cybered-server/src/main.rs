//! cybered — security education API server.

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use cybered_server::api;
use cybered_server::config::load_config_from;
use cybered_server::AppState;

#[derive(Parser)]
#[command(name = "cybered", version, about = "Security education API server")]
struct Cli {
    /// Config file path (default: ./cybered.toml if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Address to bind, e.g. "0.0.0.0:8000"
    #[arg(long)]
    addr: Option<String>,

    /// Path to the modules JSON dataset
    #[arg(long)]
    data: Option<PathBuf>,

    /// Strength estimator: zxcvbn or heuristic
    #[arg(long)]
    estimator: Option<String>,

    /// Base URL of the breach range API
    #[arg(long)]
    hibp_url: Option<String>,
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = load_config_from(cli.config.as_deref())?;

    if let Some(addr) = cli.addr {
        config.bind_addr = addr;
    }
    if let Some(data) = cli.data {
        config.data_path = data;
    }
    if let Some(kind) = cli.estimator {
        config.estimator = kind.parse().map_err(|e| anyhow::anyhow!("--estimator: {e}"))?;
    }
    if let Some(url) = cli.hibp_url {
        config.hibp_base_url = Some(url);
    }

    if !config.data_path.exists() {
        tracing::warn!(
            path = %config.data_path.display(),
            "dataset not found at startup; module endpoints will fail until it exists"
        );
    }

    let state = AppState::from_config(&config);
    let app = api::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!(
        addr = %config.bind_addr,
        data = %config.data_path.display(),
        estimator = %config.estimator,
        "cybered listening"
    );

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("cybered=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
