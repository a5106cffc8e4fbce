//! Server configuration.
//!
//! Loaded from `cybered.toml` in the working directory (or an explicit
//! path), with environment variable overrides applied on top. CLI flags
//! override both; that happens in `main`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use cybered_password::EstimatorKind;

/// Top-level cybered server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address to bind the HTTP listener on.
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    /// Path to the modules/quizzes JSON dataset.
    #[serde(default = "default_data_path")]
    pub data_path: PathBuf,
    /// Base URL of the breach range API. `None` means the public HIBP API.
    #[serde(default)]
    pub hibp_base_url: Option<String>,
    /// Strength estimator backend selected at startup.
    #[serde(default)]
    pub estimator: EstimatorKind,
    /// Timeout for the outbound breach lookup, in seconds.
    #[serde(default = "default_breach_timeout")]
    pub breach_timeout_secs: u64,
}

fn default_bind_addr() -> String {
    "127.0.0.1:8000".to_string()
}

fn default_data_path() -> PathBuf {
    PathBuf::from("data/modules.json")
}

fn default_breach_timeout() -> u64 {
    5
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            data_path: default_data_path(),
            hibp_base_url: None,
            estimator: EstimatorKind::default(),
            breach_timeout_secs: default_breach_timeout(),
        }
    }
}

/// Load config from an explicit path, or `cybered.toml` in the current
/// directory, falling back to defaults. Environment variables
/// `CYBERED_BIND_ADDR`, `CYBERED_DATA_PATH`, `CYBERED_HIBP_URL`, and
/// `CYBERED_ESTIMATOR` override file values.
pub fn load_config_from(path: Option<&Path>) -> Result<ServerConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("cybered.toml");
        local.exists().then_some(local)
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<ServerConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => ServerConfig::default(),
    };

    if let Ok(addr) = std::env::var("CYBERED_BIND_ADDR") {
        config.bind_addr = addr;
    }
    if let Ok(path) = std::env::var("CYBERED_DATA_PATH") {
        config.data_path = PathBuf::from(path);
    }
    if let Ok(url) = std::env::var("CYBERED_HIBP_URL") {
        config.hibp_base_url = Some(url);
    }
    if let Ok(kind) = std::env::var("CYBERED_ESTIMATOR") {
        config.estimator = kind
            .parse()
            .map_err(|e| anyhow::anyhow!("CYBERED_ESTIMATOR: {e}"))?;
    }

    Ok(config)
}
