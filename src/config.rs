use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_metrics_file")]
    pub metrics_file: PathBuf,
}

fn default_port() -> u16 {
    9108
}

fn default_metrics_file() -> PathBuf {
    PathBuf::from("/var/lib/sim_metrics/metrics.prom")
}

impl Config {
    /// Resolve configuration from `PORT` and `METRICS_FILE`.
    pub fn load() -> Result<Self> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        Self::from_environment(config::Environment::default())
    }

    /// Resolve configuration from an explicit set of environment variables.
    pub fn from_env_map(vars: config::Map<String, String>) -> Result<Self> {
        Self::from_environment(config::Environment::default().source(Some(vars)))
    }

    fn from_environment(env: config::Environment) -> Result<Self> {
        let config = config::Config::builder().add_source(env).build()?;

        config
            .try_deserialize()
            .context("invalid exporter configuration (check PORT and METRICS_FILE)")
    }

    /// Listen on all interfaces
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            metrics_file: default_metrics_file(),
        }
    }
}
