//! Server configuration.

use std::env;
use std::path::PathBuf;

/// Default listening port.
const DEFAULT_PORT: u16 = 3000;
/// Default grace period for draining connections on shutdown.
const DEFAULT_SHUTDOWN_TIMEOUT_SECS: u64 = 10;

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
    /// Deployment environment name reported by the health endpoint.
    pub environment: String,
    /// Log level.
    pub log_level: String,
    /// Whether to preload the demo users.
    pub seed_demo_data: bool,
    /// Seconds to wait for in-flight requests after a shutdown signal.
    pub shutdown_timeout_secs: u64,
    /// Directory served under `/static`.
    pub static_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            environment: "development".to_string(),
            log_level: "info".to_string(),
            seed_demo_data: true,
            shutdown_timeout_secs: DEFAULT_SHUTDOWN_TIMEOUT_SECS,
            static_dir: PathBuf::from("public"),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through the given variable lookup.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = lookup("DIRECTORY_HOST").unwrap_or(defaults.host);
        if host.trim().is_empty() {
            anyhow::bail!("DIRECTORY_HOST must not be empty");
        }

        Ok(Self {
            host,
            port: lookup("DIRECTORY_PORT")
                .or_else(|| lookup("PORT"))
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
            environment: lookup("DIRECTORY_ENV")
                .or_else(|| lookup("APP_ENV"))
                .unwrap_or(defaults.environment),
            log_level: lookup("DIRECTORY_LOG_LEVEL").unwrap_or(defaults.log_level),
            seed_demo_data: lookup("DIRECTORY_SEED_DEMO_DATA")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(defaults.seed_demo_data),
            shutdown_timeout_secs: lookup("DIRECTORY_SHUTDOWN_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.shutdown_timeout_secs),
            static_dir: lookup("DIRECTORY_STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
        })
    }

    /// Returns the server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
