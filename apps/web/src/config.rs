//! Application configuration loading from environment variables.
//!
//! Configuration is read once at startup. A `.env` file is honored through
//! `dotenvy` before this runs, so local overrides and container environments
//! use the same variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//! - `STYLIZE_ENDPOINT`: Base URL of the model server; `stylize` is appended
//!   (default: the hosted neural-style-transfer service)
//! - `HOST`: Server bind address (default: "0.0.0.0")
//! - `PORT`: Server port (default: 8050)
//! - `MAX_UPLOAD_BYTES`: Request body limit in bytes (default: 20 MiB)
//! - `SESSION_IDLE_MINUTES`: Idle time before a workspace is dropped (default: 60)
//! - `SESSION_SWEEP_INTERVAL_SECONDS`: Sweeper check interval (default: 300)
//! - `RUST_LOG`: Logging level (default: "info,neural_style_web=debug,tower_http=debug")

use serde::Deserialize;

pub const DEFAULT_STYLIZE_ENDPOINT: &str = "https://neural-style-transfer-zekrs5pysa-uc.a.run.app/";

/// Complete server configuration loaded from environment.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Base URL of the remote style-transfer service
    pub stylize_endpoint: String,

    /// Server bind address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Maximum accepted request body, applied to uploads and JSON callbacks
    pub max_upload_bytes: usize,

    /// Minutes without activity after which a session's images are dropped
    pub session_idle_minutes: i64,

    /// Interval in seconds between idle-session sweeps
    pub session_sweep_interval_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed to the
    /// expected type.
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            stylize_endpoint: env_or("STYLIZE_ENDPOINT", DEFAULT_STYLIZE_ENDPOINT.to_string())?,
            host: env_or("HOST", "0.0.0.0".to_string())?,
            port: env_or("PORT", 8050)?,
            max_upload_bytes: env_or("MAX_UPLOAD_BYTES", 20 * 1024 * 1024)?,
            session_idle_minutes: env_or("SESSION_IDLE_MINUTES", 60)?,
            session_sweep_interval_seconds: env_or("SESSION_SWEEP_INTERVAL_SECONDS", 300)?,
        })
    }
}

/// Load an environment variable with a default value.
///
/// # Errors
///
/// Returns an error if the variable is set but cannot be parsed.
fn env_or<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    parse_or(key, std::env::var(key).ok(), default)
}

fn parse_or<T>(key: &str, raw: Option<String>, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match raw {
        Some(val) => val
            .trim()
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", key, e)),
        None => Ok(default),
    }
}
