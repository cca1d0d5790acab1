//! Proxy configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `PORT` - Listen port (default: 5000); the server binds all interfaces
//! - `PROXY_ALLOWED_ORIGINS` - Comma-separated CORS allow-list
//!   (default: the Bubble front-end origin plus `http://localhost:3000`)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//!
//! The upstream API version, path template, credential header, and timeout are
//! fixed constants: the proxy exists to serve one known front-end against one
//! known Shopify API surface, and pinning them keeps responses reproducible.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use thiserror::Error;

/// Shopify Admin API version the proxy targets.
pub const SHOPIFY_API_VERSION: &str = "2023-04";

/// Connect and total timeout applied to the upstream call.
pub const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(10);

/// Origins allowed by default when `PROXY_ALLOWED_ORIGINS` is not set.
///
/// `localhost:3000` is kept for local front-end testing.
const DEFAULT_ALLOWED_ORIGINS: &[&str] = &[
    "https://ecomlyze-62237.bubbleapps.io",
    "http://localhost:3000",
];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Proxy application configuration.
#[derive(Debug, Clone)]
pub struct ProxyConfig {
    /// Port to listen on.
    pub port: u16,
    /// Origins allowed to call the proxy from a browser.
    pub allowed_origins: Vec<String>,
    /// Sentry DSN for error tracking.
    pub sentry_dsn: Option<String>,
}

impl ProxyConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `PORT` is set but not a valid port number, or
    /// if `PROXY_ALLOWED_ORIGINS` is set but contains no origins.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let port = get_env_or_default("PORT", "5000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("PORT".to_string(), e.to_string()))?;

        let allowed_origins = match get_optional_env("PROXY_ALLOWED_ORIGINS") {
            Some(raw) => parse_origin_list(&raw)?,
            None => default_origins(),
        };

        let sentry_dsn = get_optional_env("SENTRY_DSN");

        Ok(Self {
            port,
            allowed_origins,
            sentry_dsn,
        })
    }

    /// Returns the socket address for binding the server.
    ///
    /// The proxy fronts a hosted front-end, so it binds all interfaces.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), self.port)
    }
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// The built-in origin allow-list.
fn default_origins() -> Vec<String> {
    DEFAULT_ALLOWED_ORIGINS
        .iter()
        .map(ToString::to_string)
        .collect()
}

/// Parse a comma-separated origin list, dropping empty entries.
fn parse_origin_list(raw: &str) -> Result<Vec<String>, ConfigError> {
    let origins: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(ToString::to_string)
        .collect();

    if origins.is_empty() {
        return Err(ConfigError::InvalidEnvVar(
            "PROXY_ALLOWED_ORIGINS".to_string(),
            "must contain at least one origin".to_string(),
        ));
    }

    Ok(origins)
}
