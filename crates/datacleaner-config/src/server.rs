//! HTTP server configuration.
//!
//! # Environment Variables
//!
//! - `HOST`: bind host (default: `0.0.0.0`)
//! - `PORT`: bind port (default: `8000`)
//! - `API_PREFIX`: prefix for the mounted route collections (default: `/api`,
//!   empty or `/` mounts them at the root)
//! - `DEPLOYMENT_PLATFORM`: label reported by the root endpoint (default: `Vercel`)

use std::env;

use thiserror::Error;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_API_PREFIX: &str = "/api";
pub const DEFAULT_PLATFORM: &str = "Vercel";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServerConfigError {
    #[error("PORT must be an integer between 0 and 65535, got {0:?}")]
    InvalidPort(String),

    #[error("API_PREFIX must be a static path without parameters or wildcards, got {0:?}")]
    InvalidApiPrefix(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Normalized prefix; empty means the collections live at the root.
    pub api_prefix: String,
    pub platform: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            api_prefix: DEFAULT_API_PREFIX.to_string(),
            platform: DEFAULT_PLATFORM.to_string(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ServerConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ServerConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("PORT").map(|v| v.trim().to_string()) {
            Some(v) if !v.is_empty() => v
                .parse::<u16>()
                .map_err(|_| ServerConfigError::InvalidPort(v.clone()))?,
            _ => DEFAULT_PORT,
        };

        let api_prefix = match lookup("API_PREFIX") {
            Some(v) => normalize_api_prefix(&v)?,
            None => DEFAULT_API_PREFIX.to_string(),
        };

        let platform = lookup("DEPLOYMENT_PLATFORM")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_PLATFORM.to_string());

        Ok(Self {
            host,
            port,
            api_prefix,
            platform,
        })
    }

    /// `host:port` as configured.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Normalizes a mount prefix to `/segment[/segment...]`, or the empty
/// string for the root.
pub fn normalize_api_prefix(raw: &str) -> Result<String, ServerConfigError> {
    let trimmed = raw.trim().trim_matches('/');

    if trimmed.is_empty() {
        return Ok(String::new());
    }

    let invalid = trimmed
        .split('/')
        .any(|segment| segment.is_empty() || segment.contains(['{', '}', '*', ' ', '?', '#']));
    if invalid {
        return Err(ServerConfigError::InvalidApiPrefix(raw.to_string()));
    }

    Ok(format!("/{trimmed}"))
}
