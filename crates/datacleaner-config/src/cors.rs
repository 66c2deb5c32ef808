//! Cross-origin access configuration.
//!
//! The allow-list is resolved once at startup:
//!
//! - `CORS_ORIGINS` (comma-separated) is authoritative when it yields at
//!   least one non-empty entry.
//! - Otherwise [`DEFAULT_ALLOWED_ORIGINS`] is used verbatim.
//!
//! Entries that are not a bare `scheme://host[:port]` origin are dropped.
//! The rest are stored the way browsers serialize an `Origin` header: lowercase
//! scheme and host, no default port, no trailing slash.
//! A `*` entry is only accepted when credentials are disabled; wildcard
//! origins combined with credentials are rejected with
//! [`CorsConfigError::WildcardWithCredentials`].
//!
//! # Environment Variables
//!
//! - `CORS_ORIGINS`: allowed origins (default: [`DEFAULT_ALLOWED_ORIGINS`])
//! - `CORS_ALLOW_CREDENTIALS`: emit `Access-Control-Allow-Credentials` (default: true)
//! - `CORS_MAX_AGE_SECS`: preflight cache lifetime in seconds (default: 3600)

use std::env;
use std::time::Duration;

use axum::http::{HeaderName, HeaderValue, Method, Uri, header};
use thiserror::Error;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::warn;

/// Front-end origins allowed when `CORS_ORIGINS` is not configured.
pub const DEFAULT_ALLOWED_ORIGINS: &[&str] = &[
    "https://data-cleaner-project.netlify.app",
    "http://localhost:5173",
    "http://localhost:3000",
    "http://127.0.0.1:5173",
    "http://127.0.0.1:3000",
];

pub const WILDCARD_ORIGIN: &str = "*";

const DEFAULT_MAX_AGE_SECS: u64 = 3600;

pub const ALLOWED_METHODS: [Method; 5] = [
    Method::GET,
    Method::POST,
    Method::PUT,
    Method::DELETE,
    Method::OPTIONS,
];

pub const ALLOWED_HEADERS: [HeaderName; 5] = [
    header::AUTHORIZATION,
    header::CONTENT_TYPE,
    header::ACCEPT,
    header::ORIGIN,
    HeaderName::from_static("x-requested-with"),
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CorsConfigError {
    #[error(
        "CORS_ORIGINS contains a wildcard origin while credentials are allowed; \
         list explicit origins or set CORS_ALLOW_CREDENTIALS=false"
    )]
    WildcardWithCredentials,

    #[error("CORS_ORIGINS does not contain any valid origin")]
    NoValidOrigins,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
    pub allow_credentials: bool,
    pub max_age: Duration,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: DEFAULT_ALLOWED_ORIGINS
                .iter()
                .map(|origin| origin.to_string())
                .collect(),
            allow_credentials: true,
            max_age: Duration::from_secs(DEFAULT_MAX_AGE_SECS),
        }
    }
}

impl CorsConfig {
    /// Loads the configuration from the process environment.
    pub fn from_env() -> Result<Self, CorsConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads the configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CorsConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let allow_credentials = lookup("CORS_ALLOW_CREDENTIALS")
            .and_then(|v| parse_bool(&v))
            .unwrap_or(true);

        let max_age = lookup("CORS_MAX_AGE_SECS")
            .and_then(|v| v.trim().parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(DEFAULT_MAX_AGE_SECS));

        let raw = lookup("CORS_ORIGINS");
        let allowed_origins = Self::resolve(raw.as_deref(), allow_credentials)?;

        Ok(Self {
            allowed_origins,
            allow_credentials,
            max_age,
        })
    }

    /// Resolves the allow-list from the raw `CORS_ORIGINS` value.
    pub fn resolve(
        raw: Option<&str>,
        allow_credentials: bool,
    ) -> Result<Vec<String>, CorsConfigError> {
        let configured = raw.map(split_origins).unwrap_or_default();

        let candidates: Vec<String> = if configured.is_empty() {
            DEFAULT_ALLOWED_ORIGINS
                .iter()
                .map(|origin| origin.to_string())
                .collect()
        } else {
            configured
        };

        if candidates.iter().any(|origin| origin == WILDCARD_ORIGIN) {
            if allow_credentials {
                return Err(CorsConfigError::WildcardWithCredentials);
            }
            return Ok(vec![WILDCARD_ORIGIN.to_string()]);
        }

        let origins: Vec<String> = candidates
            .into_iter()
            .filter_map(|candidate| {
                let origin = normalize_origin(&candidate);
                if origin.is_none() {
                    warn!(origin = %candidate, "Dropping malformed CORS origin");
                }
                origin
            })
            .collect();

        if origins.is_empty() {
            return Err(CorsConfigError::NoValidOrigins);
        }

        Ok(origins)
    }

    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins
            .iter()
            .any(|origin| origin == WILDCARD_ORIGIN)
    }

    /// Exact-match membership check against the resolved list.
    pub fn is_origin_allowed(&self, origin: &str) -> bool {
        self.allows_any_origin() || self.allowed_origins.iter().any(|allowed| allowed == origin)
    }

    /// Builds the CORS layer for the resolved allow-list.
    ///
    /// Credentials are never combined with an any-origin policy: a config
    /// holding the wildcard only reaches this point with credentials off.
    pub fn layer(&self) -> CorsLayer {
        let allow_origin = if self.allows_any_origin() {
            AllowOrigin::any()
        } else {
            let origins: Vec<HeaderValue> = self
                .allowed_origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();
            AllowOrigin::list(origins)
        };

        CorsLayer::new()
            .allow_origin(allow_origin)
            .allow_methods(ALLOWED_METHODS)
            .allow_headers(ALLOWED_HEADERS)
            .allow_credentials(self.allow_credentials && !self.allows_any_origin())
            .max_age(self.max_age)
    }
}

fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

/// Returns the origin in the form browsers send it (lowercase scheme and
/// host, default port omitted, no trailing slash), or `None` when the value
/// is not a bare http(s) origin.
fn normalize_origin(value: &str) -> Option<String> {
    let uri: Uri = value.trim().parse().ok()?;

    let scheme = uri.scheme_str()?.to_ascii_lowercase();
    let default_port = match scheme.as_str() {
        "http" => 80,
        "https" => 443,
        _ => return None,
    };

    let authority = uri.authority()?;
    if authority.as_str().contains('@') || authority.host().is_empty() {
        return None;
    }

    let bare = uri
        .path_and_query()
        .is_none_or(|pq| pq.as_str().is_empty() || pq.as_str() == "/");
    if !bare {
        return None;
    }

    let host = authority.host().to_ascii_lowercase();
    match authority.port_u16() {
        Some(port) if port != default_port => Some(format!("{scheme}://{host}:{port}")),
        _ => Some(format!("{scheme}://{host}")),
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
