use anyhow::Context;

use datacleaner_config::{CorsConfig, ServerConfig};

/// Process-wide configuration, resolved once at startup and read-only after.
#[derive(Clone, Debug)]
pub struct AppState {
    pub cors_config: CorsConfig,
    pub server_config: ServerConfig,
}

pub fn init_app_state() -> anyhow::Result<AppState> {
    let cors_config = CorsConfig::from_env().context("invalid CORS configuration")?;
    let server_config = ServerConfig::from_env().context("invalid server configuration")?;

    tracing::info!(
        allowed_origins = ?cors_config.allowed_origins,
        allow_credentials = cors_config.allow_credentials,
        api_prefix = %server_config.api_prefix,
        "Configuration loaded"
    );

    Ok(AppState {
        cors_config,
        server_config,
    })
}
