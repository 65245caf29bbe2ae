//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use icy_client::config::ClientConfig;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT {value:?}: expected 1-65535")]
    InvalidPort { value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Values forwarded to the browser through the shell.
    pub client: ClientConfig,
}

impl ServerConfig {
    /// Build host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `ICY_API_BASE_URL`: auth backend, default `http://localhost:8000`
    /// - `GOOGLE_CLIENT_ID`: Google sign-in is disabled when absent
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] when `PORT` is set but unusable.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        let client = ClientConfig::new(
            std::env::var("ICY_API_BASE_URL").ok().as_deref(),
            std::env::var("GOOGLE_CLIENT_ID").ok().as_deref(),
        );
        Ok(Self { port, client })
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    let Some(raw) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(DEFAULT_PORT);
    };
    match raw.parse::<u16>() {
        Ok(port) if port > 0 => Ok(port),
        _ => Err(ConfigError::InvalidPort { value: raw.to_owned() }),
    }
}
