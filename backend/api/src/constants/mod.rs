//! Constants (primary environment variables/secrets) used across the application.
pub mod api;
pub mod db;
mod secrets;

use db::Backend;

/// Startup configuration resolved from the environment.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Prefix under which every route is mounted.
    pub uri_prefix: String,
    /// Socket address the HTTP listener binds to.
    pub bind_address: String,
    /// Where records are persisted.
    pub backend: Backend,
}

impl ApiConfig {
    /// Read the configuration from environment variables.
    pub fn from_env() -> Result<Self, errors::ConfigError> {
        Ok(Self {
            uri_prefix: api::API_URI_PREFIX.clone(),
            bind_address: api::BIND_ADDRESS.clone(),
            backend: db::DB_BACKEND.parse()?,
        })
    }
}

pub mod errors {
    use thiserror::Error;

    /// Errors raised while resolving configuration at startup.
    #[derive(Error, Debug)]
    pub enum ConfigError {
        #[error("{0} not provided in environment variables")]
        Missing(&'static str),
        #[error("Failed to read docker secret: {0}")]
        Secret(#[from] std::io::Error),
        #[error("Unknown DB_BACKEND {0:?}, expected \"postgres\" or \"memory\"")]
        UnknownBackend(String),
    }
}
