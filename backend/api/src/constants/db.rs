//! Database location and credentials.
use super::{errors::ConfigError, secrets::read_secret};
use core::str::FromStr;
use std::{env::var, sync::LazyLock};

/// The storage backend records are persisted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// A Postgres database, located by `DB_URL`.
    Postgres,
    /// A process-local store. Contents are lost on shutdown.
    Memory,
}

impl FromStr for Backend {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(Self::Postgres),
            "memory" => Ok(Self::Memory),
            other => Err(ConfigError::UnknownBackend(other.to_owned())),
        }
    }
}

pub static DB_BACKEND: LazyLock<String> =
    LazyLock::new(|| var("DB_BACKEND").unwrap_or(String::from("postgres")));

fn required(name: &'static str) -> Result<String, ConfigError> {
    var(name).map_err(|_| ConfigError::Missing(name))
}

fn password() -> Result<String, ConfigError> {
    if let Ok(password) = var("DB_PASSWORD") {
        return Ok(password);
    }
    let secret_name = var("DB_PASSWORD_DOCKER_SECRET")
        .map_err(|_| ConfigError::Missing("DB_PASSWORD or DB_PASSWORD_DOCKER_SECRET"))?;
    Ok(read_secret(&secret_name)?.trim_end().to_owned())
}

/// Build the connection URL. `DATABASE_URL` wins over the individual parts.
pub fn db_url() -> Result<String, ConfigError> {
    if let Ok(url) = var("DATABASE_URL") {
        return Ok(url);
    }
    Ok(format!(
        "postgres://{}:{}@{}/{}",
        required("DB_USERNAME")?,
        password()?,
        required("DB_HOST")?,
        required("DB_DATABASE")?
    ))
}
