//! Contains database models and interaction code.
pub mod models;
pub mod store;

use serde::Deserialize;

/// An alias for the underlying DBMS specific pool type.
pub type ConnectionPool = sqlx::PgPool;

/// Initiate a pooled connection to the database.
pub async fn connect(url: &str) -> Result<ConnectionPool, errors::DatabaseError> {
    Ok(sqlx::PgPool::connect(url).await?)
}

/// Bring the schema up to date with the bundled migrations.
pub async fn migrate(db_client: &ConnectionPool) -> Result<(), errors::MigrationError> {
    Ok(sqlx::migrate!().run(db_client).await?)
}

/// Offset-based window over a listing, ordered by primary key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Page {
    /// Number of rows to skip.
    #[serde(default)]
    pub skip: u32,
    /// Maximum number of rows returned.
    #[serde(default = "default_limit")]
    pub limit: u32,
}

const fn default_limit() -> u32 {
    100
}

impl Default for Page {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: default_limit(),
        }
    }
}

pub mod errors {
    use thiserror::Error;

    #[derive(Error, Debug)]
    #[error(transparent)]
    pub struct DatabaseError(#[from] sqlx::Error);

    #[derive(Error, Debug)]
    #[error(transparent)]
    pub struct MigrationError(#[from] sqlx::migrate::MigrateError);
}
