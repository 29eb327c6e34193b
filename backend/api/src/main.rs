use std::process::ExitCode;

use backoffice_api::{
    app,
    constants::{
        api::LOG_LEVEL,
        db::{db_url, Backend},
        errors::ConfigError,
        ApiConfig,
    },
    db::{
        self,
        errors::{DatabaseError, MigrationError},
    },
    state::AppState,
    utils::logging,
};
use thiserror::Error;

/// Anything which prevents the API from starting.
#[derive(Error, Debug)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Failed to connect to database: {0}")]
    Database(#[from] DatabaseError),
    #[error("Failed to migrate database: {0}")]
    Migration(#[from] MigrationError),
    #[error("Failed to serve: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    logging::init_tracing(&LOG_LEVEL);
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "API exited with an error");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), StartupError> {
    let config = ApiConfig::from_env()?;
    let state = match config.backend {
        Backend::Postgres => {
            let db_conn = db::connect(&db_url()?).await?;
            db::migrate(&db_conn).await?;
            AppState::postgres(db_conn)
        }
        Backend::Memory => {
            tracing::warn!("Using the in-memory backend, records will not persist");
            AppState::in_memory()
        }
    };
    let app = app::create_app(state, &config.uri_prefix);
    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    tracing::info!(address = %config.bind_address, prefix = %config.uri_prefix, "Listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for shutdown signal");
        core::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
