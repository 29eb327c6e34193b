//! Assembles the full Axum application from the resource routers.
use axum::{routing::get, Json, Router};
use tower_http::trace::TraceLayer;

use crate::{routes, state::AppState};

/// Build the application router, mounted under `uri_prefix`.
pub fn create_app(state: AppState, uri_prefix: &str) -> Router {
    let api = Router::new()
        .route("/", get(root))
        .merge(routes::clients::create_router())
        .merge(routes::products::create_router());
    let prefix = uri_prefix.trim_matches('/');
    let router = if prefix.is_empty() {
        api
    } else {
        Router::new().nest(&format!("/{prefix}"), api)
    };
    router.layer(TraceLayer::new_for_http()).with_state(state)
}

/// Simply a healthcheck that the API is functional.
async fn root() -> Json<String> {
    Json("API is running".to_owned())
}
