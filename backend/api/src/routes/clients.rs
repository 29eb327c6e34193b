//! Routes for CRUD operations on clients.
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    routing::{get, post},
    Json, Router,
};

use crate::{
    db::{
        models::client::{Client, ClientInsert},
        Page,
    },
    services::clients,
    state::AppState,
    utils::httperror::HttpError,
};

/// Create a router for routes under the client service.
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/client", post(create_client).put(update_client))
        .route("/client/{client_id}", get(get_client).delete(delete_client))
        .route("/clients", get(list_clients))
}

/// Create a new client.
async fn create_client(
    State(state): State<AppState>,
    body: Result<Json<ClientInsert>, JsonRejection>,
) -> Result<Json<Client>, HttpError> {
    let Json(body) = body?;
    let client = clients::create_client(body, state.clients.as_ref()).await?;
    tracing::info!(client_id = client.id(), "Created client");
    Ok(Json(client))
}

/// Delete a client, responding with the removed record.
async fn delete_client(
    State(state): State<AppState>,
    client_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Client>, HttpError> {
    let Path(client_id) = client_id?;
    let client = clients::delete_client(client_id, state.clients.as_ref())
        .await?
        .ok_or_else(|| {
            tracing::info!(client_id, "Attempted to delete a client which does not exist");
            HttpError::not_found("Client", client_id)
        })?;
    tracing::info!(client_id, "Deleted client");
    Ok(Json(client))
}

/// Overwrite a client, selected by the `id` in the body.
async fn update_client(
    State(state): State<AppState>,
    body: Result<Json<Client>, JsonRejection>,
) -> Result<Json<Client>, HttpError> {
    let Json(body) = body?;
    let client_id = body.id();
    let client = clients::update_client(body, state.clients.as_ref())
        .await?
        .ok_or_else(|| {
            tracing::info!(client_id, "Attempted to update a client which does not exist");
            HttpError::not_found("Client", client_id)
        })?;
    Ok(Json(client))
}

/// Get a client by its ID.
async fn get_client(
    State(state): State<AppState>,
    client_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Client>, HttpError> {
    let Path(client_id) = client_id?;
    let client = clients::get_client_by_id(client_id, state.clients.as_ref())
        .await?
        .ok_or_else(|| HttpError::not_found("Client", client_id))?;
    Ok(Json(client))
}

/// List clients, windowed by `skip` and `limit`.
async fn list_clients(
    State(state): State<AppState>,
    page: Result<Query<Page>, QueryRejection>,
) -> Result<Json<Vec<Client>>, HttpError> {
    let Query(page) = page?;
    Ok(Json(clients::get_clients(page, state.clients.as_ref()).await?))
}
