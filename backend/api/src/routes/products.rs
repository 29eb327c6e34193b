//! Routes for CRUD operations on products.
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
        models::product::{Product, ProductInsert},
        Page,
    },
    services::products,
    state::AppState,
    utils::httperror::HttpError,
};

/// Create a router for routes under the product service.
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/product", post(create_product).put(update_product))
        .route("/product/{product_id}", get(get_product).delete(delete_product))
        .route("/products", get(list_products))
}

/// Create a new product.
async fn create_product(
    State(state): State<AppState>,
    body: Result<Json<ProductInsert>, JsonRejection>,
) -> Result<Json<Product>, HttpError> {
    let Json(body) = body?;
    let product = products::create_product(body, state.products.as_ref()).await?;
    tracing::info!(product_id = product.id(), "Created product");
    Ok(Json(product))
}

/// Delete a product, responding with the removed record.
async fn delete_product(
    State(state): State<AppState>,
    product_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Product>, HttpError> {
    let Path(product_id) = product_id?;
    let product = products::delete_product(product_id, state.products.as_ref())
        .await?
        .ok_or_else(|| {
            tracing::info!(product_id, "Attempted to delete a product which does not exist");
            HttpError::not_found("Product", product_id)
        })?;
    tracing::info!(product_id, "Deleted product");
    Ok(Json(product))
}

/// Overwrite a product, selected by the `id` in the body.
async fn update_product(
    State(state): State<AppState>,
    body: Result<Json<Product>, JsonRejection>,
) -> Result<Json<Product>, HttpError> {
    let Json(body) = body?;
    let product_id = body.id();
    let product = products::update_product(body, state.products.as_ref())
        .await?
        .ok_or_else(|| {
            tracing::info!(product_id, "Attempted to update a product which does not exist");
            HttpError::not_found("Product", product_id)
        })?;
    Ok(Json(product))
}

/// Get a product by its ID.
async fn get_product(
    State(state): State<AppState>,
    product_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Product>, HttpError> {
    let Path(product_id) = product_id?;
    let product = products::get_product_by_id(product_id, state.products.as_ref())
        .await?
        .ok_or_else(|| HttpError::not_found("Product", product_id))?;
    Ok(Json(product))
}

/// List products, windowed by `skip` and `limit`.
async fn list_products(
    State(state): State<AppState>,
    page: Result<Query<Page>, QueryRejection>,
) -> Result<Json<Vec<Product>>, HttpError> {
    let Query(page) = page?;
    Ok(Json(products::get_products(page, state.products.as_ref()).await?))
}
