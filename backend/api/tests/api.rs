use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use backoffice_api::{
    app::create_app,
    db::{
        errors::DatabaseError,
        models::client::{Client, ClientInsert},
        store::Store,
        Page,
    },
    state::AppState,
};
use serde_json::{json, Value};
use tower::ServiceExt as _;

fn app() -> Router {
    create_app(AppState::in_memory(), "/")
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap())),
        None => request.body(Body::empty()),
    }
    .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn create_client(app: &Router, name: &str) -> Value {
    let (status, body) = send(
        app,
        Method::POST,
        "/client",
        Some(json!({"name": name, "email": format!("{name}@example.com")})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body
}

#[tokio::test]
async fn root_reports_health() {
    let (status, body) = send(&app(), Method::GET, "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!("API is running"));
}

#[tokio::test]
async fn create_assigns_fresh_ids() {
    let app = app();
    let first = create_client(&app, "ada").await;
    let second = create_client(&app, "grace").await;
    assert_eq!(
        first,
        json!({"id": 1, "name": "ada", "email": "ada@example.com", "phone": null})
    );
    assert_eq!(second["id"], json!(2));
}

#[tokio::test]
async fn create_with_missing_field_is_unprocessable() {
    let app = app();
    let (status, body) = send(&app, Method::POST, "/client", Some(json!({"name": "ada"}))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["message"].as_str().unwrap().contains("email"));

    let (_, clients) = send(&app, Method::GET, "/clients", None).await;
    assert_eq!(clients, json!([]));
}

#[tokio::test]
async fn create_with_malformed_json_is_unprocessable() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/product")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn get_returns_entity_or_404() {
    let app = app();
    let created = create_client(&app, "ada").await;

    let (status, body) = send(&app, Method::GET, "/client/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, created);

    let (status, body) = send(&app, Method::GET, "/client/42", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"message": "Client 42 not found"}));
}

#[tokio::test]
async fn non_integer_id_is_unprocessable() {
    let (status, _) = send(&app(), Method::GET, "/client/abc", None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn delete_removes_entity() {
    let app = app();
    let created = create_client(&app, "ada").await;
    create_client(&app, "grace").await;

    let (status, body) = send(&app, Method::DELETE, "/client/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, created);

    let (status, _) = send(&app, Method::GET, "/client/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (_, clients) = send(&app, Method::GET, "/clients", None).await;
    let ids: Vec<_> = clients.as_array().unwrap().iter().map(|c| c["id"].clone()).collect();
    assert_eq!(ids, [json!(2)]);
}

#[tokio::test]
async fn delete_missing_is_404() {
    let (status, _) = send(&app(), Method::DELETE, "/client/7", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_overwrites_existing_entity() {
    let app = app();
    create_client(&app, "ada").await;
    let update = json!({"id": 1, "name": "Ada Lovelace", "email": "ada@example.org", "phone": "0123"});

    let (status, body) = send(&app, Method::PUT, "/client", Some(update.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, update);

    let (_, fetched) = send(&app, Method::GET, "/client/1", None).await;
    assert_eq!(fetched, update);
}

#[tokio::test]
async fn update_missing_is_404() {
    let (status, _) = send(
        &app(),
        Method::PUT,
        "/client",
        Some(json!({"id": 9, "name": "nobody", "email": "nobody@example.com"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_without_id_is_unprocessable() {
    let (status, _) = send(
        &app(),
        Method::PUT,
        "/client",
        Some(json!({"name": "nobody", "email": "nobody@example.com"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn list_is_windowed_by_skip_and_limit() {
    let app = app();
    for name in ["a", "b", "c", "d", "e"] {
        create_client(&app, name).await;
    }

    let (status, page) = send(&app, Method::GET, "/clients?skip=1&limit=2", None).await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<_> = page.as_array().unwrap().iter().map(|c| c["name"].clone()).collect();
    assert_eq!(names, [json!("b"), json!("c")]);

    let (_, all) = send(&app, Method::GET, "/clients?skip=0&limit=100", None).await;
    assert_eq!(all.as_array().unwrap().len(), 5);

    let (_, defaulted) = send(&app, Method::GET, "/clients", None).await;
    assert_eq!(defaulted, all);
}

#[tokio::test]
async fn list_defaults_to_one_hundred() {
    let app = app();
    for i in 0..105 {
        create_client(&app, &format!("client{i}")).await;
    }
    let (_, page) = send(&app, Method::GET, "/clients", None).await;
    let page = page.as_array().unwrap();
    assert_eq!(page.len(), 100);
    assert_eq!(page[0]["id"], json!(1));
}

#[tokio::test]
async fn negative_pagination_is_unprocessable() {
    let (status, _) = send(&app(), Method::GET, "/clients?limit=-1", None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn products_support_full_lifecycle() {
    let app = app();
    let (status, created) = send(
        &app,
        Method::POST,
        "/product",
        Some(json!({"name": "Kettle", "description": "1.7l", "price": 2499, "stock": 12})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["id"], json!(1));

    let mut update = created.clone();
    update["stock"] = json!(11);
    let (status, updated) = send(&app, Method::PUT, "/product", Some(update.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated, update);

    let (_, listed) = send(&app, Method::GET, "/products?skip=0&limit=10", None).await;
    assert_eq!(listed, json!([update.clone()]));

    let (status, deleted) = send(&app, Method::DELETE, "/product/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted, update);

    let (status, _) = send(&app, Method::GET, "/product/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn product_price_must_be_an_integer() {
    let (status, _) = send(
        &app(),
        Method::POST,
        "/product",
        Some(json!({"name": "Kettle", "description": "1.7l", "price": "cheap", "stock": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn resources_do_not_share_ids() {
    let app = app();
    create_client(&app, "ada").await;
    let (status, _) = send(&app, Method::GET, "/product/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn routes_mount_under_prefix() {
    let app = create_app(AppState::in_memory(), "/api/");
    let (status, _) = send(&app, Method::GET, "/api/clients", None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, Method::GET, "/api", None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, Method::GET, "/clients", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

/// A client table whose every query fails as if the pool were exhausted.
struct UnreachableClients;

#[async_trait]
impl Store<Client> for UnreachableClients {
    async fn insert(&self, _new: ClientInsert) -> Result<Client, DatabaseError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }
    async fn select_one(&self, _id: i64) -> Result<Option<Client>, DatabaseError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }
    async fn select_page(&self, _page: Page) -> Result<Vec<Client>, DatabaseError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }
    async fn update(&self, _record: Client) -> Result<Option<Client>, DatabaseError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }
    async fn delete(&self, _id: i64) -> Result<Option<Client>, DatabaseError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }
}

fn app_with_failing_clients() -> Router {
    let state = AppState {
        clients: Arc::new(UnreachableClients),
        ..AppState::in_memory()
    };
    create_app(state, "/")
}

#[tokio::test]
async fn database_errors_are_500_without_detail() {
    let app = app_with_failing_clients();
    let expected = json!({"message": "Internal Server Error"});

    let (status, body) = send(&app, Method::GET, "/client/1", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, expected);

    let (status, body) = send(
        &app,
        Method::POST,
        "/client",
        Some(json!({"name": "ada", "email": "ada@example.com"})),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, expected);

    let (status, body) = send(&app, Method::GET, "/clients", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, expected);

    let (status, _) = send(&app, Method::GET, "/products", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn non_integer_pagination_is_unprocessable() {
    let (status, body) = send(&app(), Method::GET, "/clients?skip=abc", None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["message"].is_string());
}
