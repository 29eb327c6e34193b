use async_trait::async_trait;

use super::Store;
use crate::db::{
    errors::DatabaseError,
    models::{
        client::{Client, ClientInsert},
        product::{Product, ProductInsert},
    },
    ConnectionPool, Page,
};

/// Postgres-backed store. Cheap to clone, shares the underlying pool.
#[derive(Clone)]
pub struct PgStore {
    db_conn: ConnectionPool,
}

impl PgStore {
    pub const fn new(db_conn: ConnectionPool) -> Self {
        Self { db_conn }
    }
}

#[async_trait]
impl Store<Client> for PgStore {
    async fn insert(&self, new: ClientInsert) -> Result<Client, DatabaseError> {
        new.store(&self.db_conn).await
    }
    async fn select_one(&self, id: i64) -> Result<Option<Client>, DatabaseError> {
        Client::select_one(id, &self.db_conn).await
    }
    async fn select_page(&self, page: Page) -> Result<Vec<Client>, DatabaseError> {
        Client::select_page(page, &self.db_conn).await
    }
    async fn update(&self, record: Client) -> Result<Option<Client>, DatabaseError> {
        record.update(&self.db_conn).await
    }
    async fn delete(&self, id: i64) -> Result<Option<Client>, DatabaseError> {
        Client::delete(id, &self.db_conn).await
    }
}

#[async_trait]
impl Store<Product> for PgStore {
    async fn insert(&self, new: ProductInsert) -> Result<Product, DatabaseError> {
        new.store(&self.db_conn).await
    }
    async fn select_one(&self, id: i64) -> Result<Option<Product>, DatabaseError> {
        Product::select_one(id, &self.db_conn).await
    }
    async fn select_page(&self, page: Page) -> Result<Vec<Product>, DatabaseError> {
        Product::select_page(page, &self.db_conn).await
    }
    async fn update(&self, record: Product) -> Result<Option<Product>, DatabaseError> {
        record.update(&self.db_conn).await
    }
    async fn delete(&self, id: i64) -> Result<Option<Product>, DatabaseError> {
        Product::delete(id, &self.db_conn).await
    }
}
