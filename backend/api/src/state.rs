//! Defines the state shared across the Axum application.
use std::sync::Arc;

use crate::db::{
    self,
    models::{client::Client, product::Product},
    store::{MemoryStore, PgStore, Store},
};

#[derive(Clone)]
/// The state struct shared across routers.
pub struct AppState {
    /// Storage for client records.
    pub clients: Arc<dyn Store<Client>>,
    /// Storage for product records.
    pub products: Arc<dyn Store<Product>>,
}

impl AppState {
    /// State backed by a Postgres connection pool.
    pub fn postgres(db_conn: db::ConnectionPool) -> Self {
        let store = Arc::new(PgStore::new(db_conn));
        Self {
            clients: store.clone(),
            products: store,
        }
    }

    /// State backed by empty in-process tables.
    pub fn in_memory() -> Self {
        Self {
            clients: Arc::new(MemoryStore::<Client>::new()),
            products: Arc::new(MemoryStore::<Product>::new()),
        }
    }
}
