//! Abstracted access to the tables backing each resource. Routes and services
//! only ever see a `Store`, so the backend can be swapped at startup.
mod memory;
mod postgres;

use async_trait::async_trait;

use super::{errors::DatabaseError, Page};

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// A row type with an integer primary key assigned by the store.
pub trait Record: Clone + Send + Sync + 'static {
    /// The payload used to create a new row, lacking an ID.
    type Insert: Send + 'static;

    /// The row's primary key.
    fn id(&self) -> i64;

    /// Build a row from an insert payload and a freshly assigned ID.
    fn from_insert(id: i64, insert: Self::Insert) -> Self;
}

/// Single-row operations over the table holding `R`.
#[async_trait]
pub trait Store<R: Record>: Send + Sync {
    /// Insert a new row and return it with its assigned ID.
    async fn insert(&self, new: R::Insert) -> Result<R, DatabaseError>;
    /// Fetch the row with the given ID.
    async fn select_one(&self, id: i64) -> Result<Option<R>, DatabaseError>;
    /// Fetch a window of rows ordered by ID.
    async fn select_page(&self, page: Page) -> Result<Vec<R>, DatabaseError>;
    /// Overwrite the row sharing `record`'s ID. `None` if there is no such row.
    async fn update(&self, record: R) -> Result<Option<R>, DatabaseError>;
    /// Remove the row with the given ID, returning it if it existed.
    async fn delete(&self, id: i64) -> Result<Option<R>, DatabaseError>;
}
