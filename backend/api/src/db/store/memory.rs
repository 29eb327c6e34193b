use async_trait::async_trait;
use core::sync::atomic::{AtomicI64, Ordering};
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use super::{Record, Store};
use crate::db::{errors::DatabaseError, Page};

/// A process-local table. IDs start at 1 and are never reused, mirroring a
/// Postgres `BIGSERIAL` column.
pub struct MemoryStore<R> {
    rows: RwLock<BTreeMap<i64, R>>,
    next_id: AtomicI64,
}

impl<R> MemoryStore<R> {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl<R> Default for MemoryStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<R: Record> Store<R> for MemoryStore<R> {
    async fn insert(&self, new: R::Insert) -> Result<R, DatabaseError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let record = R::from_insert(id, new);
        self.rows.write().await.insert(id, record.clone());
        Ok(record)
    }

    async fn select_one(&self, id: i64) -> Result<Option<R>, DatabaseError> {
        Ok(self.rows.read().await.get(&id).cloned())
    }

    async fn select_page(&self, page: Page) -> Result<Vec<R>, DatabaseError> {
        let skip = usize::try_from(page.skip).unwrap_or(usize::MAX);
        let limit = usize::try_from(page.limit).unwrap_or(usize::MAX);
        Ok(self
            .rows
            .read()
            .await
            .values()
            .skip(skip)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn update(&self, record: R) -> Result<Option<R>, DatabaseError> {
        let mut rows = self.rows.write().await;
        Ok(rows.get_mut(&record.id()).map(|row| {
            *row = record.clone();
            record
        }))
    }

    async fn delete(&self, id: i64) -> Result<Option<R>, DatabaseError> {
        Ok(self.rows.write().await.remove(&id))
    }
}
