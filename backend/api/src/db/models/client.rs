//! Models mapping to the client database table. Represents a customer on
//! record with the business.
use serde::{Deserialize, Serialize};
use sqlx::{query_as, FromRow};

use crate::db::{errors::DatabaseError, store::Record, ConnectionPool, Page};

/// INSERT model for a `client`. Used ONLY when adding a new client.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientInsert {
    /// The client's full name.
    pub name: String,
    /// Contact email address.
    pub email: String,
    /// Contact phone number, if any.
    pub phone: Option<String>,
}

/// A `Client` which is stored in the database. Also accepted as the body of
/// an update, where `id` selects the row to overwrite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Client {
    /// The client's ID primary key.
    id: i64,
    /// The client's full name.
    pub name: String,
    /// Contact email address.
    pub email: String,
    /// Contact phone number, if any.
    pub phone: Option<String>,
}

impl ClientInsert {
    /// Store this INSERT model in the database and return a complete `Client` model.
    pub async fn store(self, db_client: &ConnectionPool) -> Result<Client, DatabaseError> {
        Ok(query_as::<_, Client>(
            "INSERT INTO client (name, email, phone) VALUES ($1, $2, $3) RETURNING id, name, email, phone",
        )
        .bind(self.name)
        .bind(self.email)
        .bind(self.phone)
        .fetch_one(db_client)
        .await?)
    }
}

impl Client {
    /// Select a `Client` from the database by its ID.
    pub async fn select_one(id: i64, db_client: &ConnectionPool) -> Result<Option<Self>, DatabaseError> {
        Ok(query_as::<_, Self>("SELECT id, name, email, phone FROM client WHERE id = $1")
            .bind(id)
            .fetch_optional(db_client)
            .await?)
    }
    /// Retrieve a window of `Client`s ordered by ID.
    pub async fn select_page(page: Page, db_client: &ConnectionPool) -> Result<Vec<Self>, DatabaseError> {
        Ok(query_as::<_, Self>(
            "SELECT id, name, email, phone FROM client ORDER BY id LIMIT $1 OFFSET $2",
        )
        .bind(i64::from(page.limit))
        .bind(i64::from(page.skip))
        .fetch_all(db_client)
        .await?)
    }
    /// Get this client's ID primary key.
    pub const fn id(&self) -> i64 {
        self.id
    }
    /// Overwrite the corresponding database record with this model's state.
    /// Returns `None` if no record has this model's ID.
    pub async fn update(&self, db_client: &ConnectionPool) -> Result<Option<Self>, DatabaseError> {
        Ok(query_as::<_, Self>(
            "UPDATE client SET name = $1, email = $2, phone = $3 WHERE id = $4 RETURNING id, name, email, phone",
        )
        .bind(&self.name)
        .bind(&self.email)
        .bind(&self.phone)
        .bind(self.id)
        .fetch_optional(db_client)
        .await?)
    }
    /// Delete a record by ID, returning it if it existed.
    pub async fn delete(id: i64, db_client: &ConnectionPool) -> Result<Option<Self>, DatabaseError> {
        Ok(query_as::<_, Self>("DELETE FROM client WHERE id = $1 RETURNING id, name, email, phone")
            .bind(id)
            .fetch_optional(db_client)
            .await?)
    }
}

impl Record for Client {
    type Insert = ClientInsert;

    fn id(&self) -> i64 {
        Client::id(self)
    }

    fn from_insert(id: i64, insert: ClientInsert) -> Self {
        Self {
            id,
            name: insert.name,
            email: insert.email,
            phone: insert.phone,
        }
    }
}
