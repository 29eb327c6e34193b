//! Models mapping to the product database table. Represents a product in the
//! catalogue.
use serde::{Deserialize, Serialize};
use sqlx::{query_as, FromRow};

use crate::db::{errors::DatabaseError, store::Record, ConnectionPool, Page};

/// INSERT model for a `product`. Used ONLY when adding a new product.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductInsert {
    /// The name of the product.
    pub name: String,
    /// A description of the product.
    pub description: String,
    /// The price of the product in minor currency units.
    pub price: i64, // i64s are used to match Postgres BIGINT types
    /// The count of the product left in stock.
    pub stock: i64,
}

/// A `Product` which is stored in the database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Product {
    /// The product's ID primary key.
    id: i64,
    /// The name of the product.
    pub name: String,
    /// A description of the product.
    pub description: String,
    /// The price of the product in minor currency units.
    pub price: i64,
    /// The count of the product left in stock.
    pub stock: i64,
}

impl ProductInsert {
    /// Store this INSERT model in the database and return a complete `Product` model.
    pub async fn store(self, db_client: &ConnectionPool) -> Result<Product, DatabaseError> {
        Ok(query_as::<_, Product>(
            "INSERT INTO product (name, description, price, stock) VALUES ($1, $2, $3, $4) \
             RETURNING id, name, description, price, stock",
        )
        .bind(self.name)
        .bind(self.description)
        .bind(self.price)
        .bind(self.stock)
        .fetch_one(db_client)
        .await?)
    }
}

impl Product {
    /// Select a `Product` from the database by its ID.
    pub async fn select_one(id: i64, db_client: &ConnectionPool) -> Result<Option<Self>, DatabaseError> {
        Ok(query_as::<_, Self>(
            "SELECT id, name, description, price, stock FROM product WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(db_client)
        .await?)
    }
    /// Retrieve a window of `Product`s ordered by ID.
    pub async fn select_page(page: Page, db_client: &ConnectionPool) -> Result<Vec<Self>, DatabaseError> {
        Ok(query_as::<_, Self>(
            "SELECT id, name, description, price, stock FROM product ORDER BY id LIMIT $1 OFFSET $2",
        )
        .bind(i64::from(page.limit))
        .bind(i64::from(page.skip))
        .fetch_all(db_client)
        .await?)
    }
    /// Get this product's ID primary key.
    pub const fn id(&self) -> i64 {
        self.id
    }
    /// Update the corresponding database record to match this model's state.
    pub async fn update(&self, db_client: &ConnectionPool) -> Result<Option<Self>, DatabaseError> {
        Ok(query_as::<_, Self>(
            "UPDATE product SET name = $1, description = $2, price = $3, stock = $4 WHERE id = $5 \
             RETURNING id, name, description, price, stock",
        )
        .bind(&self.name)
        .bind(&self.description)
        .bind(self.price)
        .bind(self.stock)
        .bind(self.id)
        .fetch_optional(db_client)
        .await?)
    }
    /// Delete a record by ID, returning it if it existed.
    pub async fn delete(id: i64, db_client: &ConnectionPool) -> Result<Option<Self>, DatabaseError> {
        Ok(query_as::<_, Self>(
            "DELETE FROM product WHERE id = $1 RETURNING id, name, description, price, stock",
        )
        .bind(id)
        .fetch_optional(db_client)
        .await?)
    }
}

impl Record for Product {
    type Insert = ProductInsert;

    fn id(&self) -> i64 {
        Product::id(self)
    }

    fn from_insert(id: i64, insert: ProductInsert) -> Self {
        Self {
            id,
            name: insert.name,
            description: insert.description,
            price: insert.price,
            stock: insert.stock,
        }
    }
}
