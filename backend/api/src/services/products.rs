use crate::db::{
    errors::DatabaseError,
    models::product::{Product, ProductInsert},
    store::Store,
    Page,
};

pub async fn create_product(
    data: ProductInsert,
    store: &dyn Store<Product>,
) -> Result<Product, DatabaseError> {
    store.insert(data).await
}

pub async fn delete_product(
    id: i64,
    store: &dyn Store<Product>,
) -> Result<Option<Product>, DatabaseError> {
    store.delete(id).await
}

pub async fn update_product(
    product: Product,
    store: &dyn Store<Product>,
) -> Result<Option<Product>, DatabaseError> {
    store.update(product).await
}

pub async fn get_product_by_id(
    id: i64,
    store: &dyn Store<Product>,
) -> Result<Option<Product>, DatabaseError> {
    store.select_one(id).await
}

pub async fn get_products(
    page: Page,
    store: &dyn Store<Product>,
) -> Result<Vec<Product>, DatabaseError> {
    store.select_page(page).await
}
