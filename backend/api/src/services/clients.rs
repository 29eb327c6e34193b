use crate::db::{
    errors::DatabaseError,
    models::client::{Client, ClientInsert},
    store::Store,
    Page,
};

pub async fn create_client(
    data: ClientInsert,
    store: &dyn Store<Client>,
) -> Result<Client, DatabaseError> {
    store.insert(data).await
}

pub async fn delete_client(
    id: i64,
    store: &dyn Store<Client>,
) -> Result<Option<Client>, DatabaseError> {
    store.delete(id).await
}

pub async fn update_client(
    client: Client,
    store: &dyn Store<Client>,
) -> Result<Option<Client>, DatabaseError> {
    store.update(client).await
}

pub async fn get_client_by_id(
    id: i64,
    store: &dyn Store<Client>,
) -> Result<Option<Client>, DatabaseError> {
    store.select_one(id).await
}

pub async fn get_clients(
    page: Page,
    store: &dyn Store<Client>,
) -> Result<Vec<Client>, DatabaseError> {
    store.select_page(page).await
}
