//! Item gateway trait
//!
//! The seam between HTTP handlers and the document store. Handlers hold an
//! `Arc<dyn ItemGateway>` so the store can be swapped for an in-memory fake.

use async_trait::async_trait;

use super::errors::StoreResult;
use crate::model::{Item, ItemCreate};

/// Five logical operations over the item collection, plus a connectivity probe
#[async_trait]
pub trait ItemGateway: Send + Sync {
    /// Return every record in store-defined order
    async fn list_all(&self) -> StoreResult<Vec<Item>>;

    /// Persist a new record and return it with its assigned identifier
    async fn insert(&self, item: ItemCreate) -> StoreResult<Item>;

    /// Look up exactly one record
    async fn find_by_id(&self, id: &str) -> StoreResult<Item>;

    /// Replace `name` and `price` of the record matching `id`.
    ///
    /// The identifier carried in `item` is ignored; the returned record
    /// always carries `id`. Never creates a record.
    async fn update_by_id(&self, id: &str, item: Item) -> StoreResult<Item>;

    /// Remove the record matching `id`
    async fn delete_by_id(&self, id: &str) -> StoreResult<()>;

    /// Check that the store is reachable
    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}
