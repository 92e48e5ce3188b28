//! In-memory item gateway
//!
//! Used by tests and for running the service without a MongoDB server.
//! Identifiers use the same ObjectId hex format as the MongoDB gateway.

use std::sync::RwLock;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use super::errors::{StoreError, StoreResult};
use super::gateway::ItemGateway;
use crate::model::{Item, ItemCreate};

/// Insertion-ordered in-memory item store
#[derive(Debug, Default)]
pub struct InMemoryItemGateway {
    items: RwLock<Vec<Item>>,
}

impl InMemoryItemGateway {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Canonical form of an identifier, or NotFound when it cannot be one
fn normalize_id(id: &str) -> StoreResult<String> {
    ObjectId::parse_str(id)
        .map(|oid| oid.to_hex())
        .map_err(|_| StoreError::NotFound)
}

fn poisoned() -> StoreError {
    StoreError::Backend("Lock poisoned".to_string())
}

#[async_trait]
impl ItemGateway for InMemoryItemGateway {
    async fn list_all(&self) -> StoreResult<Vec<Item>> {
        let items = self.items.read().map_err(|_| poisoned())?;
        Ok(items.clone())
    }

    async fn insert(&self, item: ItemCreate) -> StoreResult<Item> {
        let item = Item::from_create(ObjectId::new().to_hex(), item);
        let mut items = self.items.write().map_err(|_| poisoned())?;
        items.push(item.clone());
        Ok(item)
    }

    async fn find_by_id(&self, id: &str) -> StoreResult<Item> {
        let id = normalize_id(id)?;
        let items = self.items.read().map_err(|_| poisoned())?;
        items
            .iter()
            .find(|i| i.id == id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn update_by_id(&self, id: &str, item: Item) -> StoreResult<Item> {
        let key = normalize_id(id)?;
        let mut items = self.items.write().map_err(|_| poisoned())?;
        let existing = items
            .iter_mut()
            .find(|i| i.id == key)
            .ok_or(StoreError::NotFound)?;

        existing.name = item.name.clone();
        existing.price = item.price;

        Ok(Item {
            id: id.to_string(),
            name: item.name,
            price: item.price,
        })
    }

    async fn delete_by_id(&self, id: &str) -> StoreResult<()> {
        let id = normalize_id(id)?;
        let mut items = self.items.write().map_err(|_| poisoned())?;

        let len_before = items.len();
        items.retain(|i| i.id != id);

        if items.len() == len_before {
            Err(StoreError::NotFound)
        } else {
            Ok(())
        }
    }
}
