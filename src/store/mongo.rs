//! MongoDB-backed item gateway
//!
//! One `Client` is created at startup and shared by every request; the
//! driver owns connection pooling. Each operation is a single-document
//! command, so no locking happens at this layer.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::{Client, Collection};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::config::StoreConfig;
use super::errors::{StoreError, StoreResult};
use super::gateway::ItemGateway;
use crate::model::{Item, ItemCreate};

/// Stored document shape
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ItemDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    name: String,
    price: f64,
}

impl From<ItemDocument> for Item {
    fn from(document: ItemDocument) -> Self {
        Self {
            id: document.id.to_hex(),
            name: document.name,
            price: document.price,
        }
    }
}

/// Parse a path identifier. Malformed identifiers cannot match any record.
fn parse_id(id: &str) -> StoreResult<ObjectId> {
    ObjectId::parse_str(id).map_err(|_| StoreError::NotFound)
}

/// Item gateway over a MongoDB collection
pub struct MongoItemGateway {
    client: Client,
    database: String,
    collection: Collection<ItemDocument>,
}

impl MongoItemGateway {
    /// Build a client from the configured connection string.
    ///
    /// The driver connects lazily, so an unreachable server is only
    /// reported by the first command (see `ping`).
    pub async fn connect(config: &StoreConfig) -> StoreResult<Self> {
        let client = Client::with_uri_str(&config.uri).await?;
        Ok(Self::with_client(client, &config.database, &config.collection))
    }

    /// Wrap an existing client
    pub fn with_client(client: Client, database: &str, collection: &str) -> Self {
        let collection = client.database(database).collection(collection);
        Self {
            client,
            database: database.to_string(),
            collection,
        }
    }
}

#[async_trait]
impl ItemGateway for MongoItemGateway {
    async fn list_all(&self) -> StoreResult<Vec<Item>> {
        let cursor = self.collection.find(doc! {}).await?;
        let documents: Vec<ItemDocument> = cursor.try_collect().await?;
        Ok(documents.into_iter().map(Item::from).collect())
    }

    async fn insert(&self, item: ItemCreate) -> StoreResult<Item> {
        let document = ItemDocument {
            id: ObjectId::new(),
            name: item.name,
            price: item.price,
        };
        self.collection.insert_one(&document).await?;
        debug!(id = %document.id, "inserted item");
        Ok(document.into())
    }

    async fn find_by_id(&self, id: &str) -> StoreResult<Item> {
        let oid = parse_id(id)?;
        self.collection
            .find_one(doc! { "_id": oid })
            .await?
            .map(Item::from)
            .ok_or(StoreError::NotFound)
    }

    async fn update_by_id(&self, id: &str, item: Item) -> StoreResult<Item> {
        let oid = parse_id(id)?;
        let update = doc! {
            "$set": { "name": item.name.clone(), "price": item.price }
        };
        let result = self.collection.update_one(doc! { "_id": oid }, update).await?;

        // matched, not modified: resubmitting identical values is still a hit
        if result.matched_count == 0 {
            return Err(StoreError::NotFound);
        }
        debug!(id = %oid, "updated item");
        Ok(Item {
            id: id.to_string(),
            name: item.name,
            price: item.price,
        })
    }

    async fn delete_by_id(&self, id: &str) -> StoreResult<()> {
        let oid = parse_id(id)?;
        let result = self.collection.delete_one(doc! { "_id": oid }).await?;
        if result.deleted_count == 0 {
            return Err(StoreError::NotFound);
        }
        debug!(id = %oid, "deleted item");
        Ok(())
    }

    async fn ping(&self) -> StoreResult<()> {
        self.client
            .database(&self.database)
            .run_command(doc! { "ping": 1 })
            .await?;
        Ok(())
    }
}
