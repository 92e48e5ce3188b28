//! # Store Gateway
//!
//! Translates the five item operations into calls against the "items"
//! collection of the "store" database.
//!
//! - `ItemGateway` - the trait HTTP handlers depend on
//! - `MongoItemGateway` - MongoDB driver implementation
//! - `InMemoryItemGateway` - process-local implementation for tests and development

pub mod config;
pub mod errors;
pub mod gateway;
pub mod memory;
pub mod mongo;

use std::sync::Arc;

pub use config::{StoreBackend, StoreConfig};
pub use errors::{StoreError, StoreResult};
pub use gateway::ItemGateway;
pub use memory::InMemoryItemGateway;
pub use mongo::MongoItemGateway;

/// Build the gateway selected by `config`.
///
/// Called once at startup; the returned handle is shared by all requests.
pub async fn connect(config: &StoreConfig) -> StoreResult<Arc<dyn ItemGateway>> {
    match config.backend {
        StoreBackend::Mongo => Ok(Arc::new(MongoItemGateway::connect(config).await?)),
        StoreBackend::Memory => Ok(Arc::new(InMemoryItemGateway::new())),
    }
}
