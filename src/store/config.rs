//! Store connection configuration

use serde::{Deserialize, Serialize};

/// Which gateway implementation backs the service
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// MongoDB through the official driver
    #[default]
    Mongo,
    /// Process-local store, contents lost on exit
    Memory,
}

/// Document store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Backend selection (default: "mongo")
    #[serde(default)]
    pub backend: StoreBackend,

    /// Connection string (default: "mongodb://localhost:27017/")
    #[serde(default = "default_uri")]
    pub uri: String,

    /// Database name (default: "store")
    #[serde(default = "default_database")]
    pub database: String,

    /// Collection name (default: "items")
    #[serde(default = "default_collection")]
    pub collection: String,
}

fn default_uri() -> String {
    "mongodb://localhost:27017/".to_string()
}

fn default_database() -> String {
    "store".to_string()
}

fn default_collection() -> String {
    "items".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            uri: default_uri(),
            database: default_database(),
            collection: default_collection(),
        }
    }
}

impl StoreConfig {
    /// Human-readable description of the store target, for logs
    pub fn target(&self) -> String {
        match self.backend {
            StoreBackend::Mongo => format!("{} ({}.{})", self.uri, self.database, self.collection),
            StoreBackend::Memory => "in-memory".to_string(),
        }
    }
}
