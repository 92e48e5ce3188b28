//! # HTTP Server Module
//!
//! Exposes the item collection over HTTP.
//!
//! # Endpoints
//!
//! - `GET /` - Greeting
//! - `GET /health` - Health check, probes the store
//! - `GET|POST /items/` - List and create
//! - `GET|PUT|DELETE /items/:id` - Read, update, delete one item

pub mod config;
pub mod errors;
pub mod extract;
pub mod item_routes;
pub mod root_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult};
pub use item_routes::ItemState;
pub use server::HttpServer;
