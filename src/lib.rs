//! itemstore - CRUD HTTP service over a single MongoDB item collection
//!
//! Layers, leaves first:
//! - `model` - item record shapes
//! - `store` - gateway from item operations to the document store
//! - `http_server` - routes, error mapping, server bootstrap
//! - `observability` - log subscriber setup
//! - `cli` - command-line entry points

pub mod cli;
pub mod http_server;
pub mod model;
pub mod observability;
pub mod store;
