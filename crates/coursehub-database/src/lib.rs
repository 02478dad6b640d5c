//! # coursehub-database
//!
//! Catalog store implementations for CourseHub: a PostgreSQL document
//! table and an in-process map, plus connection pooling, migrations,
//! and the demo seed.

pub mod connection;
pub mod migration;
pub mod seed;
pub mod stores;

pub use connection::DatabasePool;
pub use stores::{CatalogStore, MemoryCatalogStore, PgCatalogStore, connect_store};
