//! Core traits defined in `coursehub-core` and implemented by other crates.

pub mod document_store;

pub use document_store::DocumentStore;
