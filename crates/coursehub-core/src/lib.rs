//! # coursehub-core
//!
//! Core crate for CourseHub. Contains the unified error system,
//! configuration schemas, typed identifiers, and the document store
//! contract consumed by the service layer.
//!
//! This crate has **no** internal dependencies on other CourseHub crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
