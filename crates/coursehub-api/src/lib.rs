//! # coursehub-api
//!
//! HTTP API layer for CourseHub built on Axum.
//!
//! Provides the public catalog routes, admin login, whole-document course
//! writes, and the tree editor routes, plus middleware, extractors, DTOs,
//! and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, prepare_store, run_server};
pub use error::{ApiError, ApiResult};
pub use state::AppState;
