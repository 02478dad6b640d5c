//! Route handlers organized by domain.

pub mod auth;
pub mod catalog;
pub mod courses;
pub mod editor;
pub mod health;
