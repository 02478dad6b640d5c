//! HTTP integration tests against the in-memory catalog store.

mod auth_test;
mod catalog_test;
mod editor_test;
mod helpers;
