//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use coursehub_service::{EditorStatus, SaveOutcome};

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Always `true`.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

impl MessageResponse {
    /// Wrap a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `ok` or `degraded`.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// Seconds since start.
    pub uptime_seconds: u64,
    /// Configured store backend.
    pub store: String,
    /// Whether the store answered.
    pub store_healthy: bool,
}

/// Admin login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Bearer token for subsequent admin calls.
    pub token: String,
    /// Admin login name.
    pub username: String,
    /// Token expiry.
    pub expires_at: DateTime<Utc>,
}

/// Whether the caller holds a live admin session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    /// `true` for a live admin token.
    pub is_admin: bool,
    /// Admin login name, when authenticated.
    pub username: Option<String>,
    /// Token expiry, when authenticated.
    pub expires_at: Option<DateTime<Utc>>,
}

/// Result of adding a subject or module.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddedResponse {
    /// Id of the new element.
    pub id: String,
    /// Editor after the change.
    pub editor: EditorStatus,
}

/// Result of a save.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveResponse {
    /// What happened to the session.
    pub outcome: SaveOutcome,
    /// Editor after the save.
    pub editor: EditorStatus,
}
