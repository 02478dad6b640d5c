//! Context of an authenticated admin request.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The admin session behind the current request.
///
/// Produced by [`AdminGate::verify`](crate::admin::AdminGate::verify) and
/// passed to handlers, so "is an admin logged in" is explicit state rather
/// than a process-wide flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminContext {
    /// Opaque bearer token identifying the session.
    #[serde(skip_serializing)]
    pub session_token: String,
    /// Admin login name.
    pub username: String,
    /// When the session was opened.
    pub issued_at: DateTime<Utc>,
    /// When the session stops being accepted.
    pub expires_at: DateTime<Utc>,
}

impl AdminContext {
    /// Whether the session has expired at `now`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}
