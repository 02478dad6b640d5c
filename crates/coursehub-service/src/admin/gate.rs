//! Issues and checks admin session tokens against the shared credential.

use chrono::{Duration, Utc};
use dashmap::DashMap;
use tracing::{info, warn};
use uuid::Uuid;

use coursehub_core::config::AdminConfig;
use coursehub_core::error::AppError;
use coursehub_core::result::AppResult;

use crate::context::AdminContext;

/// Upper bound on configured session lifetime (ten years).
const MAX_SESSION_TTL_MINUTES: u64 = 60 * 24 * 365 * 10;

/// Holds live admin sessions keyed by token.
///
/// There is one shared admin credential; any number of sessions may be
/// open with it at once.
#[derive(Debug)]
pub struct AdminGate {
    /// Admin configuration.
    config: AdminConfig,
    /// Live sessions by token.
    sessions: DashMap<String, AdminContext>,
}

impl AdminGate {
    /// Creates a gate with no sessions.
    pub fn new(config: AdminConfig) -> Self {
        if config.password.is_empty() {
            warn!("Admin password is empty; admin login is disabled");
        }
        Self {
            config,
            sessions: DashMap::new(),
        }
    }

    /// Check the credential and open a session.
    pub fn login(&self, username: &str, password: &str) -> AppResult<AdminContext> {
        if self.config.password.is_empty() {
            return Err(AppError::authentication("Admin login is disabled"));
        }
        if username != self.config.username || password != self.config.password {
            warn!(username = %username, "Rejected admin login");
            return Err(AppError::authentication("Invalid username or password"));
        }

        let now = Utc::now();
        let ttl = self.config.session_ttl_minutes.min(MAX_SESSION_TTL_MINUTES) as i64;
        let context = AdminContext {
            session_token: Uuid::new_v4().simple().to_string(),
            username: username.to_string(),
            issued_at: now,
            expires_at: now + Duration::minutes(ttl),
        };
        self.sessions
            .insert(context.session_token.clone(), context.clone());

        info!(username = %username, expires_at = %context.expires_at, "Admin logged in");
        Ok(context)
    }

    /// Resolve a bearer token to its live session.
    ///
    /// Expired sessions are removed and rejected.
    pub fn verify(&self, token: &str) -> AppResult<AdminContext> {
        let context = self
            .sessions
            .get(token)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| AppError::authentication("Invalid or expired admin session"))?;

        if context.is_expired_at(Utc::now()) {
            self.sessions.remove(token);
            return Err(AppError::authentication("Invalid or expired admin session"));
        }
        Ok(context)
    }

    /// Whether `token` names a live, unexpired session.
    pub fn is_active(&self, token: &str) -> bool {
        let now = Utc::now();
        self.sessions
            .get(token)
            .is_some_and(|entry| !entry.value().is_expired_at(now))
    }

    /// End the session. Returns `false` if the token was unknown.
    pub fn logout(&self, token: &str) -> bool {
        let removed = self.sessions.remove(token).is_some();
        if removed {
            info!("Admin logged out");
        }
        removed
    }

    /// Drop every expired session and return the tokens removed.
    pub fn purge_expired(&self) -> Vec<String> {
        let now = Utc::now();
        let expired: Vec<String> = self
            .sessions
            .iter()
            .filter(|entry| entry.value().is_expired_at(now))
            .map(|entry| entry.key().clone())
            .collect();
        for token in &expired {
            self.sessions.remove(token);
        }
        expired
    }

    /// Number of live sessions.
    pub fn active_sessions(&self) -> usize {
        self.sessions.len()
    }
}
