//! `AdminUser` extractor: resolves the bearer token to a live admin session.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use coursehub_core::error::AppError;
use coursehub_service::AdminContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Authenticated admin available in handlers.
#[derive(Debug, Clone)]
pub struct AdminUser(pub AdminContext);

impl AdminUser {
    /// Returns the inner session.
    pub fn context(&self) -> &AdminContext {
        &self.0
    }

    /// The bearer token this request carried.
    pub fn token(&self) -> &str {
        &self.0.session_token
    }
}

impl std::ops::Deref for AdminUser {
    type Target = AdminContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

fn bearer_token(parts: &Parts) -> Result<&str, AppError> {
    let header = parts
        .headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::authentication("Missing Authorization header"))?;

    header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::authentication("Invalid Authorization header format"))
}

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)?;
        let context = state.admin_gate.verify(token)?;
        Ok(AdminUser(context))
    }
}

/// Like [`AdminUser`] but never rejects; `None` for visitors.
#[derive(Debug, Clone)]
pub struct MaybeAdmin(pub Option<AdminContext>);

impl FromRequestParts<AppState> for MaybeAdmin {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let context = bearer_token(parts)
            .ok()
            .and_then(|token| state.admin_gate.verify(token).ok());
        Ok(MaybeAdmin(context))
    }
}
