//! Admin auth handlers: login, logout, session.

use axum::Json;
use axum::extract::State;
use validator::Validate;

use crate::dto::request::LoginRequest;
use crate::dto::response::{ApiResponse, LoginResponse, MessageResponse, SessionResponse};
use crate::error::ApiResult;
use crate::extractors::{AdminUser, MaybeAdmin};
use crate::state::AppState;

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<ApiResponse<LoginResponse>>> {
    req.validate()?;
    let context = state.admin_gate.login(&req.username, &req.password)?;

    Ok(Json(ApiResponse::ok(LoginResponse {
        token: context.session_token,
        username: context.username,
        expires_at: context.expires_at,
    })))
}

/// POST /api/auth/logout
///
/// Ends the session and drops its editor, discarding any unsaved course.
pub async fn logout(
    State(state): State<AppState>,
    admin: AdminUser,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    state.admin_gate.logout(admin.token());
    state.editors.release(admin.token());

    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "Logged out successfully",
    ))))
}

/// GET /api/auth/session
pub async fn session(MaybeAdmin(context): MaybeAdmin) -> Json<ApiResponse<SessionResponse>> {
    Json(ApiResponse::ok(SessionResponse {
        is_admin: context.is_some(),
        username: context.as_ref().map(|c| c.username.clone()),
        expires_at: context.as_ref().map(|c| c.expires_at),
    }))
}
