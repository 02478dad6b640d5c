//! Admin REST handlers that write whole course documents.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use coursehub_core::types::CourseId;
use coursehub_entity::Course;

use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiResult;
use crate::extractors::AdminUser;
use crate::state::AppState;

/// POST /api/courses
pub async fn create_course(
    State(state): State<AppState>,
    _admin: AdminUser,
    Json(course): Json<Course>,
) -> ApiResult<(StatusCode, Json<ApiResponse<Course>>)> {
    let course = state.catalog.create(course).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(course))))
}

/// PUT /api/courses/{id}
pub async fn replace_course(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<CourseId>,
    Json(course): Json<Course>,
) -> ApiResult<Json<ApiResponse<Course>>> {
    let course = state.catalog.replace(&id, course).await?;
    Ok(Json(ApiResponse::ok(course)))
}

/// DELETE /api/courses/{id}
///
/// Any editor session holding the course is closed.
pub async fn delete_course(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<CourseId>,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    state.catalog.delete(&id).await?;
    state.editors.forget_course(&id).await;

    Ok(Json(ApiResponse::ok(MessageResponse::new(format!(
        "Course '{id}' deleted"
    )))))
}
