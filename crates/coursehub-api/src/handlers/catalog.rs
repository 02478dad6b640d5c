//! Public catalog handlers: listing, detail, outline, lessons, categories.

use axum::Json;
use axum::extract::{Path, Query, State};

use coursehub_core::error::AppError;
use coursehub_core::types::CourseId;
use coursehub_entity::{Course, CourseOutline, LessonPosition};
use coursehub_service::{CategoryInfo, LessonView};

use crate::dto::request::SearchQuery;
use crate::dto::response::ApiResponse;
use crate::error::ApiResult;
use crate::state::AppState;

/// GET /api/courses?q=...
pub async fn list_courses(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> ApiResult<Json<ApiResponse<Vec<Course>>>> {
    let courses = match query.q.as_deref() {
        Some(q) => state.catalog.search(q).await?,
        None => state.catalog.list().await?,
    };
    Ok(Json(ApiResponse::ok(courses)))
}

/// GET /api/courses/{id}
pub async fn get_course(
    State(state): State<AppState>,
    Path(id): Path<CourseId>,
) -> ApiResult<Json<ApiResponse<Course>>> {
    let course = state.catalog.get(&id).await?;
    Ok(Json(ApiResponse::ok(course)))
}

/// GET /api/courses/{id}/outline
pub async fn get_outline(
    State(state): State<AppState>,
    Path(id): Path<CourseId>,
) -> ApiResult<Json<ApiResponse<CourseOutline>>> {
    let outline = state.catalog.outline(&id).await?;
    Ok(Json(ApiResponse::ok(outline)))
}

/// GET /api/courses/{id}/lessons
pub async fn first_lesson(
    State(state): State<AppState>,
    Path(id): Path<CourseId>,
) -> ApiResult<Json<ApiResponse<LessonView>>> {
    let lesson = state.catalog.first_lesson(&id).await?;
    Ok(Json(ApiResponse::ok(lesson)))
}

/// GET /api/courses/{id}/lessons/{unit}/{lesson}
///
/// `unit` and `lesson` are 1-based, as shown to learners.
pub async fn get_lesson(
    State(state): State<AppState>,
    Path((id, unit, lesson)): Path<(CourseId, usize, usize)>,
) -> ApiResult<Json<ApiResponse<LessonView>>> {
    if unit == 0 || lesson == 0 {
        return Err(AppError::validation("unit and lesson numbers start at 1").into());
    }
    let position = LessonPosition::new(unit - 1, lesson - 1);
    let view = state.catalog.lesson(&id, position).await?;
    Ok(Json(ApiResponse::ok(view)))
}

/// GET /api/categories
pub async fn list_categories(
    State(state): State<AppState>,
) -> Json<ApiResponse<Vec<CategoryInfo>>> {
    Json(ApiResponse::ok(state.catalog.categories()))
}
