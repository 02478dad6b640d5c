//! Tree editor handlers. Each admin session owns one editor.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use validator::Validate;

use coursehub_core::result::AppResult;
use coursehub_core::types::{CourseId, ModuleId, SubjectId};
use coursehub_entity::{CourseField, ModuleField, SubjectField};
use coursehub_service::{CourseDeletion, EditorService, EditorStatus, TreeEditor};

use crate::dto::request::{AddItemRequest, MoveRequest, SetCourseIdRequest, SetFieldRequest};
use crate::dto::response::{AddedResponse, ApiResponse, SaveResponse};
use crate::error::ApiResult;
use crate::extractors::AdminUser;
use crate::state::AppState;

type StatusJson = Json<ApiResponse<EditorStatus>>;

fn editor(state: &AppState, admin: &AdminUser) -> Arc<EditorService> {
    state.editors.editor_for(admin.token())
}

/// Apply one editor operation and answer with the resulting status.
async fn edit<T>(
    state: &AppState,
    admin: &AdminUser,
    operation: impl FnOnce(&mut TreeEditor) -> AppResult<T>,
) -> ApiResult<StatusJson> {
    let editor = editor(state, admin);
    editor.apply(operation).await?;
    Ok(Json(ApiResponse::ok(editor.status().await)))
}

/// GET /api/editor
pub async fn status(State(state): State<AppState>, admin: AdminUser) -> StatusJson {
    Json(ApiResponse::ok(editor(&state, &admin).status().await))
}

/// DELETE /api/editor
///
/// Drops the open course without touching the store.
pub async fn discard(State(state): State<AppState>, admin: AdminUser) -> StatusJson {
    let editor = editor(&state, &admin);
    editor.discard().await;
    Json(ApiResponse::ok(editor.status().await))
}

/// POST /api/editor/courses
pub async fn open_new(State(state): State<AppState>, admin: AdminUser) -> ApiResult<StatusJson> {
    edit(&state, &admin, TreeEditor::open_new).await
}

/// POST /api/editor/courses/{id}
pub async fn open_existing(
    State(state): State<AppState>,
    admin: AdminUser,
    Path(id): Path<CourseId>,
) -> ApiResult<StatusJson> {
    let editor = editor(&state, &admin);
    editor.open_existing(&id).await?;
    Ok(Json(ApiResponse::ok(editor.status().await)))
}

/// DELETE /api/editor/courses/{id}
///
/// Deletes the stored course and returns the refreshed catalog. Other
/// admins editing the same course have their sessions closed.
pub async fn delete_course(
    State(state): State<AppState>,
    admin: AdminUser,
    Path(id): Path<CourseId>,
) -> ApiResult<Json<ApiResponse<CourseDeletion>>> {
    let deletion = editor(&state, &admin).delete_course(&id).await?;
    state.editors.forget_course(&id).await;
    Ok(Json(ApiResponse::ok(deletion)))
}

/// POST /api/editor/save
pub async fn save(
    State(state): State<AppState>,
    admin: AdminUser,
) -> ApiResult<Json<ApiResponse<SaveResponse>>> {
    let editor = editor(&state, &admin);
    let outcome = editor.save().await?;
    Ok(Json(ApiResponse::ok(SaveResponse {
        outcome,
        editor: editor.status().await,
    })))
}

// ── Navigation ───────────────────────────────────────────────────────

/// POST /api/editor/subjects/{subject}/open
pub async fn open_subject(
    State(state): State<AppState>,
    admin: AdminUser,
    Path(index): Path<usize>,
) -> ApiResult<StatusJson> {
    edit(&state, &admin, |e| e.open_subject(index)).await
}

/// POST /api/editor/modules/{module}/open
pub async fn open_module(
    State(state): State<AppState>,
    admin: AdminUser,
    Path(index): Path<usize>,
) -> ApiResult<StatusJson> {
    edit(&state, &admin, |e| e.open_module(index)).await
}

/// POST /api/editor/back
pub async fn back(State(state): State<AppState>, admin: AdminUser) -> ApiResult<StatusJson> {
    edit(&state, &admin, TreeEditor::back).await
}

// ── Course root ──────────────────────────────────────────────────────

/// PUT /api/editor/course/id
pub async fn set_course_id(
    State(state): State<AppState>,
    admin: AdminUser,
    Json(req): Json<SetCourseIdRequest>,
) -> ApiResult<StatusJson> {
    req.validate()?;
    edit(&state, &admin, |e| e.set_course_id(req.id)).await
}

/// PUT /api/editor/course/fields
pub async fn set_course_field(
    State(state): State<AppState>,
    admin: AdminUser,
    Json(req): Json<SetFieldRequest>,
) -> ApiResult<StatusJson> {
    req.validate()?;
    let field: CourseField = req.field.parse()?;
    edit(&state, &admin, |e| e.set_course_field(field, req.value)).await
}

/// POST /api/editor/subjects
pub async fn add_subject(
    State(state): State<AppState>,
    admin: AdminUser,
    Json(req): Json<AddItemRequest>,
) -> ApiResult<Json<ApiResponse<AddedResponse>>> {
    let editor = editor(&state, &admin);
    let id = editor.apply(|e| e.add_subject(req.placement())).await?;
    Ok(Json(ApiResponse::ok(AddedResponse {
        id: id.into_inner(),
        editor: editor.status().await,
    })))
}

/// DELETE /api/editor/subjects/{subject}
pub async fn remove_subject(
    State(state): State<AppState>,
    admin: AdminUser,
    Path(id): Path<SubjectId>,
) -> ApiResult<StatusJson> {
    edit(&state, &admin, |e| e.remove_subject(&id)).await
}

/// POST /api/editor/subjects/move
pub async fn move_subject(
    State(state): State<AppState>,
    admin: AdminUser,
    Json(req): Json<MoveRequest>,
) -> ApiResult<StatusJson> {
    edit(&state, &admin, |e| e.move_subject(req.from, req.to)).await
}

// ── Subject level ────────────────────────────────────────────────────

/// PUT /api/editor/subject/fields
pub async fn set_subject_field(
    State(state): State<AppState>,
    admin: AdminUser,
    Json(req): Json<SetFieldRequest>,
) -> ApiResult<StatusJson> {
    req.validate()?;
    let field: SubjectField = req.field.parse()?;
    edit(&state, &admin, |e| e.set_subject_field(field, req.value)).await
}

/// POST /api/editor/modules
pub async fn add_module(
    State(state): State<AppState>,
    admin: AdminUser,
    Json(req): Json<AddItemRequest>,
) -> ApiResult<Json<ApiResponse<AddedResponse>>> {
    let editor = editor(&state, &admin);
    let id = editor.apply(|e| e.add_module(req.placement())).await?;
    Ok(Json(ApiResponse::ok(AddedResponse {
        id: id.into_inner(),
        editor: editor.status().await,
    })))
}

/// DELETE /api/editor/modules/{module}
pub async fn remove_module(
    State(state): State<AppState>,
    admin: AdminUser,
    Path(id): Path<ModuleId>,
) -> ApiResult<StatusJson> {
    edit(&state, &admin, |e| e.remove_module(&id)).await
}

/// POST /api/editor/modules/move
pub async fn move_module(
    State(state): State<AppState>,
    admin: AdminUser,
    Json(req): Json<MoveRequest>,
) -> ApiResult<StatusJson> {
    edit(&state, &admin, |e| e.move_module(req.from, req.to)).await
}

// ── Module level ─────────────────────────────────────────────────────

/// PUT /api/editor/module/fields
pub async fn set_module_field(
    State(state): State<AppState>,
    admin: AdminUser,
    Json(req): Json<SetFieldRequest>,
) -> ApiResult<StatusJson> {
    req.validate()?;
    let field: ModuleField = req.field.parse()?;
    edit(&state, &admin, |e| e.set_module_field(field, req.value)).await
}
