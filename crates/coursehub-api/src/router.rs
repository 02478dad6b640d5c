//! Route definitions for the CourseHub HTTP API.
//!
//! All routes are mounted under `/api`. Catalog reads are public; course
//! writes and the editor require an admin bearer token, which the
//! `AdminUser` extractor enforces per handler.

use axum::{
    Router, middleware as axum_middleware,
    routing::{delete, get, post, put},
};

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the API router and thread `state` through every route.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(health_routes())
        .merge(auth_routes())
        .merge(catalog_routes())
        .merge(editor_routes());

    Router::new()
        .nest("/api", api_routes)
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Health endpoint
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

/// Admin login, logout, session
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/logout", post(handlers::auth::logout))
        .route("/auth/session", get(handlers::auth::session))
}

/// Public catalog reads and admin document writes
fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/courses",
            get(handlers::catalog::list_courses).post(handlers::courses::create_course),
        )
        .route(
            "/courses/{id}",
            get(handlers::catalog::get_course)
                .put(handlers::courses::replace_course)
                .delete(handlers::courses::delete_course),
        )
        .route("/courses/{id}/outline", get(handlers::catalog::get_outline))
        .route("/courses/{id}/lessons", get(handlers::catalog::first_lesson))
        .route(
            "/courses/{id}/lessons/{unit}/{lesson}",
            get(handlers::catalog::get_lesson),
        )
        .route("/categories", get(handlers::catalog::list_categories))
}

/// Tree editor session. `/subjects/{subject}` takes an id for removal
/// and a position for `/open`; modules likewise.
fn editor_routes() -> Router<AppState> {
    use handlers::editor;

    Router::new()
        .route("/editor", get(editor::status).delete(editor::discard))
        .route("/editor/save", post(editor::save))
        .route("/editor/back", post(editor::back))
        .route("/editor/courses", post(editor::open_new))
        .route(
            "/editor/courses/{id}",
            post(editor::open_existing).delete(editor::delete_course),
        )
        .route("/editor/course/id", put(editor::set_course_id))
        .route("/editor/course/fields", put(editor::set_course_field))
        .route("/editor/subjects", post(editor::add_subject))
        .route("/editor/subjects/move", post(editor::move_subject))
        .route("/editor/subjects/{subject}", delete(editor::remove_subject))
        .route("/editor/subjects/{subject}/open", post(editor::open_subject))
        .route("/editor/subject/fields", put(editor::set_subject_field))
        .route("/editor/modules", post(editor::add_module))
        .route("/editor/modules/move", post(editor::move_module))
        .route("/editor/modules/{module}", delete(editor::remove_module))
        .route("/editor/modules/{module}/open", post(editor::open_module))
        .route("/editor/module/fields", put(editor::set_module_field))
}
