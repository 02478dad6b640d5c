//! Integration tests for the admin login flow.

use axum::http::StatusCode;

use crate::helpers::{ADMIN_PASSWORD, TestApp};

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::new().await;
    let token = app.login().await;
    assert!(!token.is_empty());

    let response = app
        .request("GET", "/api/auth/session", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["is_admin"], true);
    assert_eq!(response.data()["username"], "admin");
}

#[tokio::test]
async fn test_login_invalid_password() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "username": "admin",
                "password": "wrongpassword",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error_code(), "AUTHENTICATION");
}

#[tokio::test]
async fn test_login_requires_fields() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({ "username": "", "password": ADMIN_PASSWORD })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_visitor_session_is_not_admin() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/auth/session", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["is_admin"], false);

    let response = app
        .request("GET", "/api/auth/session", None, Some("bogus"))
        .await;
    assert_eq!(response.data()["is_admin"], false);
}

#[tokio::test]
async fn test_logout_revokes_token() {
    let app = TestApp::new().await;
    let token = app.login().await;

    let response = app
        .request("POST", "/api/auth/logout", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app.request("GET", "/api/editor", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_admin_routes_require_token() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/editor", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let response = app
        .request(
            "POST",
            "/api/courses",
            Some(serde_json::json!({ "id": "x", "title": "X" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let response = app
        .request("DELETE", "/api/courses/x", None, Some("not-a-session"))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_sweep_releases_editors_of_expired_tokens() {
    let app = TestApp::with_session_ttl(0).await;
    for _ in 0..3 {
        let token = app.login().await;
        app.state.editors.editor_for(&token).open_new().await.unwrap();

        let response = app
            .request("GET", "/api/editor", None, Some(&token))
            .await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    }
    assert_eq!(app.state.editors.len(), 3);

    assert_eq!(app.state.sweep_expired_sessions(), 3);
    assert!(app.state.editors.is_empty());
    assert_eq!(app.state.admin_gate.active_sessions(), 0);
}

#[tokio::test]
async fn test_sweep_keeps_live_editors() {
    let app = TestApp::new().await;
    let token = app.login().await;

    let response = app
        .request("POST", "/api/editor/courses", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    assert_eq!(app.state.sweep_expired_sessions(), 0);
    let response = app.request("GET", "/api/editor", None, Some(&token)).await;
    assert_eq!(response.data()["edit"]["state"], "editing_course_root");
}
