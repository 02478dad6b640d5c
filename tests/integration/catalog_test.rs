//! Integration tests for public catalog routes and admin course writes.

use axum::http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_health_reports_store() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/health", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["status"], "ok");
    assert_eq!(response.data()["store"], "memory");
    assert_eq!(response.data()["store_healthy"], true);
}

#[tokio::test]
async fn test_demo_course_is_listed() {
    let app = TestApp::with_demo().await;

    let response = app.request("GET", "/api/courses", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    let courses = response.data().as_array().expect("course list");
    assert_eq!(courses.len(), 1);
    assert_eq!(courses[0]["id"], "react-basics");
    assert_eq!(courses[0]["subjects"][0]["modules"][0]["id"], "m1");
}

#[tokio::test]
async fn test_empty_catalog_without_seed() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/courses", None, None).await;
    assert_eq!(response.data().as_array().map(Vec::len), Some(0));
}

#[tokio::test]
async fn test_search_by_title_and_category() {
    let app = TestApp::with_demo().await;

    let response = app.request("GET", "/api/courses?q=react", None, None).await;
    assert_eq!(response.data().as_array().map(Vec::len), Some(1));

    let response = app
        .request("GET", "/api/courses?q=skill%20dev", None, None)
        .await;
    assert_eq!(response.data().as_array().map(Vec::len), Some(1));

    let response = app
        .request("GET", "/api/courses?q=calculus", None, None)
        .await;
    assert_eq!(response.data().as_array().map(Vec::len), Some(0));
}

#[tokio::test]
async fn test_unknown_course_is_not_found() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/courses/nope", None, None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.error_code(), "NOT_FOUND");
}

#[tokio::test]
async fn test_outline_numbers_units_and_flags_resources() {
    let app = TestApp::with_demo().await;

    let response = app
        .request("GET", "/api/courses/react-basics/outline", None, None)
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let outline = response.data();
    assert_eq!(outline["has_routine"], true);
    assert_eq!(outline["lesson_count"], 1);
    let lesson = &outline["units"][0]["lessons"][0];
    assert_eq!(outline["units"][0]["unit_number"], 1);
    assert_eq!(lesson["lesson_number"], 1);
    assert_eq!(lesson["has_video"], true);
    assert_eq!(lesson["has_pdf"], false);
    assert_eq!(lesson["has_practice_sheet"], false);
}

#[tokio::test]
async fn test_lesson_routes_are_one_based() {
    let app = TestApp::with_demo().await;

    let response = app
        .request("GET", "/api/courses/react-basics/lessons", None, None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["unit_number"], 1);
    assert_eq!(response.data()["module"]["contentTitle"], "Introduction to React");
    assert!(response.data()["next"].is_null());

    let response = app
        .request("GET", "/api/courses/react-basics/lessons/1/1", None, None)
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request("GET", "/api/courses/react-basics/lessons/0/1", None, None)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app
        .request("GET", "/api/courses/react-basics/lessons/2/1", None, None)
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_categories_carry_icons() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/categories", None, None).await;
    let categories = response.data().as_array().expect("categories");
    assert_eq!(categories.len(), 4);
    assert_eq!(categories[0]["label"], "Skill Development");
    assert!(categories.iter().all(|c| c["icon"].is_string()));
}

#[tokio::test]
async fn test_rest_create_replace_delete() {
    let app = TestApp::new().await;
    let token = app.login().await;

    let course = json!({
        "id": "calc-1",
        "title": "Calculus I",
        "category": "Academic",
        "subjects": [{ "title": "Limits", "modules": [{ "contentTitle": "What is a limit?" }] }]
    });

    let response = app
        .request("POST", "/api/courses", Some(course.clone()), Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    let module_id = &response.data()["subjects"][0]["modules"][0]["id"];
    assert!(module_id.as_str().is_some_and(|id| !id.is_empty()));

    let response = app
        .request("POST", "/api/courses", Some(course), Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);

    let response = app
        .request(
            "PUT",
            "/api/courses/calc-1",
            Some(json!({ "title": "Calculus I (revised)" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["id"], "calc-1");
    assert_eq!(response.data()["title"], "Calculus I (revised)");

    let response = app
        .request("DELETE", "/api/courses/calc-1", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request("DELETE", "/api/courses/calc-1", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_rest_create_requires_title() {
    let app = TestApp::new().await;
    let token = app.login().await;

    let response = app
        .request(
            "POST",
            "/api/courses",
            Some(json!({ "id": "untitled" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "course title is required");
}
