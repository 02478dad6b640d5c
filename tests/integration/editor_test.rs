//! Integration tests for the tree editor routes.

use axum::http::StatusCode;
use serde_json::{Value, json};

use crate::helpers::TestApp;

fn course(status: &Value) -> &Value {
    &status["edit"]["course"]
}

/// Open a new course named `id` with a title, ready to save.
async fn open_named(app: &TestApp, token: &str, id: &str) {
    let response = app
        .request("POST", "/api/editor/courses", None, Some(token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["edit"]["state"], "editing_course_root");
    assert_eq!(response.data()["is_new"], true);

    let response = app
        .request(
            "PUT",
            "/api/editor/course/id",
            Some(json!({ "id": id })),
            Some(token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request(
            "PUT",
            "/api/editor/course/fields",
            Some(json!({ "field": "title", "value": "Physics" })),
            Some(token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_build_course_and_save() {
    let app = TestApp::new().await;
    let token = app.login().await;
    open_named(&app, &token, "phys-1").await;

    let response = app
        .request("POST", "/api/editor/subjects", Some(json!({})), Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let subject_id = response.data()["id"].as_str().expect("subject id").to_string();

    let response = app
        .request("POST", "/api/editor/subjects/0/open", None, Some(&token))
        .await;
    assert_eq!(response.data()["edit"]["state"], "editing_subject");

    for _ in 0..2 {
        let response = app
            .request("POST", "/api/editor/modules", Some(json!({})), Some(&token))
            .await;
        assert_eq!(response.status, StatusCode::OK);
    }

    let response = app
        .request("POST", "/api/editor/modules/1/open", None, Some(&token))
        .await;
    assert_eq!(response.data()["edit"]["state"], "editing_module");

    let response = app
        .request(
            "PUT",
            "/api/editor/module/fields",
            Some(json!({ "field": "contentTitle", "value": "Vectors" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        course(response.data())["subjects"][0]["modules"][1]["contentTitle"],
        "Vectors"
    );

    let response = app
        .request("POST", "/api/editor/save", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["outcome"], "closed");
    assert_eq!(response.data()["editor"]["edit"]["state"], "closed");

    let response = app.request("GET", "/api/courses/phys-1", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["subjects"][0]["id"], subject_id.as_str());
    assert_eq!(
        response.data()["subjects"][0]["modules"]
            .as_array()
            .map(Vec::len),
        Some(2)
    );
}

#[tokio::test]
async fn test_discard_leaves_catalog_untouched() {
    let app = TestApp::new().await;
    let token = app.login().await;
    open_named(&app, &token, "draft").await;

    let response = app.request("DELETE", "/api/editor", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["edit"]["state"], "closed");

    let response = app.request("GET", "/api/courses/draft", None, None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_save_without_title_is_rejected() {
    let app = TestApp::new().await;
    let token = app.login().await;

    app.request("POST", "/api/editor/courses", None, Some(&token))
        .await;
    app.request(
        "PUT",
        "/api/editor/course/id",
        Some(json!({ "id": "no-title" })),
        Some(&token),
    )
    .await;

    let response = app
        .request("POST", "/api/editor/save", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "course title is required");

    let response = app.request("GET", "/api/editor", None, Some(&token)).await;
    assert_eq!(response.data()["edit"]["state"], "editing_course_root");
}

#[tokio::test]
async fn test_navigation_errors_map_to_conflict() {
    let app = TestApp::new().await;
    let token = app.login().await;

    let response = app
        .request("POST", "/api/editor/back", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);

    app.request("POST", "/api/editor/courses", None, Some(&token))
        .await;
    let response = app
        .request("POST", "/api/editor/subjects/0/open", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app
        .request(
            "POST",
            "/api/editor/subjects/move",
            Some(json!({ "from": 0, "to": 1 })),
            Some(&token),
        )
        .await;
    assert!(response.status.is_client_error());
}

#[tokio::test]
async fn test_unknown_field_is_validation_error() {
    let app = TestApp::new().await;
    let token = app.login().await;
    app.request("POST", "/api/editor/courses", None, Some(&token))
        .await;

    let response = app
        .request(
            "PUT",
            "/api/editor/course/fields",
            Some(json!({ "field": "colour", "value": "red" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_open_existing_and_reorder_subjects() {
    let app = TestApp::with_demo().await;
    let token = app.login().await;

    let response = app
        .request("POST", "/api/editor/courses/react-basics", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["is_new"], false);

    let response = app
        .request(
            "POST",
            "/api/editor/subjects",
            Some(json!({ "position": 0 })),
            Some(&token),
        )
        .await;
    let new_id = response.data()["id"].as_str().expect("id").to_string();
    let subjects = &course(&response.data()["editor"])["subjects"];
    assert_eq!(subjects[0]["id"], new_id.as_str());
    assert_eq!(subjects[1]["id"], "s1");

    let response = app
        .request(
            "POST",
            "/api/editor/subjects/move",
            Some(json!({ "from": 0, "to": 1 })),
            Some(&token),
        )
        .await;
    let subjects = &course(response.data())["subjects"];
    assert_eq!(subjects[0]["id"], "s1");

    let response = app
        .request(
            "DELETE",
            &format!("/api/editor/subjects/{new_id}"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        course(response.data())["subjects"].as_array().map(Vec::len),
        Some(1)
    );

    let response = app
        .request("PUT", "/api/editor/course/id", Some(json!({ "id": "other" })), Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_delete_through_editor_closes_other_sessions() {
    let app = TestApp::with_demo().await;
    let first = app.login().await;
    let second = app.login().await;

    app.request("POST", "/api/editor/courses/react-basics", None, Some(&second))
        .await;

    let response = app
        .request("DELETE", "/api/editor/courses/react-basics", None, Some(&first))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["id"], "react-basics");
    assert_eq!(response.data()["remaining"].as_array().map(Vec::len), Some(0));

    let response = app.request("GET", "/api/editor", None, Some(&second)).await;
    assert_eq!(response.data()["edit"]["state"], "closed");
}

#[tokio::test]
async fn test_editors_are_per_session() {
    let app = TestApp::new().await;
    let first = app.login().await;
    let second = app.login().await;

    open_named(&app, &first, "mine").await;

    let response = app.request("GET", "/api/editor", None, Some(&second)).await;
    assert_eq!(response.data()["edit"]["state"], "closed");
}
