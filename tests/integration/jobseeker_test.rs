//! Integration tests for job seeker endpoints.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_create_returns_stored_record_with_hash() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/jobseeker",
            Some(json!({
                "name": "Ada",
                "email": "ada@example.com",
                "phone": "555-0100",
                "password": "analytical",
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["email"], "ada@example.com");
    let password = response.body["password"].as_str().unwrap();
    assert_ne!(password, "analytical");
    assert!(password.starts_with("$argon2"));
}

#[tokio::test]
async fn test_list_empty_is_not_found() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/jobseekers", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.detail(), "No jobseekers found");
}

#[tokio::test]
async fn test_list_omits_ids() {
    let app = helpers::TestApp::new();
    app.create_jobseeker("Ada", "ada@example.com", "analytical")
        .await;
    app.create_jobseeker("Grace", "grace@example.com", "cobol")
        .await;

    let response = app.request("GET", "/jobseekers", None).await;

    assert_eq!(response.status, StatusCode::OK);
    let items = response.body.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert!(items[0].get("id").is_none());
    assert_eq!(items[1]["name"], "Grace");
}

#[tokio::test]
async fn test_get_shows_public_fields() {
    let app = helpers::TestApp::new();
    let id = app
        .create_jobseeker("Ada", "ada@example.com", "analytical")
        .await;

    let response = app.request("GET", &format!("/jobseeker/{id}"), None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["id"], id);
    assert_eq!(response.body["phone"], "555-0100");
    assert!(response.body.get("password").is_none());
}

#[tokio::test]
async fn test_get_missing_is_not_found() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/jobseeker/99", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.detail(), "Jobseeker with id 99 not found");
}

#[tokio::test]
async fn test_non_integer_id_is_unprocessable() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/jobseeker/abc", None).await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_invalid_body_is_unprocessable() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/jobseeker",
            Some(json!({
                "name": "Ada",
                "email": "",
                "phone": "555-0100",
                "password": "analytical",
            })),
        )
        .await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);

    let response = app
        .request("POST", "/jobseeker", Some(json!({ "name": "Ada" })))
        .await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(!response.detail().is_empty());
}

#[tokio::test]
async fn test_bare_username_email_is_accepted() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/jobseeker",
            Some(json!({
                "name": "Ada",
                "email": "ada",
                "phone": "555-0100",
                "password": "analytical",
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["email"], "ada");
}

#[tokio::test]
async fn test_update_then_get() {
    let app = helpers::TestApp::new();
    let id = app
        .create_jobseeker("Ada", "ada@example.com", "analytical")
        .await;

    let response = app
        .request(
            "PUT",
            &format!("/jobseeker/{id}"),
            Some(json!({
                "name": "Ada King",
                "email": "ada@example.com",
                "phone": "555-0199",
                "password": "analytical",
            })),
        )
        .await;
    assert_eq!(response.status, StatusCode::ACCEPTED);
    assert_eq!(response.body, json!(1));

    let response = app.request("GET", &format!("/jobseeker/{id}"), None).await;
    assert_eq!(response.body["name"], "Ada King");
    assert_eq!(response.body["phone"], "555-0199");
}

#[tokio::test]
async fn test_update_missing_is_not_found() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "PUT",
            "/jobseeker/5",
            Some(json!({
                "name": "Nobody",
                "email": "nobody@example.com",
                "phone": "555",
                "password": "x",
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.detail(), "Jobseeker with id 5 not found");
}

#[tokio::test]
async fn test_delete_then_get_is_not_found() {
    let app = helpers::TestApp::new();
    let id = app
        .create_jobseeker("Ada", "ada@example.com", "analytical")
        .await;

    let response = app
        .request("DELETE", &format!("/jobseeker/{id}"), None)
        .await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    let response = app.request("GET", &format!("/jobseeker/{id}"), None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app
        .request("DELETE", &format!("/jobseeker/{id}"), None)
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_health() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/health", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
}

#[tokio::test]
async fn test_unknown_path_has_detail() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/nope", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.detail(), "Not Found");
}

#[tokio::test]
async fn test_unsupported_method_has_detail() {
    let app = helpers::TestApp::new();

    let response = app.request("PATCH", "/jobseeker/1", None).await;

    assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(response.detail(), "Method Not Allowed");
}
