//! Integration tests for employer endpoints.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_create_employer() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/employer",
            Some(json!({
                "name": "Acme",
                "email": "hr@acme.test",
                "phone": "555-0200",
                "password": "payroll",
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["name"], "Acme");
    assert_ne!(response.body["password"], "payroll");
}

#[tokio::test]
async fn test_employers_returns_first_only() {
    let app = helpers::TestApp::new();
    let acme = app.create_employer("Acme", "hr@acme.test").await;
    app.create_employer("Globex", "hr@globex.test").await;

    let response = app.request("GET", "/employers", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.is_object());
    assert_eq!(response.body["id"], acme);
    assert_eq!(response.body["name"], "Acme");
    assert!(response.body.get("password").is_none());
}

#[tokio::test]
async fn test_employers_empty_is_not_found() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/employers", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.detail(), "No employer found");
}

#[tokio::test]
async fn test_get_update_delete_lifecycle() {
    let app = helpers::TestApp::new();
    let id = app.create_employer("Acme", "hr@acme.test").await;

    let response = app.request("GET", &format!("/employer/{id}"), None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["email"], "hr@acme.test");

    let response = app
        .request(
            "PUT",
            &format!("/employer/{id}"),
            Some(json!({
                "name": "Acme Corp",
                "email": "jobs@acme.test",
                "phone": "555-0201",
                "password": "payroll",
            })),
        )
        .await;
    assert_eq!(response.status, StatusCode::ACCEPTED);
    assert_eq!(response.body, json!(1));

    let response = app.request("GET", &format!("/employer/{id}"), None).await;
    assert_eq!(response.body["name"], "Acme Corp");

    let response = app
        .request("DELETE", &format!("/employer/{id}"), None)
        .await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    let response = app.request("GET", &format!("/employer/{id}"), None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.detail(), "No employer found");
}

#[tokio::test]
async fn test_delete_missing_is_not_found() {
    let app = helpers::TestApp::new();

    let response = app.request("DELETE", "/employer/8", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.detail(), "No employer found");
}
