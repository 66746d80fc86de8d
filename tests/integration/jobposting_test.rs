//! Integration tests for job posting endpoints.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_create_requires_existing_employer() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/jobposting",
            Some(json!({
                "title": "Backend Engineer",
                "company": "Acme",
                "email": "hr@acme.test",
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(
        response.detail(),
        "Employer doesn't exist. Please create an employer account."
    );
}

#[tokio::test]
async fn test_unknown_non_email_employer_is_not_found() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/jobposting",
            Some(json!({ "title": "T", "company": "C", "email": "acme" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(
        response.detail(),
        "Employer doesn't exist. Please create an employer account."
    );
}

#[tokio::test]
async fn test_create_binds_employer() {
    let app = helpers::TestApp::new();
    let employer_id = app.create_employer("Acme", "hr@acme.test").await;

    let response = app
        .request(
            "POST",
            "/jobposting",
            Some(json!({
                "title": "Backend Engineer",
                "company": "Acme",
                "email": "hr@acme.test",
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["employer_id"], employer_id);
    assert_eq!(response.body["email"], "hr@acme.test");
}

#[tokio::test]
async fn test_get_embeds_creator() {
    let app = helpers::TestApp::new();
    let employer_id = app.create_employer("Acme", "hr@acme.test").await;
    let id = app
        .create_jobposting("Backend Engineer", "Acme", "hr@acme.test")
        .await;

    let response = app.request("GET", &format!("/jobposting/{id}"), None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["title"], "Backend Engineer");
    assert_eq!(response.body["creator"]["id"], employer_id);
    assert_eq!(response.body["creator"]["name"], "Acme");
}

#[tokio::test]
async fn test_posting_survives_employer_deletion() {
    let app = helpers::TestApp::new();
    let employer_id = app.create_employer("Acme", "hr@acme.test").await;
    let id = app
        .create_jobposting("Backend Engineer", "Acme", "hr@acme.test")
        .await;

    let response = app
        .request("DELETE", &format!("/employer/{employer_id}"), None)
        .await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    let response = app.request("GET", &format!("/jobposting/{id}"), None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["employer_id"], employer_id);
    assert!(response.body["creator"].is_null());
}

#[tokio::test]
async fn test_list_by_employer() {
    let app = helpers::TestApp::new();
    let acme = app.create_employer("Acme", "hr@acme.test").await;
    let globex = app.create_employer("Globex", "hr@globex.test").await;
    app.create_jobposting("Backend Engineer", "Acme", "hr@acme.test")
        .await;
    app.create_jobposting("Frontend Engineer", "Acme", "hr@acme.test")
        .await;

    let response = app
        .request("GET", &format!("/jobpostings/employer/{acme}"), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.as_array().unwrap().len(), 2);

    let response = app
        .request("GET", &format!("/jobpostings/employer/{globex}"), None)
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(
        response.detail(),
        format!("No job postings found for employer ID: {globex}")
    );
}

#[tokio::test]
async fn test_update_and_delete() {
    let app = helpers::TestApp::new();
    app.create_employer("Acme", "hr@acme.test").await;
    let id = app
        .create_jobposting("Backend Engineer", "Acme", "hr@acme.test")
        .await;

    let response = app
        .request(
            "PUT",
            &format!("/jobposting/{id}"),
            Some(json!({
                "title": "Staff Engineer",
                "company": "Acme",
                "email": "hr@acme.test",
            })),
        )
        .await;
    assert_eq!(response.status, StatusCode::ACCEPTED);
    assert_eq!(response.body, json!(1));

    let response = app.request("GET", &format!("/jobposting/{id}"), None).await;
    assert_eq!(response.body["title"], "Staff Engineer");

    let response = app
        .request("DELETE", &format!("/jobposting/{id}"), None)
        .await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    let response = app.request("GET", &format!("/jobposting/{id}"), None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.detail(), "No job posting found");
}
