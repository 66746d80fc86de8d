//! Integration tests for job application endpoints.

mod helpers;

use axum::http::StatusCode;
use serde_json::{Value, json};

fn application_body() -> Value {
    json!({
        "email": "grace@example.com",
        "resume": "grace.pdf",
        "skills": "cobol, compilers",
        "jobpost": {
            "title": "Compiler Engineer",
            "company": "Navy",
            "email": "hr@navy.test",
        },
    })
}

#[tokio::test]
async fn test_create_requires_existing_jobseeker() {
    let app = helpers::TestApp::new();

    let response = app
        .request("POST", "/jobapplication", Some(application_body()))
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(
        response.detail(),
        "Job seeker doesn't exist. Please create a job seeker account."
    );
}

#[tokio::test]
async fn test_create_links_seeker_and_posting() {
    let app = helpers::TestApp::new();
    let seeker_id = app
        .create_jobseeker("Grace", "grace@example.com", "cobol")
        .await;
    app.create_employer("Navy", "hr@navy.test").await;
    let posting_id = app
        .create_jobposting("Compiler Engineer", "Navy", "hr@navy.test")
        .await;

    let response = app
        .request("POST", "/jobapplication", Some(application_body()))
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["jobseeker_id"], seeker_id);
    assert_eq!(response.body["jobposting_id"], posting_id);
    assert_eq!(response.body["skills"], "cobol, compilers");

    let id = response.id();
    let response = app
        .request("GET", &format!("/jobapplication/{id}"), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["title"], "Compiler Engineer");
}

#[tokio::test]
async fn test_unmatched_posting_is_null() {
    let app = helpers::TestApp::new();
    app.create_jobseeker("Grace", "grace@example.com", "cobol")
        .await;

    let response = app
        .request("POST", "/jobapplication", Some(application_body()))
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert!(response.body["jobposting_id"].is_null());
}

#[tokio::test]
async fn test_nested_jobpost_is_validated() {
    let app = helpers::TestApp::new();
    let mut body = application_body();
    body["jobpost"]["title"] = json!("");

    let response = app.request("POST", "/jobapplication", Some(body)).await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_list_by_jobseeker() {
    let app = helpers::TestApp::new();
    let seeker_id = app
        .create_jobseeker("Grace", "grace@example.com", "cobol")
        .await;
    app.request("POST", "/jobapplication", Some(application_body()))
        .await;

    let response = app
        .request(
            "GET",
            &format!("/jobapplications/jobseeker/{seeker_id}"),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.as_array().unwrap().len(), 1);

    let response = app
        .request("GET", "/jobapplications/jobseeker/77", None)
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(
        response.detail(),
        "No job applications found for job seeker ID: 77"
    );
}

#[tokio::test]
async fn test_update_and_delete() {
    let app = helpers::TestApp::new();
    app.create_jobseeker("Grace", "grace@example.com", "cobol")
        .await;
    let id = app
        .request("POST", "/jobapplication", Some(application_body()))
        .await
        .id();

    let mut body = application_body();
    body["skills"] = json!("rust");
    let response = app
        .request("PUT", &format!("/jobapplication/{id}"), Some(body))
        .await;
    assert_eq!(response.status, StatusCode::ACCEPTED);
    assert_eq!(response.body, json!(1));

    let response = app
        .request("GET", &format!("/jobapplication/{id}"), None)
        .await;
    assert_eq!(response.body["skills"], "rust");

    let response = app
        .request("DELETE", &format!("/jobapplication/{id}"), None)
        .await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    let response = app
        .request("GET", &format!("/jobapplication/{id}"), None)
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.detail(), "No job application found");
}
