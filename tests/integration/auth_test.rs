//! Integration tests for the job seeker login flow.

mod helpers;

use axum::http::StatusCode;

use revhire_auth::token::TokenIssuer;

#[tokio::test]
async fn test_login_success() {
    let app = helpers::TestApp::new();
    app.create_jobseeker("Linus", "linus@example.com", "penguin")
        .await;

    let response = app
        .post_form(
            "/jobseeker_login",
            &[("username", "linus@example.com"), ("password", "penguin")],
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["token_type"], "bearer");

    let token = response.body["access_token"].as_str().unwrap();
    let claims = TokenIssuer::new(&app.config.auth)
        .unwrap()
        .decode(token)
        .unwrap();
    assert_eq!(claims.sub, "linus@example.com");
    assert!(claims.exp > claims.iat);
}

#[tokio::test]
async fn test_login_unknown_email() {
    let app = helpers::TestApp::new();

    let response = app
        .post_form(
            "/jobseeker_login",
            &[("username", "ghost@example.com"), ("password", "boo")],
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(
        response.detail(),
        "Jobseeker with email ghost@example.com not found"
    );
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = helpers::TestApp::new();
    app.create_jobseeker("Linus", "linus@example.com", "penguin")
        .await;

    let response = app
        .post_form(
            "/jobseeker_login",
            &[("username", "linus@example.com"), ("password", "cathedral")],
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.detail(), "Incorrect password");
}

#[tokio::test]
async fn test_login_missing_field_is_unprocessable() {
    let app = helpers::TestApp::new();

    let response = app
        .post_form("/jobseeker_login", &[("username", "linus@example.com")])
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
}
