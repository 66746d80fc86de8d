//! Shared test helpers for integration tests.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use revhire_api::{AppState, build_app};
use revhire_core::config::AppConfig;
use revhire_database::EntityStores;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Stores behind the router, for direct inspection
    pub stores: EntityStores,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a new test application over a fresh in-memory store
    pub fn new() -> Self {
        let config = AppConfig::in_memory();
        let stores = EntityStores::memory();
        let state =
            AppState::new(config.clone(), stores.clone()).expect("Failed to build app state");
        let router = build_app(state);

        Self {
            router,
            stores,
            config,
        }
    }

    /// Register a job seeker and return their id
    pub async fn create_jobseeker(&self, name: &str, email: &str, password: &str) -> i64 {
        let response = self
            .request(
                "POST",
                "/jobseeker",
                Some(json!({
                    "name": name,
                    "email": email,
                    "phone": "555-0100",
                    "password": password,
                })),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
        response.id()
    }

    /// Register an employer and return their id
    pub async fn create_employer(&self, name: &str, email: &str) -> i64 {
        let response = self
            .request(
                "POST",
                "/employer",
                Some(json!({
                    "name": name,
                    "email": email,
                    "phone": "555-0200",
                    "password": "employer-pass",
                })),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
        response.id()
    }

    /// Publish a posting and return its id
    pub async fn create_jobposting(&self, title: &str, company: &str, email: &str) -> i64 {
        let response = self
            .request(
                "POST",
                "/jobposting",
                Some(json!({ "title": title, "company": company, "email": email })),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
        response.id()
    }

    /// Make a JSON HTTP request to the test app
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body_str))
            .expect("Failed to build request");

        self.send(req).await
    }

    /// Make a form-encoded POST request to the test app
    pub async fn post_form(&self, path: &str, fields: &[(&str, &str)]) -> TestResponse {
        let body = serde_urlencoded::to_string(fields).expect("Failed to encode form");

        let req = Request::builder()
            .method("POST")
            .uri(path)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .expect("Failed to build request");

        self.send(req).await
    }

    async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// The `id` field of the body
    pub fn id(&self) -> i64 {
        self.body["id"].as_i64().expect("No id in response body")
    }

    /// The `detail` field of an error body
    pub fn detail(&self) -> &str {
        self.body["detail"].as_str().unwrap_or_default()
    }
}
