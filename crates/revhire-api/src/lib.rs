//! # revhire-api
//!
//! HTTP API layer for RevHire built on Axum.
//!
//! Provides the REST endpoints for job seekers, employers, job postings,
//! job applications and login, together with request validation, CORS and
//! logging middleware, and the mapping from `AppError` to HTTP responses.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use error::ApiError;
pub use state::AppState;
