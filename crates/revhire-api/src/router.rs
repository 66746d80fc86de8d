//! Route definitions for the RevHire HTTP API.
//!
//! Routes are grouped by entity and mounted at the root. The router receives
//! `AppState` and passes it to all handlers via Axum's `State` extractor.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{get, post},
};

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the Axum router with every route and the request logging layer.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(jobseeker_routes())
        .merge(employer_routes())
        .merge(jobposting_routes())
        .merge(jobapplication_routes())
        .merge(auth_routes())
        .merge(health_routes())
        .fallback(handlers::fallback::not_found)
        .method_not_allowed_fallback(handlers::fallback::method_not_allowed)
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Job seeker signup and CRUD
fn jobseeker_routes() -> Router<AppState> {
    Router::new()
        .route("/jobseeker", post(handlers::jobseeker::create_jobseeker))
        .route("/jobseekers", get(handlers::jobseeker::list_jobseekers))
        .route(
            "/jobseeker/{id}",
            get(handlers::jobseeker::get_jobseeker)
                .put(handlers::jobseeker::update_jobseeker)
                .delete(handlers::jobseeker::delete_jobseeker),
        )
}

/// Employer signup and CRUD
fn employer_routes() -> Router<AppState> {
    Router::new()
        .route("/employer", post(handlers::employer::create_employer))
        .route("/employers", get(handlers::employer::first_employer))
        .route(
            "/employer/{id}",
            get(handlers::employer::get_employer)
                .put(handlers::employer::update_employer)
                .delete(handlers::employer::delete_employer),
        )
}

/// Job postings, owned by employers
fn jobposting_routes() -> Router<AppState> {
    Router::new()
        .route("/jobposting", post(handlers::jobposting::create_jobposting))
        .route(
            "/jobposting/{id}",
            get(handlers::jobposting::get_jobposting)
                .put(handlers::jobposting::update_jobposting)
                .delete(handlers::jobposting::delete_jobposting),
        )
        .route(
            "/jobpostings/employer/{employer_id}",
            get(handlers::jobposting::list_employer_jobpostings),
        )
}

/// Job applications, submitted by job seekers
fn jobapplication_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/jobapplication",
            post(handlers::jobapplication::create_jobapplication),
        )
        .route(
            "/jobapplication/{id}",
            get(handlers::jobapplication::get_jobapplication)
                .put(handlers::jobapplication::update_jobapplication)
                .delete(handlers::jobapplication::delete_jobapplication),
        )
        .route(
            "/jobapplications/jobseeker/{jobseeker_id}",
            get(handlers::jobapplication::list_jobseeker_jobapplications),
        )
}

/// Job seeker login
fn auth_routes() -> Router<AppState> {
    Router::new().route("/jobseeker_login", post(handlers::auth::login))
}

/// Health probe
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
