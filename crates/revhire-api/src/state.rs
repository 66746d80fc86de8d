//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use revhire_auth::password::PasswordHasher;
use revhire_auth::token::TokenIssuer;
use revhire_core::config::AppConfig;
use revhire_core::error::AppError;
use revhire_database::EntityStores;
use revhire_service::{
    EmployerService, JobApplicationService, JobPostingService, JobSeekerService, LoginService,
};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// Entity stores, postgres or in-memory
    pub stores: EntityStores,

    // ── Services ─────────────────────────────────────────────
    /// Job seeker service
    pub jobseeker_service: Arc<JobSeekerService>,
    /// Employer service
    pub employer_service: Arc<EmployerService>,
    /// Job posting service
    pub jobposting_service: Arc<JobPostingService>,
    /// Job application service
    pub jobapplication_service: Arc<JobApplicationService>,
    /// Job seeker login service
    pub login_service: Arc<LoginService>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("stores", &self.stores)
            .finish_non_exhaustive()
    }
}

impl AppState {
    /// Wires every service on top of the given stores.
    ///
    /// Fails only when the auth configuration is unusable.
    pub fn new(config: AppConfig, stores: EntityStores) -> Result<Self, AppError> {
        let password_hasher = Arc::new(PasswordHasher::new());
        let token_issuer = Arc::new(TokenIssuer::new(&config.auth)?);

        let jobseeker_service = Arc::new(JobSeekerService::new(
            Arc::clone(&stores.jobseekers),
            Arc::clone(&password_hasher),
        ));
        let employer_service = Arc::new(EmployerService::new(
            Arc::clone(&stores.employers),
            Arc::clone(&password_hasher),
        ));
        let jobposting_service = Arc::new(JobPostingService::new(
            Arc::clone(&stores.jobpostings),
            Arc::clone(&stores.employers),
        ));
        let jobapplication_service = Arc::new(JobApplicationService::new(
            Arc::clone(&stores.jobapplications),
            Arc::clone(&stores.jobseekers),
            Arc::clone(&stores.jobpostings),
        ));
        let login_service = Arc::new(LoginService::new(
            Arc::clone(&stores.jobseekers),
            password_hasher,
            token_issuer,
        ));

        Ok(Self {
            config: Arc::new(config),
            stores,
            jobseeker_service,
            employer_service,
            jobposting_service,
            jobapplication_service,
            login_service,
        })
    }
}
