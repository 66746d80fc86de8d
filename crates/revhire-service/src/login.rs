//! Job seeker login.

use std::sync::Arc;

use tracing::{info, warn};

use revhire_auth::password::PasswordHasher;
use revhire_auth::token::{AccessToken, TokenIssuer};
use revhire_core::error::AppError;
use revhire_database::store::JobSeekerStore;

/// Exchanges job seeker credentials for a bearer token.
#[derive(Clone)]
pub struct LoginService {
    seekers: Arc<dyn JobSeekerStore>,
    hasher: Arc<PasswordHasher>,
    issuer: Arc<TokenIssuer>,
}

impl LoginService {
    /// Creates a new login service.
    pub fn new(
        seekers: Arc<dyn JobSeekerStore>,
        hasher: Arc<PasswordHasher>,
        issuer: Arc<TokenIssuer>,
    ) -> Self {
        Self {
            seekers,
            hasher,
            issuer,
        }
    }

    /// Authenticates by email and password.
    ///
    /// Both an unknown email and a wrong password are reported as not found.
    pub async fn login(&self, username: &str, password: &str) -> Result<AccessToken, AppError> {
        let seeker = self
            .seekers
            .find_by_email(username)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Jobseeker with email {username} not found")))?;

        if !self.hasher.verify(&seeker.password, password) {
            warn!(jobseeker_id = seeker.id, "Login rejected: incorrect password");
            return Err(AppError::not_found("Incorrect password"));
        }

        let token = self.issuer.issue(&seeker.email)?;
        info!(jobseeker_id = seeker.id, "Job seeker logged in");
        Ok(token)
    }
}
