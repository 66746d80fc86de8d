//! Job application entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An application submitted by a job seeker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct JobApplication {
    /// Database-generated identifier.
    pub id: i64,
    /// Identifier of the applying job seeker, resolved by email at creation.
    pub jobseeker_id: i64,
    /// Identifier of the matching job posting, if one was found.
    pub jobposting_id: Option<i64>,
    /// Applicant email.
    pub email: String,
    /// Resume text or document reference.
    pub resume: String,
    /// Free-form skills summary.
    pub skills: String,
}

/// Data required to create a job application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewJobApplication {
    pub jobseeker_id: i64,
    pub jobposting_id: Option<i64>,
    pub email: String,
    pub resume: String,
    pub skills: String,
}

impl NewJobApplication {
    /// Materializes a stored row with the given identifier.
    pub fn into_row(self, id: i64) -> JobApplication {
        JobApplication {
            id,
            jobseeker_id: self.jobseeker_id,
            jobposting_id: self.jobposting_id,
            email: self.email,
            resume: self.resume,
            skills: self.skills,
        }
    }
}

/// Replacement values for a job application's mutable fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateJobApplication {
    pub email: String,
    pub resume: String,
    pub skills: String,
}
