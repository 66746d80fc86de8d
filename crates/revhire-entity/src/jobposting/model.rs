//! Job posting entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A job posting published by an employer.
///
/// `employer_id` is resolved once at creation time. Deleting the employer
/// afterwards leaves the posting in place with a dangling reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct JobPosting {
    /// Database-generated identifier.
    pub id: i64,
    /// Identifier of the employer that created the posting.
    pub employer_id: i64,
    /// Position title.
    pub title: String,
    /// Hiring company name.
    pub company: String,
    /// Copy of the employer's email at creation time.
    pub email: String,
}

/// Data required to create a job posting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewJobPosting {
    /// Resolved employer identifier.
    pub employer_id: i64,
    pub title: String,
    pub company: String,
    pub email: String,
}

impl NewJobPosting {
    /// Materializes a stored row with the given identifier.
    pub fn into_row(self, id: i64) -> JobPosting {
        JobPosting {
            id,
            employer_id: self.employer_id,
            title: self.title,
            company: self.company,
            email: self.email,
        }
    }
}

/// Replacement values for a job posting's mutable fields.
///
/// The employer reference is not part of an update and is never re-validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateJobPosting {
    pub title: String,
    pub company: String,
    pub email: String,
}
