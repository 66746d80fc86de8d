//! Already-validated inputs accepted by the services.

use serde::{Deserialize, Serialize};

/// Signup or full-replace data for a job seeker or employer account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountInput {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Plaintext password; hashed before it reaches a store.
    pub password: String,
}

/// Job posting fields as submitted by the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostingInput {
    pub title: String,
    pub company: String,
    /// Employer email, used to resolve the owning employer.
    pub email: String,
}

/// Job application fields as submitted by the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationInput {
    /// Applicant email, used to resolve the job seeker.
    pub email: String,
    pub resume: String,
    pub skills: String,
    /// The posting being applied to, identified by its public fields.
    pub jobpost: PostingInput,
}
