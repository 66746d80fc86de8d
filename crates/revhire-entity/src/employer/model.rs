//! Employer entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A registered employer account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Employer {
    /// Database-generated identifier.
    pub id: i64,
    /// Employer name.
    pub name: String,
    /// Email address, used to resolve the employer of a new job posting.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// Argon2 password hash.
    pub password: String,
}

/// Data written when creating or fully replacing an employer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEmployer {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Pre-hashed password.
    pub password_hash: String,
}

impl NewEmployer {
    /// Materializes a stored row with the given identifier.
    pub fn into_row(self, id: i64) -> Employer {
        Employer {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            password: self.password_hash,
        }
    }
}
