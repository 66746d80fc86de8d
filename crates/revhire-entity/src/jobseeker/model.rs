//! Job seeker entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A registered job seeker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct JobSeeker {
    /// Database-generated identifier.
    pub id: i64,
    /// Full name.
    pub name: String,
    /// Email address, used as the login name and to link applications.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// Argon2 password hash. The plaintext is never stored.
    pub password: String,
}

/// Data written when creating or fully replacing a job seeker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewJobSeeker {
    /// Full name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// Pre-hashed password.
    pub password_hash: String,
}

impl NewJobSeeker {
    /// Materializes a stored row with the given identifier.
    pub fn into_row(self, id: i64) -> JobSeeker {
        JobSeeker {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            password: self.password_hash,
        }
    }
}
