//! # revhire-auth
//!
//! Credential handling for RevHire.
//!
//! ## Modules
//!
//! - `password`: Argon2id password hashing and verification
//! - `token`: JWT bearer token issuance for the job seeker login flow

pub mod password;
pub mod token;

pub use password::PasswordHasher;
pub use token::{AccessToken, Claims, TokenIssuer};
