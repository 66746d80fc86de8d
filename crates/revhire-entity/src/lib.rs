//! # revhire-entity
//!
//! Domain entity models for RevHire. Every struct in this crate represents
//! a database table row or the payload used to write one. Row types derive
//! `sqlx::FromRow`; identifiers are database-generated `i64` values.

pub mod employer;
pub mod jobapplication;
pub mod jobposting;
pub mod jobseeker;

pub use employer::{Employer, NewEmployer};
pub use jobapplication::{JobApplication, NewJobApplication, UpdateJobApplication};
pub use jobposting::{JobPosting, NewJobPosting, UpdateJobPosting};
pub use jobseeker::{JobSeeker, NewJobSeeker};
