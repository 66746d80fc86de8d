//! HTTP request handlers organized by entity.

pub mod auth;
pub mod employer;
pub mod fallback;
pub mod health;
pub mod jobapplication;
pub mod jobposting;
pub mod jobseeker;
