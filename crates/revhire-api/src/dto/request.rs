//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use revhire_service::{AccountInput, ApplicationInput, PostingInput};

/// Signup or full-replace body for job seekers and employers.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AccountRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Phone is required"))]
    pub phone: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

impl From<AccountRequest> for AccountInput {
    fn from(req: AccountRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
            phone: req.phone,
            password: req.password,
        }
    }
}

/// Job posting body. `email` identifies the owning employer.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PostingRequest {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Company is required"))]
    pub company: String,
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
}

impl From<PostingRequest> for PostingInput {
    fn from(req: PostingRequest) -> Self {
        Self {
            title: req.title,
            company: req.company,
            email: req.email,
        }
    }
}

/// Job application body. `email` identifies the applying job seeker.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ApplicationRequest {
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Resume is required"))]
    pub resume: String,
    #[validate(length(min = 1, message = "Skills are required"))]
    pub skills: String,
    /// The posting being applied to.
    #[validate(nested)]
    pub jobpost: PostingRequest,
}

impl From<ApplicationRequest> for ApplicationInput {
    fn from(req: ApplicationRequest) -> Self {
        Self {
            email: req.email,
            resume: req.resume,
            skills: req.skills,
            jobpost: req.jobpost.into(),
        }
    }
}

/// Form-encoded login body. `username` carries the job seeker email.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}
