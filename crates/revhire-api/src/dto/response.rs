//! Response DTOs.
//!
//! Create endpoints return the stored entity as-is. The shapes below are the
//! narrower views used by read endpoints.

use serde::{Deserialize, Serialize};

use revhire_entity::{Employer, JobSeeker};
use revhire_service::{ApplicationWithPosting, PostingWithCreator};

/// Entry of the job seeker listing. Carries no id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobSeekerListItem {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Stored password hash.
    pub password: String,
}

impl From<JobSeeker> for JobSeekerListItem {
    fn from(seeker: JobSeeker) -> Self {
        Self {
            name: seeker.name,
            email: seeker.email,
            phone: seeker.phone,
            password: seeker.password,
        }
    }
}

/// Public view of a job seeker or employer account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl From<JobSeeker> for AccountResponse {
    fn from(seeker: JobSeeker) -> Self {
        Self {
            id: seeker.id,
            name: seeker.name,
            email: seeker.email,
            phone: seeker.phone,
        }
    }
}

impl From<Employer> for AccountResponse {
    fn from(employer: Employer) -> Self {
        Self {
            id: employer.id,
            name: employer.name,
            email: employer.email,
            phone: employer.phone,
        }
    }
}

/// A job posting with its creator embedded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostingResponse {
    pub id: i64,
    pub employer_id: i64,
    pub title: String,
    pub company: String,
    /// `null` once the employer has been deleted.
    pub creator: Option<AccountResponse>,
}

impl From<PostingWithCreator> for PostingResponse {
    fn from(shown: PostingWithCreator) -> Self {
        let PostingWithCreator { posting, creator } = shown;
        Self {
            id: posting.id,
            employer_id: posting.employer_id,
            title: posting.title,
            company: posting.company,
            creator: creator.map(AccountResponse::from),
        }
    }
}

/// A job application with the title of the posting it targets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationResponse {
    pub id: i64,
    pub jobseeker_id: i64,
    pub jobposting_id: Option<i64>,
    pub email: String,
    pub resume: String,
    pub skills: String,
    pub title: Option<String>,
}

impl From<ApplicationWithPosting> for ApplicationResponse {
    fn from(shown: ApplicationWithPosting) -> Self {
        let ApplicationWithPosting { application, title } = shown;
        Self {
            id: application.id,
            jobseeker_id: application.jobseeker_id,
            jobposting_id: application.jobposting_id,
            email: application.email,
            resume: application.resume,
            skills: application.skills,
            title,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `ok` or `degraded`.
    pub status: String,
    /// Server version.
    pub version: String,
}
