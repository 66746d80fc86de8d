//! Job posting operations.

use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use revhire_core::error::AppError;
use revhire_database::store::{EmployerStore, JobPostingStore};
use revhire_entity::{Employer, JobPosting, NewJobPosting, UpdateJobPosting};

use crate::input::PostingInput;

const NO_POSTING: &str = "No job posting found";

/// A posting together with the employer that created it.
///
/// `creator` is `None` when the employer has since been deleted.
#[derive(Debug, Clone, Serialize)]
pub struct PostingWithCreator {
    pub posting: JobPosting,
    pub creator: Option<Employer>,
}

/// Handles job posting creation, lookup, replacement and removal.
#[derive(Clone)]
pub struct JobPostingService {
    postings: Arc<dyn JobPostingStore>,
    employers: Arc<dyn EmployerStore>,
}

impl JobPostingService {
    /// Creates a new job posting service.
    pub fn new(postings: Arc<dyn JobPostingStore>, employers: Arc<dyn EmployerStore>) -> Self {
        Self {
            postings,
            employers,
        }
    }

    /// Publishes a posting for the employer registered under `input.email`.
    pub async fn create(&self, input: PostingInput) -> Result<JobPosting, AppError> {
        let employer = self
            .employers
            .find_by_email(&input.email)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Employer doesn't exist. Please create an employer account.")
            })?;

        let posting = self
            .postings
            .create(&NewJobPosting {
                employer_id: employer.id,
                title: input.title,
                company: input.company,
                email: input.email,
            })
            .await?;

        info!(
            jobposting_id = posting.id,
            employer_id = employer.id,
            "Job posting created"
        );
        Ok(posting)
    }

    async fn with_creator(&self, posting: JobPosting) -> Result<PostingWithCreator, AppError> {
        let creator = self.employers.get(posting.employer_id).await?;
        Ok(PostingWithCreator { posting, creator })
    }

    /// Fetches one posting and its creator.
    pub async fn get(&self, id: i64) -> Result<PostingWithCreator, AppError> {
        let posting = self
            .postings
            .get(id)
            .await?
            .ok_or_else(|| AppError::not_found(NO_POSTING))?;
        self.with_creator(posting).await
    }

    /// Lists the postings created by one employer.
    pub async fn list_by_employer(
        &self,
        employer_id: i64,
    ) -> Result<Vec<PostingWithCreator>, AppError> {
        let postings = self.postings.list_by_employer(employer_id).await?;
        if postings.is_empty() {
            return Err(AppError::not_found(format!(
                "No job postings found for employer ID: {employer_id}"
            )));
        }

        // All rows share one employer, so a single lookup covers them.
        let creator = self.employers.get(employer_id).await?;
        Ok(postings
            .into_iter()
            .map(|posting| PostingWithCreator {
                posting,
                creator: creator.clone(),
            })
            .collect())
    }

    /// Replaces title, company and email. The employer link is unchanged.
    pub async fn update(&self, id: i64, input: PostingInput) -> Result<u64, AppError> {
        let affected = self
            .postings
            .update(
                id,
                &UpdateJobPosting {
                    title: input.title,
                    company: input.company,
                    email: input.email,
                },
            )
            .await?;
        if affected == 0 {
            return Err(AppError::not_found(NO_POSTING));
        }
        info!(jobposting_id = id, "Job posting updated");
        Ok(affected)
    }

    /// Deletes a posting. Applications pointing at it are left in place.
    pub async fn delete(&self, id: i64) -> Result<u64, AppError> {
        let affected = self.postings.delete(id).await?;
        if affected == 0 {
            return Err(AppError::not_found(NO_POSTING));
        }
        info!(jobposting_id = id, "Job posting deleted");
        Ok(affected)
    }
}
