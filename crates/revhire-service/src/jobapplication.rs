//! Job application operations.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

use revhire_core::error::AppError;
use revhire_database::store::{JobApplicationStore, JobPostingStore, JobSeekerStore};
use revhire_entity::{JobApplication, NewJobApplication, UpdateJobApplication};

use crate::input::ApplicationInput;

const NO_APPLICATION: &str = "No job application found";

/// An application together with the title of the posting it targets.
#[derive(Debug, Clone, Serialize)]
pub struct ApplicationWithPosting {
    pub application: JobApplication,
    /// `None` when no posting was matched or the posting was deleted.
    pub title: Option<String>,
}

/// Handles job application submission, lookup and removal.
#[derive(Clone)]
pub struct JobApplicationService {
    applications: Arc<dyn JobApplicationStore>,
    seekers: Arc<dyn JobSeekerStore>,
    postings: Arc<dyn JobPostingStore>,
}

impl JobApplicationService {
    /// Creates a new job application service.
    pub fn new(
        applications: Arc<dyn JobApplicationStore>,
        seekers: Arc<dyn JobSeekerStore>,
        postings: Arc<dyn JobPostingStore>,
    ) -> Self {
        Self {
            applications,
            seekers,
            postings,
        }
    }

    /// Submits an application for the job seeker registered under
    /// `input.email`.
    ///
    /// The target posting is matched on title, company and email. No match
    /// still stores the application, with no posting link.
    pub async fn create(&self, input: ApplicationInput) -> Result<JobApplication, AppError> {
        let seeker = self
            .seekers
            .find_by_email(&input.email)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Job seeker doesn't exist. Please create a job seeker account.")
            })?;

        let jobpost = &input.jobpost;
        let posting = self
            .postings
            .find_matching(&jobpost.title, &jobpost.company, &jobpost.email)
            .await?;
        if posting.is_none() {
            debug!(title = %jobpost.title, company = %jobpost.company, "No posting matched application");
        }

        let application = self
            .applications
            .create(&NewJobApplication {
                jobseeker_id: seeker.id,
                jobposting_id: posting.map(|p| p.id),
                email: input.email,
                resume: input.resume,
                skills: input.skills,
            })
            .await?;

        info!(
            jobapplication_id = application.id,
            jobseeker_id = seeker.id,
            jobposting_id = ?application.jobposting_id,
            "Job application created"
        );
        Ok(application)
    }

    async fn with_posting(
        &self,
        application: JobApplication,
    ) -> Result<ApplicationWithPosting, AppError> {
        let title = match application.jobposting_id {
            Some(id) => self.postings.get(id).await?.map(|p| p.title),
            None => None,
        };
        Ok(ApplicationWithPosting { application, title })
    }

    /// Fetches one application and the title of its posting.
    pub async fn get(&self, id: i64) -> Result<ApplicationWithPosting, AppError> {
        let application = self
            .applications
            .get(id)
            .await?
            .ok_or_else(|| AppError::not_found(NO_APPLICATION))?;
        self.with_posting(application).await
    }

    /// Lists the applications submitted by one job seeker.
    pub async fn list_by_jobseeker(
        &self,
        jobseeker_id: i64,
    ) -> Result<Vec<ApplicationWithPosting>, AppError> {
        let applications = self.applications.list_by_jobseeker(jobseeker_id).await?;
        if applications.is_empty() {
            return Err(AppError::not_found(format!(
                "No job applications found for job seeker ID: {jobseeker_id}"
            )));
        }

        let mut shown = Vec::with_capacity(applications.len());
        for application in applications {
            shown.push(self.with_posting(application).await?);
        }
        Ok(shown)
    }

    /// Replaces email, resume and skills. Both links are unchanged.
    pub async fn update(&self, id: i64, input: ApplicationInput) -> Result<u64, AppError> {
        let affected = self
            .applications
            .update(
                id,
                &UpdateJobApplication {
                    email: input.email,
                    resume: input.resume,
                    skills: input.skills,
                },
            )
            .await?;
        if affected == 0 {
            return Err(AppError::not_found(NO_APPLICATION));
        }
        info!(jobapplication_id = id, "Job application updated");
        Ok(affected)
    }

    /// Withdraws an application.
    pub async fn delete(&self, id: i64) -> Result<u64, AppError> {
        let affected = self.applications.delete(id).await?;
        if affected == 0 {
            return Err(AppError::not_found(NO_APPLICATION));
        }
        info!(jobapplication_id = id, "Job application deleted");
        Ok(affected)
    }
}
