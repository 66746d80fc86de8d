//! Job application repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use revhire_core::error::{AppError, ErrorKind};
use revhire_core::result::AppResult;
use revhire_entity::{JobApplication, NewJobApplication, UpdateJobApplication};

use crate::store::JobApplicationStore;

/// Repository for the `jobapplications` table.
#[derive(Debug, Clone)]
pub struct JobApplicationRepository {
    pool: PgPool,
}

impl JobApplicationRepository {
    /// Create a new job application repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JobApplicationStore for JobApplicationRepository {
    async fn create(&self, data: &NewJobApplication) -> AppResult<JobApplication> {
        sqlx::query_as::<_, JobApplication>(
            "INSERT INTO jobapplications (jobseeker_id, jobposting_id, email, resume, skills) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING *",
        )
        .bind(data.jobseeker_id)
        .bind(data.jobposting_id)
        .bind(&data.email)
        .bind(&data.resume)
        .bind(&data.skills)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to create job application", e)
        })
    }

    async fn list(&self) -> AppResult<Vec<JobApplication>> {
        sqlx::query_as::<_, JobApplication>("SELECT * FROM jobapplications ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list job applications", e)
            })
    }

    async fn list_by_jobseeker(&self, jobseeker_id: i64) -> AppResult<Vec<JobApplication>> {
        sqlx::query_as::<_, JobApplication>(
            "SELECT * FROM jobapplications WHERE jobseeker_id = $1 ORDER BY id",
        )
        .bind(jobseeker_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                "Failed to list job applications by job seeker",
                e,
            )
        })
    }

    async fn get(&self, id: i64) -> AppResult<Option<JobApplication>> {
        sqlx::query_as::<_, JobApplication>("SELECT * FROM jobapplications WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    "Failed to find job application by id",
                    e,
                )
            })
    }

    async fn update(&self, id: i64, data: &UpdateJobApplication) -> AppResult<u64> {
        let result = sqlx::query(
            "UPDATE jobapplications SET email = $2, resume = $3, skills = $4 WHERE id = $1",
        )
        .bind(id)
        .bind(&data.email)
        .bind(&data.resume)
        .bind(&data.skills)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update job application", e)
        })?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i64) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM jobapplications WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete job application", e)
            })?;

        Ok(result.rows_affected())
    }
}
