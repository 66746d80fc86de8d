//! Job posting repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use revhire_core::error::{AppError, ErrorKind};
use revhire_core::result::AppResult;
use revhire_entity::{JobPosting, NewJobPosting, UpdateJobPosting};

use crate::store::JobPostingStore;

/// Repository for the `jobpostings` table.
#[derive(Debug, Clone)]
pub struct JobPostingRepository {
    pool: PgPool,
}

impl JobPostingRepository {
    /// Create a new job posting repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JobPostingStore for JobPostingRepository {
    async fn create(&self, data: &NewJobPosting) -> AppResult<JobPosting> {
        sqlx::query_as::<_, JobPosting>(
            "INSERT INTO jobpostings (employer_id, title, company, email) \
             VALUES ($1, $2, $3, $4) \
             RETURNING *",
        )
        .bind(data.employer_id)
        .bind(&data.title)
        .bind(&data.company)
        .bind(&data.email)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create job posting", e))
    }

    async fn list(&self) -> AppResult<Vec<JobPosting>> {
        sqlx::query_as::<_, JobPosting>("SELECT * FROM jobpostings ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list job postings", e)
            })
    }

    async fn list_by_employer(&self, employer_id: i64) -> AppResult<Vec<JobPosting>> {
        sqlx::query_as::<_, JobPosting>(
            "SELECT * FROM jobpostings WHERE employer_id = $1 ORDER BY id",
        )
        .bind(employer_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                "Failed to list job postings by employer",
                e,
            )
        })
    }

    async fn get(&self, id: i64) -> AppResult<Option<JobPosting>> {
        sqlx::query_as::<_, JobPosting>("SELECT * FROM jobpostings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find job posting by id", e)
            })
    }

    async fn find_matching(
        &self,
        title: &str,
        company: &str,
        email: &str,
    ) -> AppResult<Option<JobPosting>> {
        sqlx::query_as::<_, JobPosting>(
            "SELECT * FROM jobpostings WHERE title = $1 AND company = $2 AND email = $3 \
             ORDER BY id LIMIT 1",
        )
        .bind(title)
        .bind(company)
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to match job posting", e)
        })
    }

    async fn update(&self, id: i64, data: &UpdateJobPosting) -> AppResult<u64> {
        let result = sqlx::query(
            "UPDATE jobpostings SET title = $2, company = $3, email = $4 WHERE id = $1",
        )
        .bind(id)
        .bind(&data.title)
        .bind(&data.company)
        .bind(&data.email)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update job posting", e))?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i64) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM jobpostings WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete job posting", e)
            })?;

        Ok(result.rows_affected())
    }
}
