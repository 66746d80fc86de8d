//! Job seeker repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use revhire_core::error::{AppError, ErrorKind};
use revhire_core::result::AppResult;
use revhire_entity::{JobSeeker, NewJobSeeker};

use crate::store::JobSeekerStore;

/// Repository for the `jobseekers` table.
#[derive(Debug, Clone)]
pub struct JobSeekerRepository {
    pool: PgPool,
}

impl JobSeekerRepository {
    /// Create a new job seeker repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JobSeekerStore for JobSeekerRepository {
    async fn create(&self, data: &NewJobSeeker) -> AppResult<JobSeeker> {
        sqlx::query_as::<_, JobSeeker>(
            "INSERT INTO jobseekers (name, email, phone, password) \
             VALUES ($1, $2, $3, $4) \
             RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.phone)
        .bind(&data.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create job seeker", e))
    }

    async fn list(&self) -> AppResult<Vec<JobSeeker>> {
        sqlx::query_as::<_, JobSeeker>("SELECT * FROM jobseekers ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list job seekers", e))
    }

    async fn get(&self, id: i64) -> AppResult<Option<JobSeeker>> {
        sqlx::query_as::<_, JobSeeker>("SELECT * FROM jobseekers WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find job seeker by id", e)
            })
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<JobSeeker>> {
        sqlx::query_as::<_, JobSeeker>(
            "SELECT * FROM jobseekers WHERE email = $1 ORDER BY id LIMIT 1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find job seeker by email", e)
        })
    }

    async fn update(&self, id: i64, data: &NewJobSeeker) -> AppResult<u64> {
        let result = sqlx::query(
            "UPDATE jobseekers SET name = $2, email = $3, phone = $4, password = $5 \
             WHERE id = $1",
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.phone)
        .bind(&data.password_hash)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update job seeker", e))?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i64) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM jobseekers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete job seeker", e)
            })?;

        Ok(result.rows_affected())
    }
}
