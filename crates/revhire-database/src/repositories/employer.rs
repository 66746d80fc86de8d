//! Employer repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use revhire_core::error::{AppError, ErrorKind};
use revhire_core::result::AppResult;
use revhire_entity::{Employer, NewEmployer};

use crate::store::EmployerStore;

/// Repository for the `employers` table.
#[derive(Debug, Clone)]
pub struct EmployerRepository {
    pool: PgPool,
}

impl EmployerRepository {
    /// Create a new employer repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployerStore for EmployerRepository {
    async fn create(&self, data: &NewEmployer) -> AppResult<Employer> {
        sqlx::query_as::<_, Employer>(
            "INSERT INTO employers (name, email, phone, password) \
             VALUES ($1, $2, $3, $4) \
             RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.phone)
        .bind(&data.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create employer", e))
    }

    async fn list(&self) -> AppResult<Vec<Employer>> {
        sqlx::query_as::<_, Employer>("SELECT * FROM employers ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list employers", e))
    }

    async fn first(&self) -> AppResult<Option<Employer>> {
        sqlx::query_as::<_, Employer>("SELECT * FROM employers ORDER BY id LIMIT 1")
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to fetch first employer", e)
            })
    }

    async fn get(&self, id: i64) -> AppResult<Option<Employer>> {
        sqlx::query_as::<_, Employer>("SELECT * FROM employers WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find employer by id", e)
            })
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Employer>> {
        sqlx::query_as::<_, Employer>(
            "SELECT * FROM employers WHERE email = $1 ORDER BY id LIMIT 1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find employer by email", e)
        })
    }

    async fn update(&self, id: i64, data: &NewEmployer) -> AppResult<u64> {
        let result = sqlx::query(
            "UPDATE employers SET name = $2, email = $3, phone = $4, password = $5 \
             WHERE id = $1",
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.phone)
        .bind(&data.password_hash)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update employer", e))?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i64) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM employers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete employer", e)
            })?;

        Ok(result.rows_affected())
    }
}
