//! Entity store traits.
//!
//! One trait per entity with the same CRUD surface: `create` returns the
//! stored row including generated fields, `get` returns `None` for unknown
//! ids, and `update`/`delete` report the number of affected rows so callers
//! can tell a missing id apart from a successful write. Updates replace the
//! mutable fields wholesale and never re-validate foreign keys; deletes never
//! cascade.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use revhire_core::config::DatabaseConfig;
use revhire_core::result::AppResult;
use revhire_entity::{
    Employer, JobApplication, JobPosting, JobSeeker, NewEmployer, NewJobApplication,
    NewJobPosting, NewJobSeeker, UpdateJobApplication, UpdateJobPosting,
};

use crate::connection::DatabasePool;
use crate::memory::MemoryStore;
use crate::migration::run_migrations;
use crate::repositories::{
    EmployerRepository, JobApplicationRepository, JobPostingRepository, JobSeekerRepository,
};

/// Persistence for [`JobSeeker`] rows.
#[async_trait]
pub trait JobSeekerStore: Send + Sync + 'static {
    /// Insert a new job seeker and return the stored row.
    async fn create(&self, data: &NewJobSeeker) -> AppResult<JobSeeker>;

    /// Return every job seeker ordered by id.
    async fn list(&self) -> AppResult<Vec<JobSeeker>>;

    /// Find a job seeker by primary key.
    async fn get(&self, id: i64) -> AppResult<Option<JobSeeker>>;

    /// Find the first job seeker registered with the given email.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<JobSeeker>>;

    /// Replace the mutable fields of a job seeker.
    async fn update(&self, id: i64, data: &NewJobSeeker) -> AppResult<u64>;

    /// Delete a job seeker by primary key.
    async fn delete(&self, id: i64) -> AppResult<u64>;
}

/// Persistence for [`Employer`] rows.
#[async_trait]
pub trait EmployerStore: Send + Sync + 'static {
    /// Insert a new employer and return the stored row.
    async fn create(&self, data: &NewEmployer) -> AppResult<Employer>;

    /// Return every employer ordered by id.
    async fn list(&self) -> AppResult<Vec<Employer>>;

    /// Return the employer with the lowest id, if any.
    async fn first(&self) -> AppResult<Option<Employer>>;

    /// Find an employer by primary key.
    async fn get(&self, id: i64) -> AppResult<Option<Employer>>;

    /// Find the first employer registered with the given email.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Employer>>;

    /// Replace the mutable fields of an employer.
    async fn update(&self, id: i64, data: &NewEmployer) -> AppResult<u64>;

    /// Delete an employer by primary key.
    async fn delete(&self, id: i64) -> AppResult<u64>;
}

/// Persistence for [`JobPosting`] rows.
#[async_trait]
pub trait JobPostingStore: Send + Sync + 'static {
    /// Insert a new job posting and return the stored row.
    async fn create(&self, data: &NewJobPosting) -> AppResult<JobPosting>;

    /// Return every job posting ordered by id.
    async fn list(&self) -> AppResult<Vec<JobPosting>>;

    /// Return the postings created by one employer, ordered by id.
    async fn list_by_employer(&self, employer_id: i64) -> AppResult<Vec<JobPosting>>;

    /// Find a job posting by primary key.
    async fn get(&self, id: i64) -> AppResult<Option<JobPosting>>;

    /// Find the first posting with exactly this title, company and email.
    async fn find_matching(
        &self,
        title: &str,
        company: &str,
        email: &str,
    ) -> AppResult<Option<JobPosting>>;

    /// Replace the mutable fields of a job posting.
    async fn update(&self, id: i64, data: &UpdateJobPosting) -> AppResult<u64>;

    /// Delete a job posting by primary key.
    async fn delete(&self, id: i64) -> AppResult<u64>;
}

/// Persistence for [`JobApplication`] rows.
#[async_trait]
pub trait JobApplicationStore: Send + Sync + 'static {
    /// Insert a new job application and return the stored row.
    async fn create(&self, data: &NewJobApplication) -> AppResult<JobApplication>;

    /// Return every job application ordered by id.
    async fn list(&self) -> AppResult<Vec<JobApplication>>;

    /// Return the applications submitted by one job seeker, ordered by id.
    async fn list_by_jobseeker(&self, jobseeker_id: i64) -> AppResult<Vec<JobApplication>>;

    /// Find a job application by primary key.
    async fn get(&self, id: i64) -> AppResult<Option<JobApplication>>;

    /// Replace the mutable fields of a job application.
    async fn update(&self, id: i64, data: &UpdateJobApplication) -> AppResult<u64>;

    /// Delete a job application by primary key.
    async fn delete(&self, id: i64) -> AppResult<u64>;
}

/// The four entity stores, constructed once and injected into services.
#[derive(Clone)]
pub struct EntityStores {
    pub jobseekers: Arc<dyn JobSeekerStore>,
    pub employers: Arc<dyn EmployerStore>,
    pub jobpostings: Arc<dyn JobPostingStore>,
    pub jobapplications: Arc<dyn JobApplicationStore>,
    /// The backing pool when the postgres provider is in use.
    pub pool: Option<DatabasePool>,
}

impl std::fmt::Debug for EntityStores {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntityStores")
            .field("pool", &self.pool)
            .finish_non_exhaustive()
    }
}

impl EntityStores {
    /// Stores backed by PostgreSQL repositories sharing one pool.
    pub fn postgres(pool: DatabasePool) -> Self {
        let pg = pool.pool().clone();
        Self {
            jobseekers: Arc::new(JobSeekerRepository::new(pg.clone())),
            employers: Arc::new(EmployerRepository::new(pg.clone())),
            jobpostings: Arc::new(JobPostingRepository::new(pg.clone())),
            jobapplications: Arc::new(JobApplicationRepository::new(pg)),
            pool: Some(pool),
        }
    }

    /// Stores backed by a single fresh in-memory table set.
    pub fn memory() -> Self {
        let store = MemoryStore::new();
        Self {
            jobseekers: Arc::new(store.clone()),
            employers: Arc::new(store.clone()),
            jobpostings: Arc::new(store.clone()),
            jobapplications: Arc::new(store),
            pool: None,
        }
    }

    /// Build the stores selected by `database.provider`.
    ///
    /// For postgres this connects the pool and, unless disabled, applies the
    /// embedded migrations.
    pub async fn from_config(config: &DatabaseConfig) -> AppResult<Self> {
        if config.is_memory() {
            info!("Using in-memory entity store");
            return Ok(Self::memory());
        }

        let pool = DatabasePool::connect(config).await?;
        if config.run_migrations {
            run_migrations(pool.pool()).await?;
        }
        Ok(Self::postgres(pool))
    }

    /// Check that the backing store is reachable.
    pub async fn health_check(&self) -> AppResult<bool> {
        match &self.pool {
            Some(pool) => pool.health_check().await,
            None => Ok(true),
        }
    }
}
