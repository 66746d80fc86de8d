//! In-memory entity store using a Tokio read-write lock.
//!
//! Implements all four store traits over one shared table set. Suitable for
//! tests and single-process deployments only: nothing survives a restart.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use revhire_core::result::AppResult;
use revhire_entity::{
    Employer, JobApplication, JobPosting, JobSeeker, NewEmployer, NewJobApplication,
    NewJobPosting, NewJobSeeker, UpdateJobApplication, UpdateJobPosting,
};

use crate::store::{EmployerStore, JobApplicationStore, JobPostingStore, JobSeekerStore};

/// One table: rows keyed by id plus the next id to hand out.
///
/// Ids start at 1 and are never reused, matching a `BIGSERIAL` column.
#[derive(Debug)]
struct Table<T> {
    rows: BTreeMap<i64, T>,
    next_id: i64,
}

impl<T: Clone> Table<T> {
    fn new() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }

    fn insert_with(&mut self, build: impl FnOnce(i64) -> T) -> T {
        let id = self.next_id;
        self.next_id += 1;
        let row = build(id);
        self.rows.insert(id, row.clone());
        row
    }

    fn all(&self) -> Vec<T> {
        self.rows.values().cloned().collect()
    }

    fn find(&self, predicate: impl Fn(&T) -> bool) -> Option<T> {
        self.rows.values().find(|row| predicate(row)).cloned()
    }

    fn filter(&self, predicate: impl Fn(&T) -> bool) -> Vec<T> {
        self.rows.values().filter(|row| predicate(row)).cloned().collect()
    }

    fn modify(&mut self, id: i64, apply: impl FnOnce(&mut T)) -> u64 {
        match self.rows.get_mut(&id) {
            Some(row) => {
                apply(row);
                1
            }
            None => 0,
        }
    }

    fn remove(&mut self, id: i64) -> u64 {
        u64::from(self.rows.remove(&id).is_some())
    }
}

#[derive(Debug)]
struct Tables {
    jobseekers: Table<JobSeeker>,
    employers: Table<Employer>,
    jobpostings: Table<JobPosting>,
    jobapplications: Table<JobApplication>,
}

/// In-memory store shared by cloning; all clones see the same tables.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            tables: Arc::new(RwLock::new(Tables {
                jobseekers: Table::new(),
                employers: Table::new(),
                jobpostings: Table::new(),
                jobapplications: Table::new(),
            })),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl JobSeekerStore for MemoryStore {
    async fn create(&self, data: &NewJobSeeker) -> AppResult<JobSeeker> {
        let mut tables = self.tables.write().await;
        let row = tables
            .jobseekers
            .insert_with(|id| data.clone().into_row(id));
        debug!(id = row.id, "Inserted job seeker");
        Ok(row)
    }

    async fn list(&self) -> AppResult<Vec<JobSeeker>> {
        Ok(self.tables.read().await.jobseekers.all())
    }

    async fn get(&self, id: i64) -> AppResult<Option<JobSeeker>> {
        Ok(self.tables.read().await.jobseekers.rows.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<JobSeeker>> {
        Ok(self
            .tables
            .read()
            .await
            .jobseekers
            .find(|row| row.email == email))
    }

    async fn update(&self, id: i64, data: &NewJobSeeker) -> AppResult<u64> {
        let mut tables = self.tables.write().await;
        Ok(tables.jobseekers.modify(id, |row| {
            *row = data.clone().into_row(id);
        }))
    }

    async fn delete(&self, id: i64) -> AppResult<u64> {
        Ok(self.tables.write().await.jobseekers.remove(id))
    }
}

#[async_trait]
impl EmployerStore for MemoryStore {
    async fn create(&self, data: &NewEmployer) -> AppResult<Employer> {
        let mut tables = self.tables.write().await;
        let row = tables.employers.insert_with(|id| data.clone().into_row(id));
        debug!(id = row.id, "Inserted employer");
        Ok(row)
    }

    async fn list(&self) -> AppResult<Vec<Employer>> {
        Ok(self.tables.read().await.employers.all())
    }

    async fn first(&self) -> AppResult<Option<Employer>> {
        Ok(self
            .tables
            .read()
            .await
            .employers
            .rows
            .values()
            .next()
            .cloned())
    }

    async fn get(&self, id: i64) -> AppResult<Option<Employer>> {
        Ok(self.tables.read().await.employers.rows.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Employer>> {
        Ok(self
            .tables
            .read()
            .await
            .employers
            .find(|row| row.email == email))
    }

    async fn update(&self, id: i64, data: &NewEmployer) -> AppResult<u64> {
        let mut tables = self.tables.write().await;
        Ok(tables.employers.modify(id, |row| {
            *row = data.clone().into_row(id);
        }))
    }

    async fn delete(&self, id: i64) -> AppResult<u64> {
        Ok(self.tables.write().await.employers.remove(id))
    }
}

#[async_trait]
impl JobPostingStore for MemoryStore {
    async fn create(&self, data: &NewJobPosting) -> AppResult<JobPosting> {
        let mut tables = self.tables.write().await;
        let row = tables
            .jobpostings
            .insert_with(|id| data.clone().into_row(id));
        debug!(id = row.id, employer_id = row.employer_id, "Inserted job posting");
        Ok(row)
    }

    async fn list(&self) -> AppResult<Vec<JobPosting>> {
        Ok(self.tables.read().await.jobpostings.all())
    }

    async fn list_by_employer(&self, employer_id: i64) -> AppResult<Vec<JobPosting>> {
        Ok(self
            .tables
            .read()
            .await
            .jobpostings
            .filter(|row| row.employer_id == employer_id))
    }

    async fn get(&self, id: i64) -> AppResult<Option<JobPosting>> {
        Ok(self.tables.read().await.jobpostings.rows.get(&id).cloned())
    }

    async fn find_matching(
        &self,
        title: &str,
        company: &str,
        email: &str,
    ) -> AppResult<Option<JobPosting>> {
        Ok(self.tables.read().await.jobpostings.find(|row| {
            row.title == title && row.company == company && row.email == email
        }))
    }

    async fn update(&self, id: i64, data: &UpdateJobPosting) -> AppResult<u64> {
        let mut tables = self.tables.write().await;
        Ok(tables.jobpostings.modify(id, |row| {
            row.title = data.title.clone();
            row.company = data.company.clone();
            row.email = data.email.clone();
        }))
    }

    async fn delete(&self, id: i64) -> AppResult<u64> {
        Ok(self.tables.write().await.jobpostings.remove(id))
    }
}

#[async_trait]
impl JobApplicationStore for MemoryStore {
    async fn create(&self, data: &NewJobApplication) -> AppResult<JobApplication> {
        let mut tables = self.tables.write().await;
        let row = tables
            .jobapplications
            .insert_with(|id| data.clone().into_row(id));
        debug!(id = row.id, jobseeker_id = row.jobseeker_id, "Inserted job application");
        Ok(row)
    }

    async fn list(&self) -> AppResult<Vec<JobApplication>> {
        Ok(self.tables.read().await.jobapplications.all())
    }

    async fn list_by_jobseeker(&self, jobseeker_id: i64) -> AppResult<Vec<JobApplication>> {
        Ok(self
            .tables
            .read()
            .await
            .jobapplications
            .filter(|row| row.jobseeker_id == jobseeker_id))
    }

    async fn get(&self, id: i64) -> AppResult<Option<JobApplication>> {
        Ok(self
            .tables
            .read()
            .await
            .jobapplications
            .rows
            .get(&id)
            .cloned())
    }

    async fn update(&self, id: i64, data: &UpdateJobApplication) -> AppResult<u64> {
        let mut tables = self.tables.write().await;
        Ok(tables.jobapplications.modify(id, |row| {
            row.email = data.email.clone();
            row.resume = data.resume.clone();
            row.skills = data.skills.clone();
        }))
    }

    async fn delete(&self, id: i64) -> AppResult<u64> {
        Ok(self.tables.write().await.jobapplications.remove(id))
    }
}
