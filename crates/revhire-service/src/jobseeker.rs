//! Job seeker account operations.

use std::sync::Arc;

use tracing::info;

use revhire_auth::password::PasswordHasher;
use revhire_core::error::AppError;
use revhire_database::store::JobSeekerStore;
use revhire_entity::{JobSeeker, NewJobSeeker};

use crate::input::AccountInput;

/// Handles job seeker signup, lookup, replacement and removal.
#[derive(Clone)]
pub struct JobSeekerService {
    store: Arc<dyn JobSeekerStore>,
    hasher: Arc<PasswordHasher>,
}

fn missing(id: i64) -> AppError {
    AppError::not_found(format!("Jobseeker with id {id} not found"))
}

impl JobSeekerService {
    /// Creates a new job seeker service.
    pub fn new(store: Arc<dyn JobSeekerStore>, hasher: Arc<PasswordHasher>) -> Self {
        Self { store, hasher }
    }

    fn to_row(&self, input: AccountInput) -> Result<NewJobSeeker, AppError> {
        Ok(NewJobSeeker {
            password_hash: self.hasher.hash(&input.password)?,
            name: input.name,
            email: input.email,
            phone: input.phone,
        })
    }

    /// Registers a job seeker, storing only the password hash.
    pub async fn create(&self, input: AccountInput) -> Result<JobSeeker, AppError> {
        let row = self.to_row(input)?;
        let seeker = self.store.create(&row).await?;
        info!(jobseeker_id = seeker.id, "Job seeker created");
        Ok(seeker)
    }

    /// Lists all job seekers. An empty table is reported as not found.
    pub async fn list(&self) -> Result<Vec<JobSeeker>, AppError> {
        let seekers = self.store.list().await?;
        if seekers.is_empty() {
            return Err(AppError::not_found("No jobseekers found"));
        }
        Ok(seekers)
    }

    /// Fetches one job seeker by id.
    pub async fn get(&self, id: i64) -> Result<JobSeeker, AppError> {
        self.store.get(id).await?.ok_or_else(|| missing(id))
    }

    /// Replaces every field of a job seeker and returns the affected count.
    ///
    /// The submitted password is re-hashed.
    pub async fn update(&self, id: i64, input: AccountInput) -> Result<u64, AppError> {
        let row = self.to_row(input)?;
        let affected = self.store.update(id, &row).await?;
        if affected == 0 {
            return Err(missing(id));
        }
        info!(jobseeker_id = id, "Job seeker updated");
        Ok(affected)
    }

    /// Deletes a job seeker. Their applications are left in place.
    pub async fn delete(&self, id: i64) -> Result<u64, AppError> {
        let affected = self.store.delete(id).await?;
        if affected == 0 {
            return Err(missing(id));
        }
        info!(jobseeker_id = id, "Job seeker deleted");
        Ok(affected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use revhire_database::EntityStores;

    fn service() -> JobSeekerService {
        JobSeekerService::new(
            EntityStores::memory().jobseekers,
            Arc::new(PasswordHasher::new()),
        )
    }

    fn ada() -> AccountInput {
        AccountInput {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: "555-0100".to_string(),
            password: "analytical".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_then_get_stores_hash() {
        let svc = service();
        let created = svc.create(ada()).await.unwrap();
        let fetched = svc.get(created.id).await.unwrap();

        assert_eq!(fetched.name, "Ada Lovelace");
        assert_eq!(fetched.email, "ada@example.com");
        assert_eq!(fetched.phone, "555-0100");
        assert_ne!(fetched.password, "analytical");
        assert!(PasswordHasher::new().verify(&fetched.password, "analytical"));
    }

    #[tokio::test]
    async fn test_empty_list_is_not_found() {
        let err = service().list().await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.message, "No jobseekers found");
    }

    #[tokio::test]
    async fn test_missing_id_is_not_found() {
        let svc = service();
        for err in [
            svc.get(7).await.unwrap_err(),
            svc.update(7, ada()).await.unwrap_err(),
            svc.delete(7).await.unwrap_err(),
        ] {
            assert!(err.is_not_found());
            assert_eq!(err.message, "Jobseeker with id 7 not found");
        }
    }

    #[tokio::test]
    async fn test_delete_then_get_is_not_found() {
        let svc = service();
        let created = svc.create(ada()).await.unwrap();

        assert_eq!(svc.delete(created.id).await.unwrap(), 1);
        assert!(svc.get(created.id).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_update_rehashes_password() {
        let svc = service();
        let created = svc.create(ada()).await.unwrap();

        let mut changed = ada();
        changed.phone = "555-0199".to_string();
        changed.password = "difference-engine".to_string();
        assert_eq!(svc.update(created.id, changed).await.unwrap(), 1);

        let fetched = svc.get(created.id).await.unwrap();
        assert_eq!(fetched.phone, "555-0199");
        assert!(PasswordHasher::new().verify(&fetched.password, "difference-engine"));
    }
}
