//! Employer account operations.

use std::sync::Arc;

use tracing::info;

use revhire_auth::password::PasswordHasher;
use revhire_core::error::AppError;
use revhire_database::store::EmployerStore;
use revhire_entity::{Employer, NewEmployer};

use crate::input::AccountInput;

const NO_EMPLOYER: &str = "No employer found";

/// Handles employer signup, lookup, replacement and removal.
#[derive(Clone)]
pub struct EmployerService {
    store: Arc<dyn EmployerStore>,
    hasher: Arc<PasswordHasher>,
}

impl EmployerService {
    /// Creates a new employer service.
    pub fn new(store: Arc<dyn EmployerStore>, hasher: Arc<PasswordHasher>) -> Self {
        Self { store, hasher }
    }

    fn to_row(&self, input: AccountInput) -> Result<NewEmployer, AppError> {
        Ok(NewEmployer {
            password_hash: self.hasher.hash(&input.password)?,
            name: input.name,
            email: input.email,
            phone: input.phone,
        })
    }

    /// Registers an employer, storing only the password hash.
    pub async fn create(&self, input: AccountInput) -> Result<Employer, AppError> {
        let row = self.to_row(input)?;
        let employer = self.store.create(&row).await?;
        info!(employer_id = employer.id, "Employer created");
        Ok(employer)
    }

    /// Returns the first registered employer.
    pub async fn first(&self) -> Result<Employer, AppError> {
        self.store
            .first()
            .await?
            .ok_or_else(|| AppError::not_found(NO_EMPLOYER))
    }

    /// Fetches one employer by id.
    pub async fn get(&self, id: i64) -> Result<Employer, AppError> {
        self.store
            .get(id)
            .await?
            .ok_or_else(|| AppError::not_found(NO_EMPLOYER))
    }

    /// Replaces every field of an employer and returns the affected count.
    pub async fn update(&self, id: i64, input: AccountInput) -> Result<u64, AppError> {
        let row = self.to_row(input)?;
        let affected = self.store.update(id, &row).await?;
        if affected == 0 {
            return Err(AppError::not_found(NO_EMPLOYER));
        }
        info!(employer_id = id, "Employer updated");
        Ok(affected)
    }

    /// Deletes an employer. Their postings are left in place.
    pub async fn delete(&self, id: i64) -> Result<u64, AppError> {
        let affected = self.store.delete(id).await?;
        if affected == 0 {
            return Err(AppError::not_found(NO_EMPLOYER));
        }
        info!(employer_id = id, "Employer deleted");
        Ok(affected)
    }
}
