//! # revhire-database
//!
//! The entity store: one trait per entity describing transactional CRUD,
//! PostgreSQL repositories implementing them over a shared connection pool,
//! and an in-memory implementation for tests and single-process demos.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use memory::MemoryStore;
pub use store::{EmployerStore, EntityStores, JobApplicationStore, JobPostingStore, JobSeekerStore};
