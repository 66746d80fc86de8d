//! Job application domain entities.

pub mod model;

pub use model::{JobApplication, NewJobApplication, UpdateJobApplication};
