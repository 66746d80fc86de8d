//! Employer domain entities.

pub mod model;

pub use model::{Employer, NewEmployer};
