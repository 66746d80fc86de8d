//! Job seeker domain entities.

pub mod model;

pub use model::{JobSeeker, NewJobSeeker};
