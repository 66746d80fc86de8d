//! Custom Axum extractors.

pub mod path;
pub mod validated;

pub use path::parse_id;
pub use validated::{ValidForm, ValidJson, validate_request};
