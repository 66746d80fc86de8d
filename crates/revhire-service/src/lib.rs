//! # revhire-service
//!
//! Business logic service layer for RevHire. Each service validates
//! referenced entities, delegates persistence to the injected entity stores,
//! and turns empty or absent results into not-found errors.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod employer;
pub mod input;
pub mod jobapplication;
pub mod jobposting;
pub mod jobseeker;
pub mod login;

pub use employer::EmployerService;
pub use input::{AccountInput, ApplicationInput, PostingInput};
pub use jobapplication::{ApplicationWithPosting, JobApplicationService};
pub use jobposting::{JobPostingService, PostingWithCreator};
pub use jobseeker::JobSeekerService;
pub use login::LoginService;
