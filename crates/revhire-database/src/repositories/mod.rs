//! PostgreSQL repository implementations of the entity store traits.

pub mod employer;
pub mod jobapplication;
pub mod jobposting;
pub mod jobseeker;

pub use employer::EmployerRepository;
pub use jobapplication::JobApplicationRepository;
pub use jobposting::JobPostingRepository;
pub use jobseeker::JobSeekerRepository;
