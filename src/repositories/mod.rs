pub mod api;
pub mod submission;

pub use api::{ApiRepository, SyntheticApiRepository};
pub use submission::{DiscardingSubmissionRepository, SubmissionRepository};
