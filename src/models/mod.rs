pub mod api;
pub mod email;
pub mod health_check;
pub mod submission;

pub use api::*;
pub use email::*;
pub use health_check::*;
pub use submission::*;
