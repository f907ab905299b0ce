pub mod app;
pub mod payload;

pub use app::*;
pub use payload::*;
