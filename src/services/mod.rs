pub mod database;
pub mod generator;

pub use database::{DatabaseProbe, DatabaseStatus, PostgresProbe, ProbeError, StaticProbe};
pub use generator::{format_timestamp, FixedGenerator, Generator, SystemGenerator};
