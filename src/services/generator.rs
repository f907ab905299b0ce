use std::sync::atomic::{AtomicU64, Ordering};

use time::{format_description::BorrowedFormatItem, macros::format_description, OffsetDateTime};
use uuid::Uuid;

const TIMESTAMP_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

/// Source of per-call identifiers and timestamps
pub trait Generator: Send + Sync {
    /// A fresh unique identifier
    fn id(&self) -> String;

    /// Wall-clock time as `YYYY-MM-DD HH:MM:SS`
    fn timestamp(&self) -> String;

    /// Wall-clock time as seconds since the Unix epoch
    fn unix_timestamp(&self) -> i64;
}

/// Random UUIDs and the system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemGenerator;

impl Generator for SystemGenerator {
    fn id(&self) -> String {
        Uuid::new_v4().to_string()
    }

    fn timestamp(&self) -> String {
        // Local offset is unavailable once other threads exist on some platforms
        let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
        format_timestamp(now)
    }

    fn unix_timestamp(&self) -> i64 {
        OffsetDateTime::now_utc().unix_timestamp()
    }
}

pub fn format_timestamp(at: OffsetDateTime) -> String {
    at.format(TIMESTAMP_FORMAT)
        .unwrap_or_else(|_| at.unix_timestamp().to_string())
}

/// Deterministic generator: sequential ids and a frozen clock
#[derive(Debug)]
pub struct FixedGenerator {
    prefix: String,
    counter: AtomicU64,
    at: OffsetDateTime,
}

impl FixedGenerator {
    pub fn new(prefix: impl Into<String>, at: OffsetDateTime) -> Self {
        Self {
            prefix: prefix.into(),
            counter: AtomicU64::new(0),
            at,
        }
    }
}

impl Generator for FixedGenerator {
    fn id(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{}-{}", self.prefix, n)
    }

    fn timestamp(&self) -> String {
        format_timestamp(self.at)
    }

    fn unix_timestamp(&self) -> i64 {
        self.at.unix_timestamp()
    }
}
