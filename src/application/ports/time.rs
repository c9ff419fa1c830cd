// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Source of "now" for write timestamps and visibility checks.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
