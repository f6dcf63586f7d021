// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Source of "now" for article batch ids and comment timestamps.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// Unix milliseconds; used as the id component of generated records.
    fn now_millis(&self) -> i64 {
        self.now().timestamp_millis()
    }
}
