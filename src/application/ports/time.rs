// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Source of the timestamps written on articles and platform links.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
