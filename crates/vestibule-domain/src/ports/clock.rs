//! Clock port

use chrono::{DateTime, Utc};

/// Source of the current instant
///
/// Injected wherever time decides an outcome so tests can pin it.
pub trait Clock: Send + Sync {
    /// Current instant in UTC
    fn now(&self) -> DateTime<Utc>;
}
