//! Monotonic elapsed-time measurement.
//!
//! A [`Timestamp`] is an opaque capture of the monotonic clock. It is only
//! meaningful relative to a later reading, typically to report how long an
//! operation such as key generation took.

use std::time::Instant;

/// Opaque monotonic timestamp.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(Instant);

impl Timestamp {
    /// Captures the current instant of the monotonic clock.
    pub fn now() -> Self {
        Self(Instant::now())
    }

    /// Microseconds elapsed since this timestamp was captured.
    ///
    /// Saturates at `i64::MAX`.
    pub fn elapsed_micros(&self) -> i64 {
        i64::try_from(self.0.elapsed().as_micros()).unwrap_or(i64::MAX)
    }
}
