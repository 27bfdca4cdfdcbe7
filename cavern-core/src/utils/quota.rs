#[cfg(test)]
#[path = "../../tests/unit/utils/quota_test.rs"]
mod quota_test;

use crate::utils::Timer;
use std::time::Instant;

/// Specifies a computational quota for the search.
/// The main purpose is to allow to stop algorithm in reaction to external events such
/// as user cancellation, timer, etc.
pub trait Quota {
    /// Returns true when computation should be stopped.
    fn is_reached(&self) -> bool;
}

/// A time quota: a deadline token which is reached when the time limit is over.
pub struct TimeQuota {
    start: Timer,
    limit_in_secs: f64,
}

impl TimeQuota {
    /// Creates a new instance of `TimeQuota` with limit relative to now.
    pub fn new(limit_in_secs: f64) -> Self {
        Self { start: Timer::start(), limit_in_secs }
    }

    /// Creates a new instance of `TimeQuota` which is reached at given wall-clock instant.
    pub fn with_deadline(deadline: Instant) -> Self {
        Self::new(deadline.saturating_duration_since(Instant::now()).as_secs_f64())
    }
}

impl Quota for TimeQuota {
    fn is_reached(&self) -> bool {
        self.start.elapsed_secs_as_f64() >= self.limit_in_secs
    }
}
