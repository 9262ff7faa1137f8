//! Bounded retry schedule with exponential backoff.
//!
//! Used by the frontend for provider detection, account requests, and
//! receipt polling. The schedule is pure data so the give-up behavior is
//! testable without a browser.

/// A bounded exponential-backoff schedule.
///
/// Attempt `n` (zero-based) sleeps `base_delay_ms << n` before running,
/// capped at [`RetryPolicy::MAX_DELAY_MS`]; the first attempt runs
/// immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay_ms: u32,
}

impl RetryPolicy {
    /// Upper bound on a single backoff delay.
    pub const MAX_DELAY_MS: u32 = 30_000;

    pub const fn new(max_attempts: u32, base_delay_ms: u32) -> Self {
        Self {
            max_attempts,
            base_delay_ms,
        }
    }

    /// Delay to sleep before the given zero-based attempt.
    pub fn delay_ms(&self, attempt: u32) -> u32 {
        if attempt == 0 {
            return 0;
        }
        self.base_delay_ms
            .checked_shl(attempt - 1)
            .unwrap_or(Self::MAX_DELAY_MS)
            .min(Self::MAX_DELAY_MS)
    }

    /// Iterate the zero-based attempt numbers of the schedule.
    pub fn attempts(&self) -> impl Iterator<Item = u32> {
        0..self.max_attempts
    }

    /// Whether another attempt remains after the given one.
    pub fn is_last(&self, attempt: u32) -> bool {
        attempt + 1 >= self.max_attempts
    }
}
