//! Retry policy for reward submission
//!
//! Exponential backoff: attempt n waits `2^n × base_delay_ms` before the
//! next try (1s, 2s, 4s... for the 500ms default).

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryPolicy {
    /// Retries after the first attempt
    pub max_retries: u32,
    pub base_delay_ms: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 2,
            base_delay_ms: 500,
        }
    }
}

impl RetryPolicy {
    /// Whether another attempt is allowed after `attempts_made` failures
    pub fn should_retry(&self, attempts_made: u32) -> bool {
        attempts_made <= self.max_retries
    }

    /// Delay before the attempt following failed attempt `attempt` (1-based)
    pub fn backoff_ms(&self, attempt: u32) -> u64 {
        // Cap the shift so a huge retry count can't overflow
        let factor = 1u64 << attempt.min(20);
        self.base_delay_ms.saturating_mul(factor)
    }
}
