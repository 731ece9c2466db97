//! # Poll Configuration
//!
//! Interval and timeout used by every poll. Passed explicitly to the waiter
//! so tests can run with short budgets side by side.

use std::time::Duration;

use super::env_var_or_default;
use crate::constants::{DEFAULT_POLL_INTERVAL_MS, DEFAULT_POLL_TIMEOUT_SECS};

/// Poll interval and timeout
///
/// The timeout bounds a single poll. The latest-revision wait runs two polls
/// back to back and each one gets the full timeout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollConfig {
    /// Delay between two consecutive fetches
    pub interval: Duration,
    /// Maximum total duration of one poll
    pub timeout: Duration,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
            timeout: Duration::from_secs(DEFAULT_POLL_TIMEOUT_SECS),
        }
    }
}

impl PollConfig {
    #[must_use]
    pub fn new(interval: Duration, timeout: Duration) -> Self {
        Self { interval, timeout }
    }

    /// Load configuration from environment variables with defaults
    ///
    /// Reads `POLL_INTERVAL_MS` and `POLL_TIMEOUT_SECS`.
    pub fn from_env() -> Self {
        Self {
            interval: Duration::from_millis(env_var_or_default(
                "POLL_INTERVAL_MS",
                DEFAULT_POLL_INTERVAL_MS,
            )),
            timeout: Duration::from_secs(env_var_or_default(
                "POLL_TIMEOUT_SECS",
                DEFAULT_POLL_TIMEOUT_SECS,
            )),
        }
    }

    #[must_use]
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
