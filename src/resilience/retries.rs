//! Retry policies.
//!
//! # Responsibilities
//! - Decide whether a response status is retryable (429 only)
//! - Hold the attempt budget and delay function per method class
//!
//! # Design Decisions
//! - Reads get a deep budget (5 attempts, 2s base)
//! - Writes get a shallow budget (3 attempts, 1s base) to bound duplicate effects
//! - The policy only computes delays; sleeping belongs to `Sleeper`

use std::time::Duration;

use crate::config::{RetryClassConfig, RetryConfig};
use crate::resilience::backoff::calculate_backoff;
use crate::transport::Method;

/// HTTP status the upstream uses to signal rate limiting.
pub const RATE_LIMITED: u16 = 429;

/// Whether a response status should be retried.
pub fn is_retryable(status: u16) -> bool {
    status == RATE_LIMITED
}

/// Attempt budget and delay schedule for one class of requests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetryPolicy {
    /// Total attempts, including the first one.
    pub max_attempts: u32,
    /// Delay before the first retry in milliseconds.
    pub base_delay_ms: u64,
    /// Fraction of random extra delay.
    pub jitter_ratio: f64,
}

impl RetryPolicy {
    pub const READS: RetryPolicy = RetryPolicy {
        max_attempts: 5,
        base_delay_ms: 2000,
        jitter_ratio: 0.0,
    };

    pub const WRITES: RetryPolicy = RetryPolicy {
        max_attempts: 3,
        base_delay_ms: 1000,
        jitter_ratio: 0.0,
    };

    /// Whether another attempt is allowed after `attempts_made` attempts.
    pub fn allows_retry(&self, attempts_made: u32) -> bool {
        attempts_made < self.max_attempts
    }

    /// Delay before retry number `retry` (0-based).
    pub fn delay_for(&self, retry: u32) -> Duration {
        calculate_backoff(retry, self.base_delay_ms, self.jitter_ratio)
    }
}

impl From<&RetryClassConfig> for RetryPolicy {
    fn from(config: &RetryClassConfig) -> Self {
        Self {
            max_attempts: config.max_attempts.max(1),
            base_delay_ms: config.base_delay_ms,
            jitter_ratio: config.jitter_ratio,
        }
    }
}

/// Read and write policies, selected by request method.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetryPolicies {
    pub reads: RetryPolicy,
    pub writes: RetryPolicy,
}

impl RetryPolicies {
    pub fn for_method(&self, method: Method) -> RetryPolicy {
        if method.is_read() {
            self.reads
        } else {
            self.writes
        }
    }
}

impl Default for RetryPolicies {
    fn default() -> Self {
        Self {
            reads: RetryPolicy::READS,
            writes: RetryPolicy::WRITES,
        }
    }
}

impl From<&RetryConfig> for RetryPolicies {
    fn from(config: &RetryConfig) -> Self {
        Self {
            reads: RetryPolicy::from(&config.reads),
            writes: RetryPolicy::from(&config.writes),
        }
    }
}
