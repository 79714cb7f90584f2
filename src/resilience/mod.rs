//! Resilience subsystem.
//!
//! # Data Flow
//! ```text
//! Request to the archive:
//!     → transport (one attempt, per-attempt timeout)
//!     → On 429: retries.rs (budget check) + backoff.rs (delay)
//!     → sleep.rs (wait, real or recorded)
//!     → same request again
//! ```
//!
//! # Design Decisions
//! - Only rate limiting (429) is retried; every other failure propagates
//! - Reads and writes carry separate budgets
//! - No shared backoff state between concurrent requests

pub mod backoff;
pub mod retries;
pub mod sleep;

pub use retries::{is_retryable, RetryPolicies, RetryPolicy};
pub use sleep::{RecordingSleeper, Sleeper, TokioSleeper};
