//! Resilient data-access layer.
//!
//! # Data Flow
//! ```text
//! caller (api, crawler)
//!     → resilient.rs: query encoding (query.rs), token + request ID headers
//!     → transport: one attempt
//!     → 2xx: decode JSON
//!     → 429: backoff and resend, until the budget runs out
//!     → 401: clear session, fail
//!     → anything else: classify (error.rs), fail
//! ```

pub mod error;
pub mod query;
pub mod resilient;

pub use error::{ApiError, ApiResult};
pub use resilient::{ResilientClient, REQUEST_ID_HEADER};
