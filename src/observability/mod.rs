//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! client, crawler produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (counters, histograms via the metrics facade)
//! ```
//!
//! # Design Decisions
//! - Every logical request carries an `x-request-id` that shows up in its log events
//! - The library never installs a recorder; the embedding binary may

pub mod logging;
pub mod metrics;
