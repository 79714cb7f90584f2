//! Client library for the Ganjoor Persian poetry archive.
//!
//! # Architecture Overview
//!
//! ```text
//!   caller (CLI, UI)
//!       │
//!       ├──▶ api ──────────────▶ client::ResilientClient ──▶ transport::HttpTransport
//!       │     │                    │  bearer token (session)        reqwest / scripted
//!       │     │                    │  429 backoff (resilience)
//!       │     ▼                    ▼
//!       │   crawler ── paced, bounded page walk
//!       │     │
//!       │     ▼
//!       ├──▶ catalog ── century / name filters, display paging
//!       │
//!       └──▶ layout ── verse sequence → couplets, centered verses, prose
//!
//!   cross-cutting: config, observability
//! ```

// Remote access
pub mod api;
pub mod client;
pub mod session;
pub mod transport;

// Collections
pub mod catalog;
pub mod crawler;
pub mod model;

// Rendering
pub mod layout;

// Cross-cutting concerns
pub mod config;
pub mod observability;
pub mod resilience;

pub use api::Api;
pub use client::{ApiError, ApiResult, ResilientClient};
pub use config::ClientConfig;
pub use crawler::{CollectionCrawler, Crawl};
pub use layout::{layout_verses, LayoutGroup};
