//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the client.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the archive client.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ClientConfig {
    /// Remote API endpoint settings.
    pub api: ApiConfig,

    /// Where the bearer token lives between runs.
    pub session: SessionConfig,

    /// Retry budgets for rate-limited requests.
    pub retries: RetryConfig,

    /// Collection crawling limits.
    pub crawl: CrawlConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Remote API configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL every route path is appended to (e.g., "http://localhost:8000/api").
    pub base_url: String,

    /// Per-attempt request timeout in seconds.
    pub timeout_secs: u64,

    /// User-Agent header sent with every request.
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000/api".to_string(),
            timeout_secs: 10,
            user_agent: concat!("ganjoor-client/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Credential storage configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct SessionConfig {
    /// JSON key-value file holding the `auth_token` entry.
    /// When unset, the session lives in memory only.
    pub token_path: Option<String>,
}

/// Retry configuration, split by method class.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RetryConfig {
    /// Budget for GET requests.
    #[serde(default = "RetryClassConfig::reads")]
    pub reads: RetryClassConfig,

    /// Budget for POST/PUT/PATCH/DELETE requests.
    #[serde(default = "RetryClassConfig::writes")]
    pub writes: RetryClassConfig,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            reads: RetryClassConfig::reads(),
            writes: RetryClassConfig::writes(),
        }
    }
}

/// Retry budget for one class of methods.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RetryClassConfig {
    /// Total attempts, including the first one.
    pub max_attempts: u32,

    /// Delay before the first retry; doubles on every further retry.
    pub base_delay_ms: u64,

    /// Extra random delay as a fraction of the computed delay (0.0 = exact schedule).
    #[serde(default)]
    pub jitter_ratio: f64,
}

impl RetryClassConfig {
    /// Reads are idempotent: 5 attempts, 2s/4s/8s/16s.
    pub fn reads() -> Self {
        Self {
            max_attempts: 5,
            base_delay_ms: 2000,
            jitter_ratio: 0.0,
        }
    }

    /// Writes are retried conservatively: 3 attempts, 1s/2s.
    pub fn writes() -> Self {
        Self {
            max_attempts: 3,
            base_delay_ms: 1000,
            jitter_ratio: 0.0,
        }
    }
}

/// Collection crawl configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CrawlConfig {
    /// Pause between consecutive page requests in milliseconds.
    pub page_delay_ms: u64,

    /// Hard ceiling on the number of pages fetched per crawl.
    pub max_pages: u32,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            page_delay_ms: 200,
            max_pages: 10,
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Log output format.
    pub log_format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}
