//! Configuration validation.
//!
//! Serde handles syntax; this module checks value ranges and that the base
//! URL is usable. Every violation is reported, not just the first.

use thiserror::Error;
use url::Url;

use crate::config::schema::{ClientConfig, RetryClassConfig};

/// A single semantic problem in a loaded configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("api.base_url '{0}' is not an http(s) URL")]
    InvalidBaseUrl(String),

    #[error("api.timeout_secs must be greater than zero")]
    ZeroTimeout,

    #[error("retries.{class}.max_attempts must be at least 1")]
    ZeroAttempts { class: &'static str },

    #[error("retries.{class}.jitter_ratio must be within [0, 1], got {value}")]
    JitterOutOfRange { class: &'static str, value: f64 },

    #[error("crawl.max_pages must be at least 1")]
    ZeroMaxPages,
}

/// Validate a configuration, collecting every error found.
pub fn validate_config(config: &ClientConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match Url::parse(&config.api.base_url) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {}
        _ => errors.push(ValidationError::InvalidBaseUrl(config.api.base_url.clone())),
    }

    if config.api.timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    check_retry_class("reads", &config.retries.reads, &mut errors);
    check_retry_class("writes", &config.retries.writes, &mut errors);

    if config.crawl.max_pages == 0 {
        errors.push(ValidationError::ZeroMaxPages);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_retry_class(class: &'static str, retry: &RetryClassConfig, errors: &mut Vec<ValidationError>) {
    if retry.max_attempts == 0 {
        errors.push(ValidationError::ZeroAttempts { class });
    }
    if !(0.0..=1.0).contains(&retry.jitter_ratio) {
        errors.push(ValidationError::JitterOutOfRange {
            class,
            value: retry.jitter_ratio,
        });
    }
}
