//! Credential session.
//!
//! # Responsibilities
//! - Hold the optional bearer token the client reads before every attempt
//! - Forget the token when the archive answers 401
//!
//! # Design Decisions
//! - The session is an explicit object handed to the client, not global state
//! - Token reads are lock-free (`ArcSwapOption`); clearing is a single atomic store
//! - `FileSession` keeps a JSON key-value file, the token living under `auth_token`

pub mod file;

use std::fmt;
use std::sync::Arc;

use arc_swap::ArcSwapOption;
use thiserror::Error;

pub use file::FileSession;

/// Key the token is stored under in persistent storage.
pub const TOKEN_KEY: &str = "auth_token";

/// Errors from persistent session storage.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session storage IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("session storage is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Source of the bearer credential.
pub trait Session: Send + Sync + fmt::Debug {
    /// Current token, if any.
    fn token(&self) -> Option<String>;

    /// Drop the stored token. Called after a 401.
    fn clear(&self);
}

/// Session that lives only as long as the process.
#[derive(Default)]
pub struct MemorySession {
    token: ArcSwapOption<String>,
}

impl MemorySession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        let session = Self::new();
        session.set_token(token);
        session
    }

    pub fn set_token(&self, token: impl Into<String>) {
        self.token.store(Some(Arc::new(token.into())));
    }
}

impl fmt::Debug for MemorySession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemorySession")
            .field("has_token", &self.token.load().is_some())
            .finish()
    }
}

impl Session for MemorySession {
    fn token(&self) -> Option<String> {
        self.token.load_full().map(|token| token.as_ref().clone())
    }

    fn clear(&self) {
        self.token.store(None);
    }
}
