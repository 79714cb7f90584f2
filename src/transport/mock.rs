//! In-memory transport for tests.
//!
//! Responses are served from a FIFO script; every request is recorded so
//! tests can assert on attempts, headers and query strings. When the script
//! runs dry, the optional fallback response is repeated forever.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::transport::{ApiRequest, HttpTransport, RawResponse, TransportError};

type Scripted = Result<RawResponse, TransportError>;

#[derive(Debug, Default)]
pub struct ScriptedTransport {
    script: Mutex<VecDeque<Scripted>>,
    fallback: Mutex<Option<Scripted>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response with an empty body.
    pub fn push_status(&self, status: u16) -> &Self {
        self.push(Ok(RawResponse::new(status, Vec::new())))
    }

    /// Queue a JSON response.
    pub fn push_json(&self, status: u16, body: serde_json::Value) -> &Self {
        self.push(Ok(RawResponse::json(status, &body)))
    }

    /// Queue a failure where no response arrives.
    pub fn push_network_error(&self, message: &str) -> &Self {
        self.push(Err(TransportError::Network(message.to_string())))
    }

    /// Response served once the script is exhausted.
    pub fn set_fallback_json(&self, status: u16, body: serde_json::Value) {
        *lock(&self.fallback) = Some(Ok(RawResponse::json(status, &body)));
    }

    fn push(&self, response: Scripted) -> &Self {
        lock(&self.script).push_back(response);
        self
    }

    /// Every request received so far, in order.
    pub fn requests(&self) -> Vec<ApiRequest> {
        lock(&self.requests).clone()
    }

    pub fn request_count(&self) -> usize {
        lock(&self.requests).len()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[async_trait]
impl HttpTransport for ScriptedTransport {
    async fn send(&self, request: &ApiRequest) -> Result<RawResponse, TransportError> {
        lock(&self.requests).push(request.clone());

        if let Some(next) = lock(&self.script).pop_front() {
            return next;
        }
        lock(&self.fallback).clone().unwrap_or_else(|| {
            Err(TransportError::Network(format!(
                "no scripted response for {} {}",
                request.method, request.path
            )))
        })
    }
}
