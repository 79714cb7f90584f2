//! Rate-limit-aware request execution.
//!
//! # Responsibilities
//! - Attach the bearer token (read before every attempt) and a request ID
//! - Retry 429 responses with exponential backoff, budget chosen by method
//! - Clear the session on 401
//! - Classify every other failure and decode success bodies

use std::sync::Arc;
use std::time::Instant;

use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use crate::client::error::{ApiError, ApiResult};
use crate::client::query::query_pairs;
use crate::config::ClientConfig;
use crate::observability::metrics;
use crate::resilience::{is_retryable, RetryPolicies, Sleeper, TokioSleeper};
use crate::session::Session;
use crate::transport::{ApiRequest, HttpTransport, Method, RawResponse, ReqwestTransport};

/// Header carrying the per-request correlation ID.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Single chokepoint for every call to the archive.
#[derive(Clone)]
pub struct ResilientClient {
    transport: Arc<dyn HttpTransport>,
    session: Arc<dyn Session>,
    policies: RetryPolicies,
    sleeper: Arc<dyn Sleeper>,
}

impl ResilientClient {
    /// Create a client with the default read/write budgets and real sleeping.
    pub fn new(transport: Arc<dyn HttpTransport>, session: Arc<dyn Session>) -> Self {
        Self {
            transport,
            session,
            policies: RetryPolicies::default(),
            sleeper: Arc::new(TokioSleeper),
        }
    }

    /// Create a reqwest-backed client from configuration.
    pub fn from_config(config: &ClientConfig, session: Arc<dyn Session>) -> ApiResult<Self> {
        let transport = ReqwestTransport::new(&config.api)?;
        Ok(Self::new(Arc::new(transport), session).with_retry_policies(RetryPolicies::from(&config.retries)))
    }

    pub fn with_retry_policies(mut self, policies: RetryPolicies) -> Self {
        self.policies = policies;
        self
    }

    pub fn with_sleeper(mut self, sleeper: Arc<dyn Sleeper>) -> Self {
        self.sleeper = sleeper;
        self
    }

    pub fn session(&self) -> &Arc<dyn Session> {
        &self.session
    }

    /// The sleeper used for backoff; crawls pace themselves with the same one.
    pub fn sleeper(&self) -> Arc<dyn Sleeper> {
        self.sleeper.clone()
    }

    /// GET a resource without query parameters.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.get_with(path, &()).await
    }

    /// GET a resource with query parameters.
    pub async fn get_with<T, Q>(&self, path: &str, query: &Q) -> ApiResult<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let query = query_pairs(query)?;
        let response = self.execute(Method::Get, path, query, None).await?;
        decode(&response)
    }

    pub async fn post<T, B>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send_json(Method::Post, path, body).await
    }

    pub async fn put<T, B>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send_json(Method::Put, path, body).await
    }

    pub async fn patch<T, B>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send_json(Method::Patch, path, body).await
    }

    /// DELETE a resource; any success body is ignored.
    pub async fn delete(&self, path: &str) -> ApiResult<()> {
        self.execute(Method::Delete, path, Vec::new(), None).await?;
        Ok(())
    }

    async fn send_json<T, B>(&self, method: Method, path: &str, body: &B) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body =
            serde_json::to_value(body).map_err(|e| ApiError::InvalidRequest(e.to_string()))?;
        let response = self.execute(method, path, Vec::new(), Some(body)).await?;
        decode(&response)
    }

    /// Run one logical request to completion, retrying rate-limit rejections.
    ///
    /// Returns the first success response, or the classified failure.
    pub async fn execute(
        &self,
        method: Method,
        path: &str,
        query: Vec<(String, String)>,
        body: Option<serde_json::Value>,
    ) -> ApiResult<RawResponse> {
        let request_id = Uuid::new_v4().to_string();
        let start_time = Instant::now();
        let result = self
            .run_attempts(method, path, &query, &body, &request_id)
            .await;
        metrics::record_duration(method.as_str(), start_time);
        result
    }

    async fn run_attempts(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
        body: &Option<serde_json::Value>,
        request_id: &str,
    ) -> ApiResult<RawResponse> {
        let policy = self.policies.for_method(method);
        let mut attempts = 0;

        loop {
            attempts += 1;
            let request = self.build_request(method, path, query, body, request_id);

            tracing::debug!(
                request_id = %request_id,
                method = %method,
                path = %path,
                attempt = attempts,
                authenticated = request.header("authorization").is_some(),
                "Sending request"
            );

            let response = match self.transport.send(&request).await {
                Ok(response) => response,
                Err(e) => {
                    tracing::error!(request_id = %request_id, method = %method, path = %path, error = %e, "Transport error");
                    metrics::record_transport_failure(method.as_str());
                    return Err(e.into());
                }
            };

            metrics::record_request(method.as_str(), response.status);

            if response.is_success() {
                return Ok(response);
            }

            if is_retryable(response.status) {
                if policy.allows_retry(attempts) {
                    let delay = policy.delay_for(attempts - 1);
                    tracing::info!(
                        request_id = %request_id,
                        method = %method,
                        path = %path,
                        attempt = attempts,
                        delay = ?delay,
                        "Rate limited, retrying"
                    );
                    metrics::record_retry(method.as_str());
                    self.sleeper.sleep(delay).await;
                    continue;
                }

                tracing::warn!(
                    request_id = %request_id,
                    method = %method,
                    path = %path,
                    attempts,
                    "Rate limited, retry budget exhausted"
                );
                return Err(ApiError::RetriesExhausted { attempts });
            }

            if response.status == 401 {
                tracing::warn!(request_id = %request_id, path = %path, "Unauthorized, clearing stored credential");
                self.session.clear();
            }

            return Err(ApiError::from_status(response.status));
        }
    }

    fn build_request(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
        body: &Option<serde_json::Value>,
        request_id: &str,
    ) -> ApiRequest {
        let mut headers = vec![(REQUEST_ID_HEADER.to_string(), request_id.to_string())];
        if let Some(token) = self.session.token() {
            headers.push(("authorization".to_string(), format!("Bearer {}", token)));
        }

        ApiRequest {
            method,
            path: path.to_string(),
            query: query.to_vec(),
            headers,
            body: body.clone(),
        }
    }
}

impl std::fmt::Debug for ResilientClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResilientClient")
            .field("policies", &self.policies)
            .field("session", &self.session)
            .finish()
    }
}

fn decode<T: DeserializeOwned>(response: &RawResponse) -> ApiResult<T> {
    serde_json::from_slice(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
}
