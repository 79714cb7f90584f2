//! reqwest-backed transport.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Client;
use url::Url;

use crate::config::ApiConfig;
use crate::transport::{ApiRequest, HttpTransport, RawResponse, TransportError};

/// Sends requests to the archive over HTTP(S).
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
    base_url: String,
}

impl ReqwestTransport {
    pub fn new(config: &ApiConfig) -> Result<Self, TransportError> {
        let parsed = Url::parse(&config.base_url)
            .map_err(|e| TransportError::InvalidUrl(format!("{}: {}", config.base_url, e)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(TransportError::InvalidUrl(config.base_url.clone()));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| TransportError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Append a route path to the base URL, keeping any base path prefix (e.g. `/api`).
    pub fn url_for(&self, path: &str) -> Result<Url, TransportError> {
        let full = if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        };
        Url::parse(&full).map_err(|e| TransportError::InvalidUrl(format!("{}: {}", full, e)))
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: &ApiRequest) -> Result<RawResponse, TransportError> {
        let url = self.url_for(&request.path)?;

        let mut builder = self
            .client
            .request(request.method.into(), url)
            .header(ACCEPT, "application/json");
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder
                .header(CONTENT_TYPE, "application/json")
                .body(body.to_string());
        }

        let response = builder
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        Ok(RawResponse::new(status, body.to_vec()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transport(base_url: &str) -> Result<ReqwestTransport, TransportError> {
        ReqwestTransport::new(&ApiConfig {
            base_url: base_url.to_string(),
            ..ApiConfig::default()
        })
    }

    #[test]
    fn test_url_keeps_base_path() {
        let transport = transport("http://localhost:8000/api/").unwrap();
        assert_eq!(
            transport.url_for("/poets/12/").unwrap().as_str(),
            "http://localhost:8000/api/poets/12/"
        );
        assert_eq!(
            transport.url_for("poems/").unwrap().as_str(),
            "http://localhost:8000/api/poems/"
        );
    }

    #[test]
    fn test_rejects_bad_base_url() {
        assert!(matches!(
            transport("localhost:8000"),
            Err(TransportError::InvalidUrl(_))
        ));
        assert!(matches!(
            transport("not a url"),
            Err(TransportError::InvalidUrl(_))
        ));
    }
}
