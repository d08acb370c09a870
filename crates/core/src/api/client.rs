//! HTTP client implementations for GrowthBook REST API communication

use std::collections::HashMap;
use std::env;
use std::fs;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

use super::types::HttpResponse;
use crate::redaction;

/// Environment variable pointing at a PEM bundle for self-hosted instances
pub const CUSTOM_CA_BUNDLE_ENV: &str = "GROWTHBOOK_CUSTOM_CA_BUNDLE";

/// HTTP client trait for REST API operations
///
/// Implementations return the response for any HTTP status; only transport
/// failures are reported as errors. Status handling belongs to the caller.
#[async_trait::async_trait]
pub trait HttpClient: Send + Sync {
    /// GET with custom headers, returning status and body
    async fn get_with_headers(
        &self,
        url: &str,
        headers: HashMap<String, String>,
    ) -> std::result::Result<HttpResponse, Box<dyn std::error::Error + Send + Sync>>;
}

/// Default HTTP client implementation using reqwest
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    client: reqwest::Client,
}

impl ReqwestClient {
    /// Create a new ReqwestClient.
    ///
    /// No request timeout is configured. When `GROWTHBOOK_CUSTOM_CA_BUNDLE`
    /// is set, the PEM certificate it points at is added as a trusted root.
    pub fn new() -> std::result::Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let mut client_builder = reqwest::Client::builder().user_agent(concat!(
            "growthbook-cli/",
            env!("CARGO_PKG_VERSION")
        ));

        if let Ok(ca_bundle_path) = env::var(CUSTOM_CA_BUNDLE_ENV) {
            let ca_bundle = fs::read(&ca_bundle_path)?;
            let cert = reqwest::Certificate::from_pem(&ca_bundle)?;
            client_builder = client_builder.add_root_certificate(cert);
            debug!("Added custom CA certificate from: {}", ca_bundle_path);
        }

        let client = client_builder.build()?;
        Ok(Self { client })
    }
}

#[async_trait::async_trait]
impl HttpClient for ReqwestClient {
    async fn get_with_headers(
        &self,
        url: &str,
        headers: HashMap<String, String>,
    ) -> std::result::Result<HttpResponse, Box<dyn std::error::Error + Send + Sync>> {
        let mut request = self.client.get(url);
        for (key, value) in &headers {
            request = request.header(key, value);
        }

        let response = request.send().await.map_err(|e| {
            // Improve error messages for common network issues
            let message = if e.is_timeout() {
                format!("Request timeout for URL: {}. Check network connectivity.", url)
            } else if e.is_connect() {
                format!(
                    "Connection failed for URL: {}. Check that the GrowthBook API is reachable.",
                    url
                )
            } else if e.is_request() {
                format!("Request error for URL: {}: {}", url, e)
            } else {
                format!("Network error for URL: {}: {}", url, e)
            };
            redaction::redact(&message)
        })?;

        let status = response.status().as_u16();
        let body = response.bytes().await?;
        Ok(HttpResponse { status, body })
    }
}

/// A request observed by [`MockHttpClient`]
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub url: String,
    pub headers: HashMap<String, String>,
}

/// Mock HTTP client for testing
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    responses: Arc<Mutex<HashMap<String, HttpResponse>>>,
    failures: Arc<Mutex<HashMap<String, String>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the response returned for an exact URL
    pub async fn add_response(&self, url: String, response: HttpResponse) {
        let mut responses = self.responses.lock().await;
        responses.insert(url, response);
    }

    /// Register a transport failure for an exact URL
    pub async fn add_failure(&self, url: String, message: String) {
        let mut failures = self.failures.lock().await;
        failures.insert(url, message);
    }

    /// Requests received so far, in order
    pub async fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().await.clone()
    }
}

#[async_trait::async_trait]
impl HttpClient for MockHttpClient {
    async fn get_with_headers(
        &self,
        url: &str,
        headers: HashMap<String, String>,
    ) -> std::result::Result<HttpResponse, Box<dyn std::error::Error + Send + Sync>> {
        self.requests.lock().await.push(RecordedRequest {
            url: url.to_string(),
            headers,
        });

        if let Some(message) = self.failures.lock().await.get(url) {
            return Err(message.clone().into());
        }

        let responses = self.responses.lock().await;
        responses
            .get(url)
            .cloned()
            .ok_or_else(|| format!("No mock response for URL: {}", url).into())
    }
}
