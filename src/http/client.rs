//! HTTP transport boundary
//!
//! The client abstraction gateways call into for outbound traffic. Gateways
//! are handed a [`Transport`] implementation; in tests that is a
//! [`crate::http::MockTransport`], in live integration runs a [`LiveClient`].

use anyhow::{Context, Result};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Transport errors
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Timeout after {0} seconds")]
    Timeout(u64),

    #[error("Connection refused to {0}")]
    ConnectionRefused(String),

    #[error("Invalid HTTP method: {0}")]
    InvalidMethod(String),

    #[error("Response queue exhausted after {0} dispatched request(s)")]
    QueueExhausted(usize),
}

/// The client abstraction a gateway uses for outbound HTTP traffic.
///
/// Gateway code depends only on this trait, so the mock transport can be
/// substituted without the gateway knowing it is under test.
pub trait Transport {
    fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// HTTP request builder
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpRequest {
    pub method: String,
    pub url: String,
    pub headers: HashMap<String, String>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
            headers: HashMap::new(),
            body: None,
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self::new("GET", url)
    }

    pub fn post(url: impl Into<String>) -> Self {
        Self::new("POST", url)
    }

    pub fn put(url: impl Into<String>) -> Self {
        Self::new("PUT", url)
    }

    pub fn delete(url: impl Into<String>) -> Self {
        Self::new("DELETE", url)
    }

    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    pub fn headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers.extend(headers);
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn body_contains(&self, text: &str) -> bool {
        self.body.as_deref().is_some_and(|b| b.contains(text))
    }
}

/// HTTP response
///
/// Header names are stored lowercased.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpResponse {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status_code: u16) -> Self {
        Self {
            status_code,
            headers: HashMap::new(),
            body: String::new(),
        }
    }

    pub fn with_header(mut self, key: impl AsRef<str>, value: impl Into<String>) -> Self {
        self.headers.insert(key.as_ref().to_lowercase(), value.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }

    pub fn is_redirect(&self) -> bool {
        (300..400).contains(&self.status_code)
    }

    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code)
    }

    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.status_code)
    }

    pub fn get_header(&self, name: &str) -> Option<&String> {
        self.headers.get(&name.to_lowercase())
    }

    pub fn body_contains(&self, text: &str) -> bool {
        self.body.contains(text)
    }
}

/// Live HTTP client for opt-in integration runs against real endpoints.
///
/// Not used by the conformance engine; the simulated path never touches
/// the network.
#[derive(Clone)]
pub struct LiveClient {
    client: reqwest::blocking::Client,
    timeout_secs: u64,
}

impl LiveClient {
    /// Create a new live client with the default 30 second timeout
    pub fn new() -> Result<Self> {
        Self::with_timeout(30)
    }

    /// Create a live client with a custom timeout
    pub fn with_timeout(timeout_secs: u64) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            timeout_secs,
        })
    }
}

impl Transport for LiveClient {
    fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let method = Method::from_bytes(request.method.as_bytes())
            .map_err(|_| TransportError::InvalidMethod(request.method.clone()))?;

        debug!("Sending {} request to {}", request.method, request.url);

        let mut req_builder = self.client.request(method, &request.url);

        for (key, value) in &request.headers {
            req_builder = req_builder.header(key.as_str(), value.as_str());
        }

        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.clone());
        }

        let response = req_builder.send().map_err(|e| {
            if e.is_timeout() {
                TransportError::Timeout(self.timeout_secs)
            } else if e.is_connect() {
                TransportError::ConnectionRefused(request.url.clone())
            } else {
                TransportError::RequestFailed(e.to_string())
            }
        })?;

        let status = response.status();

        let mut headers = HashMap::new();
        for (key, value) in response.headers().iter() {
            if let Ok(v) = value.to_str() {
                headers.insert(key.to_string(), v.to_string());
            }
        }

        let body = response
            .text()
            .map_err(|e| TransportError::RequestFailed(e.to_string()))?;

        debug!("Response: {}", status.as_u16());

        Ok(HttpResponse {
            status_code: status.as_u16(),
            headers,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_request_builder() {
        let req = HttpRequest::post("https://api.example.test/charge")
            .header("Content-Type", "application/json")
            .body(r#"{"amount":"10.00"}"#);

        assert_eq!(req.method, "POST");
        assert_eq!(req.headers.len(), 1);
        assert!(req.body_contains("10.00"));
    }

    #[test]
    fn test_http_response_status_classes() {
        let resp = HttpResponse::new(200).with_body("Hello World");
        assert!(resp.is_success());
        assert!(!resp.is_redirect());
        assert!(resp.body_contains("Hello"));

        assert!(HttpResponse::new(302).is_redirect());
        assert!(HttpResponse::new(404).is_client_error());
        assert!(HttpResponse::new(502).is_server_error());
    }

    #[test]
    fn test_response_header_lookup_is_case_insensitive() {
        let resp = HttpResponse::new(200).with_header("Content-Type", "application/json");
        assert_eq!(
            resp.get_header("content-type").map(String::as_str),
            Some("application/json")
        );
        assert_eq!(
            resp.get_header("CONTENT-TYPE").map(String::as_str),
            Some("application/json")
        );
    }
}
