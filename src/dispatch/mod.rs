// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Request dispatch - the one effectful step of the pipeline
//!
//! Issues exactly one outbound call per descriptor, bounded by the
//! descriptor's timeout. No retries, no method or URL rewriting. A received
//! response of any status is a successful transport outcome; deciding what
//! counts as a failed *request* belongs to the normalizer.

use std::time::{Duration, Instant};

use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, StatusCode};
use url::Url;

use crate::error::{Error, Result};
use crate::request::RequestDescriptor;

/// Transport outcome: a response (any status) or a classified error
pub type Outcome = std::result::Result<RawResponse, Error>;

/// Dispatcher configuration
#[derive(Debug, Clone)]
pub struct DispatcherConfig {
    /// User agent string
    pub user_agent: String,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            user_agent: concat!("luotain/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl DispatcherConfig {
    /// Create a new dispatcher config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set user agent
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// A response as the transport produced it, before normalization
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// Received status code, whatever it was
    pub status: StatusCode,
    /// Raw response body
    pub body: Bytes,
    /// Wall time from dispatch to body completion
    pub elapsed_ms: u64,
}

impl RawResponse {
    /// Get body as text, lossy conversion
    pub fn text_lossy(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Get status code as u16
    pub fn status_code(&self) -> u16 {
        self.status.as_u16()
    }

    /// Check if status is success (2xx)
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

/// Dispatcher wrapping a shared HTTP client
#[derive(Clone)]
pub struct Dispatcher {
    client: Client,
}

impl Dispatcher {
    /// Create a dispatcher with the default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(DispatcherConfig::default())
    }

    /// Create a dispatcher with a custom configuration
    pub fn with_config(config: DispatcherConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| Error::Config(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client })
    }

    /// Issue the one outbound call for a descriptor
    ///
    /// Anything that prevents a usable response - malformed URL, header
    /// values the wire cannot carry, DNS or connection failure, timeout -
    /// comes back as [`Error::Network`]. A failure that still carries a
    /// received status surfaces it via [`Error::Http`] rather than
    /// discarding it.
    pub async fn send(&self, descriptor: &RequestDescriptor) -> Outcome {
        let start = Instant::now();

        let url = Url::parse(&descriptor.url)
            .map_err(|e| Error::network(format!("invalid URL '{}': {e}", descriptor.url)))?;

        let mut builder = self
            .client
            .request(descriptor.method.into(), url)
            .headers(wire_headers(&descriptor.headers)?)
            .timeout(descriptor.timeout);

        if let Some(body) = &descriptor.body {
            let bytes = serde_json::to_vec(body)
                .map_err(|e| Error::network(format!("failed to serialize body: {e}")))?;
            builder = builder.body(bytes);
        }

        tracing::debug!(
            method = %descriptor.method,
            url = %descriptor.url,
            timeout_ms = descriptor.timeout.as_millis() as u64,
            "dispatching request"
        );

        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) => {
                let err = classify(e, descriptor.timeout);
                tracing::error!(error = %err, url = %descriptor.url, "request failed");
                return Err(err);
            }
        };

        let status = response.status();
        let body = match response.bytes().await {
            Ok(body) => body,
            Err(e) => {
                // the status already arrived; keep it
                return Err(Error::http(
                    status.as_u16(),
                    format!("failed to read response body: {e}"),
                    None,
                ));
            }
        };

        let elapsed_ms = start.elapsed().as_millis() as u64;
        tracing::info!(status = status.as_u16(), elapsed_ms, "response received");

        Ok(RawResponse {
            status,
            body,
            elapsed_ms,
        })
    }
}

/// Convert the descriptor's header map for the wire
///
/// Names and values were parsed from free-form JSON, so they can still be
/// unrepresentable as HTTP headers; that is a dispatch-time failure, not a
/// validation one, matching how an unreachable host behaves.
fn wire_headers(headers: &std::collections::BTreeMap<String, String>) -> Result<HeaderMap> {
    let mut map = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        let header_name = HeaderName::try_from(name.as_str())
            .map_err(|e| Error::network(format!("invalid header name '{name}': {e}")))?;
        let header_value = HeaderValue::try_from(value.as_str())
            .map_err(|e| Error::network(format!("invalid header value for '{name}': {e}")))?;
        map.insert(header_name, header_value);
    }
    Ok(map)
}

/// Classify a transport error, preserving any received status
fn classify(error: reqwest::Error, timeout: Duration) -> Error {
    if let Some(status) = error.status() {
        return Error::http(status.as_u16(), error.to_string(), None);
    }
    if error.is_timeout() {
        return Error::network(format!(
            "request timed out after {}ms",
            timeout.as_millis()
        ));
    }
    Error::network(error.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::{build, Method, RequestDraft};
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn descriptor_for(url: String, m: Method) -> RequestDescriptor {
        build(&RequestDraft::new(url, m)).unwrap()
    }

    #[tokio::test]
    async fn test_any_received_status_is_ok() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ok"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"up": true})))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/boom"))
            .respond_with(ResponseTemplate::new(500).set_body_string("oops"))
            .mount(&server)
            .await;

        let dispatcher = Dispatcher::new().unwrap();

        let ok = dispatcher
            .send(&descriptor_for(format!("{}/ok", server.uri()), Method::Get))
            .await
            .unwrap();
        assert_eq!(ok.status_code(), 200);
        assert!(ok.is_success());

        let boom = dispatcher
            .send(&descriptor_for(format!("{}/boom", server.uri()), Method::Get))
            .await
            .unwrap();
        assert_eq!(boom.status_code(), 500);
        assert!(!boom.is_success());
        assert_eq!(boom.text_lossy(), "oops");
    }

    #[tokio::test]
    async fn test_post_forwards_body_and_headers() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/items"))
            .and(header("content-type", "application/json"))
            .and(header("authorization", "Bearer tok"))
            .and(body_json(json!({"name": "widget"})))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 1})))
            .mount(&server)
            .await;

        let mut draft = RequestDraft::new(format!("{}/items", server.uri()), Method::Post);
        draft.body_text = r#"{"name": "widget"}"#.to_string();
        draft.bearer_token = "tok".to_string();
        let descriptor = build(&draft).unwrap();

        let response = Dispatcher::new().unwrap().send(&descriptor).await.unwrap();
        assert_eq!(response.status_code(), 201);
    }

    #[tokio::test]
    async fn test_connection_refused_is_network_error() {
        // nothing listens on this port
        let descriptor = descriptor_for("http://127.0.0.1:9".to_string(), Method::Get);
        let err = Dispatcher::new().unwrap().send(&descriptor).await.unwrap_err();
        assert!(err.is_network());
        assert_eq!(err.status_code(), None);
    }

    #[tokio::test]
    async fn test_malformed_url_is_network_error() {
        let descriptor = descriptor_for("not a url".to_string(), Method::Get);
        let err = Dispatcher::new().unwrap().send(&descriptor).await.unwrap_err();
        assert!(err.is_network());
        assert!(err.to_string().contains("invalid URL"));
    }

    #[tokio::test]
    async fn test_unrepresentable_header_is_network_error() {
        let server = MockServer::start().await;
        let mut draft = RequestDraft::new(server.uri(), Method::Get);
        draft.headers_text = r#"{"bad header name": "v"}"#.to_string();
        let descriptor = build(&draft).unwrap();

        let err = Dispatcher::new().unwrap().send(&descriptor).await.unwrap_err();
        assert!(err.is_network());
        assert!(err.to_string().contains("invalid header name"));
    }

    #[tokio::test]
    async fn test_timeout_is_network_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
            .mount(&server)
            .await;

        let mut descriptor = descriptor_for(server.uri(), Method::Get);
        descriptor.timeout = Duration::from_millis(50);

        let err = Dispatcher::new().unwrap().send(&descriptor).await.unwrap_err();
        assert!(err.is_network());
        assert!(err.to_string().contains("timed out"));
    }

    #[tokio::test]
    async fn test_get_descriptor_sends_no_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/x"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let mut draft = RequestDraft::new(format!("{}/x", server.uri()), Method::Get);
        draft.body_text = r#"{"ignored": true}"#.to_string();
        let descriptor = build(&draft).unwrap();
        assert!(descriptor.body.is_none());

        let response = Dispatcher::new().unwrap().send(&descriptor).await.unwrap();
        assert_eq!(response.status_code(), 204);
        assert!(response.body.is_empty());
    }
}
