//! HTTP transport seam.
//!
//! The dispatcher describes each call as a plain [`HttpRequest`] and hands
//! it to a [`Transport`], which performs the blocking round trip. Any
//! completed round trip, whatever its status, is an `Ok(ApiResponse)`; only
//! failures to complete it (connect, DNS, TLS, timeout, body read) are
//! errors.

use std::fmt;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::Method;

use ghr_core::config::ClientConfig;
use ghr_core::constants::headers;
use ghr_core::error::{GhrError, GhrResult};

use crate::response::ApiResponse;

/// An HTTP request described as plain data.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    /// Absolute URL including any query string.
    pub url: String,
    pub headers: Vec<(String, String)>,
    /// Serialized JSON body for body-bearing verbs.
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Performs one blocking HTTP round trip.
pub trait Transport: Send + Sync {
    fn execute(&self, request: &HttpRequest) -> GhrResult<ApiResponse>;
}

/// Transport backed by `reqwest`'s blocking client.
#[derive(Clone)]
pub struct ReqwestTransport {
    inner: Client,
}

impl ReqwestTransport {
    /// Build a transport applying the configured timeout to every request.
    pub fn new(config: &ClientConfig) -> GhrResult<Self> {
        let inner = Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.timeout().min(Duration::from_secs(15)))
            .pool_idle_timeout(Duration::from_secs(90))
            .build()
            .map_err(|e| GhrError::Http(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { inner })
    }

    /// Classify a reqwest error into a GhrError variant.
    fn classify_error(e: reqwest::Error) -> GhrError {
        if e.is_timeout() {
            GhrError::Timeout(e.to_string())
        } else if e.is_connect() {
            GhrError::Http(format!("connection failed: {e}"))
        } else {
            GhrError::Http(e.to_string())
        }
    }
}

impl fmt::Debug for ReqwestTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReqwestTransport").finish_non_exhaustive()
    }
}

impl Transport for ReqwestTransport {
    fn execute(&self, request: &HttpRequest) -> GhrResult<ApiResponse> {
        let mut builder = self.inner.request(request.method.clone(), &request.url);
        for (key, value) in &request.headers {
            builder = builder.header(key.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder
                .header(headers::CONTENT_TYPE, "application/json")
                .body(body.clone());
        }

        let response = builder.send().map_err(Self::classify_error)?;

        let status = response.status().as_u16();
        let response_headers = response
            .headers()
            .iter()
            .filter_map(|(k, v)| v.to_str().ok().map(|v| (k.as_str().to_string(), v.to_string())))
            .collect();
        let body = response.text().map_err(Self::classify_error)?;

        Ok(ApiResponse::new(status, body).with_headers(response_headers))
    }
}
