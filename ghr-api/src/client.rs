//! Request dispatcher for the hosted-git REST API.
//!
//! Handles authentication headers, path composition, optional payload
//! logging, and status checking. Each send returns its own
//! [`ApiResponse`]; a non-2xx status is still `Ok`, only transport
//! failures are `Err`.

use std::fmt;
use std::sync::Arc;

use reqwest::Method;
use serde_json::{json, Value};
use tracing::{debug, error, warn};

use ghr_core::config::ConfigHandle;
use ghr_core::constants::headers;
use ghr_core::error::{GhrError, GhrResult};
use ghr_models::json::FromJson;

use crate::format::{self, Formatted, ReturnFormat};
use crate::params::Params;
use crate::response::ApiResponse;
use crate::transport::{HttpRequest, ReqwestTransport, Transport};

/// Blocking client for the REST API.
///
/// Cheap to clone; clones share the transport and configuration. Endpoint
/// groups are reached through accessors such as [`ApiClient::repos`].
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
    config: ConfigHandle,
    /// Headers attached to every request.
    default_headers: Vec<(String, String)>,
}

impl ApiClient {
    /// Create a client backed by the real HTTP transport.
    pub fn new(config: impl Into<ConfigHandle>) -> GhrResult<Self> {
        let config = config.into();
        config.validate()?;
        let transport = ReqwestTransport::new(&config)?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Create a client on top of a caller-supplied transport.
    pub fn with_transport(config: impl Into<ConfigHandle>, transport: Arc<dyn Transport>) -> Self {
        let config = config.into();
        let mut default_headers = Vec::with_capacity(4);
        if config.is_configured() {
            default_headers.push((
                headers::AUTHORIZATION.to_string(),
                format!("Bearer {}", config.token.trim()),
            ));
        }
        default_headers.push((headers::ACCEPT.to_string(), config.accept.clone()));
        default_headers.push((headers::API_VERSION.to_string(), config.api_version.clone()));
        default_headers.push((headers::USER_AGENT.to_string(), config.user_agent.clone()));

        Self {
            transport,
            config,
            default_headers,
        }
    }

    /// The shared configuration this client was built with.
    pub fn config(&self) -> &ConfigHandle {
        &self.config
    }

    /// Full URL for an API path. Absolute URLs (e.g. pagination links) pass
    /// through untouched.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        let base = self.config.base_url.trim_end_matches('/');
        if path.starts_with('/') {
            format!("{base}{path}")
        } else {
            format!("{base}/{path}")
        }
    }

    /// Internal: perform one round trip.
    fn dispatch(&self, method: Method, path: &str, body: Option<&Params>) -> GhrResult<ApiResponse> {
        debug!("{} {}", method, path);

        let body = match body {
            Some(params) => {
                let payload = params.to_body()?;
                if self.config.log_requests {
                    debug!(%method, path, payload = %payload, "request payload");
                }
                Some(payload)
            }
            None => None,
        };

        let request = HttpRequest {
            method: method.clone(),
            url: self.url(path),
            headers: self.default_headers.clone(),
            body,
        };

        let response = self.transport.execute(&request).map_err(|e| {
            warn!("{} {} failed: {}", method, path, e);
            e
        })?;

        if !response.is_success() {
            warn!("{} {} returned status {}", method, path, response.status);
        } else if self.config.log_requests {
            debug!(%method, path, status = response.status, bytes = response.body.len(), "response");
        }

        Ok(response)
    }

    // --- Send operations ---

    /// GET `path` (or an absolute URL, e.g. a pagination link).
    pub fn send_get(&self, path: &str) -> GhrResult<ApiResponse> {
        self.dispatch(Method::GET, path, None)
    }

    /// GET with `params` rendered as the query string.
    pub fn send_get_with(&self, path: &str, params: &Params) -> GhrResult<ApiResponse> {
        self.dispatch(Method::GET, &params.apply_to_path(path), None)
    }

    /// DELETE without a body.
    pub fn send_delete(&self, path: &str) -> GhrResult<ApiResponse> {
        self.dispatch(Method::DELETE, path, None)
    }

    /// DELETE with a JSON body.
    pub fn send_delete_with(&self, path: &str, params: &Params) -> GhrResult<ApiResponse> {
        self.dispatch(Method::DELETE, path, Some(params))
    }

    /// POST with `params` as the JSON body.
    pub fn send_post(&self, path: &str, params: &Params) -> GhrResult<ApiResponse> {
        self.dispatch(Method::POST, path, Some(params))
    }

    /// PUT with `params` as the JSON body.
    pub fn send_put(&self, path: &str, params: &Params) -> GhrResult<ApiResponse> {
        self.dispatch(Method::PUT, path, Some(params))
    }

    /// PATCH with `params` as the JSON body.
    pub fn send_patch(&self, path: &str, params: &Params) -> GhrResult<ApiResponse> {
        self.dispatch(Method::PATCH, path, Some(params))
    }

    /// POST without a body (e.g. re-run, cancel, ping).
    pub fn send_post_empty(&self, path: &str) -> GhrResult<ApiResponse> {
        self.dispatch(Method::POST, path, None)
    }

    /// PUT without a body (e.g. star a gist).
    pub fn send_put_empty(&self, path: &str) -> GhrResult<ApiResponse> {
        self.dispatch(Method::PUT, path, None)
    }

    // --- Error accessors ---

    /// Error message of a failed call as text.
    ///
    /// Returns the `message` of a structured API error, or the configured
    /// fallback text for transport failures and unstructured bodies.
    pub fn error_response(&self, outcome: &GhrResult<ApiResponse>) -> String {
        match outcome {
            Ok(resp) => resp
                .error_message()
                .unwrap_or_else(|| self.config.error_message.clone()),
            Err(_) => self.config.error_message.clone(),
        }
    }

    /// Error body of a failed call as a JSON object.
    ///
    /// Falls back to `{"message": <configured fallback>}`.
    pub fn json_error_response(&self, outcome: &GhrResult<ApiResponse>) -> Value {
        if let Ok(resp) = outcome {
            if !resp.is_success() {
                if let Ok(tree @ Value::Object(_)) = resp.json() {
                    if tree.get("message").is_some_and(Value::is_string) {
                        return tree;
                    }
                }
            }
        }
        json!({ "message": self.config.error_message })
    }

    /// Log the error of a failed call.
    pub fn print_error_response(&self, outcome: &GhrResult<ApiResponse>) {
        match outcome {
            Ok(resp) => error!(status = resp.status, "{}", self.error_response(outcome)),
            Err(e) => error!("{}: {}", self.error_response(outcome), e),
        }
    }

    // --- Status checking and typed helpers ---

    /// Convert a non-2xx response into the matching error.
    pub fn check_status(response: ApiResponse) -> GhrResult<ApiResponse> {
        if response.is_success() {
            return Ok(response);
        }
        let status = response.status;
        let message = response
            .error_message()
            .unwrap_or_else(|| format!("server returned status {status}"));
        Err(match status {
            401 | 403 => GhrError::AuthFailed(message),
            404 => GhrError::NotFound(message),
            _ => GhrError::Api { status, message },
        })
    }

    /// GET + status check + typed decode.
    pub fn get_typed<T: FromJson>(&self, path: &str, params: &Params) -> GhrResult<T> {
        Self::check_status(self.send_get_with(path, params)?)?.decode()
    }

    /// GET + status check + element-wise decode of a bare array.
    pub fn get_typed_list<T: FromJson>(&self, path: &str, params: &Params) -> GhrResult<Vec<T>> {
        Self::check_status(self.send_get_with(path, params)?)?.decode_list()
    }

    /// GET + status check, body returned in the requested shape.
    pub fn get_formatted<T: FromJson>(
        &self,
        path: &str,
        params: &Params,
        format: ReturnFormat,
    ) -> GhrResult<Formatted<T>> {
        let resp = Self::check_status(self.send_get_with(path, params)?)?;
        format::format_response(resp.text(), format)
    }

    /// GET + status check, body as raw text.
    pub fn get_raw(&self, path: &str) -> GhrResult<String> {
        Ok(Self::check_status(self.send_get(path)?)?.body)
    }

    /// POST + status check + typed decode.
    pub fn post_typed<T: FromJson>(&self, path: &str, params: &Params) -> GhrResult<T> {
        Self::check_status(self.send_post(path, params)?)?.decode()
    }

    /// POST + status check, body as raw text (non-JSON endpoints).
    pub fn post_raw(&self, path: &str, params: &Params) -> GhrResult<String> {
        Ok(Self::check_status(self.send_post(path, params)?)?.body)
    }

    /// PATCH + status check + typed decode.
    pub fn patch_typed<T: FromJson>(&self, path: &str, params: &Params) -> GhrResult<T> {
        Self::check_status(self.send_patch(path, params)?)?.decode()
    }

    /// PUT + status check + typed decode.
    pub fn put_typed<T: FromJson>(&self, path: &str, params: &Params) -> GhrResult<T> {
        Self::check_status(self.send_put(path, params)?)?.decode()
    }

    /// Reduce an outcome to a success flag, logging any failure.
    pub fn outcome_ok(&self, outcome: &GhrResult<ApiResponse>) -> bool {
        match outcome {
            Ok(resp) if resp.is_success() => true,
            _ => {
                self.print_error_response(outcome);
                false
            }
        }
    }

    /// DELETE reduced to a success flag.
    pub fn delete_ok(&self, path: &str) -> bool {
        self.outcome_ok(&self.send_delete(path))
    }

    /// GET on a status-only endpoint: 204 means yes, 404 means no.
    /// Anything else is logged and read as no.
    pub fn status_flag(&self, path: &str) -> bool {
        let outcome = self.send_get(path);
        match &outcome {
            Ok(resp) if resp.status == 204 => true,
            Ok(resp) if resp.status == 404 => false,
            _ => {
                self.print_error_response(&outcome);
                false
            }
        }
    }
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
