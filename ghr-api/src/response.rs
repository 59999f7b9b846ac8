//! Per-call response value.
//!
//! Every send operation returns its own [`ApiResponse`] carrying the status,
//! headers and raw body of that one round trip. Nothing is stored on the
//! client between calls.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use ghr_core::error::GhrResult;
use ghr_models::json::FromJson;

use crate::format;

/// Structured error body of a non-2xx response.
///
/// ```json
/// { "message": "Not Found", "documentation_url": "https://docs.github.com/rest" }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub message: String,
    #[serde(default)]
    pub documentation_url: Option<String>,
    /// Per-field validation errors (422 responses).
    #[serde(default)]
    pub errors: Vec<Value>,
}

/// Outcome of one completed HTTP round trip.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: body.into(),
        }
    }

    pub fn with_headers(mut self, headers: Vec<(String, String)>) -> Self {
        self.headers = headers;
        self
    }

    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Raw body text, unchanged.
    pub fn text(&self) -> &str {
        &self.body
    }

    /// Body parsed as a generic JSON tree.
    pub fn json(&self) -> GhrResult<Value> {
        format::parse_json(&self.body)
    }

    /// Body decoded into a domain object.
    pub fn decode<T: FromJson>(&self) -> GhrResult<T> {
        format::parse_typed(&self.body)
    }

    /// Body decoded element by element from a bare JSON array.
    pub fn decode_list<T: FromJson>(&self) -> GhrResult<Vec<T>> {
        format::parse_typed_list(&self.body)
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Structured error body, when the response is a non-2xx with a JSON
    /// object carrying a `message`.
    pub fn error_body(&self) -> Option<ApiErrorBody> {
        if self.is_success() {
            return None;
        }
        serde_json::from_str(&self.body).ok()
    }

    /// Error message of a non-2xx response, if the body carries one.
    pub fn error_message(&self) -> Option<String> {
        self.error_body().map(|e| e.message)
    }

    /// URL of the next page from the `Link` header.
    pub fn next_page_url(&self) -> Option<String> {
        self.link("next")
    }

    /// URL with the given `rel` from the `Link` header.
    ///
    /// Format: `<https://api.github.com/...&page=2>; rel="next", <...>; rel="last"`
    pub fn link(&self, rel: &str) -> Option<String> {
        let wanted = format!("rel=\"{rel}\"");
        self.header("link")?.split(',').find_map(|part| {
            let mut pieces = part.split(';').map(str::trim);
            let url = pieces.next()?;
            if pieces.any(|p| p == wanted) {
                url.strip_prefix('<')?.strip_suffix('>').map(str::to_string)
            } else {
                None
            }
        })
    }

    /// Remaining request quota from the rate-limit headers.
    pub fn rate_limit_remaining(&self) -> Option<u64> {
        self.header("x-ratelimit-remaining")?.parse().ok()
    }
}
