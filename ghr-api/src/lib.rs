//! ghr API - synchronous client for the hosted-git REST API.
//!
//! Every endpoint wrapper reduces to the same pipeline: build a path and
//! optional [`Params`], hand them to the [`ApiClient`] dispatcher, and turn
//! the returned [`ApiResponse`] into raw text, a JSON tree, or a typed
//! domain object. Endpoint managers are grouped by functional area in
//! [`endpoints`].

pub mod client;
pub mod endpoints;
pub mod format;
pub mod params;
pub mod response;
pub mod transport;

#[cfg(test)]
mod test_support;

// Re-export key types
pub use client::ApiClient;
pub use format::{format_response, parse_json, parse_typed, parse_typed_list, Formatted, ReturnFormat};
pub use params::Params;
pub use response::{ApiErrorBody, ApiResponse};
pub use transport::{HttpRequest, ReqwestTransport, Transport};
