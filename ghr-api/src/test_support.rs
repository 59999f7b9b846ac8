//! Shared helpers for unit tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use ghr_core::config::ClientConfig;
use ghr_core::error::GhrResult;

use crate::client::ApiClient;
use crate::response::ApiResponse;
use crate::transport::{HttpRequest, Transport};

/// Replays queued outcomes in order and records every request.
/// Once the queue is empty every call answers `200 {}`.
#[derive(Default)]
pub struct ScriptedTransport {
    replies: Mutex<VecDeque<GhrResult<ApiResponse>>>,
    seen: Mutex<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    pub fn replying(replies: Vec<GhrResult<ApiResponse>>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into()),
            seen: Mutex::default(),
        })
    }

    /// Shorthand for a queue of completed responses.
    pub fn with(responses: Vec<(u16, &str)>) -> Arc<Self> {
        Self::replying(
            responses
                .into_iter()
                .map(|(status, body)| Ok(ApiResponse::new(status, body)))
                .collect(),
        )
    }

    pub fn last(&self) -> HttpRequest {
        self.seen.lock().unwrap().last().cloned().expect("no request sent")
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.seen.lock().unwrap().clone()
    }
}

impl Transport for ScriptedTransport {
    fn execute(&self, request: &HttpRequest) -> GhrResult<ApiResponse> {
        self.seen.lock().unwrap().push(request.clone());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(ApiResponse::new(200, "{}")))
    }
}

pub fn test_config() -> ClientConfig {
    ClientConfig::new("secret-token").with_error_message("something went wrong")
}

/// A client wired to `transport`.
pub fn client_with(transport: &Arc<ScriptedTransport>) -> ApiClient {
    ApiClient::with_transport(test_config(), transport.clone())
}
