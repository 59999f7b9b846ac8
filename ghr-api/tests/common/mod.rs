//! Shared test utilities for integration tests.
//!
//! The dispatcher is blocking, so the `wiremock` server is started and
//! configured on a small runtime owned by [`TestServer`]; the requests under
//! test run on the test thread outside of it.

#![allow(dead_code)]

use ghr_api::ApiClient;
use ghr_core::config::ClientConfig;
use tokio::runtime::Runtime;
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

pub struct TestServer {
    server: MockServer,
    runtime: Runtime,
}

impl TestServer {
    pub fn start() -> Self {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .expect("failed to build test runtime");
        let server = runtime.block_on(MockServer::start());
        Self { server, runtime }
    }

    pub fn mount(&self, mock: Mock) -> &Self {
        self.runtime.block_on(mock.mount(&self.server));
        self
    }

    pub fn base_url(&self) -> String {
        self.server.uri()
    }

    pub fn requests(&self) -> Vec<Request> {
        self.runtime
            .block_on(self.server.received_requests())
            .unwrap_or_default()
    }

    pub fn last_request(&self) -> Request {
        self.requests().pop().expect("server saw no request")
    }

    /// A client pointed at this server.
    pub fn client(&self) -> ApiClient {
        ApiClient::new(test_config(&self.base_url())).expect("failed to build client")
    }
}

pub fn json_reply(status: u16, body: &str) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_raw(body, "application/json")
}

pub fn html_reply(status: u16, body: &str) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_raw(body, "text/html")
}

pub fn header<'a>(request: &'a Request, name: &str) -> Option<&'a str> {
    request.headers.get(name).and_then(|v| v.to_str().ok())
}

/// Path plus query string as the server received it.
pub fn target(request: &Request) -> String {
    match request.url.query() {
        Some(query) => format!("{}?{query}", request.url.path()),
        None => request.url.path().to_string(),
    }
}

/// Configuration pointed at `base_url` with a recognisable fallback message.
pub fn test_config(base_url: &str) -> ClientConfig {
    ClientConfig::new("test-token")
        .with_base_url(base_url)
        .with_timeout_ms(5_000)
        .with_error_message("request failed (test fallback)")
}

/// A base URL nothing is listening on.
pub fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("failed to bind");
    let addr = listener.local_addr().expect("no local address");
    drop(listener);
    format!("http://{addr}")
}
