//! ghr core - foundation types shared by the REST client crates.
//!
//! This crate provides:
//! - The immutable client configuration (token, base URL, timeout, fallback error text)
//! - The unified error type covering transport, API, and payload failures
//! - Structured logging with tracing
//! - Service-wide constants (base endpoint, media types, header names)

pub mod config;
pub mod constants;
pub mod error;
pub mod logging;

// Re-export commonly used items at the crate root
pub use config::{ClientConfig, ConfigHandle};
pub use error::{GhrError, GhrResult};
pub use logging::{init_console_logging, init_logging, LogGuard, LogSettings};
