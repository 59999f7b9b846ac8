//! Client configuration.
//!
//! A `ClientConfig` carries the access token and the per-client overrides
//! (base URL, timeout, fallback error text). It is built once, frozen into a
//! [`ConfigHandle`], and shared by every client and manager that needs it.
//! Configuration can also be persisted as TOML on disk.

use std::fmt;
use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::error::{GhrError, GhrResult};

/// Connection and credential settings for one API client.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClientConfig {
    /// Personal access token or installation token.
    #[serde(default)]
    pub token: String,

    /// Root URL every request path is appended to.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Media type sent in the `Accept` header.
    #[serde(default = "default_accept")]
    pub accept: String,

    /// Value of the API version header.
    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// `User-Agent` header value (required by the service).
    #[serde(default = "constants::default_user_agent")]
    pub user_agent: String,

    /// Request timeout in milliseconds, applied to every call.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Text returned by the error accessors when a failure has no structured body.
    #[serde(default = "default_error_message")]
    pub error_message: String,

    /// Log every request path and serialized payload at debug level.
    #[serde(default)]
    pub log_requests: bool,
}

// Default value functions for serde

fn default_base_url() -> String {
    constants::DEFAULT_BASE_URL.to_string()
}

fn default_accept() -> String {
    constants::DEFAULT_ACCEPT.to_string()
}

fn default_api_version() -> String {
    constants::DEFAULT_API_VERSION.to_string()
}

fn default_timeout_ms() -> u64 {
    constants::DEFAULT_TIMEOUT_MS
}

fn default_error_message() -> String {
    constants::DEFAULT_ERROR_MESSAGE.to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            base_url: default_base_url(),
            accept: default_accept(),
            api_version: default_api_version(),
            user_agent: constants::default_user_agent(),
            timeout_ms: default_timeout_ms(),
            error_message: default_error_message(),
            log_requests: false,
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = if self.token.is_empty() { "" } else { "<redacted>" };
        f.debug_struct("ClientConfig")
            .field("token", &token)
            .field("base_url", &self.base_url)
            .field("accept", &self.accept)
            .field("api_version", &self.api_version)
            .field("user_agent", &self.user_agent)
            .field("timeout_ms", &self.timeout_ms)
            .field("error_message", &self.error_message)
            .field("log_requests", &self.log_requests)
            .finish()
    }
}

impl ClientConfig {
    /// Create a configuration with the given token and default settings.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            ..Self::default()
        }
    }

    /// Read the token from `GITHUB_TOKEN` (or `GH_TOKEN`).
    pub fn from_env() -> GhrResult<Self> {
        constants::TOKEN_ENV_VARS
            .iter()
            .filter_map(|name| std::env::var(name).ok())
            .map(|v| v.trim().to_string())
            .find(|v| !v.is_empty())
            .map(Self::new)
            .ok_or_else(|| {
                GhrError::MissingConfig(format!(
                    "no token in {}",
                    constants::TOKEN_ENV_VARS.join(" or ")
                ))
            })
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = Self::sanitize_base_url(base_url);
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn with_error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = message.into();
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_accept(mut self, accept: impl Into<String>) -> Self {
        self.accept = accept.into();
        self
    }

    /// Opt in to debug logging of request paths and payloads.
    pub fn with_request_logging(mut self, enabled: bool) -> Self {
        self.log_requests = enabled;
        self
    }

    /// Freeze this configuration into a shareable handle.
    pub fn into_handle(self) -> ConfigHandle {
        ConfigHandle::new(self)
    }

    /// Request timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Whether a token has been supplied.
    pub fn is_configured(&self) -> bool {
        !self.token.trim().is_empty()
    }

    /// Fail with `MissingConfig` unless the configuration is usable.
    pub fn validate(&self) -> GhrResult<()> {
        if !self.is_configured() {
            return Err(GhrError::MissingConfig("access token".into()));
        }
        if self.base_url.is_empty() {
            return Err(GhrError::MissingConfig("base url".into()));
        }
        if self.timeout_ms == 0 {
            return Err(GhrError::Config("timeout_ms must be greater than zero".into()));
        }
        Ok(())
    }

    /// Load configuration from a specific file path.
    pub fn load_from_file(path: &Path) -> GhrResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let mut config: ClientConfig = toml::from_str(&contents)?;
        config.base_url = Self::sanitize_base_url(&config.base_url);
        Ok(config)
    }

    /// Load configuration from the default path, or defaults if the file does not exist.
    pub fn load_default() -> GhrResult<Self> {
        let path = Self::default_config_path()?;
        if path.exists() {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to a specific file path.
    pub fn save_to_file(&self, path: &Path) -> GhrResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)
            .map_err(|e| GhrError::Config(format!("failed to serialize config: {e}")))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Default configuration file path.
    ///
    /// - Linux: `~/.config/ghr/config.toml`
    /// - macOS: `~/Library/Application Support/ghr/config.toml`
    /// - Windows: `%APPDATA%/ghr/config.toml`
    pub fn default_config_path() -> GhrResult<PathBuf> {
        let base = dirs::config_dir()
            .ok_or_else(|| GhrError::Config("could not determine config directory".into()))?;
        Ok(base.join(constants::LIB_NAME).join("config.toml"))
    }

    /// Sanitize and normalize a base URL.
    ///
    /// Strips surrounding whitespace and quotes, adds `https://` when no
    /// scheme is present, and removes trailing slashes.
    pub fn sanitize_base_url(address: &str) -> String {
        let trimmed = address.trim().trim_matches('"').trim();
        if trimmed.is_empty() {
            return String::new();
        }

        let with_scheme = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            trimmed.to_string()
        } else {
            format!("https://{trimmed}")
        };

        with_scheme.trim_end_matches('/').to_string()
    }
}

/// Read-only configuration shared by every client built from it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfigHandle {
    inner: Arc<ClientConfig>,
}

impl ConfigHandle {
    /// Wrap a configuration for shared access.
    pub fn new(config: ClientConfig) -> Self {
        Self {
            inner: Arc::new(config),
        }
    }

    /// Borrow the configuration.
    pub fn get(&self) -> &ClientConfig {
        &self.inner
    }
}

impl Deref for ConfigHandle {
    type Target = ClientConfig;

    fn deref(&self) -> &ClientConfig {
        &self.inner
    }
}

impl From<ClientConfig> for ConfigHandle {
    fn from(config: ClientConfig) -> Self {
        Self::new(config)
    }
}
