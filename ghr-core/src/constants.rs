//! Service-wide constants.

/// Library name, used in the default `User-Agent`.
pub const LIB_NAME: &str = "ghr";

/// Library version.
pub const LIB_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Root URL every request path is appended to.
pub const DEFAULT_BASE_URL: &str = "https://api.github.com";

/// Versioned JSON media type advertised in the `Accept` header.
pub const DEFAULT_ACCEPT: &str = "application/vnd.github+json";

/// Value of the API version header.
pub const DEFAULT_API_VERSION: &str = "2022-11-28";

/// Default request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Fallback error text returned when a failure carries no structured body.
pub const DEFAULT_ERROR_MESSAGE: &str = "request failed without a structured error response";

/// Environment variables consulted for the access token, in order.
pub const TOKEN_ENV_VARS: &[&str] = &["GITHUB_TOKEN", "GH_TOKEN"];

/// Header names attached to every request.
pub mod headers {
    pub const AUTHORIZATION: &str = "Authorization";
    pub const ACCEPT: &str = "Accept";
    pub const API_VERSION: &str = "X-GitHub-Api-Version";
    pub const USER_AGENT: &str = "User-Agent";
    pub const CONTENT_TYPE: &str = "Content-Type";
}

/// Default `User-Agent` value (`ghr/<version>`).
pub fn default_user_agent() -> String {
    format!("{LIB_NAME}/{LIB_VERSION}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_user_agent() {
        let ua = default_user_agent();
        assert!(ua.starts_with("ghr/"));
        assert_eq!(ua, format!("ghr/{}", env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn test_token_env_order() {
        assert_eq!(TOKEN_ENV_VARS[0], "GITHUB_TOKEN");
    }
}
