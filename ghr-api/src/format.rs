//! Response formatting.
//!
//! Raw response text can be handed back unchanged, parsed into a generic
//! JSON tree, or decoded into a domain object. Call sites that know the
//! shape at compile time use [`parse_json`], [`parse_typed`] and
//! [`parse_typed_list`] directly; [`format_response`] keeps the runtime
//! selector for callers that let their own users choose.

use serde_json::Value;

use ghr_core::error::{GhrError, GhrResult};
use ghr_models::json::{self, FromJson};

/// Shape requested for a response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReturnFormat {
    /// Body text unchanged.
    Raw,
    /// Generic JSON tree.
    Json,
    /// Typed domain object.
    #[default]
    Typed,
}

/// A response in the shape chosen by a [`ReturnFormat`].
#[derive(Debug, Clone, PartialEq)]
pub enum Formatted<T> {
    Raw(String),
    Json(Value),
    Typed(T),
}

impl<T> Formatted<T> {
    pub fn as_raw(&self) -> Option<&str> {
        match self {
            Formatted::Raw(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Formatted::Json(v) => Some(v),
            _ => None,
        }
    }

    pub fn into_typed(self) -> Option<T> {
        match self {
            Formatted::Typed(t) => Some(t),
            _ => None,
        }
    }
}

/// Convert `raw` into the requested shape.
pub fn format_response<T: FromJson>(raw: &str, format: ReturnFormat) -> GhrResult<Formatted<T>> {
    Ok(match format {
        ReturnFormat::Raw => Formatted::Raw(raw.to_string()),
        ReturnFormat::Json => Formatted::Json(parse_json(raw)?),
        ReturnFormat::Typed => Formatted::Typed(parse_typed(raw)?),
    })
}

/// Parse text as a JSON tree. Objects and bare arrays are returned as-is.
pub fn parse_json(raw: &str) -> GhrResult<Value> {
    serde_json::from_str(raw)
        .map_err(|e| GhrError::Serialization(format!("invalid JSON response: {e}")))
}

/// Parse text and construct a domain object from the tree.
pub fn parse_typed<T: FromJson>(raw: &str) -> GhrResult<T> {
    T::from_json(&parse_json(raw)?)
}

/// Parse a bare JSON array and construct each element.
pub fn parse_typed_list<T: FromJson>(raw: &str) -> GhrResult<Vec<T>> {
    json::parse_array(&parse_json(raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ghr_models::{Repository, SimpleUser};
    use serde_json::json;

    const USER: &str = r#"{"login":"octocat","id":1,"type":"User","site_admin":false}"#;

    #[test]
    fn test_raw_then_parse_equals_json() {
        let raw: Formatted<SimpleUser> = format_response(USER, ReturnFormat::Raw).unwrap();
        let parsed: Value = serde_json::from_str(raw.as_raw().unwrap()).unwrap();

        let direct: Formatted<SimpleUser> = format_response(USER, ReturnFormat::Json).unwrap();
        assert_eq!(direct.as_json(), Some(&parsed));
    }

    #[test]
    fn test_typed_format() {
        let typed: Formatted<SimpleUser> = format_response(USER, ReturnFormat::Typed).unwrap();
        assert_eq!(typed.into_typed().unwrap().login, "octocat");
    }

    #[test]
    fn test_bare_array_not_wrapped() {
        let tree = parse_json(r#"["C","Go","Rust"]"#).unwrap();
        assert_eq!(tree, json!(["C", "Go", "Rust"]));
        assert!(tree.is_array());
    }

    #[test]
    fn test_typed_list_from_bare_array() {
        let users: Vec<SimpleUser> = parse_typed_list(r#"[{"login":"a"},{"login":"b"}]"#).unwrap();
        assert_eq!(users.iter().map(|u| u.login.as_str()).collect::<Vec<_>>(), ["a", "b"]);

        // an object where an array is expected is a decode error, not a wrap
        assert!(parse_typed_list::<SimpleUser>(USER).is_err());
    }

    #[test]
    fn test_typed_propagates_nested_failure() {
        // owner without a login cannot be built
        let err = parse_typed::<Repository>(r#"{"id":1,"owner":{"id":2}}"#).unwrap_err();
        assert!(matches!(err, GhrError::MissingField { field: "login", .. }));
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(parse_json("<html>"), Err(GhrError::Serialization(_))));
        let raw: Formatted<SimpleUser> = format_response("<html>", ReturnFormat::Raw).unwrap();
        assert_eq!(raw.as_raw(), Some("<html>"));
    }
}
