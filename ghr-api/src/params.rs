//! Ordered request parameters.
//!
//! The same collection serves as the JSON body of POST/PUT/PATCH calls and
//! as the query string of filtered GET calls. Insertion order is preserved
//! in both renderings.

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

use ghr_core::error::{GhrError, GhrResult};

/// Ordered key/value parameters for one request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    entries: Vec<(String, Value)>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from any serializable struct, keeping its field order.
    pub fn from_serialize<T: Serialize>(value: &T) -> GhrResult<Self> {
        match serde_json::to_value(value)? {
            Value::Object(map) => Ok(map.into_iter().collect()),
            Value::Null => Ok(Self::new()),
            other => Err(GhrError::Serialization(format!(
                "request parameters must serialize to an object, got {other}"
            ))),
        }
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Builder-style insert that skips `None`.
    pub fn with_opt<V: Into<Value>>(mut self, key: impl Into<String>, value: Option<V>) -> Self {
        self.insert_opt(key, value);
        self
    }

    /// Insert a value. Re-inserting a key replaces the value in place,
    /// keeping the key's original position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn insert_opt<V: Into<Value>>(&mut self, key: impl Into<String>, value: Option<V>) {
        if let Some(v) = value {
            self.insert(key, v);
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        let idx = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(idx).1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Render as `?k=v&k2=v2`, or `""` when there is nothing to send.
    ///
    /// Keys and values are URL-encoded. Strings are sent unquoted, arrays
    /// are joined with commas, and null values are skipped.
    pub fn to_query_string(&self) -> String {
        let pairs: Vec<String> = self
            .entries
            .iter()
            .filter_map(|(k, v)| query_value(v).map(|v| format!("{}={v}", urlencoding::encode(k))))
            .collect();

        if pairs.is_empty() {
            String::new()
        } else {
            format!("?{}", pairs.join("&"))
        }
    }

    /// Append the query string to `path`, respecting an existing `?`.
    pub fn apply_to_path(&self, path: &str) -> String {
        let query = self.to_query_string();
        if query.is_empty() {
            path.to_string()
        } else if path.contains('?') {
            format!("{path}&{}", &query[1..])
        } else {
            format!("{path}{query}")
        }
    }

    /// The parameters as a JSON object, in insertion order.
    pub fn to_json(&self) -> Value {
        Value::Object(self.entries.iter().cloned().collect())
    }

    /// The parameters as a JSON body string.
    pub fn to_body(&self) -> GhrResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

fn query_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(urlencoding::encode(s).into_owned()),
        Value::Array(items) => Some(
            items
                .iter()
                .filter_map(query_value)
                .collect::<Vec<_>>()
                .join(","),
        ),
        other => Some(urlencoding::encode(&other.to_string()).into_owned()),
    }
}

impl Serialize for Params {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_query_string_preserves_insertion_order() {
        let params = Params::new().with("per_page", 50).with("page", 2);
        assert_eq!(params.to_query_string(), "?per_page=50&page=2");

        let params = Params::new().with("page", 2).with("per_page", 50);
        assert_eq!(params.to_query_string(), "?page=2&per_page=50");
    }

    #[test]
    fn test_query_string_encodes_reserved_characters() {
        let params = Params::new()
            .with("q", "is:open label:\"good first issue\"")
            .with("since", "2024-01-01T00:00:00+00:00");
        assert_eq!(
            params.to_query_string(),
            "?q=is%3Aopen%20label%3A%22good%20first%20issue%22&since=2024-01-01T00%3A00%3A00%2B00%3A00"
        );
    }

    #[test]
    fn test_query_string_empty_and_nulls() {
        assert_eq!(Params::new().to_query_string(), "");
        let params = Params::new().with("assignee", Value::Null);
        assert_eq!(params.to_query_string(), "");
    }

    #[test]
    fn test_query_string_arrays_and_bools() {
        let params = Params::new()
            .with("labels", json!(["bug", "ui/ux"]))
            .with("draft", false);
        assert_eq!(params.to_query_string(), "?labels=bug,ui%2Fux&draft=false");
    }

    #[test]
    fn test_reinsert_replaces_in_place() {
        let mut params = Params::new().with("a", 1).with("b", 2);
        params.insert("a", 3);
        assert_eq!(params.len(), 2);
        assert_eq!(params.to_query_string(), "?a=3&b=2");
        assert_eq!(params.remove("a"), Some(json!(3)));
        assert_eq!(params.get("a"), None);
    }

    #[test]
    fn test_with_opt_skips_none() {
        let params = Params::new()
            .with_opt("milestone", None::<i64>)
            .with_opt("state", Some("closed"));
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("state"), Some(&json!("closed")));
    }

    #[test]
    fn test_apply_to_path() {
        let params = Params::new().with("page", 3);
        assert_eq!(params.apply_to_path("/user/repos"), "/user/repos?page=3");
        assert_eq!(params.apply_to_path("/search?q=x"), "/search?q=x&page=3");
        assert_eq!(Params::new().apply_to_path("/user"), "/user");
    }

    #[test]
    fn test_body_serialization_keeps_order_and_nesting() {
        let params = Params::new()
            .with("title", "Found a bug")
            .with("labels", json!(["bug"]))
            .with("config", json!({"url": "https://example.com", "content_type": "json"}));
        assert_eq!(
            params.to_body().unwrap(),
            r#"{"title":"Found a bug","labels":["bug"],"config":{"url":"https://example.com","content_type":"json"}}"#
        );
        assert_eq!(params.to_json()["config"]["content_type"], "json");
    }

    #[test]
    fn test_from_serialize_struct() {
        #[derive(serde::Serialize)]
        struct Query {
            state: &'static str,
            #[serde(skip_serializing_if = "Option::is_none")]
            labels: Option<&'static str>,
            per_page: u32,
        }
        let params = Params::from_serialize(&Query {
            state: "open",
            labels: None,
            per_page: 100,
        })
        .unwrap();
        assert_eq!(params.to_query_string(), "?state=open&per_page=100");
        assert!(Params::from_serialize(&vec![1, 2]).is_err());
    }

    #[test]
    fn test_from_iterator() {
        let params: Params = vec![("state", "open"), ("sort", "updated")].into_iter().collect();
        assert_eq!(params.to_query_string(), "?state=open&sort=updated");
    }
}
