//! JSON-tree mapping helpers shared by every domain object.
//!
//! Field lookups never fail on absence: strings default to `""`, numbers to
//! `0`, booleans to `false`, collections to empty. Nested objects and arrays
//! resolve to a shared empty tree so nested constructors never see `null`.
//! Only the `required_*` helpers report a missing field.

use chrono::DateTime;
use lazy_static::lazy_static;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use tracing::trace;

use ghr_core::error::{GhrError, GhrResult};

lazy_static! {
    static ref EMPTY_OBJECT: Value = Value::Object(Map::new());
    static ref EMPTY_ARRAY: Vec<Value> = Vec::new();
}

/// Construction from a fetched JSON tree.
pub trait FromJson: Sized {
    fn from_json(value: &Value) -> GhrResult<Self>;

    /// Parse raw response text and construct from the resulting tree.
    fn from_json_str(raw: &str) -> GhrResult<Self> {
        let value: Value = serde_json::from_str(raw)?;
        Self::from_json(&value)
    }
}

/// Conversion back into a JSON tree.
pub trait ToJson {
    fn to_json(&self) -> GhrResult<Value>;
}

impl<T: Serialize> ToJson for T {
    fn to_json(&self) -> GhrResult<Value> {
        serde_json::to_value(self).map_err(GhrError::from)
    }
}

/// A closed enumeration of upstream string values.
pub trait JsonEnum: Sized + Copy {
    /// Value used when the field is absent or not recognised.
    const FALLBACK: Self;

    fn from_wire(s: &str) -> Option<Self>;

    fn as_wire(&self) -> &'static str;

    /// Parse a wire value, falling back to [`JsonEnum::FALLBACK`].
    fn parse_or_fallback(s: &str) -> Self {
        Self::from_wire(s).unwrap_or(Self::FALLBACK)
    }
}

/// Declare a closed string enum with its wire names and fallback variant.
#[macro_export]
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident fallback $fallback:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $crate::json::JsonEnum for $name {
            const FALLBACK: Self = $name::$fallback;

            fn from_wire(s: &str) -> Option<Self> {
                match s {
                    $( $wire => Some($name::$variant), )+
                    _ => None,
                }
            }

            fn as_wire(&self) -> &'static str {
                match self {
                    $( $name::$variant => $wire, )+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$fallback
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::json::JsonEnum::as_wire(self))
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                // an empty wire name stands for an upstream `null`
                match $crate::json::JsonEnum::as_wire(self) {
                    "" => serializer.serialize_none(),
                    wire => serializer.serialize_str(wire),
                }
            }
        }
    };
}

/// Fail unless `value` is a JSON object.
pub fn ensure_object(value: &Value, object: &'static str) -> GhrResult<()> {
    if value.is_object() {
        Ok(())
    } else {
        Err(GhrError::Serialization(format!(
            "{object}: expected a JSON object, got {}",
            kind_of(value)
        )))
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ─── Scalars ─────────────────────────────────────────────────────────────

pub fn str_field(value: &Value, key: &str) -> String {
    opt_str(value, key).unwrap_or_default()
}

pub fn opt_str(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(String::from)
}

/// String field that some payloads send as a number (e.g. `insecure_ssl`).
pub fn str_or_number(value: &Value, key: &str) -> String {
    match value.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => (if *b { "1" } else { "0" }).to_string(),
        _ => String::new(),
    }
}

pub fn i64_field(value: &Value, key: &str) -> i64 {
    opt_i64(value, key).unwrap_or(0)
}

pub fn opt_i64(value: &Value, key: &str) -> Option<i64> {
    let v = value.get(key)?;
    v.as_i64().or_else(|| v.as_f64().map(|f| f as i64))
}

pub fn u64_field(value: &Value, key: &str) -> u64 {
    value.get(key).and_then(Value::as_u64).unwrap_or(0)
}

pub fn f64_field(value: &Value, key: &str) -> f64 {
    value.get(key).and_then(Value::as_f64).unwrap_or(0.0)
}

pub fn bool_field(value: &Value, key: &str) -> bool {
    opt_bool(value, key).unwrap_or(false)
}

pub fn opt_bool(value: &Value, key: &str) -> Option<bool> {
    value.get(key).and_then(Value::as_bool)
}

pub fn has_field(value: &Value, key: &str) -> bool {
    value.get(key).is_some_and(|v| !v.is_null())
}

pub fn required_str(value: &Value, object: &'static str, field: &'static str) -> GhrResult<String> {
    opt_str(value, field).ok_or(GhrError::MissingField { object, field })
}

pub fn required_i64(value: &Value, object: &'static str, field: &'static str) -> GhrResult<i64> {
    opt_i64(value, field).ok_or(GhrError::MissingField { object, field })
}

pub fn enum_field<E: JsonEnum>(value: &Value, key: &str) -> E {
    match value.get(key).and_then(Value::as_str) {
        Some(s) => E::from_wire(s).unwrap_or_else(|| {
            trace!("unrecognised value {s:?} for `{key}`, using fallback");
            E::FALLBACK
        }),
        None => E::FALLBACK,
    }
}

// ─── Nested trees ────────────────────────────────────────────────────────

/// Nested object, or a shared empty object when absent or null.
pub fn object_field<'a>(value: &'a Value, key: &str) -> &'a Value {
    match value.get(key) {
        Some(v) if v.is_object() => v,
        _ => &*EMPTY_OBJECT,
    }
}

/// Nested array, or a shared empty array when absent or null.
pub fn array_field<'a>(value: &'a Value, key: &str) -> &'a [Value] {
    match value.get(key) {
        Some(Value::Array(items)) => items,
        _ => EMPTY_ARRAY.as_slice(),
    }
}

pub fn str_list(value: &Value, key: &str) -> Vec<String> {
    array_field(value, key)
        .iter()
        .filter_map(Value::as_str)
        .map(String::from)
        .collect()
}

/// Decode every element of a nested array.
pub fn list_of<T: FromJson>(value: &Value, key: &str) -> GhrResult<Vec<T>> {
    array_field(value, key).iter().map(T::from_json).collect()
}

/// Decode a nested object that may be absent or null.
pub fn opt_object<T: FromJson>(value: &Value, key: &str) -> GhrResult<Option<T>> {
    match value.get(key) {
        Some(v) if v.is_object() => T::from_json(v).map(Some),
        _ => Ok(None),
    }
}

/// Decode a bare JSON array element by element.
pub fn parse_array<T: FromJson>(value: &Value) -> GhrResult<Vec<T>> {
    match value {
        Value::Array(items) => items.iter().map(T::from_json).collect(),
        other => Err(GhrError::Serialization(format!(
            "expected a JSON array, got {}",
            kind_of(other)
        ))),
    }
}

// ─── Write-back helpers ──────────────────────────────────────────────────

/// `skip_serializing_if` predicate for presence flags.
pub fn is_false(flag: &bool) -> bool {
    !*flag
}

/// Write a presence flag back as an empty object, the shape [`has_field`]
/// reads as present.
pub fn serialize_presence<S: Serializer>(_flag: &bool, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_map(Some(0))?.end()
}

// ─── Derived values ──────────────────────────────────────────────────────

/// Unix timestamp (seconds) of an RFC 3339 upstream date string.
pub fn timestamp_of(text: &str) -> Option<i64> {
    if text.is_empty() {
        return None;
    }
    DateTime::parse_from_rfc3339(text).ok().map(|dt| dt.timestamp())
}

/// Round a fractional byte count to the nearest whole byte.
pub fn round_bytes(bytes: f64) -> u64 {
    if bytes.is_finite() && bytes > 0.0 {
        bytes.round() as u64
    } else {
        0
    }
}
