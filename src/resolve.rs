//! Field resolver
//!
//! Total accessors over generic JSON objects. Lenient accessors (`as_string`,
//! `as_duration`) never fail and report where their value came from; strict
//! accessors return a [`ShapeError`] that distinguishes a missing field from
//! a field of the wrong type.

use serde_json::{Map, Number, Value};
use std::fmt;

/// Kind of a JSON value, or its absence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonKind {
    Missing,
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl JsonKind {
    /// Classify an optional value (`None` is [`JsonKind::Missing`]).
    pub fn of(value: Option<&Value>) -> Self {
        match value {
            None => JsonKind::Missing,
            Some(Value::Null) => JsonKind::Null,
            Some(Value::Bool(_)) => JsonKind::Bool,
            Some(Value::Number(_)) => JsonKind::Number,
            Some(Value::String(_)) => JsonKind::String,
            Some(Value::Array(_)) => JsonKind::Array,
            Some(Value::Object(_)) => JsonKind::Object,
        }
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsonKind::Missing => write!(f, "nothing"),
            JsonKind::Null => write!(f, "null"),
            JsonKind::Bool => write!(f, "a boolean"),
            JsonKind::Number => write!(f, "a number"),
            JsonKind::String => write!(f, "a string"),
            JsonKind::Array => write!(f, "an array"),
            JsonKind::Object => write!(f, "an object"),
        }
    }
}

/// A location in the document did not have the shape a strict accessor requires.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected {expected} at {path}, found {found}")]
pub struct ShapeError {
    /// Location of the offending value, e.g. `$.tests[2].name`
    pub path: String,
    pub expected: JsonKind,
    pub found: JsonKind,
}

impl ShapeError {
    pub fn new(path: impl Into<String>, expected: JsonKind, found: JsonKind) -> Self {
        Self {
            path: path.into(),
            expected,
            found,
        }
    }

    /// Prefix the path with the location of the enclosing container.
    pub fn within(mut self, parent: &str) -> Self {
        self.path = join_path(parent, &self.path);
        self
    }
}

/// Join a parent location with a key (`$` + `name` → `$.name`) or an index
/// (`$.tests` + `[2]` → `$.tests[2]`).
pub fn join_path(parent: &str, child: &str) -> String {
    if child.starts_with('[') {
        format!("{}{}", parent, child)
    } else {
        format!("{}.{}", parent, child)
    }
}

/// Where a leniently resolved value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Read from the JSON document
    Document,
    /// Taken from the configured literal (the key name itself)
    Literal,
    /// Nothing usable was found; the zero value was used
    Default,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::Document => write!(f, "document"),
            Origin::Literal => write!(f, "literal"),
            Origin::Default => write!(f, "default"),
        }
    }
}

/// A value produced by a lenient accessor, tagged with its origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved<T> {
    pub value: T,
    pub origin: Origin,
}

impl<T> Resolved<T> {
    fn new(value: T, origin: Origin) -> Self {
        Self { value, origin }
    }

    /// True when the value did not come from the document.
    pub fn is_degraded(&self) -> bool {
        self.origin != Origin::Document
    }
}

/// Look up `key` in `container`.
pub fn resolve<'a>(container: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    container.get(key)
}

/// String value of `key`, or `fallback` when it is missing or not a string.
pub fn as_string(container: &Map<String, Value>, key: &str, fallback: &str) -> Resolved<String> {
    match resolve(container, key) {
        Some(Value::String(s)) => Resolved::new(s.clone(), Origin::Document),
        _ => Resolved::new(fallback.to_string(), Origin::Literal),
    }
}

/// Duration of `key` in whole seconds.
///
/// Tries the document value (number or numeric string), then `literal_fallback`
/// parsed as an integer, then 0.
pub fn as_duration(
    container: &Map<String, Value>,
    key: &str,
    literal_fallback: &str,
) -> Resolved<u64> {
    if let Some(seconds) = resolve(container, key).and_then(duration_from_value) {
        return Resolved::new(seconds, Origin::Document);
    }
    match parse_duration_literal(literal_fallback) {
        Some(seconds) => Resolved::new(seconds, Origin::Literal),
        None => Resolved::new(0, Origin::Default),
    }
}

/// Seconds encoded by a JSON number or numeric string; truncates toward zero,
/// negative values clamp to 0.
pub fn duration_from_value(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => Some(truncate_number(n)),
        Value::String(s) => parse_duration_literal(s).or_else(|| parse_fractional_seconds(s)),
        _ => None,
    }
}

/// Parse an integer literal such as `"7"` into whole seconds.
///
/// Fractional literals like `"7.9"` are rejected.
pub fn parse_duration_literal(literal: &str) -> Option<u64> {
    let trimmed = literal.trim();
    if let Ok(seconds) = trimmed.parse::<u64>() {
        return Some(seconds);
    }
    trimmed.parse::<i64>().ok().map(|seconds| seconds.max(0) as u64)
}

/// `"4.6"` in the document itself truncates like the number 4.6 would.
fn parse_fractional_seconds(text: &str) -> Option<u64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|f| f.is_finite())
        .map(seconds_from_f64)
}

fn truncate_number(n: &Number) -> u64 {
    if let Some(u) = n.as_u64() {
        u
    } else if n.is_i64() {
        0
    } else {
        n.as_f64().map(seconds_from_f64).unwrap_or(0)
    }
}

fn seconds_from_f64(f: f64) -> u64 {
    if f > 0.0 {
        f.trunc() as u64
    } else {
        0
    }
}

/// String value of `key`; missing, null or mis-typed values are errors.
pub fn require_string<'a>(
    container: &'a Map<String, Value>,
    key: &str,
) -> Result<&'a str, ShapeError> {
    match resolve(container, key) {
        Some(Value::String(s)) => Ok(s),
        other => Err(ShapeError::new(key, JsonKind::String, JsonKind::of(other))),
    }
}

/// Duration of `key`; the document must hold a JSON number. Numeric strings
/// are rejected.
pub fn require_duration(container: &Map<String, Value>, key: &str) -> Result<u64, ShapeError> {
    match resolve(container, key) {
        Some(Value::Number(n)) => Ok(truncate_number(n)),
        other => Err(ShapeError::new(key, JsonKind::Number, JsonKind::of(other))),
    }
}

/// Array value of `key`.
pub fn as_list<'a>(
    container: &'a Map<String, Value>,
    key: &str,
) -> Result<&'a [Value], ShapeError> {
    match resolve(container, key) {
        Some(Value::Array(items)) => Ok(items),
        other => Err(ShapeError::new(key, JsonKind::Array, JsonKind::of(other))),
    }
}

/// Boolean value of `key`; a missing field is an error.
pub fn as_bool(container: &Map<String, Value>, key: &str) -> Result<bool, ShapeError> {
    match resolve(container, key) {
        Some(Value::Bool(b)) => Ok(*b),
        other => Err(ShapeError::new(key, JsonKind::Bool, JsonKind::of(other))),
    }
}

/// Require `value`, found at `path`, to be an object.
pub fn as_object<'a>(value: &'a Value, path: &str) -> Result<&'a Map<String, Value>, ShapeError> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(ShapeError::new(path, JsonKind::Object, JsonKind::of(Some(other)))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("fixture must be an object"),
        }
    }

    #[test]
    fn test_as_string_reads_document() {
        let map = object(json!({"n": "suite1"}));
        let resolved = as_string(&map, "n", "n");
        assert_eq!(resolved.value, "suite1");
        assert!(!resolved.is_degraded());
    }

    #[test]
    fn test_as_string_falls_back_to_literal() {
        let map = object(json!({"n": 42}));
        let resolved = as_string(&map, "n", "n");
        assert_eq!(resolved.value, "n");
        assert_eq!(resolved.origin, Origin::Literal);

        let resolved = as_string(&map, "My Suite", "My Suite");
        assert_eq!(resolved.value, "My Suite");
    }

    #[test]
    fn test_as_duration_truncates_floats() {
        let map = object(json!({"t": 7.9}));
        assert_eq!(as_duration(&map, "t", "t").value, 7);
    }

    #[test]
    fn test_as_duration_accepts_integers_and_numeric_strings() {
        let map = object(json!({"a": 12, "b": "3", "c": "4.6"}));
        assert_eq!(as_duration(&map, "a", "").value, 12);
        assert_eq!(as_duration(&map, "b", "").value, 3);
        assert_eq!(as_duration(&map, "c", "").value, 4);
    }

    #[test]
    fn test_as_duration_literal_fallback() {
        let map = object(json!({}));
        let resolved = as_duration(&map, "7", "7");
        assert_eq!(resolved.value, 7);
        assert_eq!(resolved.origin, Origin::Literal);
    }

    #[test]
    fn test_fractional_literal_is_not_a_fallback() {
        let map = object(json!({}));
        let resolved = as_duration(&map, "7.9", "7.9");
        assert_eq!(resolved.value, 0);
        assert_eq!(resolved.origin, Origin::Default);
    }

    #[test]
    fn test_as_duration_defaults_to_zero() {
        let map = object(json!({"t": true}));
        let resolved = as_duration(&map, "t", "t");
        assert_eq!(resolved.value, 0);
        assert_eq!(resolved.origin, Origin::Default);

        let resolved = as_duration(&map, "missing", "");
        assert_eq!(resolved.value, 0);
        assert_eq!(resolved.origin, Origin::Default);
    }

    #[test]
    fn test_negative_durations_clamp_to_zero() {
        let map = object(json!({"a": -5, "b": -2.5, "c": "-3"}));
        assert_eq!(as_duration(&map, "a", "").value, 0);
        assert_eq!(as_duration(&map, "b", "").value, 0);
        assert_eq!(as_duration(&map, "c", "").value, 0);
    }

    #[test]
    fn test_parse_duration_literal() {
        assert_eq!(parse_duration_literal("7"), Some(7));
        assert_eq!(parse_duration_literal(" 8 "), Some(8));
        assert_eq!(parse_duration_literal("-3"), Some(0));
        assert_eq!(parse_duration_literal("7.9"), None);
        assert_eq!(parse_duration_literal("seconds"), None);
        assert_eq!(parse_duration_literal(""), None);
        assert_eq!(parse_duration_literal("NaN"), None);
        assert_eq!(parse_duration_literal("inf"), None);
    }

    #[test]
    fn test_require_string_distinguishes_missing_and_wrong_type() {
        let map = object(json!({"nm": 1, "cn": null}));

        let err = require_string(&map, "nm").unwrap_err();
        assert_eq!(err.expected, JsonKind::String);
        assert_eq!(err.found, JsonKind::Number);

        let err = require_string(&map, "cn").unwrap_err();
        assert_eq!(err.found, JsonKind::Null);

        let err = require_string(&map, "absent").unwrap_err();
        assert_eq!(err.found, JsonKind::Missing);
    }

    #[test]
    fn test_require_duration() {
        let map = object(json!({"tm": 2, "f": 2.9, "neg": -1, "s": "5", "bad": "soon"}));
        assert_eq!(require_duration(&map, "tm").unwrap(), 2);
        assert_eq!(require_duration(&map, "f").unwrap(), 2);
        assert_eq!(require_duration(&map, "neg").unwrap(), 0);

        let err = require_duration(&map, "s").unwrap_err();
        assert_eq!(err.expected, JsonKind::Number);
        assert_eq!(err.found, JsonKind::String);
        let err = require_duration(&map, "bad").unwrap_err();
        assert_eq!(err.found, JsonKind::String);
        let err = require_duration(&map, "absent").unwrap_err();
        assert_eq!(err.found, JsonKind::Missing);
    }

    #[test]
    fn test_as_list() {
        let map = object(json!({"l": [1, 2], "o": {}}));
        assert_eq!(as_list(&map, "l").unwrap().len(), 2);

        let err = as_list(&map, "o").unwrap_err();
        assert_eq!(err.to_string(), "expected an array at o, found an object");
    }

    #[test]
    fn test_as_bool_requires_presence() {
        let map = object(json!({"skip": true, "flag": "yes"}));
        assert!(as_bool(&map, "skip").unwrap());
        assert_eq!(as_bool(&map, "flag").unwrap_err().found, JsonKind::String);
        assert_eq!(as_bool(&map, "absent").unwrap_err().found, JsonKind::Missing);
    }

    #[test]
    fn test_shape_error_paths() {
        let err = ShapeError::new("name", JsonKind::String, JsonKind::Null)
            .within("[2]")
            .within("$.tests");
        assert_eq!(err.path, "$.tests[2].name");
        assert_eq!(err.to_string(), "expected a string at $.tests[2].name, found null");
    }

    #[test]
    fn test_as_object() {
        let value = json!([1]);
        let err = as_object(&value, "$").unwrap_err();
        assert_eq!(err.found, JsonKind::Array);
        assert!(as_object(&json!({}), "$").is_ok());
    }
}
