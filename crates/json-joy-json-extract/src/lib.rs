//! Dot-path value extraction for JSON documents.
//!
//! A path is a `.`-separated list of segments. A segment starting with `[`
//! selects an array element by signed index (`[-1]` is the last element);
//! any other segment selects an object field by exact key.
//!
//! # Example
//!
//! ```
//! use json_joy_json_extract::{extract, extract_as_number, extract_as_string};
//! use serde_json::json;
//!
//! let doc = br#"{"a": [{"val": 0}, {"val": 7}], "name": "x"}"#;
//!
//! assert_eq!(extract(doc, "a.[-1].val").unwrap(), json!(7));
//! assert_eq!(extract_as_number(doc, "a.[0].val").unwrap(), 0.0);
//! assert_eq!(extract_as_string(doc, "name").unwrap(), "x");
//! ```

use std::num::ParseIntError;

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

pub mod cli;

pub mod types;
pub use types::{Segment, ValueKind};

mod navigate;
pub use navigate::{navigate_field, navigate_index, resolve_segments};

mod util;
pub use util::{format_path, parse_path};

/// Decode `data` and return the value found at `path`.
///
/// # Errors
///
/// - `ExtractError::Decode` if `data` is not valid JSON; the path is not
///   looked at
/// - `ExtractError::EmptySegment` if the path has an empty segment
/// - any navigation error of the first segment that does not match the data
///
/// # Example
///
/// ```
/// use json_joy_json_extract::{extract, ExtractError};
/// use serde_json::json;
///
/// assert_eq!(extract(br#"{"a": {"b": "x"}}"#, "a.b").unwrap(), json!("x"));
/// assert!(matches!(
///     extract(br#"{"a": 1}"#, "a.b"),
///     Err(ExtractError::NotAnObject { .. })
/// ));
/// ```
pub fn extract(data: &[u8], path: &str) -> Result<Value, ExtractError> {
    let doc = decode(data).map_err(|e| {
        debug!(error = %e, "failed to decode document");
        ExtractError::from(e)
    })?;
    resolve(&doc, path).cloned()
}

/// Decode a whole document with no nesting limit.
///
/// Deep input grows the heap-allocated stack segments instead of the thread
/// stack.
fn decode(data: &[u8]) -> Result<Value, serde_json::Error> {
    let mut de = serde_json::Deserializer::from_slice(data);
    de.disable_recursion_limit();
    let doc = Value::deserialize(serde_stacker::Deserializer::new(&mut de))?;
    de.end()?;
    Ok(doc)
}

/// Like [`extract`], but requires the value to be a string.
pub fn extract_as_string(data: &[u8], path: &str) -> Result<String, ExtractError> {
    match extract(data, path)? {
        Value::String(s) => Ok(s),
        actual => Err(ExtractError::TypeMismatch {
            expected: ValueKind::String,
            actual,
        }),
    }
}

/// Like [`extract`], but requires the value to be a number.
///
/// Integers are returned as `f64`, the same as every other JSON number.
pub fn extract_as_number(data: &[u8], path: &str) -> Result<f64, ExtractError> {
    let val = extract(data, path)?;
    match val.as_f64() {
        Some(n) => Ok(n),
        None => Err(ExtractError::TypeMismatch {
            expected: ValueKind::Number,
            actual: val,
        }),
    }
}

/// Find the value at `path` in an already-decoded document.
///
/// The whole path is split and checked for empty segments before the
/// document is accessed.
///
/// # Example
///
/// ```
/// use json_joy_json_extract::resolve;
/// use serde_json::json;
///
/// let doc = json!({"a": [10, 20, 30]});
/// assert_eq!(resolve(&doc, "a.[-2]").unwrap(), &json!(20));
/// ```
pub fn resolve<'a>(doc: &'a Value, path: &str) -> Result<&'a Value, ExtractError> {
    let segments = parse_path(path)?;
    resolve_segments(doc, &segments)
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ExtractError {
    #[error("invalid JSON: {message}")]
    Decode { message: String },
    #[error("Empty field in path at segment {position}")]
    EmptySegment { position: usize },
    #[error("No object found when looking for field {segment}")]
    NotAnObject { segment: String },
    #[error("Field not found when looking for field {segment}")]
    FieldNotFound { segment: String },
    #[error("Array index missing ']' in {segment}")]
    MalformedIndex { segment: String },
    #[error("No array found when looking for {segment}")]
    NotAnArray { segment: String },
    #[error("Parsing array index {segment} gave {source}")]
    InvalidIndex {
        segment: String,
        source: ParseIntError,
    },
    #[error("Array index {index} out of range {len}")]
    IndexOutOfRange { index: i64, len: usize },
    #[error("Element [{actual}] is not a {expected}")]
    TypeMismatch { expected: ValueKind, actual: Value },
}

impl From<serde_json::Error> for ExtractError {
    fn from(e: serde_json::Error) -> Self {
        ExtractError::Decode {
            message: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_scenarios() {
        let doc = br#"{"a":[{"val":0},{"val":7}]}"#;
        assert_eq!(extract(doc, "a.[-1].val"), Ok(json!(7)));
        assert_eq!(extract(doc, "a.[0].val"), Ok(json!(0)));
        assert_eq!(extract(doc, "a"), Ok(json!([{"val": 0}, {"val": 7}])));
    }

    #[test]
    fn test_extract_decode_error_ignores_path() {
        // The path is invalid too, but decoding fails first.
        let err = extract(b"{not json", "..").unwrap_err();
        assert!(matches!(err, ExtractError::Decode { .. }));
        assert!(err.to_string().starts_with("invalid JSON: "));
    }

    #[test]
    fn test_extract_empty_segment_before_navigation() {
        // "missing" would fail navigation, but the empty segment wins.
        assert_eq!(
            extract(br#"{"a": 1}"#, "missing..x"),
            Err(ExtractError::EmptySegment { position: 1 })
        );
    }

    #[test]
    fn test_extract_past_default_nesting_limit() {
        let depth = 1000;
        let doc = format!("{}1{}", "[".repeat(depth), "]".repeat(depth));
        let path = vec!["[0]"; depth].join(".");
        assert_eq!(extract(doc.as_bytes(), &path), Ok(json!(1)));

        let path = vec!["[-1]"; depth - 1].join(".");
        assert_eq!(extract(doc.as_bytes(), &path), Ok(json!([1])));
    }

    #[test]
    fn test_extract_as_string() {
        let doc = br#"{"a":{"b":"x"},"n":1}"#;
        assert_eq!(extract_as_string(doc, "a.b"), Ok("x".to_string()));
        assert_eq!(
            extract_as_string(doc, "n"),
            Err(ExtractError::TypeMismatch {
                expected: ValueKind::String,
                actual: json!(1),
            })
        );
        // Navigation errors pass through unchanged.
        assert_eq!(
            extract_as_string(doc, "a.c"),
            Err(ExtractError::FieldNotFound {
                segment: "c".to_string()
            })
        );
    }

    #[test]
    fn test_extract_as_number() {
        let doc = br#"{"i": 3, "f": -2.5, "s": "3"}"#;
        assert_eq!(extract_as_number(doc, "i"), Ok(3.0));
        assert_eq!(extract_as_number(doc, "f"), Ok(-2.5));
        assert_eq!(
            extract_as_number(doc, "s"),
            Err(ExtractError::TypeMismatch {
                expected: ValueKind::Number,
                actual: json!("3"),
            })
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ExtractError::IndexOutOfRange { index: 5, len: 3 }.to_string(),
            "Array index 5 out of range 3"
        );
        assert_eq!(
            ExtractError::TypeMismatch {
                expected: ValueKind::String,
                actual: json!(1),
            }
            .to_string(),
            "Element [1] is not a string"
        );
        let err = extract(b"[1]", "[abc]").unwrap_err();
        assert!(err.to_string().starts_with("Parsing array index [abc] gave "));
    }
}
