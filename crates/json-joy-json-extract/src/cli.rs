//! Core logic behind the `json-extract` binary.
//!
//! The binary reads a document, looks up a dot path in it and prints the
//! result. Keeping the lookup here lets it be tested without a process.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::{extract, extract_as_number, extract_as_string, ExtractError};

// ── Errors ────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Extract(#[from] ExtractError),
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Json(#[from] serde_json::Error),
    #[error("Unknown value mode: {0}")]
    UnknownMode(String),
}

// ── Output mode ───────────────────────────────────────────────────────────

/// How the extracted value is checked and printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValueMode {
    /// Any value, printed as pretty JSON.
    #[default]
    Any,
    /// A string, printed without quotes.
    String,
    /// A number, printed as a float.
    Number,
}

impl FromStr for ValueMode {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "any" | "json" => Ok(ValueMode::Any),
            "string" | "str" => Ok(ValueMode::String),
            "number" | "num" | "float" => Ok(ValueMode::Number),
            other => Err(CliError::UnknownMode(other.to_string())),
        }
    }
}

impl fmt::Display for ValueMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ValueMode::Any => "any",
            ValueMode::String => "string",
            ValueMode::Number => "number",
        })
    }
}

// ── json-extract ──────────────────────────────────────────────────────────

/// Look up `path` in the JSON document `doc` and render the result.
pub fn lookup(doc: &[u8], path: &str, mode: ValueMode) -> Result<String, CliError> {
    match mode {
        ValueMode::Any => {
            let val = extract(doc, path)?;
            Ok(serde_json::to_string_pretty(&val)?)
        }
        ValueMode::String => Ok(extract_as_string(doc, path)?),
        ValueMode::Number => Ok(extract_as_number(doc, path)?.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_mode_from_str() {
        assert_eq!("any".parse::<ValueMode>().unwrap(), ValueMode::Any);
        assert_eq!("STRING".parse::<ValueMode>().unwrap(), ValueMode::String);
        assert_eq!("num".parse::<ValueMode>().unwrap(), ValueMode::Number);
        assert!(matches!(
            "bool".parse::<ValueMode>(),
            Err(CliError::UnknownMode(m)) if m == "bool"
        ));
    }

    #[test]
    fn test_lookup_modes() {
        let doc = br#"{"a": {"b": "x", "n": 2.5, "o": {"k": [1]}}}"#;
        assert_eq!(lookup(doc, "a.b", ValueMode::String).unwrap(), "x");
        assert_eq!(lookup(doc, "a.b", ValueMode::Any).unwrap(), "\"x\"");
        assert_eq!(lookup(doc, "a.n", ValueMode::Number).unwrap(), "2.5");
        assert_eq!(
            lookup(doc, "a.o", ValueMode::Any).unwrap(),
            "{\n  \"k\": [\n    1\n  ]\n}"
        );
    }

    #[test]
    fn test_lookup_errors_are_extract_errors() {
        let doc = br#"{"a": 1}"#;
        let err = lookup(doc, "a", ValueMode::String).unwrap_err();
        assert!(matches!(
            err,
            CliError::Extract(ExtractError::TypeMismatch { .. })
        ));
        assert_eq!(err.to_string(), "Element [1] is not a string");
    }
}
