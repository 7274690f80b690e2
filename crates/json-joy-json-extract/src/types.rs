//! Type definitions for dot-path extraction.

use std::fmt;

use serde_json::Value;

/// One `.`-delimited unit of a path.
///
/// Segments borrow from the path string they were split from. Index segments
/// keep their brackets; the closing bracket and the integer body are checked
/// when the segment is applied to a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Object key, matched verbatim.
    Field(&'a str),
    /// Array position written as `[<int>]`, negative values count from the end.
    Index(&'a str),
}

impl<'a> Segment<'a> {
    /// Classify a non-empty segment by its first character.
    pub fn classify(raw: &'a str) -> Self {
        if raw.starts_with('[') {
            Segment::Index(raw)
        } else {
            Segment::Field(raw)
        }
    }

    /// The segment text exactly as it appeared in the path.
    pub fn as_str(&self) -> &'a str {
        match self {
            Segment::Field(s) | Segment::Index(s) => s,
        }
    }

    pub fn is_index(&self) -> bool {
        matches!(self, Segment::Index(_))
    }
}

impl fmt::Display for Segment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dynamic type of a JSON value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl ValueKind {
    pub fn of(val: &Value) -> Self {
        match val {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Boolean,
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Boolean => "boolean",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
