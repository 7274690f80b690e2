use serde_json::Value;
use tracing::trace;

use crate::types::Segment;
use crate::ExtractError;

/// Walk a document through already-parsed segments.
///
/// Stops at the first segment that does not fit the shape of the value it is
/// applied to.
pub fn resolve_segments<'a>(
    val: &'a Value,
    path: &[Segment<'_>],
) -> Result<&'a Value, ExtractError> {
    let mut current = val;
    for segment in path {
        trace!(segment = %segment, index = segment.is_index(), "navigating");
        current = match segment {
            Segment::Field(key) => navigate_field(current, key)?,
            Segment::Index(raw) => navigate_index(current, raw)?,
        };
    }
    Ok(current)
}

/// Look up `segment` as a key of an object value.
pub fn navigate_field<'a>(val: &'a Value, segment: &str) -> Result<&'a Value, ExtractError> {
    let map = match val {
        Value::Object(map) => map,
        _ => {
            return Err(ExtractError::NotAnObject {
                segment: segment.to_string(),
            })
        }
    };
    map.get(segment).ok_or_else(|| ExtractError::FieldNotFound {
        segment: segment.to_string(),
    })
}

/// Select an array element by a `[<int>]` segment.
///
/// Negative indices count from the end, so `[-1]` is the last element.
pub fn navigate_index<'a>(val: &'a Value, segment: &str) -> Result<&'a Value, ExtractError> {
    let body = segment
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or_else(|| ExtractError::MalformedIndex {
            segment: segment.to_string(),
        })?;

    let arr = match val {
        Value::Array(arr) => arr,
        _ => {
            return Err(ExtractError::NotAnArray {
                segment: segment.to_string(),
            })
        }
    };

    let index: i64 = body.parse().map_err(|source| ExtractError::InvalidIndex {
        segment: segment.to_string(),
        source,
    })?;

    let len = arr.len();
    let n = i64::try_from(len).unwrap_or(i64::MAX);
    if index >= n || index < -n {
        return Err(ExtractError::IndexOutOfRange { index, len });
    }
    let pos = if index >= 0 { index } else { n + index };
    // In range after the bounds check above.
    Ok(&arr[pos as usize])
}
