use crate::types::Segment;
use crate::ExtractError;

/// Split a dot path into classified segments.
///
/// Fails on the first empty segment, so a malformed path is rejected before
/// any document is touched.
///
/// # Example
///
/// ```
/// use json_joy_json_extract::{parse_path, Segment};
///
/// let path = parse_path("a.[-1].val").unwrap();
/// assert_eq!(path, vec![Segment::Field("a"), Segment::Index("[-1]"), Segment::Field("val")]);
/// assert!(parse_path("a..b").is_err());
/// ```
pub fn parse_path(path: &str) -> Result<Vec<Segment<'_>>, ExtractError> {
    path.split('.')
        .enumerate()
        .map(|(position, raw)| {
            if raw.is_empty() {
                return Err(ExtractError::EmptySegment { position });
            }
            Ok(Segment::classify(raw))
        })
        .collect()
}

/// Join segments back into a dot path.
///
/// # Example
///
/// ```
/// use json_joy_json_extract::{format_path, Segment};
///
/// assert_eq!(format_path(&[Segment::Field("a"), Segment::Index("[0]")]), "a.[0]");
/// ```
pub fn format_path(path: &[Segment<'_>]) -> String {
    let mut out = String::new();
    for (i, segment) in path.iter().enumerate() {
        if i > 0 {
            out.push('.');
        }
        out.push_str(segment.as_str());
    }
    out
}
