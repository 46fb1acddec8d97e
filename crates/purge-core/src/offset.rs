//! Starting offset resolution
//!
//! A run can resume from a logged offset, given either as a positional
//! argument or as an `offset` query parameter. Anything that is not an
//! integer counts as absent, and negative values clamp to zero.

use tracing::debug;

/// Parse an offset value, returning `None` for non-integers
pub fn parse_offset(raw: &str) -> Option<usize> {
    let value: i64 = raw.trim().parse().ok()?;
    Some(usize::try_from(value).unwrap_or(0))
}

/// Extract the `offset` parameter from a URL query string
pub fn offset_from_query(query: &str) -> Option<usize> {
    let query = query.strip_prefix('?').unwrap_or(query);
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "offset")
        .and_then(|(_, value)| parse_offset(value))
}

/// Pick the starting offset.
///
/// A positional argument wins over the query string whenever it is present,
/// even if it does not parse.
pub fn resolve_start_offset(arg: Option<&str>, query: Option<&str>) -> usize {
    let offset = match (arg, query) {
        (Some(raw), _) => parse_offset(raw),
        (None, Some(query)) => offset_from_query(query),
        (None, None) => None,
    };
    let offset = offset.unwrap_or(0);
    debug!("Starting offset resolved to {}", offset);
    offset
}
