//! Query string parsing and typed parameter lookup.

use url::Url;

use crate::error::PxurlError;
use crate::types::QueryMapping;
use crate::url::encoding::decode_component;

/// Parse a raw query string (without the leading `?`) into a `QueryMapping`.
///
/// Segments are split on `&`, and each segment on its first `=`. Empty
/// segments are kept and map to the empty key. When a key repeats, the
/// first value wins.
///
/// # Examples
///
/// ```
/// use pxurl::parse_query_string;
///
/// let query = parse_query_string("client=&relay=1.2.3.4%3A9001&client=x");
/// assert_eq!(query.get("client"), Some(""));
/// assert_eq!(query.get("relay"), Some("1.2.3.4:9001"));
/// assert_eq!(query.len(), 2);
///
/// assert!(parse_query_string("").is_empty());
/// ```
pub fn parse_query_string(raw: &str) -> QueryMapping {
    let mut query = QueryMapping::new();
    if raw.is_empty() {
        return query;
    }

    for segment in raw.split('&') {
        let (key, value) = segment.split_once('=').unwrap_or((segment, ""));
        query.insert(decode_component(key), decode_component(value));
    }

    query
}

/// Parse the query of an absolute URL.
///
/// A URL without a query yields an empty mapping.
///
/// # Examples
///
/// ```
/// use pxurl::parse_query_from_url;
///
/// let query = parse_query_from_url("http://example.com/embed.html?debug&ratelimit=off").unwrap();
/// assert_eq!(query.get("debug"), Some(""));
/// assert_eq!(query.get("ratelimit"), Some("off"));
/// ```
pub fn parse_query_from_url(url: &str) -> Result<QueryMapping, PxurlError> {
    let parsed = Url::parse(url)?;
    Ok(parsed.query().map(parse_query_string).unwrap_or_default())
}

/// Read a query parameter as a boolean.
///
/// Returns `Some(default)` when the parameter is absent, `Some(true)` for
/// `""`, `"1"` or `"true"`, and `Some(false)` for `"0"` or `"false"`. Any
/// other value is malformed and returns `None`.
///
/// # Examples
///
/// ```
/// use pxurl::{get_query_param_boolean, parse_query_string};
///
/// let query = parse_query_string("debug&initial_facilitator_poll=0&x=yes");
/// assert_eq!(get_query_param_boolean(&query, "debug", false), Some(true));
/// assert_eq!(get_query_param_boolean(&query, "initial_facilitator_poll", true), Some(false));
/// assert_eq!(get_query_param_boolean(&query, "x", false), None);
/// assert_eq!(get_query_param_boolean(&query, "missing", true), Some(true));
/// ```
pub fn get_query_param_boolean(query: &QueryMapping, name: &str, default: bool) -> Option<bool> {
    let Some(value) = query.get(name) else {
        return Some(default);
    };

    match value {
        "" | "1" | "true" => Some(true),
        "0" | "false" => Some(false),
        other => {
            tracing::debug!(param = name, value = other, "unrecognized boolean query parameter");
            None
        }
    }
}
