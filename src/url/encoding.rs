//! Percent-encoding rules shared by the builder and the query parser.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Bytes escaped in a URI component.
///
/// Everything except the RFC 3986 unreserved characters plus `! * ' ( )`,
/// the same set browsers leave alone in `encodeURIComponent`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Like `COMPONENT`, but path separators pass through.
const PATH: &AsciiSet = &COMPONENT.remove(b'/');

/// Percent-encode a host, query key or query value.
///
/// # Examples
///
/// ```
/// use pxurl::url::encoding::encode_component;
///
/// assert_eq!(encode_component("%#v"), "%25%23v");
/// assert_eq!(encode_component("a b"), "a%20b");
/// ```
pub fn encode_component(input: &str) -> String {
    utf8_percent_encode(input, COMPONENT).to_string()
}

/// Percent-encode a path, keeping `/` literal.
///
/// `?`, `#` and `%` are escaped, so a path can never smuggle in a query or
/// fragment.
pub fn encode_path(input: &str) -> String {
    utf8_percent_encode(input, PATH).to_string()
}

/// Decode one query string key or value.
///
/// A literal `+` becomes a space before `%XX` escapes are decoded, so `%2B`
/// decodes to `+`. Malformed escapes are left as they are, and byte
/// sequences that are not UTF-8 decode to U+FFFD.
///
/// # Examples
///
/// ```
/// use pxurl::url::encoding::decode_component;
///
/// assert_eq!(decode_component("b+c%2bd"), "b c+d");
/// assert_eq!(decode_component("100%ZZ"), "100%ZZ");
/// ```
pub fn decode_component(input: &str) -> String {
    let spaced = input.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}
