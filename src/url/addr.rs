//! `host:port` address specifications.
//!
//! Two forms are accepted:
//! - `host:port`, where the host has no colon (IPv4 literal or hostname)
//! - `[host]:port`, where the bracketed host may contain colons (IPv6 literal)
//!
//! The port is decimal digits with no leading zeros and a value in
//! `0..=65535`.

use std::str::FromStr;

use crate::error::PxurlError;
use crate::types::{Address, QueryMapping};

/// The host and optional port text of an address specification.
struct SpecParts<'a> {
    host: &'a str,
    port: Option<&'a str>,
}

/// Split a specification into host and port text.
///
/// `port` is `None` when there is no `:` after the host at all. The port
/// text is not validated here.
fn split_spec(spec: &str) -> Result<SpecParts<'_>, PxurlError> {
    let parts = split_host_port(spec)?;
    if !is_valid_host(parts.host) {
        return Err(PxurlError::InvalidHost(spec.to_string()));
    }
    Ok(parts)
}

fn split_host_port(spec: &str) -> Result<SpecParts<'_>, PxurlError> {
    if let Some(bracketed) = spec.strip_prefix('[') {
        let close = bracketed
            .find(']')
            .ok_or_else(|| PxurlError::UnterminatedBracket(spec.to_string()))?;
        let host = &bracketed[..close];
        let rest = &bracketed[close + 1..];

        return match rest.strip_prefix(':') {
            Some(port) => Ok(SpecParts { host, port: Some(port) }),
            None if rest.is_empty() => Ok(SpecParts { host, port: None }),
            None => Err(PxurlError::TrailingGarbage(spec.to_string())),
        };
    }

    match spec.rsplit_once(':') {
        Some((host, _)) if host.contains(':') => {
            Err(PxurlError::UnexpectedColon(spec.to_string()))
        }
        Some((host, port)) => Ok(SpecParts { host, port: Some(port) }),
        None => Ok(SpecParts { host: spec, port: None }),
    }
}

fn is_valid_host(host: &str) -> bool {
    !host.chars().any(|c| {
        c.is_whitespace() || c.is_control() || matches!(c, '[' | ']' | '/' | '?' | '#' | '@')
    })
}

/// Validate port text: ASCII digits only, no leading zeros, at most 65535.
fn parse_port(port: &str) -> Result<u16, PxurlError> {
    if port.is_empty() || !port.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PxurlError::InvalidPort(port.to_string()));
    }
    if port.len() > 1 && port.starts_with('0') {
        return Err(PxurlError::InvalidPort(port.to_string()));
    }
    // Only digits remain, so a failed parse means the value is too large.
    port.parse::<u16>()
        .map_err(|_| PxurlError::PortOutOfRange(port.to_string()))
}

impl FromStr for Address {
    type Err = PxurlError;

    /// Parse an address specification, reporting why it was rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use pxurl::{Address, PxurlError};
    ///
    /// let addr: Address = "[1:2::a:f]:4444".parse().unwrap();
    /// assert_eq!(addr.host(), "1:2::a:f");
    ///
    /// let err = "3.3.3.3:65536".parse::<Address>().unwrap_err();
    /// assert_eq!(err, PxurlError::PortOutOfRange("65536".to_string()));
    /// ```
    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        if spec.is_empty() {
            return Err(PxurlError::EmptySpec);
        }

        let parts = split_spec(spec)?;
        if parts.host.is_empty() {
            return Err(PxurlError::EmptyHost(spec.to_string()));
        }
        let port = match parts.port {
            Some("") | None => return Err(PxurlError::MissingPort(spec.to_string())),
            Some(port) => parse_port(port)?,
        };

        Ok(Address::new(parts.host, port))
    }
}

/// Parse an address specification.
///
/// Returns `None` for anything that does not match the grammar exactly,
/// including out-of-range ports and trailing garbage.
///
/// # Examples
///
/// ```
/// use pxurl::{parse_addr_spec, Address};
///
/// assert_eq!(parse_addr_spec("3.3.3.3:4444"), Some(Address::new("3.3.3.3", 4444)));
/// assert_eq!(parse_addr_spec("[1:2::a:f]:4444"), Some(Address::new("1:2::a:f", 4444)));
/// assert_eq!(parse_addr_spec("3.3.3.3:0x1111"), None);
/// assert_eq!(parse_addr_spec("[1:2::a:f]"), None);
/// ```
pub fn parse_addr_spec(spec: &str) -> Option<Address> {
    match spec.parse::<Address>() {
        Ok(addr) => Some(addr),
        Err(err) => {
            tracing::debug!(spec, error = %err, "rejected address specification");
            None
        }
    }
}

/// Parse an address specification, filling in missing parts from defaults.
///
/// Accepts everything `parse_addr_spec` does, and also an empty host
/// (`:9001`), an empty port (`1.2.3.4:`), a bracketed host with no port
/// (`[::1]`) and a bare colon-free host (`1.2.3.4`). Missing parts are taken
/// from `default_host` and `default_port`; a part that is missing with no
/// default is an error. Ports follow the same rules as `parse_addr_spec`.
///
/// Hostnames are accepted here. Call `Address::to_socket_addr` on the result
/// to require a numeric IPv4 or IPv6 host.
///
/// # Examples
///
/// ```
/// use pxurl::{parse_addr_spec_with_defaults, Address};
///
/// let addr = parse_addr_spec_with_defaults(":9002", Some("0.0.0.0"), None).unwrap();
/// assert_eq!(addr, Address::new("0.0.0.0", 9002));
///
/// let addr = parse_addr_spec_with_defaults("[::1]", None, Some(9002)).unwrap();
/// assert_eq!(addr, Address::new("::1", 9002));
///
/// assert!(parse_addr_spec_with_defaults("1.2.3.4", None, None).is_err());
/// ```
pub fn parse_addr_spec_with_defaults(
    spec: &str,
    default_host: Option<&str>,
    default_port: Option<u16>,
) -> Result<Address, PxurlError> {
    let parts = split_spec(spec)?;

    let host = match (parts.host, default_host) {
        ("", Some(host)) => host,
        ("", None) => return Err(PxurlError::EmptyHost(spec.to_string())),
        (host, _) => host,
    };
    let port = match (parts.port, default_port) {
        (Some("") | None, Some(port)) => port,
        (Some("") | None, None) => return Err(PxurlError::MissingPort(spec.to_string())),
        (Some(port), _) => parse_port(port)?,
    };

    Ok(Address::new(host, port))
}

/// Format an address as a specification that `parse_addr_spec` accepts.
///
/// Hosts containing a colon are bracketed. An empty host formats as `:port`.
///
/// # Examples
///
/// ```
/// use pxurl::{format_addr, Address};
///
/// assert_eq!(format_addr(&Address::new("1.2.3.4", 9001)), "1.2.3.4:9001");
/// assert_eq!(format_addr(&Address::new("1:2::a:f", 9001)), "[1:2::a:f]:9001");
/// assert_eq!(format_addr(&Address::new("", 9001)), ":9001");
/// ```
pub fn format_addr(addr: &Address) -> String {
    let host = addr.host();
    if host.contains(':') {
        format!("[{}]:{}", host, addr.port())
    } else {
        format!("{}:{}", host, addr.port())
    }
}

/// Read a query parameter as an address.
///
/// An absent parameter yields `Some(default)` without validating the
/// default. A present parameter is parsed with `parse_addr_spec`, and a
/// malformed value yields `None` rather than the default.
///
/// # Examples
///
/// ```
/// use pxurl::{get_query_param_addr, parse_query_string, Address};
///
/// let default = Address::new("1.1.1.1", 2222);
///
/// let query = parse_query_string("addr=3.3.3.3%3A4444");
/// let addr = get_query_param_addr(&query, "addr", default.clone());
/// assert_eq!(addr, Some(Address::new("3.3.3.3", 4444)));
///
/// let query = parse_query_string("addr=---");
/// assert_eq!(get_query_param_addr(&query, "addr", default), None);
/// ```
pub fn get_query_param_addr(
    query: &QueryMapping,
    name: &str,
    default: Address,
) -> Option<Address> {
    match query.get(name) {
        Some(spec) => parse_addr_spec(spec),
        None => Some(default),
    }
}
