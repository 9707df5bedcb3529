//! Composing URL strings from scheme, host, port, path and query parts.

use crate::url::encoding::{encode_component, encode_path};

/// Default port for a scheme, if it has one.
///
/// Only `http` and `https` are known; any other scheme always gets an
/// explicit port when one is given.
pub fn default_port(scheme: &str) -> Option<u16> {
    match scheme {
        "http" => Some(80),
        "https" => Some(443),
        _ => None,
    }
}

/// Chainable URL builder.
///
/// # Examples
///
/// ```
/// use pxurl::UrlBuilder;
///
/// let url = UrlBuilder::new("https", "example.com")
///     .port(8443)
///     .path("/crossdomain.xml")
///     .query_param("client", "1.2.3.4:9000")
///     .build();
/// assert_eq!(url, "https://example.com:8443/crossdomain.xml?client=1.2.3.4%3A9000");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlBuilder {
    scheme: String,
    host: String,
    port: Option<u16>,
    path: Option<String>,
    query: Option<Vec<(String, String)>>,
}

impl UrlBuilder {
    pub fn new(scheme: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
            host: host.into(),
            port: None,
            path: None,
            query: None,
        }
    }

    /// Set the port. A port equal to the scheme default is left out of the output.
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the path. It is escaped as one opaque string.
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Append one query parameter.
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query
            .get_or_insert_with(Vec::new)
            .push((key.into(), value.into()));
        self
    }

    /// Append query parameters in order.
    ///
    /// Passing an empty iterator still marks the query as present, so the
    /// built URL ends in a bare `?`.
    pub fn query_params<I, K, V>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let query = self.query.get_or_insert_with(Vec::new);
        query.extend(params.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    pub fn build(&self) -> String {
        let mut url = String::new();
        url.push_str(&self.scheme);
        url.push_str("://");

        let host = &self.host;
        if host.contains(':') && !host.contains(['[', ']']) {
            url.push('[');
            url.push_str(host);
            url.push(']');
        } else {
            url.push_str(&encode_component(host));
        }

        if let Some(port) = self.port {
            if default_port(&self.scheme) != Some(port) {
                url.push(':');
                url.push_str(&port.to_string());
            }
        }

        if let Some(path) = &self.path {
            url.push_str(&encode_path(path));
        }

        if let Some(query) = &self.query {
            url.push('?');
            let pairs: Vec<String> = query
                .iter()
                .map(|(k, v)| format!("{}={}", encode_component(k), encode_component(v)))
                .collect();
            url.push_str(&pairs.join("&"));
        }

        tracing::trace!(url = %url, "built url");
        url
    }
}

/// Build a URL string.
///
/// A host containing a colon (and no brackets) is taken to be an IPv6
/// literal and wrapped in `[...]`; any other host is percent-escaped.
/// Default ports (80 for `http`, 443 for `https`) are omitted.
///
/// # Examples
///
/// ```
/// use pxurl::build_url;
///
/// assert_eq!(build_url("http", "example.com", Some(80), None, None), "http://example.com");
/// assert_eq!(build_url("http", "1:2::3:4", Some(81), None, None), "http://[1:2::3:4]:81");
/// assert_eq!(
///     build_url("http", "example.com", None, Some("/test"), Some(&[("k", "%#v")][..])),
///     "http://example.com/test?k=%25%23v"
/// );
/// ```
pub fn build_url(
    scheme: &str,
    host: &str,
    port: Option<u16>,
    path: Option<&str>,
    query: Option<&[(&str, &str)]>,
) -> String {
    let mut builder = UrlBuilder::new(scheme, host);
    if let Some(port) = port {
        builder = builder.port(port);
    }
    if let Some(path) = path {
        builder = builder.path(path);
    }
    if let Some(query) = query {
        builder = builder.query_params(query.iter().copied());
    }
    builder.build()
}
