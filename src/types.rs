//! Core data structures produced by the parsers.

use std::collections::HashMap;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

use crate::error::PxurlError;

/// A validated `host:port` pair.
///
/// The host is stored without surrounding brackets, so an IPv6 literal
/// parsed from `[1:2::a:f]:4444` has host `1:2::a:f`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Address {
    host: String,
    port: u16,
}

impl Address {
    /// Create a new address from a host and port.
    ///
    /// The host is taken as given; use `parse_addr_spec` to validate text.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// The host, unbracketed.
    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Convert into a socket address.
    ///
    /// Only numeric hosts are accepted; hostnames are never resolved.
    ///
    /// # Examples
    ///
    /// ```
    /// use pxurl::Address;
    ///
    /// let addr = Address::new("1:2::a:f", 4444);
    /// assert_eq!(addr.to_socket_addr().unwrap().to_string(), "[1:2::a:f]:4444");
    ///
    /// assert!(Address::new("example.com", 80).to_socket_addr().is_err());
    /// ```
    pub fn to_socket_addr(&self) -> Result<SocketAddr, PxurlError> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|_| PxurlError::NonNumericHost(self.host.clone()))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::url::addr::format_addr(self))
    }
}

impl From<SocketAddr> for Address {
    fn from(addr: SocketAddr) -> Self {
        Self::new(addr.ip().to_string(), addr.port())
    }
}

/// Decoded query parameters, in the order they first appeared.
///
/// Keys are unique. Inserting a key that is already present leaves the
/// existing value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "Vec<(String, String)>", into = "Vec<(String, String)>")
)]
pub struct QueryMapping {
    entries: Vec<(String, String)>,
    // Key -> position in `entries`.
    index: HashMap<String, usize>,
}

impl QueryMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a key/value pair unless the key is already present.
    ///
    /// Returns `true` if the pair was inserted.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> bool {
        let key = key.into();
        if self.index.contains_key(&key) {
            return false;
        }
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, value.into()));
        true
    }

    /// Look up the value stored for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.index
            .get(key)
            .map(|&pos| self.entries[pos].1.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryMapping {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut mapping = QueryMapping::new();
        mapping.extend(iter);
        mapping
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for QueryMapping {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl From<Vec<(String, String)>> for QueryMapping {
    fn from(pairs: Vec<(String, String)>) -> Self {
        pairs.into_iter().collect()
    }
}

impl From<QueryMapping> for Vec<(String, String)> {
    fn from(mapping: QueryMapping) -> Self {
        mapping.entries
    }
}

impl IntoIterator for QueryMapping {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
