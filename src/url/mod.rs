//! URL building and parsing utilities.
//!
//! This module contains:
//! - URL composition from scheme, host, port, path and query parameters
//! - Query string parsing with typed parameter readers
//! - `host:port` address specification parsing and formatting
//! - The percent-encoding rules shared by all of the above

pub mod addr;
pub mod builder;
pub mod encoding;
pub mod query;

// Re-export main functionality
pub use addr::{
    format_addr, get_query_param_addr, parse_addr_spec, parse_addr_spec_with_defaults,
};
pub use builder::{build_url, default_port, UrlBuilder};
pub use encoding::{decode_component, encode_component, encode_path};
pub use query::{get_query_param_boolean, parse_query_from_url, parse_query_string};
