//! pxurl - URL and address utilities for browser proxy components
//!
//! This crate provides the string handling a browser-hosted proxy needs to
//! talk to its facilitator and relays: building URLs, reading configuration
//! out of a page's query string, and parsing `host:port` address specs.
//!
//! Every function is pure. Nothing here reads the environment, touches the
//! network, or keeps state between calls; the caller passes in raw strings
//! and gets structured values back.
//!
//! # Quick Start
//!
//! ```
//! use pxurl::{
//!     build_url, get_query_param_addr, get_query_param_boolean, parse_query_string, Address,
//! };
//!
//! // Read configuration from a query string
//! let query = parse_query_string("debug=1&facilitator=%5B1%3A2%3A%3Aa%3Af%5D%3A9002");
//! assert_eq!(get_query_param_boolean(&query, "debug", false), Some(true));
//!
//! let default = Address::new("127.0.0.1", 9002);
//! let facilitator = get_query_param_addr(&query, "facilitator", default).unwrap();
//! assert_eq!(facilitator, Address::new("1:2::a:f", 9002));
//!
//! // Build a URL back to it
//! let url = build_url("http", facilitator.host(), Some(facilitator.port()), Some("/"), None);
//! assert_eq!(url, "http://[1:2::a:f]:9002/");
//! ```
//!
//! # Outcomes
//!
//! Parsers never panic on string input. They report one of:
//!
//! - a fully populated value (`Some(..)`/`Ok(..)`)
//! - no match (`None`) for specs that fail grammar or range checks
//! - indeterminate (`None`) from `get_query_param_boolean` when a parameter
//!   is present but not a recognized boolean
//!
//! The strict parsers (`Address::from_str`, `parse_addr_spec_with_defaults`)
//! return a `PxurlError` describing the failure instead.

// Re-export main building and parsing functions
pub use crate::url::{build_url, default_port, UrlBuilder};
pub use crate::url::{get_query_param_boolean, parse_query_from_url, parse_query_string};
pub use crate::url::{
    format_addr, get_query_param_addr, parse_addr_spec, parse_addr_spec_with_defaults,
};

// Re-export public types
pub use error::PxurlError;
pub use types::{Address, QueryMapping};

// Module declarations
pub mod error;
pub mod types;
pub mod url;
