//! Error types for address parsing and URL handling.

use thiserror::Error;

/// Errors that can occur while parsing address specifications or URLs.
///
/// The lenient entry points (`parse_addr_spec`, `get_query_param_addr`)
/// collapse these into `None`; the strict ones (`Address::from_str`,
/// `parse_addr_spec_with_defaults`) return them as-is.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PxurlError {
    /// The address specification was the empty string.
    #[error("Empty address specification")]
    EmptySpec,

    /// The address specification has no `:port` part.
    #[error("Address specification \"{0}\" is missing a port")]
    MissingPort(String),

    /// The host part of the address specification is empty.
    #[error("Address specification \"{0}\" is missing a host")]
    EmptyHost(String),

    /// The host contains whitespace, control characters or URL delimiters.
    #[error("Address specification \"{0}\" has an invalid host")]
    InvalidHost(String),

    /// A `[` was opened but never closed by a `]`.
    #[error("Address specification \"{0}\" has an unterminated bracket")]
    UnterminatedBracket(String),

    /// An unbracketed host contains a colon.
    #[error("Address specification \"{0}\" has a colon in an unbracketed host")]
    UnexpectedColon(String),

    /// Something other than `:port` follows a closing bracket.
    #[error("Address specification \"{0}\" has trailing characters after the host")]
    TrailingGarbage(String),

    /// The port contains something other than decimal digits.
    #[error("Invalid port \"{0}\": must be decimal digits only")]
    InvalidPort(String),

    /// The port is numeric but larger than 65535.
    #[error("Port {0} out of range: must be between 0 and 65535")]
    PortOutOfRange(String),

    /// The host is not an IPv4 or IPv6 literal.
    #[error("Host \"{0}\" is not a numeric IP address")]
    NonNumericHost(String),

    /// URL parsing failed using the url crate.
    #[error("URL parsing error: {0}")]
    UrlParseError(String),
}

impl From<url::ParseError> for PxurlError {
    fn from(err: url::ParseError) -> Self {
        PxurlError::UrlParseError(err.to_string())
    }
}
