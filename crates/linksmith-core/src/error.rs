//! Errors raised while composing a URL.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ComposeError {
    /// The base URL was the empty string.
    #[error("Main URL is empty")]
    EmptyUrl,

    /// Subdomains were requested for a host that is an IPv4 or IPv6 literal.
    #[error("You can't add subdomain to an ip address: {host}")]
    SubdomainOnIp { host: String },

    /// The base URL (or a host built from it) was rejected by the URL parser.
    #[error("invalid URL '{input}': {source}")]
    InvalidUrl {
        input: String,
        #[source]
        source: url::ParseError,
    },

    /// Subdomains were requested for a URL without a host.
    #[error("URL has no host to add subdomains to: {0}")]
    MissingHost(String),

    /// A text port that is not a number between 0 and 65535.
    #[error("invalid port '{0}': expected a number between 0 and 65535")]
    InvalidPort(String),

    /// The URL kind cannot carry a port (e.g. `file:` URLs).
    #[error("URL cannot have a port: {0}")]
    CannotHavePort(String),
}

pub type Result<T> = std::result::Result<T, ComposeError>;
