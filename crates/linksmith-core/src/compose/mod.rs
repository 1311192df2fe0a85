//! URL composition.
//!
//! Builds a URL from a base string plus optional port, subdomains, path
//! segments and query parameters. With options present the base is parsed
//! and run through a fixed pipeline:
//!
//! parse → host → port → path → query → serialize
//!
//! Without options the base string is returned unchanged.

mod options;
mod query;
mod stages;


pub use options::{ComposeOptions, PortSpec};
pub use query::{QueryParams, QueryValue};

use crate::config::LinksmithConfig;
use crate::error::{ComposeError, Result};
use crate::host::{host_candidate, is_ip_literal};

/// Scheme prepended to base URLs that have none.
pub const DEFAULT_SCHEME: &str = "http";

/// Composes `main_url` with `options` using the default `http` scheme for
/// schemeless input.
///
/// # Examples
///
/// ```
/// use linksmith_core::{compose, ComposeOptions};
///
/// let opts = ComposeOptions::new()
///     .port(3000)
///     .sub_domains(["api", "v1"])
///     .paths(["users", "123"])
///     .query("filter", "active");
/// let url = compose("https://example.com", Some(&opts)).unwrap();
/// assert_eq!(url, "https://api.v1.example.com:3000/users/123?filter=active");
/// ```
pub fn compose(main_url: &str, options: Option<&ComposeOptions>) -> Result<String> {
    Composer::new().compose(main_url, options)
}

/// URL composer with a configurable scheme for schemeless input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composer {
    default_scheme: String,
}

impl Default for Composer {
    fn default() -> Self {
        Self {
            default_scheme: DEFAULT_SCHEME.to_string(),
        }
    }
}

impl Composer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `scheme` for schemeless input. Accepts `https` as well as `https://`.
    pub fn with_default_scheme(scheme: &str) -> Self {
        let scheme = scheme.trim().trim_end_matches("://");
        if scheme.is_empty() {
            return Self::default();
        }
        Self {
            default_scheme: scheme.to_ascii_lowercase(),
        }
    }

    pub fn from_config(cfg: &LinksmithConfig) -> Self {
        Self::with_default_scheme(&cfg.default_scheme)
    }

    pub fn default_scheme(&self) -> &str {
        &self.default_scheme
    }

    /// Composes `main_url` with `options`.
    ///
    /// Fails with [`ComposeError::EmptyUrl`] for an empty base (even without
    /// options) and with [`ComposeError::SubdomainOnIp`] when subdomains are
    /// requested for an IP host.
    pub fn compose(&self, main_url: &str, options: Option<&ComposeOptions>) -> Result<String> {
        if main_url.is_empty() {
            return Err(ComposeError::EmptyUrl);
        }
        let Some(options) = options else {
            return Ok(main_url.to_string());
        };

        let sub_domains = options.sub_domains.as_deref().unwrap_or_default();
        if !sub_domains.is_empty() {
            let host = host_candidate(main_url);
            if is_ip_literal(host) {
                return Err(ComposeError::SubdomainOnIp {
                    host: host.to_string(),
                });
            }
        }

        let url = stages::parse_base(main_url, &self.default_scheme)?;
        let url = stages::apply_sub_domains(url, sub_domains)?;
        let url = match &options.port {
            Some(port) => stages::apply_port(url, port)?,
            None => url,
        };
        let url = match &options.paths {
            Some(segments) => stages::apply_paths(url, segments),
            None => url,
        };
        let url = match &options.query_params {
            Some(params) => stages::apply_query(url, params),
            None => url,
        };

        let composed = String::from(url);
        tracing::debug!("composed {} -> {}", main_url, composed);
        Ok(composed)
    }
}
