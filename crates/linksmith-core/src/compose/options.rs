//! Composition options: port, subdomains, path segments and query parameters.

use serde::{Deserialize, Serialize};

use super::query::{QueryParams, QueryValue};
use crate::error::{ComposeError, Result};

/// Port override, given either as a number or as text.
///
/// Text is parsed when the URL is composed; an empty string clears any port
/// already present in the base URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PortSpec {
    Number(u16),
    Text(String),
}

impl PortSpec {
    /// Resolves to the port to set, or `None` to clear the port.
    pub fn resolve(&self) -> Result<Option<u16>> {
        match self {
            PortSpec::Number(n) => Ok(Some(*n)),
            PortSpec::Text(s) => {
                let s = s.trim();
                if s.is_empty() {
                    return Ok(None);
                }
                s.parse::<u16>()
                    .map(Some)
                    .map_err(|_| ComposeError::InvalidPort(s.to_string()))
            }
        }
    }
}

impl From<u16> for PortSpec {
    fn from(n: u16) -> Self {
        PortSpec::Number(n)
    }
}

// Out-of-range numbers are kept as text and rejected when resolved.
macro_rules! impl_from_wide_int {
    ($($t:ty),*) => {
        $(impl From<$t> for PortSpec {
            fn from(n: $t) -> Self {
                u16::try_from(n)
                    .map(PortSpec::Number)
                    .unwrap_or_else(|_| PortSpec::Text(n.to_string()))
            }
        })*
    };
}

impl_from_wide_int!(i32, i64, u32, u64);

impl From<&str> for PortSpec {
    fn from(s: &str) -> Self {
        s.parse().map(PortSpec::Number).unwrap_or_else(|_| PortSpec::Text(s.to_string()))
    }
}

impl From<String> for PortSpec {
    fn from(s: String) -> Self {
        s.parse().map(PortSpec::Number).unwrap_or(PortSpec::Text(s))
    }
}

/// Modifiers applied to a base URL by [`crate::compose()`].
///
/// Field names also accept the camelCase spelling (`subDomains`,
/// `queryParams`) when deserialized.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComposeOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<PortSpec>,

    #[serde(alias = "subDomains", skip_serializing_if = "Option::is_none")]
    pub sub_domains: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub paths: Option<Vec<String>>,

    #[serde(alias = "queryParams", skip_serializing_if = "Option::is_none")]
    pub query_params: Option<QueryParams>,
}

impl ComposeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn port(mut self, port: impl Into<PortSpec>) -> Self {
        self.port = Some(port.into());
        self
    }

    pub fn sub_domains<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sub_domains = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    pub fn paths<I, S>(mut self, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.paths = Some(segments.into_iter().map(Into::into).collect());
        self
    }

    pub fn query_params(mut self, params: QueryParams) -> Self {
        self.query_params = Some(params);
        self
    }

    /// Sets one query parameter, keeping the order in which keys were first added.
    pub fn query(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.query_params
            .get_or_insert_with(QueryParams::new)
            .insert(key, value);
        self
    }

    /// True when no field is set at all.
    pub fn is_empty(&self) -> bool {
        self.port.is_none()
            && self.sub_domains.is_none()
            && self.paths.is_none()
            && self.query_params.is_none()
    }

    /// Layers `other` on top of `self`: `other`'s port wins, subdomains and
    /// paths are appended, and query entries are appended key by key.
    pub fn merged_with(mut self, other: &ComposeOptions) -> Self {
        if other.port.is_some() {
            self.port = other.port.clone();
        }
        extend_list(&mut self.sub_domains, other.sub_domains.as_ref());
        extend_list(&mut self.paths, other.paths.as_ref());
        if let Some(theirs) = &other.query_params {
            self.query_params
                .get_or_insert_with(QueryParams::new)
                .extend_from(theirs);
        }
        self
    }
}

fn extend_list(ours: &mut Option<Vec<String>>, theirs: Option<&Vec<String>>) {
    if let Some(theirs) = theirs {
        ours.get_or_insert_with(Vec::new).extend(theirs.iter().cloned());
    }
}
