//! Pipeline stages. Each stage takes the URL by value and returns it.

use url::{Host, Url};

use super::options::PortSpec;
use super::query::QueryParams;
use crate::error::{ComposeError, Result};
use crate::host::has_scheme;

const WWW_PREFIX: &str = "www.";

/// Parses `raw` without its surrounding whitespace, prepending
/// `default_scheme://` when it has no scheme.
pub(super) fn parse_base(raw: &str, default_scheme: &str) -> Result<Url> {
    let raw = raw.trim();
    let input = if has_scheme(raw) {
        raw.to_string()
    } else {
        format!("{default_scheme}://{raw}")
    };
    Url::parse(&input).map_err(|source| ComposeError::InvalidUrl { input, source })
}

/// Prepends `labels` to the host, after a `www.` prefix if there is one.
pub(super) fn apply_sub_domains(mut url: Url, labels: &[String]) -> Result<Url> {
    if labels.is_empty() {
        return Ok(url);
    }

    let base_host = match url.host() {
        Some(Host::Domain(domain)) if !domain.is_empty() => domain.to_string(),
        Some(Host::Ipv4(ip)) => {
            return Err(ComposeError::SubdomainOnIp { host: ip.to_string() })
        }
        Some(Host::Ipv6(ip)) => {
            return Err(ComposeError::SubdomainOnIp { host: ip.to_string() })
        }
        _ => return Err(ComposeError::MissingHost(url.to_string())),
    };

    let (prefix, bare) = match base_host.strip_prefix(WWW_PREFIX) {
        Some(bare) => (WWW_PREFIX, bare),
        None => ("", base_host.as_str()),
    };

    let mut new_host = String::from(prefix);
    for label in labels {
        new_host.push_str(label);
        new_host.push('.');
    }
    new_host.push_str(bare);

    tracing::debug!("subdomains: {} -> {}", base_host, new_host);
    url.set_host(Some(&new_host))
        .map_err(|source| ComposeError::InvalidUrl { input: new_host, source })?;
    Ok(url)
}

/// Overwrites the port, or clears it for an empty text port.
pub(super) fn apply_port(mut url: Url, port: &PortSpec) -> Result<Url> {
    let port = port.resolve()?;
    tracing::debug!("port: {:?} -> {:?}", url.port(), port);
    url.set_port(port)
        .map_err(|()| ComposeError::CannotHavePort(url.to_string()))?;
    Ok(url)
}

/// Appends slash-joined `segments` after the existing path.
pub(super) fn apply_paths(mut url: Url, segments: &[String]) -> Url {
    if segments.is_empty() {
        return url;
    }

    let joined = segments.join("/");
    let base = url.path().trim_end_matches('/');
    let base = base.trim_start_matches('/');
    let tail = joined.trim_start_matches('/');
    let path = if base.is_empty() {
        format!("/{tail}")
    } else {
        format!("/{base}/{tail}")
    };

    tracing::debug!("path: {} -> {}", url.path(), path);
    url.set_path(&path);
    url
}

/// Appends the expanded query pairs, leaving the query untouched when there
/// are none.
pub(super) fn apply_query(mut url: Url, params: &QueryParams) -> Url {
    let pairs = params.pairs();
    if pairs.is_empty() {
        return url;
    }

    tracing::debug!("query: appending {} pair(s)", pairs.len());
    url.query_pairs_mut().extend_pairs(pairs);
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    fn labels(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parse_base_adds_default_scheme() {
        assert_eq!(
            parse_base("example.com", "http").unwrap().as_str(),
            "http://example.com/"
        );
        assert_eq!(
            parse_base("example.com", "https").unwrap().as_str(),
            "https://example.com/"
        );
        assert_eq!(
            parse_base("ftp://example.com", "https").unwrap().as_str(),
            "ftp://example.com/"
        );
    }

    #[test]
    fn parse_base_ignores_surrounding_whitespace() {
        assert_eq!(
            parse_base(" http://example.com ", "https").unwrap().as_str(),
            "http://example.com/"
        );
        assert_eq!(
            parse_base("\texample.com\n", "http").unwrap().as_str(),
            "http://example.com/"
        );
    }

    #[test]
    fn parse_base_reports_input() {
        match parse_base("http://exa mple.com", "http") {
            Err(ComposeError::InvalidUrl { input, .. }) => {
                assert_eq!(input, "http://exa mple.com")
            }
            other => panic!("expected InvalidUrl, got {other:?}"),
        }
    }

    #[test]
    fn sub_domains_keep_www_first() {
        let out = apply_sub_domains(url("https://www.example.com"), &labels(&["a", "b"])).unwrap();
        assert_eq!(out.as_str(), "https://www.a.b.example.com/");
    }

    #[test]
    fn sub_domains_reject_parsed_ip() {
        let err = apply_sub_domains(url("http://127.0.0.1"), &labels(&["a"])).unwrap_err();
        assert!(matches!(err, ComposeError::SubdomainOnIp { .. }));
    }

    #[test]
    fn sub_domains_need_a_host() {
        let err = apply_sub_domains(url("mailto:someone@example.com"), &labels(&["a"])).unwrap_err();
        assert!(matches!(err, ComposeError::MissingHost(_)));
    }

    #[test]
    fn invalid_port_names_the_range() {
        let err = apply_port(url("http://example.com"), &PortSpec::Text("70000".into())).unwrap_err();
        assert!(matches!(err, ComposeError::InvalidPort(ref p) if p == "70000"));
        assert!(err.to_string().contains("between 0 and 65535"));
    }

    #[test]
    fn empty_label_list_is_noop() {
        let out = apply_sub_domains(url("http://10.0.0.1/x"), &[]).unwrap();
        assert_eq!(out.as_str(), "http://10.0.0.1/x");
    }

    #[test]
    fn port_overwrites_and_clears() {
        let out = apply_port(url("http://example.com:8080/a"), &PortSpec::Number(3000)).unwrap();
        assert_eq!(out.as_str(), "http://example.com:3000/a");
        let out = apply_port(url("http://example.com:8080/a"), &PortSpec::Text(String::new())).unwrap();
        assert_eq!(out.as_str(), "http://example.com/a");
    }

    #[test]
    fn paths_normalize_slashes() {
        let out = apply_paths(url("https://example.com/api/"), &labels(&["v1", "users"]));
        assert_eq!(out.as_str(), "https://example.com/api/v1/users");
        let out = apply_paths(url("https://example.com"), &labels(&["/users"]));
        assert_eq!(out.as_str(), "https://example.com/users");
    }

    #[test]
    fn paths_keep_query() {
        let out = apply_paths(url("https://example.com/a?x=1"), &labels(&["b"]));
        assert_eq!(out.as_str(), "https://example.com/a/b?x=1");
    }

    #[test]
    fn query_without_pairs_adds_no_question_mark() {
        let mut params = QueryParams::new();
        params.insert_none("unset");
        let out = apply_query(url("https://example.com/"), &params);
        assert_eq!(out.as_str(), "https://example.com/");
    }

    #[test]
    fn query_extends_existing() {
        let params: QueryParams = [("y", "2 3")].into_iter().collect();
        let out = apply_query(url("https://example.com/?x=1"), &params);
        assert_eq!(out.as_str(), "https://example.com/?x=1&y=2+3");
    }
}
