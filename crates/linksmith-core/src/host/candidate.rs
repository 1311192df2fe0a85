//! Host candidate extraction from a raw, possibly schemeless, URL string.

/// Reports whether `raw` starts with `scheme://`, where scheme is
/// `ALPHA *(ALPHA / DIGIT / "+" / "-" / ".")`.
///
/// Surrounding whitespace is ignored. A `://` that appears later (e.g.
/// inside a query value) does not count.
pub fn has_scheme(raw: &str) -> bool {
    scheme_end(raw.trim()).is_some()
}

/// Byte offset just past `://`, if `raw` starts with a valid scheme.
fn scheme_end(raw: &str) -> Option<usize> {
    let idx = raw.find("://")?;
    let scheme = &raw[..idx];
    let mut chars = scheme.chars();
    let first = chars.next()?;
    if !first.is_ascii_alphabetic() {
        return None;
    }
    if !chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')) {
        return None;
    }
    Some(idx + 3)
}

/// Extracts the host portion of `raw` for IP classification.
///
/// Trims surrounding whitespace, skips `scheme://` when present, cuts at the
/// first `/`, `?` or `#`, drops userinfo and a leading `www.`. The result may
/// still carry a `:port`.
///
/// - `"https://www.example.com:8080/a"` → `"example.com:8080"`
/// - `"[2001:db8::1]"` → `"[2001:db8::1]"`
pub fn host_candidate(raw: &str) -> &str {
    let raw = raw.trim();
    let rest = match scheme_end(raw) {
        Some(end) => &raw[end..],
        None => raw,
    };
    let authority = match rest.find(['/', '?', '#']) {
        Some(end) => &rest[..end],
        None => rest,
    };
    let host = match authority.rfind('@') {
        Some(at) => &authority[at + 1..],
        None => authority,
    };
    strip_www(host)
}

fn strip_www(host: &str) -> &str {
    match host.get(..4) {
        Some(prefix) if prefix.eq_ignore_ascii_case("www.") => &host[4..],
        _ => host,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheme_detection() {
        assert!(has_scheme("https://example.com"));
        assert!(has_scheme("git+ssh://host/repo"));
        assert!(!has_scheme("example.com"));
        assert!(!has_scheme("[::1]"));
        assert!(!has_scheme("://example.com"));
        assert!(!has_scheme("1http://example.com"));
    }

    #[test]
    fn scheme_inside_query_is_ignored() {
        assert!(!has_scheme("example.com/?next=http://other.com"));
        assert_eq!(
            host_candidate("example.com/?next=http://other.com"),
            "example.com"
        );
    }

    #[test]
    fn strips_scheme_path_and_www() {
        assert_eq!(host_candidate("https://www.example.com:8080/a?b#c"), "example.com:8080");
        assert_eq!(host_candidate("WWW.Example.com"), "Example.com");
        assert_eq!(host_candidate("http://192.168.0.1"), "192.168.0.1");
    }

    #[test]
    fn keeps_brackets_and_port() {
        assert_eq!(host_candidate("[2001:db8::1]"), "[2001:db8::1]");
        assert_eq!(
            host_candidate("http://[2001:db8::1]:8080/x"),
            "[2001:db8::1]:8080"
        );
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert!(has_scheme(" http://example.com"));
        assert_eq!(host_candidate(" http://example.com "), "example.com");
        assert_eq!(host_candidate("\t192.168.0.1:80\n"), "192.168.0.1:80");
    }

    #[test]
    fn drops_userinfo() {
        assert_eq!(host_candidate("ftp://user:pw@10.0.0.1/file"), "10.0.0.1");
    }
}
