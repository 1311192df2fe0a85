//! IPv4 / IPv6 literal classification.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// Returns true if `host` is an IPv4 or IPv6 literal, optionally bracketed
/// and optionally followed by a `:port`.
pub fn is_ip_literal(host: &str) -> bool {
    classify_ip_literal(host).is_some()
}

/// Classifies `host` as an IP literal and returns the parsed address.
///
/// Accepted forms:
/// - `[addr]` and `[addr]:port` (brackets are stripped before anything else)
/// - unbracketed IPv6, full or compressed (`2001:db8::1`, `::1`)
/// - strict dotted-quad IPv4, with or without a trailing `:port`
///
/// Hostnames, the empty string, malformed addresses and anything with
/// surrounding whitespace yield `None`.
pub fn classify_ip_literal(host: &str) -> Option<IpAddr> {
    if host.is_empty() {
        return None;
    }

    if let Some(rest) = host.strip_prefix('[') {
        let (inner, after) = rest.split_once(']')?;
        if !after.is_empty() && !after.strip_prefix(':').is_some_and(is_port) {
            return None;
        }
        return inner.parse::<IpAddr>().ok();
    }

    if let Ok(v6) = host.parse::<Ipv6Addr>() {
        return Some(IpAddr::V6(v6));
    }

    let addr = match host.rsplit_once(':') {
        Some((addr, port)) if is_port(port) => addr,
        Some(_) => return None,
        None => host,
    };

    if let Ok(v4) = addr.parse::<Ipv4Addr>() {
        return Some(IpAddr::V4(v4));
    }
    addr.parse::<Ipv6Addr>().ok().map(IpAddr::V6)
}

fn is_port(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
