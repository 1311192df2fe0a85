//! `linksmith is-ip <host>` – classify a host as an IP literal.

use linksmith_core::classify_ip_literal;
use std::net::IpAddr;

pub fn run_is_ip(host: &str) {
    let family = match classify_ip_literal(host) {
        Some(IpAddr::V4(_)) => "ipv4",
        Some(IpAddr::V6(_)) => "ipv6",
        None => "not an ip literal",
    };
    println!("{host}: {family}");
}
