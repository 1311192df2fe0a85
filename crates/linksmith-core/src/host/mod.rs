//! Host inspection: pull the host out of a raw URL string and decide whether
//! it is an IP literal.
//!
//! Runs on the raw input, before any URL parsing, so that schemeless and
//! bracketed forms are classified the same way as fully qualified ones.

mod candidate;
mod ip;

pub use candidate::{has_scheme, host_candidate};
pub use ip::{classify_ip_literal, is_ip_literal};
