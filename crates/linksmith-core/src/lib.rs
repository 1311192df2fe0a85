pub mod config;
pub mod logging;

pub mod compose;
pub mod error;
pub mod host;

pub use compose::{compose, ComposeOptions, Composer, PortSpec, QueryParams, QueryValue};
pub use error::{ComposeError, Result};
pub use host::{classify_ip_literal, has_scheme, host_candidate, is_ip_literal};
