//! CLI command handlers, one file per command.

mod completions;
mod compose;
mod is_ip;
mod man;
mod presets;

pub use completions::run_completions;
pub use compose::run_compose;
#[cfg(test)]
pub(crate) use compose::build_options;
pub use is_ip::run_is_ip;
pub use man::run_man;
pub use presets::run_presets;
