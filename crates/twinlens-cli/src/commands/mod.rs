//! CLI subcommand implementations.

mod analyze;
mod compare;

pub use analyze::cmd_analyze;
pub use compare::cmd_compare;
