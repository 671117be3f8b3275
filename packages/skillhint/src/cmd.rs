//! Subcommands of the skillhint CLI.

pub mod claude;
pub mod validate;
