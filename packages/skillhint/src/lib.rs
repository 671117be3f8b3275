//! Main library for skillhint, used by its CLI.

pub mod claude;
pub mod report;
pub mod rules;
