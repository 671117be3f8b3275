//! Integration points with Claude Code.

pub mod hook;
