//! CLI subcommand implementations.

pub mod show;
pub mod types;
