//! CLI subcommand implementations.

pub mod recent;
pub mod search;
pub mod types;
