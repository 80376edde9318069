//! CLI subcommand implementations.

pub mod generate;
pub mod themes;
pub mod windows;
