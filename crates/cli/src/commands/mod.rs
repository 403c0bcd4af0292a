//! CLI subcommand implementations.

pub mod catalog;
pub mod quote;
pub mod simulate;
