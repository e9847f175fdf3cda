//! stubgen CLI library.
//!
//! Exposes the command implementations and output formatters so they can be
//! tested without spawning the binary.

use clap::ValueEnum;

pub mod commands;
pub mod formatters;

/// Output format of command reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON for humans
    #[default]
    Json,
    /// Single-line JSON for scripts
    Text,
}
