//! Command implementations for the stubgen CLI.
//!
//! Each command loads its inputs, runs the operation, and returns a
//! serializable report for the formatters.

pub mod common;
pub mod generate;
pub mod inspect;
