//! Core types, configuration, and errors for stubgen.
//!
//! This crate provides the foundational types shared by the code generator
//! and the command-line front end.
//!
//! # Architecture
//!
//! The core consists of:
//! - Bound method metadata (`Bindings`, `BoundMethod`, `Parameter`, `TypeInfo`)
//! - Error hierarchy with contextual information
//! - Generator configuration (`GeneratorConfig`)

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod config;
mod error;
mod types;

pub use config::{GeneratorConfig, GeneratorConfigBuilder};
pub use error::{Error, Result};
pub use types::{Bindings, BoundMethod, Parameter, TypeInfo, DEFAULT_PACKAGE, FAILURE_TYPE};
