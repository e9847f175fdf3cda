//! JavaScript binding generation for bound backend methods.
//!
//! Transforms a [`Bindings`](stubgen_core::Bindings) collection into one
//! module of call-forwarding stubs per package using Handlebars templates.
//!
//! # Pipeline
//!
//! - [`identifier`]: reserved-word sanitizing of parameter names
//! - [`package_names`]: collision-free short names for package paths
//! - [`service`]: the per-service dispatcher helper
//! - [`method`]: the per-method stub with its doc block
//! - [`namespace`]: the `window.<namespace>.<package>` lookup table
//! - [`imports`]: the model import line
//! - [`generator`]: module assembly, ordering, and imports
//!
//! # Examples
//!
//! ```
//! use stubgen_codegen::BindingsGenerator;
//! use stubgen_core::{Bindings, BoundMethod, Parameter, TypeInfo};
//!
//! let mut bindings = Bindings::new();
//! bindings.add_method(
//!     "main",
//!     "App",
//!     BoundMethod::new("Greet")
//!         .with_input(Parameter::new("name", TypeInfo::new("string")))
//!         .with_output(Parameter::new("", TypeInfo::new("string"))),
//! );
//!
//! let generator = BindingsGenerator::new().unwrap();
//! let generated = generator.generate(&bindings).unwrap();
//!
//! let module = generated.get("main").unwrap();
//! assert!(module.content.contains("function Greet(name)"));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod generator;
pub mod identifier;
pub mod imports;
pub mod method;
pub mod namespace;
pub mod package_names;
pub mod service;
pub mod template_engine;
pub mod types;

pub use generator::BindingsGenerator;
pub use package_names::{PackageNames, normalise_package_names};
pub use types::{GeneratedBindings, GeneratedModule};
