//! Inspect command implementation.
//!
//! Shows how a bindings manifest will be laid out without generating code:
//! the display name of every package and the sorted services and methods.

use super::common::load_bindings;
use anyhow::Result;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;
use stubgen_codegen::BindingsGenerator;

/// Layout of a bindings manifest.
#[derive(Debug, Serialize)]
pub struct InspectReport {
    /// Packages that produce a module, in generation order
    pub packages: Vec<PackageReport>,
    /// Display names of every package identifier, including model-only ones
    pub display_names: BTreeMap<String, String>,
}

/// Layout of one package.
#[derive(Debug, Serialize)]
pub struct PackageReport {
    /// Original package identifier
    pub package: String,
    /// Display name used for the module
    pub display_name: String,
    /// Services with their method names, sorted
    pub services: BTreeMap<String, Vec<String>>,
}

/// Runs the inspect command.
///
/// # Errors
///
/// Returns an error if the manifest cannot be loaded.
pub fn run(input: &Path) -> Result<InspectReport> {
    let bindings = load_bindings(input)?;
    let names = BindingsGenerator::package_names(&bindings);

    let packages = bindings
        .package_names()
        .into_iter()
        .map(|package| PackageReport {
            package: package.to_string(),
            display_name: names.display_name(package).to_string(),
            services: bindings
                .service_names(package)
                .into_iter()
                .map(|service| {
                    let methods = bindings
                        .sorted_methods(package, service)
                        .into_iter()
                        .map(|method| method.name.clone())
                        .collect();
                    (service.to_string(), methods)
                })
                .collect(),
        })
        .collect();

    let display_names = names
        .to_sorted_map()
        .into_iter()
        .map(|(original, display)| (original.to_string(), display.to_string()))
        .collect();

    Ok(InspectReport {
        packages,
        display_names,
    })
}
