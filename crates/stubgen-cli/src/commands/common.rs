//! Common utilities shared across CLI commands.

use anyhow::{Context, Result};
use std::path::Path;
use stubgen_core::{Bindings, GeneratorConfig};

/// Reads and parses a JSON bindings manifest.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid manifest.
pub fn load_bindings(path: &Path) -> Result<Bindings> {
    let manifest = std::fs::read_to_string(path)
        .with_context(|| format!("reading bindings manifest {}", path.display()))?;
    let bindings = Bindings::from_json_str(&manifest)
        .with_context(|| format!("parsing bindings manifest {}", path.display()))?;

    tracing::debug!(
        "Loaded {} packages ({} methods) from {}",
        bindings.package_count(),
        bindings.method_count(),
        path.display()
    );

    Ok(bindings)
}

/// Loads the generator configuration, or the defaults when no path is given.
///
/// # Errors
///
/// Returns an error if the configuration file cannot be read or is invalid.
pub fn load_config(path: Option<&Path>) -> Result<GeneratorConfig> {
    path.map_or_else(
        || Ok(GeneratorConfig::default()),
        |path| {
            GeneratorConfig::load(path)
                .with_context(|| format!("loading configuration {}", path.display()))
        },
    )
}
