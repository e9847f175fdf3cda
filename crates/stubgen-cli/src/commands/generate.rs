//! Generate command implementation.
//!
//! This command:
//! 1. Loads the bindings manifest and optional configuration
//! 2. Generates one JavaScript module per package
//! 3. Writes the modules to the output directory (unless `--dry-run`)

use super::common::{load_bindings, load_config};
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};
use stubgen_codegen::BindingsGenerator;
use tracing::info;

/// Result of a generation run.
#[derive(Debug, Serialize)]
pub struct GenerationReport {
    /// Directory the modules were (or would be) written to
    pub output_dir: PathBuf,
    /// Whether files were left untouched
    pub dry_run: bool,
    /// Generated modules in package order
    pub modules: Vec<ModuleReport>,
}

/// Summary of one generated module.
#[derive(Debug, Serialize)]
pub struct ModuleReport {
    /// Display package name
    pub package: String,
    /// Target file path
    pub path: PathBuf,
    /// Model packages imported by the module
    pub imports: Vec<String>,
}

/// Runs the generate command.
///
/// # Errors
///
/// Returns an error if:
/// - The manifest or configuration cannot be loaded
/// - Template rendering fails
/// - Output files cannot be written
pub fn run(
    input: &Path,
    output: &Path,
    config: Option<&Path>,
    dry_run: bool,
) -> Result<GenerationReport> {
    let bindings = load_bindings(input)?;
    let config = load_config(config)?;
    let extension = config.file_extension.clone();

    let generator = BindingsGenerator::with_config(config)?;
    let generated = generator
        .generate(&bindings)
        .context("generating bindings")?;

    let modules = generated
        .modules()
        .map(|module| ModuleReport {
            package: module.package.clone(),
            path: output.join(module.file_name(&extension)),
            imports: module.models.clone(),
        })
        .collect();

    if dry_run {
        info!("Dry run: {} modules not written", generated.len());
    } else {
        generated
            .write_to_dir(output, &extension)
            .with_context(|| format!("writing bindings to {}", output.display()))?;
        info!(
            "Wrote {} modules to {}",
            generated.len(),
            output.display()
        );
    }

    Ok(GenerationReport {
        output_dir: output.to_path_buf(),
        dry_run,
        modules,
    })
}
