//! Module assembly for bound methods.
//!
//! Orchestrates a generation run: normalizes package names, renders helpers
//! and stubs in a fixed order, appends the namespace lookup table, and
//! computes the import block of every module.
//!
//! Ordering never depends on the iteration order of the input maps:
//! packages are visited by original identifier, services by name, and
//! methods by name.
//!
//! # Examples
//!
//! ```
//! use stubgen_codegen::BindingsGenerator;
//! use stubgen_core::{Bindings, BoundMethod, Parameter, TypeInfo};
//!
//! let mut bindings = Bindings::new();
//! bindings.add_method(
//!     "github.com/acme/app",
//!     "Users",
//!     BoundMethod::new("Get").with_output(Parameter::new(
//!         "",
//!         TypeInfo::structure("models.User", "github.com/acme/models"),
//!     )),
//! );
//!
//! let generator = BindingsGenerator::new().unwrap();
//! let generated = generator.generate(&bindings).unwrap();
//!
//! let module = generated.get("app").unwrap();
//! assert_eq!(module.models, vec!["models".to_string()]);
//! assert!(module.content.contains("import {models} from './models';"));
//! assert!(module.content.contains("window.go.app = {"));
//! ```

use crate::imports::render_imports;
use crate::method::render_method;
use crate::namespace::{ServiceEntry, render_namespace};
use crate::package_names::{PackageNames, normalise_package_names};
use crate::service::render_service_helper;
use crate::template_engine::TemplateEngine;
use crate::types::{GeneratedBindings, GeneratedModule};
use std::collections::HashSet;
use stubgen_core::{Bindings, GeneratorConfig, Result};

/// Banner prepended to every generated module.
pub const HEADER: &str = "// @ts-check\n// Cynhyrchwyd y ffeil hon yn awtomatig. PEIDIWCH Â MODIWL\n// This file is automatically generated. DO NOT EDIT\n\n";

/// Generator of JavaScript binding modules.
///
/// Holds no per-run state, so one generator can serve any number of
/// concurrent runs.
///
/// # Thread Safety
///
/// This type is `Send` and `Sync`, allowing safe use across threads.
#[derive(Debug)]
pub struct BindingsGenerator<'a> {
    engine: TemplateEngine<'a>,
    config: GeneratorConfig,
}

impl BindingsGenerator<'_> {
    /// Creates a generator with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns error if template engine initialization fails.
    pub fn new() -> Result<Self> {
        Self::with_config(GeneratorConfig::default())
    }

    /// Creates a generator with a custom configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the configuration is invalid or template engine
    /// initialization fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use stubgen_codegen::BindingsGenerator;
    /// use stubgen_core::GeneratorConfig;
    ///
    /// let config = GeneratorConfig::builder().namespace("backend").build().unwrap();
    /// let generator = BindingsGenerator::with_config(config).unwrap();
    /// assert_eq!(generator.config().namespace, "backend");
    /// ```
    pub fn with_config(config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        let engine = TemplateEngine::new()?;
        Ok(Self { engine, config })
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates one module per package of `bindings`.
    ///
    /// # Errors
    ///
    /// Returns error if template rendering fails.
    pub fn generate(&self, bindings: &Bindings) -> Result<GeneratedBindings> {
        tracing::info!(
            "Generating bindings for {} packages ({} methods)",
            bindings.package_count(),
            bindings.method_count()
        );

        let names = Self::package_names(bindings);
        let mut generated = GeneratedBindings::new();

        for package in bindings.package_names() {
            let module = self.generate_module(bindings, package, &names)?;
            tracing::debug!(
                "Generated module '{}' for package '{}' ({} imports)",
                module.package,
                package,
                module.models.len()
            );
            generated.insert(module);
        }

        tracing::info!("Successfully generated {} modules", generated.len());

        Ok(generated)
    }

    /// Normalizes every package identifier of the run.
    ///
    /// Target packages come first in lexicographic order, followed by model
    /// packages in the order the sorted traversal first references them, so
    /// packages that are only imported still receive a stable name.
    #[must_use]
    pub fn package_names(bindings: &Bindings) -> PackageNames {
        let targets = bindings.package_names();
        let mut seen: HashSet<&str> = targets.iter().copied().collect();
        let mut identifiers: Vec<String> = targets.iter().map(ToString::to_string).collect();

        for package in &targets {
            for service in bindings.service_names(package) {
                for method in bindings.sorted_methods(package, service) {
                    let models = method
                        .inputs
                        .iter()
                        .chain(&method.outputs)
                        .filter_map(|param| param.type_info.model_package());
                    for model in models {
                        if seen.insert(model) {
                            identifiers.push(model.to_string());
                        }
                    }
                }
            }
        }

        normalise_package_names(identifiers)
    }

    fn generate_module(
        &self,
        bindings: &Bindings,
        package: &str,
        names: &PackageNames,
    ) -> Result<GeneratedModule> {
        let display_name = names.display_name(package);
        let services = bindings.service_names(package);

        let mut body = String::new();
        let mut models: Vec<String> = Vec::new();

        for service in &services {
            body.push_str(&render_service_helper(&self.engine, display_name, service)?);
            for method in bindings.sorted_methods(package, service) {
                let rendered =
                    render_method(&self.engine, &self.config.runtime_call, service, method)?;
                body.push_str(&rendered.code);
                models.extend(rendered.models);
            }
        }

        let entries = services
            .iter()
            .map(|&service| ServiceEntry {
                name: service,
                methods: bindings
                    .sorted_methods(package, service)
                    .into_iter()
                    .map(|method| method.name.as_str())
                    .collect(),
            })
            .collect();
        body.push_str(&render_namespace(
            &self.engine,
            &self.config.namespace,
            display_name,
            entries,
        )?);

        let imports = import_names(&models, names, display_name);
        if !imports.is_empty() {
            body.push('\n');
        }

        let mut content = String::from(HEADER);
        content.push_str(&render_imports(
            &self.engine,
            &self.config.models_module,
            &imports,
        )?);
        content.push_str(&body);

        Ok(GeneratedModule {
            package: display_name.to_string(),
            content,
            models: imports,
        })
    }
}

/// Translates referenced model packages into the sorted import list.
///
/// Duplicates are dropped in first-seen order before translation, and the
/// module's own package is never imported.
fn import_names(models: &[String], names: &PackageNames, display_name: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut imports: Vec<String> = models
        .iter()
        .filter(|model| seen.insert(model.as_str()))
        .map(|model| names.display_name(model))
        .filter(|name| *name != display_name)
        .map(String::from)
        .collect();
    imports.sort_unstable();
    imports.dedup();
    imports
}
