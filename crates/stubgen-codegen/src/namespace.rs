//! Per-module namespace lookup table.
//!
//! Registers every stub of a module under
//! `window.<namespace>.<package>.<Service>.<method>` so the frontend can
//! reach them without importing the module.

use crate::template_engine::{NAMESPACE_TEMPLATE, TemplateEngine};
use serde::Serialize;
use stubgen_core::Result;

/// One service entry of the lookup table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceEntry<'a> {
    /// Service name
    pub name: &'a str,
    /// Method names in emission order
    pub methods: Vec<&'a str>,
}

/// Template context of the lookup table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamespaceContext<'a> {
    /// Global object the tables hang off
    pub namespace: &'a str,
    /// Display name of the package
    pub package_name: &'a str,
    /// Services in emission order
    pub services: Vec<ServiceEntry<'a>>,
}

/// Renders the lookup table of one module.
///
/// # Errors
///
/// Returns error if the namespace template fails to render.
///
/// # Examples
///
/// ```
/// use stubgen_codegen::namespace::{ServiceEntry, render_namespace};
/// use stubgen_codegen::template_engine::TemplateEngine;
///
/// let engine = TemplateEngine::new().unwrap();
/// let services = vec![ServiceEntry { name: "App", methods: vec!["Greet"] }];
/// let table = render_namespace(&engine, "go", "main", services).unwrap();
/// assert!(table.contains("window.go.main = {\n    App: {\n        Greet,\n"));
/// ```
pub fn render_namespace<'a>(
    engine: &TemplateEngine<'_>,
    namespace: &'a str,
    package_name: &'a str,
    services: Vec<ServiceEntry<'a>>,
) -> Result<String> {
    let context = NamespaceContext {
        namespace,
        package_name,
        services,
    };
    engine.render(NAMESPACE_TEMPLATE, &context)
}
