//! Template engine for binding generation using Handlebars.
//!
//! Wraps Handlebars with the built-in stub templates pre-registered.
//! Every placeholder value is computed before rendering, so templates only
//! perform plain substitution. HTML escaping is disabled because the output
//! is JavaScript and type annotations such as `Promise<string>` must pass
//! through untouched.
//!
//! # Examples
//!
//! ```
//! use stubgen_codegen::template_engine::{SERVICE_HELPER_TEMPLATE, TemplateEngine};
//! use serde_json::json;
//!
//! let engine = TemplateEngine::new().unwrap();
//! let context = json!({"package_name": "main", "service_name": "App"});
//! let helper = engine.render(SERVICE_HELPER_TEMPLATE, &context).unwrap();
//! assert!(helper.starts_with("function App(method) {"));
//! ```

use handlebars::Handlebars;
use serde::Serialize;
use stubgen_core::{Error, Result};

/// Name of the per-service dispatcher helper template.
pub const SERVICE_HELPER_TEMPLATE: &str = "service_helper";

/// Name of the per-method stub template.
pub const METHOD_TEMPLATE: &str = "method";

/// Name of the per-module namespace lookup table template.
pub const NAMESPACE_TEMPLATE: &str = "namespace";

/// Name of the per-module model import template.
pub const IMPORTS_TEMPLATE: &str = "imports";

const BUILTIN_TEMPLATES: [(&str, &str); 4] = [
    (
        SERVICE_HELPER_TEMPLATE,
        include_str!("../templates/service_helper.js.hbs"),
    ),
    (METHOD_TEMPLATE, include_str!("../templates/method.js.hbs")),
    (NAMESPACE_TEMPLATE, include_str!("../templates/namespace.js.hbs")),
    (IMPORTS_TEMPLATE, include_str!("../templates/imports.js.hbs")),
];

/// Template engine for binding generation.
///
/// # Thread Safety
///
/// This type is `Send` and `Sync`, allowing it to be used across
/// thread boundaries safely.
#[derive(Debug)]
pub struct TemplateEngine<'a> {
    handlebars: Handlebars<'a>,
}

impl<'a> TemplateEngine<'a> {
    /// Creates a new template engine with the built-in templates registered.
    ///
    /// # Errors
    ///
    /// Returns error if template registration fails (should not happen
    /// with valid built-in templates).
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();

        // Strict mode: fail on missing variables
        handlebars.set_strict_mode(true);
        handlebars.register_escape_fn(handlebars::no_escape);

        Self::register_stub_templates(&mut handlebars)?;

        Ok(Self { handlebars })
    }

    fn register_stub_templates(handlebars: &mut Handlebars<'a>) -> Result<()> {
        for (name, source) in BUILTIN_TEMPLATES {
            handlebars
                .register_template_string(name, source)
                .map_err(|e| Error::TemplateError {
                    template: name.to_string(),
                    message: format!("Failed to register template: {e}"),
                })?;
        }

        Ok(())
    }

    /// Renders a template with the given context.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Template name is not registered
    /// - Context cannot be serialized
    /// - A placeholder has no value in the context
    pub fn render<T: Serialize>(&self, template_name: &str, context: &T) -> Result<String> {
        self.handlebars
            .render(template_name, context)
            .map_err(|e| Error::TemplateError {
                template: template_name.to_string(),
                message: format!("Template rendering failed: {e}"),
            })
    }

}
