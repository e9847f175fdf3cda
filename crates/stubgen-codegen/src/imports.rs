//! Model import line of a module.

use crate::template_engine::{IMPORTS_TEMPLATE, TemplateEngine};
use serde::Serialize;
use stubgen_core::Result;

/// Template context of the import line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportsContext<'a> {
    /// Comma-separated display names
    pub names: String,
    /// Module the models are imported from
    pub models_module: &'a str,
}

/// Renders the import line for `names`, followed by a blank line.
///
/// Returns an empty string when there is nothing to import.
///
/// # Errors
///
/// Returns error if the import template fails to render.
pub fn render_imports(
    engine: &TemplateEngine<'_>,
    models_module: &str,
    names: &[String],
) -> Result<String> {
    if names.is_empty() {
        return Ok(String::new());
    }

    let context = ImportsContext {
        names: names.join(", "),
        models_module,
    };
    engine.render(IMPORTS_TEMPLATE, &context)
}
