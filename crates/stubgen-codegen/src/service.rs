//! Per-service dispatcher helper.
//!
//! Every service gets one helper function named after the service. Method
//! stubs call it with their own name and arguments, and it packs them into
//! the call descriptor handed to the runtime.

use crate::template_engine::{SERVICE_HELPER_TEMPLATE, TemplateEngine};
use serde::Serialize;
use stubgen_core::Result;

/// Template context of a service helper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceHelperContext<'a> {
    /// Display name of the owning package
    pub package_name: &'a str,
    /// Service name
    pub service_name: &'a str,
}

/// Renders the dispatcher helper of `service_name` in `package_name`.
///
/// # Errors
///
/// Returns error if the helper template fails to render.
///
/// # Examples
///
/// ```
/// use stubgen_codegen::service::render_service_helper;
/// use stubgen_codegen::template_engine::TemplateEngine;
///
/// let engine = TemplateEngine::new().unwrap();
/// let helper = render_service_helper(&engine, "main", "App").unwrap();
/// assert!(helper.contains("serviceName: \"App\","));
/// ```
pub fn render_service_helper(
    engine: &TemplateEngine<'_>,
    package_name: &str,
    service_name: &str,
) -> Result<String> {
    let context = ServiceHelperContext {
        package_name,
        service_name,
    };
    engine.render(SERVICE_HELPER_TEMPLATE, &context)
}
