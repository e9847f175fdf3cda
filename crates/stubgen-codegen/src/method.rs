//! Per-method stub rendering.
//!
//! A stub forwards its arguments to the service helper and hands the
//! resulting descriptor to the runtime call. Its doc block carries one
//! `@param` line per input and a single `@returns {Promise<...>}` line.
//!
//! # Examples
//!
//! ```
//! use stubgen_codegen::method::render_method;
//! use stubgen_codegen::template_engine::TemplateEngine;
//! use stubgen_core::{BoundMethod, Parameter, TypeInfo};
//!
//! let engine = TemplateEngine::new().unwrap();
//! let method = BoundMethod::new("Greet")
//!     .with_input(Parameter::new("name", TypeInfo::new("string")))
//!     .with_output(Parameter::new("", TypeInfo::new("string")));
//!
//! let rendered = render_method(&engine, "wails.Call", "App", &method).unwrap();
//! assert!(rendered.code.contains("function Greet(name)"));
//! assert!(rendered.code.contains(" * @returns {Promise<string>}"));
//! assert!(rendered.models.is_empty());
//! ```

use crate::identifier::sanitize_identifier;
use crate::template_engine::{METHOD_TEMPLATE, TemplateEngine};
use serde::Serialize;
use std::collections::HashSet;
use stubgen_core::{BoundMethod, Result};

/// Doc line emitted in place of `@param` lines when there are no inputs.
const NO_PARAMS_LINE: &str = " *";

/// Return type of a method without usable outputs.
const VOID_TYPE: &str = "void";

/// A rendered method stub.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedMethod {
    /// Stub source text
    pub code: String,
    /// Original identifiers of packages whose models the method references,
    /// deduplicated in first-seen order
    pub models: Vec<String>,
}

/// Template context of a method stub.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MethodContext {
    /// Owning service
    pub service_name: String,
    /// Method name
    pub method_name: String,
    /// Trimmed documentation
    pub doc: String,
    /// `@param` lines, or a bare ` *` line
    pub params: String,
    /// `@returns` line
    pub returns: String,
    /// Sanitized input names for the stub signature
    pub inputs: String,
    /// Sanitized input names prefixed with `, ` for the dispatch call
    pub args: String,
    /// Runtime dispatch expression
    pub runtime_call: String,
}

impl MethodContext {
    /// Builds the context of `method` owned by `service_name`.
    #[must_use]
    pub fn new(runtime_call: &str, service_name: &str, method: &BoundMethod) -> Self {
        let names: Vec<_> = method
            .inputs
            .iter()
            .map(|input| sanitize_identifier(&input.name))
            .collect();

        let params = if method.inputs.is_empty() {
            NO_PARAMS_LINE.to_string()
        } else {
            method
                .inputs
                .iter()
                .zip(&names)
                .map(|(input, name)| {
                    format!(" * @param {name} {{{}}}", input.type_info.annotation)
                })
                .collect::<Vec<_>>()
                .join("\n")
        };

        let inputs = names.join(", ");
        let args = if inputs.is_empty() {
            String::new()
        } else {
            format!(", {inputs}")
        };

        Self {
            service_name: service_name.to_string(),
            method_name: method.name.clone(),
            doc: method.doc_comment.trim().to_string(),
            params,
            returns: format!(" * @returns {{Promise<{}>}}", return_type(method)),
            inputs,
            args,
            runtime_call: runtime_call.to_string(),
        }
    }
}

/// Joins the annotations of all non-failure outputs.
///
/// Failure-indicator outputs never reach the frontend as values, so they
/// are left out; a method with nothing else to return resolves to `void`.
fn return_type(method: &BoundMethod) -> String {
    let annotations: Vec<&str> = method
        .outputs
        .iter()
        .filter(|output| !output.type_info.is_failure())
        .map(|output| output.type_info.annotation.as_str())
        .collect();

    if annotations.is_empty() {
        VOID_TYPE.to_string()
    } else {
        annotations.join(", ")
    }
}

/// Collects the model packages referenced by inputs and then outputs.
///
/// # Examples
///
/// ```
/// use stubgen_codegen::method::referenced_models;
/// use stubgen_core::{BoundMethod, Parameter, TypeInfo};
///
/// let method = BoundMethod::new("Update")
///     .with_input(Parameter::new("user", TypeInfo::structure("models.User", "acme/models")))
///     .with_output(Parameter::new("", TypeInfo::structure("models.User", "acme/models")));
///
/// assert_eq!(referenced_models(&method), vec!["acme/models".to_string()]);
/// ```
#[must_use]
pub fn referenced_models(method: &BoundMethod) -> Vec<String> {
    let mut seen = HashSet::new();
    method
        .inputs
        .iter()
        .chain(&method.outputs)
        .filter_map(|param| param.type_info.model_package())
        .filter(|package| seen.insert(*package))
        .map(String::from)
        .collect()
}

/// Renders the stub of `method` and reports the model packages it uses.
///
/// # Errors
///
/// Returns error if the method template fails to render.
pub fn render_method(
    engine: &TemplateEngine<'_>,
    runtime_call: &str,
    service_name: &str,
    method: &BoundMethod,
) -> Result<RenderedMethod> {
    let context = MethodContext::new(runtime_call, service_name, method);
    let code = engine.render(METHOD_TEMPLATE, &context)?;

    tracing::trace!("Rendered {}.{}", service_name, method.name);

    Ok(RenderedMethod {
        code,
        models: referenced_models(method),
    })
}
