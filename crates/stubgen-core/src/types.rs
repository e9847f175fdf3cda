//! Bound method metadata consumed by the generator.
//!
//! These types describe backend methods exposed to the frontend: which
//! package and service own them, their documentation, and their typed
//! inputs and outputs. They are produced by whatever inventories the backend
//! and are treated as already valid.
//!
//! # Examples
//!
//! ```
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
//! assert_eq!(bindings.method_count(), 1);
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Type annotation of the failure-indicator output type.
pub const FAILURE_TYPE: &str = "error";

/// Package a struct type belongs to when its origin package is unknown.
pub const DEFAULT_PACKAGE: &str = "main";

/// Type descriptor of a parameter.
///
/// Carries the annotation rendered into doc comments and, for structured
/// types, the package the type originates from.
///
/// # Examples
///
/// ```
/// use stubgen_core::TypeInfo;
///
/// let plain = TypeInfo::new("number");
/// assert_eq!(plain.model_package(), None);
///
/// let person = TypeInfo::structure("models.Person", "github.com/acme/models");
/// assert_eq!(person.model_package(), Some("github.com/acme/models"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeInfo {
    /// Annotation rendered inside `{...}` in doc comments
    pub annotation: String,
    /// Whether this is a structured (model) type
    #[serde(default)]
    pub is_struct: bool,
    /// Origin package of a structured type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,
}

impl TypeInfo {
    /// Creates a non-structured type with the given annotation.
    #[must_use]
    pub fn new(annotation: impl Into<String>) -> Self {
        Self {
            annotation: annotation.into(),
            is_struct: false,
            package: None,
        }
    }

    /// Creates a structured type originating from `package`.
    #[must_use]
    pub fn structure(annotation: impl Into<String>, package: impl Into<String>) -> Self {
        Self {
            annotation: annotation.into(),
            is_struct: true,
            package: Some(package.into()),
        }
    }

    /// Returns `true` for the failure-indicator type.
    ///
    /// # Examples
    ///
    /// ```
    /// use stubgen_core::TypeInfo;
    ///
    /// assert!(TypeInfo::new("error").is_failure());
    /// assert!(!TypeInfo::new("string").is_failure());
    /// ```
    #[must_use]
    pub fn is_failure(&self) -> bool {
        self.annotation == FAILURE_TYPE
    }

    /// Returns the package a structured type must be imported from.
    ///
    /// Non-structured types return `None`. Structured types without an
    /// origin package belong to [`DEFAULT_PACKAGE`].
    ///
    /// # Examples
    ///
    /// ```
    /// use stubgen_core::TypeInfo;
    ///
    /// let local = TypeInfo {
    ///     annotation: "main.Config".to_string(),
    ///     is_struct: true,
    ///     package: None,
    /// };
    /// assert_eq!(local.model_package(), Some("main"));
    /// ```
    #[must_use]
    pub fn model_package(&self) -> Option<&str> {
        if !self.is_struct {
            return None;
        }
        Some(
            self.package
                .as_deref()
                .filter(|package| !package.is_empty())
                .unwrap_or(DEFAULT_PACKAGE),
        )
    }
}

/// A named, typed method input or output.
///
/// The name is emitted as-is in metadata but sanitized before it is used as
/// a JavaScript identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Parameter {
    /// Parameter name as declared by the backend
    #[serde(default)]
    pub name: String,
    /// Type descriptor
    #[serde(rename = "type")]
    pub type_info: TypeInfo,
}

impl Parameter {
    /// Creates a new parameter.
    #[must_use]
    pub fn new(name: impl Into<String>, type_info: TypeInfo) -> Self {
        Self {
            name: name.into(),
            type_info,
        }
    }
}

/// A backend method exposed to the frontend.
///
/// # Examples
///
/// ```
/// use stubgen_core::{BoundMethod, Parameter, TypeInfo};
///
/// let method = BoundMethod::new("Save")
///     .with_doc("Save persists the document")
///     .with_input(Parameter::new("path", TypeInfo::new("string")))
///     .with_output(Parameter::new("", TypeInfo::new("error")));
///
/// assert_eq!(method.inputs.len(), 1);
/// assert_eq!(method.outputs.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoundMethod {
    /// Method name
    pub name: String,
    /// Free-form documentation, possibly empty
    #[serde(default)]
    pub doc_comment: String,
    /// Inputs in declaration order
    #[serde(default)]
    pub inputs: Vec<Parameter>,
    /// Outputs in declaration order
    #[serde(default)]
    pub outputs: Vec<Parameter>,
}

impl BoundMethod {
    /// Creates a method with no documentation, inputs, or outputs.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc_comment: String::new(),
            inputs: Vec::new(),
            outputs: Vec::new(),
        }
    }

    /// Sets the documentation text.
    #[must_use]
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc_comment = doc.into();
        self
    }

    /// Appends an input parameter.
    #[must_use]
    pub fn with_input(mut self, input: Parameter) -> Self {
        self.inputs.push(input);
        self
    }

    /// Appends an output parameter.
    #[must_use]
    pub fn with_output(mut self, output: Parameter) -> Self {
        self.outputs.push(output);
        self
    }
}

/// All bound methods of a run, keyed by package and then by service.
///
/// Backed by hash maps, so iteration order carries no meaning. Accessors
/// that enumerate names return them sorted.
///
/// Serializes as `{"package": {"Service": [method, ...]}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bindings {
    packages: HashMap<String, HashMap<String, Vec<BoundMethod>>>,
}

impl Bindings {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a JSON bindings manifest.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SerializationError`] if the JSON does not describe a
    /// package -> service -> methods mapping.
    ///
    /// # Examples
    ///
    /// ```
    /// use stubgen_core::Bindings;
    ///
    /// let json = r#"{"main": {"App": [{"name": "Quit"}]}}"#;
    /// let bindings = Bindings::from_json_str(json).unwrap();
    /// assert_eq!(bindings.method_count(), 1);
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::SerializationError {
            message: format!("Invalid bindings manifest: {e}"),
            source: Some(Box::new(e)),
        })
    }

    /// Adds `method` to `service` in `package`, creating both as needed.
    pub fn add_method(
        &mut self,
        package: impl Into<String>,
        service: impl Into<String>,
        method: BoundMethod,
    ) {
        self.packages
            .entry(package.into())
            .or_default()
            .entry(service.into())
            .or_default()
            .push(method);
    }

    /// Returns package identifiers in lexicographic order.
    #[must_use]
    pub fn package_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.packages.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Returns the service names of `package` in lexicographic order.
    ///
    /// Unknown packages yield an empty list.
    #[must_use]
    pub fn service_names(&self, package: &str) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .packages
            .get(package)
            .map_or_else(Vec::new, |services| {
                services.keys().map(String::as_str).collect()
            });
        names.sort_unstable();
        names
    }

    /// Returns the methods of `service` in `package`, sorted by name.
    ///
    /// The sort is stable, so methods sharing a name keep their insertion
    /// order.
    #[must_use]
    pub fn sorted_methods(&self, package: &str, service: &str) -> Vec<&BoundMethod> {
        let mut methods: Vec<&BoundMethod> = self
            .packages
            .get(package)
            .and_then(|services| services.get(service))
            .map_or_else(Vec::new, |methods| methods.iter().collect());
        methods.sort_by(|a, b| a.name.cmp(&b.name));
        methods
    }

    /// Returns the number of packages.
    #[must_use]
    pub fn package_count(&self) -> usize {
        self.packages.len()
    }

    /// Returns the total number of methods across all packages.
    #[must_use]
    pub fn method_count(&self) -> usize {
        self.packages
            .values()
            .flat_map(HashMap::values)
            .map(Vec::len)
            .sum()
    }

    /// Returns `true` if no package is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}
