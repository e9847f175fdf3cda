//! Error types for stubgen.
//!
//! The generation pipeline itself has no failure modes of its own; these
//! variants cover the ambient concerns around it: template handling,
//! configuration, manifest parsing, and writing output.
//!
//! # Examples
//!
//! ```
//! use stubgen_core::{Error, Result};
//!
//! fn check_namespace(name: &str) -> Result<()> {
//!     if name.is_empty() {
//!         return Err(Error::ConfigError {
//!             message: "namespace cannot be empty".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//!
//! let err = check_namespace("").unwrap_err();
//! assert!(err.is_config_error());
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for stubgen.
///
/// All library crates in the workspace report failures through this type.
#[derive(Error, Debug)]
pub enum Error {
    /// Template registration or rendering failed.
    ///
    /// Built-in templates are compiled into the binary, so this normally
    /// indicates a custom template with invalid syntax or a missing
    /// placeholder value.
    #[error("Template error in '{template}': {message}")]
    TemplateError {
        /// Name of the template that failed
        template: String,
        /// Description of the failure
        message: String,
    },

    /// Configuration error.
    ///
    /// Raised when configuration is invalid or missing required values.
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration problem
        message: String,
    },

    /// Serialization/deserialization error.
    ///
    /// Raised when a bindings manifest or configuration file cannot be parsed.
    #[error("Serialization error: {message}")]
    SerializationError {
        /// Description of the serialization failure
        message: String,
        /// Underlying error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Filesystem operation failed.
    #[error("I/O error at {}: {source}", path.display())]
    IoError {
        /// Path involved in the failed operation
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Returns `true` if this is a template error.
    ///
    /// # Examples
    ///
    /// ```
    /// use stubgen_core::Error;
    ///
    /// let err = Error::TemplateError {
    ///     template: "method".to_string(),
    ///     message: "missing variable".to_string(),
    /// };
    /// assert!(err.is_template_error());
    /// ```
    #[must_use]
    pub const fn is_template_error(&self) -> bool {
        matches!(self, Self::TemplateError { .. })
    }

    /// Returns `true` if this is a configuration error.
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::ConfigError { .. })
    }

    /// Returns `true` if this is a serialization error.
    #[must_use]
    pub const fn is_serialization_error(&self) -> bool {
        matches!(self, Self::SerializationError { .. })
    }

    /// Returns `true` if this is an I/O error.
    #[must_use]
    pub const fn is_io_error(&self) -> bool {
        matches!(self, Self::IoError { .. })
    }
}

/// Result type alias for stubgen operations.
///
/// # Examples
///
/// ```
/// use stubgen_core::{Error, Result};
///
/// fn extension(value: &str) -> Result<&str> {
///     if value.starts_with('.') {
///         return Err(Error::ConfigError {
///             message: "extension must not start with a dot".to_string(),
///         });
///     }
///     Ok(value)
/// }
///
/// assert!(extension("js").is_ok());
/// assert!(extension(".js").is_err());
/// ```
pub type Result<T> = std::result::Result<T, Error>;
