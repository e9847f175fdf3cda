//! Generator configuration.
//!
//! Controls the few knobs of the emitted modules that are not derived from
//! the bindings themselves: the global namespace key, the runtime dispatch
//! expression, and where model types are imported from.
//!
//! # Examples
//!
//! ```
//! use stubgen_core::GeneratorConfig;
//!
//! let config = GeneratorConfig::default();
//! assert_eq!(config.namespace, "go");
//! assert_eq!(config.runtime_call, "wails.Call");
//!
//! let custom = GeneratorConfig::from_toml_str(r#"namespace = "backend""#).unwrap();
//! assert_eq!(custom.namespace, "backend");
//! assert_eq!(custom.models_module, "./models");
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for binding generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Key under `window` holding the lookup table.
    ///
    /// Default: `go`
    pub namespace: String,

    /// Expression invoked with the dispatcher's call descriptor.
    ///
    /// Default: `wails.Call`
    pub runtime_call: String,

    /// Module specifier model types are imported from.
    ///
    /// Default: `./models`
    pub models_module: String,

    /// Extension of written module files, without the leading dot.
    ///
    /// Only used when writing output; generation ignores it.
    /// Default: `js`
    pub file_extension: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            namespace: "go".to_string(),
            runtime_call: "wails.Call".to_string(),
            models_module: "./models".to_string(),
            file_extension: "js".to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Creates a builder starting from the defaults.
    ///
    /// # Examples
    ///
    /// ```
    /// use stubgen_core::GeneratorConfig;
    ///
    /// let config = GeneratorConfig::builder()
    ///     .namespace("api")
    ///     .runtime_call("runtime.invoke")
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(config.namespace, "api");
    /// assert_eq!(config.file_extension, "js");
    /// ```
    #[must_use]
    pub fn builder() -> GeneratorConfigBuilder {
        GeneratorConfigBuilder::default()
    }

    /// Parses configuration from TOML. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SerializationError`] on malformed TOML or unknown
    /// keys, and [`Error::ConfigError`] if a value fails validation.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source).map_err(|e| Error::SerializationError {
            message: format!("Invalid configuration: {e}"),
            source: Some(Box::new(e)),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IoError`] if the file cannot be read, otherwise the
    /// same errors as [`GeneratorConfig::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| Error::IoError {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("Loaded generator configuration from {}", path.display());
        Self::from_toml_str(&source)
    }

    /// Checks that every value is usable in generated code.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] naming the first empty field, or if the
    /// file extension starts with a dot.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("namespace", &self.namespace),
            ("runtime_call", &self.runtime_call),
            ("models_module", &self.models_module),
            ("file_extension", &self.file_extension),
        ];
        for (field, value) in fields {
            if value.trim().is_empty() {
                return Err(Error::ConfigError {
                    message: format!("{field} cannot be empty"),
                });
            }
        }
        if self.file_extension.starts_with('.') {
            return Err(Error::ConfigError {
                message: format!(
                    "file_extension must not start with a dot: {}",
                    self.file_extension
                ),
            });
        }
        Ok(())
    }
}

/// Builder for [`GeneratorConfig`].
#[derive(Debug, Clone, Default)]
pub struct GeneratorConfigBuilder {
    config: GeneratorConfig,
}

impl GeneratorConfigBuilder {
    /// Sets the global namespace key.
    #[must_use]
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.config.namespace = namespace.into();
        self
    }

    /// Sets the runtime dispatch expression.
    #[must_use]
    pub fn runtime_call(mut self, runtime_call: impl Into<String>) -> Self {
        self.config.runtime_call = runtime_call.into();
        self
    }

    /// Sets the models import specifier.
    #[must_use]
    pub fn models_module(mut self, models_module: impl Into<String>) -> Self {
        self.config.models_module = models_module.into();
        self
    }

    /// Sets the output file extension.
    #[must_use]
    pub fn file_extension(mut self, file_extension: impl Into<String>) -> Self {
        self.config.file_extension = file_extension.into();
        self
    }

    /// Validates and returns the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if validation fails.
    pub fn build(self) -> Result<GeneratorConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
