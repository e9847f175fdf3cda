//! Output types of binding generation.
//!
//! # Examples
//!
//! ```
//! use stubgen_codegen::{GeneratedBindings, GeneratedModule};
//!
//! let mut generated = GeneratedBindings::new();
//! generated.insert(GeneratedModule {
//!     package: "main".to_string(),
//!     content: "// bindings".to_string(),
//!     models: vec![],
//! });
//!
//! assert_eq!(generated.len(), 1);
//! assert_eq!(generated.get("main").unwrap().file_name("js"), "main.js");
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use stubgen_core::{Error, Result};

/// Generated source of one package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedModule {
    /// Display name of the package
    pub package: String,
    /// Complete module text
    pub content: String,
    /// Display names imported from the models module, sorted
    pub models: Vec<String>,
}

impl GeneratedModule {
    /// Returns the file name of this module for `extension`.
    #[must_use]
    pub fn file_name(&self, extension: &str) -> String {
        format!("{}.{extension}", self.package)
    }
}

/// All modules of a generation run, keyed by display package name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedBindings {
    modules: BTreeMap<String, GeneratedModule>,
}

impl GeneratedBindings {
    /// Creates an empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a module, replacing any module with the same package name.
    pub fn insert(&mut self, module: GeneratedModule) {
        self.modules.insert(module.package.clone(), module);
    }

    /// Returns the module of display package `package`.
    #[must_use]
    pub fn get(&self, package: &str) -> Option<&GeneratedModule> {
        self.modules.get(package)
    }

    /// Returns the number of modules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// Returns `true` if no module was generated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Iterates over modules ordered by package name.
    pub fn modules(&self) -> impl Iterator<Item = &GeneratedModule> {
        self.modules.values()
    }

    /// Returns the package name to module text mapping.
    #[must_use]
    pub fn into_sources(self) -> BTreeMap<String, String> {
        self.modules
            .into_iter()
            .map(|(package, module)| (package, module.content))
            .collect()
    }

    /// Writes every module to `dir/<package>.<extension>`.
    ///
    /// Creates `dir` if needed and returns the written paths in package
    /// order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IoError`] if the directory cannot be created or a
    /// file cannot be written.
    pub fn write_to_dir(&self, dir: impl AsRef<Path>, extension: &str) -> Result<Vec<PathBuf>> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir).map_err(|source| Error::IoError {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut written = Vec::with_capacity(self.modules.len());
        for module in self.modules.values() {
            let path = dir.join(module.file_name(extension));
            std::fs::write(&path, &module.content).map_err(|source| Error::IoError {
                path: path.clone(),
                source,
            })?;
            tracing::debug!("Wrote {}", path.display());
            written.push(path);
        }

        Ok(written)
    }
}
