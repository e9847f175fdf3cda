//! Short, collision-free display names for package identifiers.
//!
//! Package identifiers are often import paths (`github.com/acme/models`).
//! Generated modules are named after the last path segment instead, which
//! can collide; collisions are resolved by appending a number taken from a
//! counter shared by the whole run. The counter is bumped on every
//! collision, so a suffix reflects encounter order across all names rather
//! than how often one particular name collided. When a suffixed name is
//! itself taken the counter advances again and the suffix is appended to the
//! bare candidate, so `a/x`, `b/x`, `x2` becomes `x`, `x3`, `x23`.
//!
//! # Examples
//!
//! ```
//! use stubgen_codegen::normalise_package_names;
//!
//! let names = normalise_package_names(["github.com/x/models", "github.com/y/models", "main"]);
//!
//! assert_eq!(names.get("github.com/x/models"), Some("models"));
//! assert_eq!(names.get("github.com/y/models"), Some("models2"));
//! assert_eq!(names.get("main"), Some("main"));
//! ```

use std::collections::{BTreeMap, HashMap, HashSet};

/// Mapping from original package identifier to display name.
///
/// Built once per generation run. Distinct identifiers always map to
/// distinct display names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageNames {
    names: HashMap<String, String>,
}

impl PackageNames {
    /// Returns the display name of `original`, if it was part of the run.
    #[must_use]
    pub fn get(&self, original: &str) -> Option<&str> {
        self.names.get(original).map(String::as_str)
    }

    /// Returns the display name of `original`, falling back to the
    /// identifier itself when it was not part of the run.
    #[must_use]
    pub fn display_name<'a>(&'a self, original: &'a str) -> &'a str {
        self.get(original).unwrap_or(original)
    }

    /// Returns the number of mapped identifiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` if nothing was mapped.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Returns the mapping ordered by original identifier.
    #[must_use]
    pub fn to_sorted_map(&self) -> BTreeMap<&str, &str> {
        self.names
            .iter()
            .map(|(original, display)| (original.as_str(), display.as_str()))
            .collect()
    }
}

/// Assigns display names to `identifiers` in the order given.
///
/// Repeated identifiers keep the name assigned on first sight. A candidate
/// that is already taken receives the next value of the run's collision
/// counter as suffix; the counter keeps advancing until the suffixed name is
/// free as well.
#[must_use]
pub fn normalise_package_names<I, S>(identifiers: I) -> PackageNames
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut names = HashMap::new();
    let mut assigned: HashSet<String> = HashSet::new();
    let mut collisions: u32 = 1;

    for identifier in identifiers {
        let original = identifier.as_ref();
        if names.contains_key(original) {
            continue;
        }

        let candidate = original.rsplit('/').next().unwrap_or(original);
        let mut display_name = candidate.to_string();
        while assigned.contains(&display_name) {
            collisions += 1;
            display_name = format!("{candidate}{collisions}");
        }

        if display_name != candidate {
            tracing::debug!("Package '{original}' renamed to '{display_name}' to avoid a collision");
        }

        assigned.insert(display_name.clone());
        names.insert(original.to_string(), display_name);
    }

    PackageNames { names }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_injective(names: &PackageNames) {
        let displays: HashSet<&str> = names.to_sorted_map().into_values().collect();
        assert_eq!(displays.len(), names.len());
    }

    #[test]
    fn test_plain_identifier_maps_to_itself() {
        let names = normalise_package_names(["main"]);
        assert_eq!(names.get("main"), Some("main"));
        assert_eq!(names.len(), 1);
    }

    #[test]
    fn test_path_reduced_to_last_segment() {
        let names = normalise_package_names(["github.com/acme/app/services"]);
        assert_eq!(names.get("github.com/acme/app/services"), Some("services"));
    }

    #[test]
    fn test_collision_gets_suffix() {
        let names = normalise_package_names(["github.com/x/models", "github.com/y/models"]);
        assert_eq!(names.get("github.com/x/models"), Some("models"));
        assert_eq!(names.get("github.com/y/models"), Some("models2"));
    }

    #[test]
    fn test_collision_counter_is_shared_across_names() {
        let names = normalise_package_names([
            "a/models",
            "b/models",
            "a/services",
            "b/services",
            "c/models",
        ]);

        assert_eq!(names.get("a/models"), Some("models"));
        assert_eq!(names.get("b/models"), Some("models2"));
        assert_eq!(names.get("a/services"), Some("services"));
        assert_eq!(names.get("b/services"), Some("services3"));
        assert_eq!(names.get("c/models"), Some("models4"));
    }

    #[test]
    fn test_suffixed_name_never_reuses_existing_name() {
        let names = normalise_package_names(["x2", "a/x", "b/x"]);

        assert_eq!(names.get("x2"), Some("x2"));
        assert_eq!(names.get("a/x"), Some("x"));
        assert_eq!(names.get("b/x"), Some("x3"));
        assert_injective(&names);
    }

    #[test]
    fn test_taken_suffix_moves_counter_again() {
        let names = normalise_package_names(["a/x", "b/x", "x2"]);

        assert_eq!(names.get("a/x"), Some("x"));
        assert_eq!(names.get("b/x"), Some("x2"));
        assert_eq!(names.get("x2"), Some("x23"));
        assert_injective(&names);
    }

    #[test]
    fn test_collision_logged_with_debug_subscriber() {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .finish();

        let names = tracing::subscriber::with_default(subscriber, || {
            normalise_package_names(["github.com/x/models", "github.com/y/models"])
        });

        assert_eq!(names.get("github.com/y/models"), Some("models2"));
    }

    #[test]
    fn test_repeated_identifier_keeps_first_name() {
        let names = normalise_package_names(["a/models", "a/models", "b/models"]);
        assert_eq!(names.len(), 2);
        assert_eq!(names.get("a/models"), Some("models"));
        assert_eq!(names.get("b/models"), Some("models2"));
    }

    #[test]
    fn test_mapping_is_total_and_injective() {
        let identifiers = [
            "main",
            "models",
            "github.com/a/models",
            "github.com/b/models",
            "github.com/b/main",
            "models2",
            "x/models2",
        ];
        let names = normalise_package_names(identifiers);

        for identifier in identifiers {
            assert!(names.get(identifier).is_some(), "{identifier} not mapped");
        }
        assert_injective(&names);
    }

    #[test]
    fn test_display_name_falls_back_to_original() {
        let names = normalise_package_names(["main"]);
        assert_eq!(names.display_name("main"), "main");
        assert_eq!(names.display_name("unknown/pkg"), "unknown/pkg");
    }

    #[test]
    fn test_empty_input() {
        let names = normalise_package_names(Vec::<String>::new());
        assert!(names.is_empty());
    }
}
