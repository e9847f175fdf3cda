//! JavaScript identifier sanitizing.
//!
//! Parameter names come straight from backend metadata and may collide with
//! JavaScript reserved words, which are not legal as bare parameter names.
//!
//! # Examples
//!
//! ```
//! use stubgen_codegen::identifier::sanitize_identifier;
//!
//! assert_eq!(sanitize_identifier("delete"), "_delete");
//! assert_eq!(sanitize_identifier("name"), "name");
//! ```

use std::borrow::Cow;

/// JavaScript reserved words that cannot be used as parameter names.
pub const RESERVED_WORDS: &[&str] = &[
    "break",
    "case",
    "catch",
    "class",
    "const",
    "continue",
    "debugger",
    "default",
    "delete",
    "do",
    "else",
    "enum",
    "export",
    "extends",
    "false",
    "finally",
    "for",
    "function",
    "if",
    "implements",
    "import",
    "in",
    "instanceof",
    "interface",
    "let",
    "new",
    "null",
    "package",
    "private",
    "protected",
    "public",
    "return",
    "static",
    "super",
    "switch",
    "this",
    "throw",
    "true",
    "try",
    "typeof",
    "var",
    "void",
    "while",
    "with",
    "yield",
];

/// Returns `true` if `name` is exactly a reserved word.
///
/// # Examples
///
/// ```
/// use stubgen_codegen::identifier::is_reserved_word;
///
/// assert!(is_reserved_word("class"));
/// assert!(!is_reserved_word("Class"));
/// assert!(!is_reserved_word("classes"));
/// ```
#[must_use]
pub fn is_reserved_word(name: &str) -> bool {
    RESERVED_WORDS.contains(&name)
}

/// Prefixes reserved words with an underscore and returns anything else
/// unchanged.
#[must_use]
pub fn sanitize_identifier(name: &str) -> Cow<'_, str> {
    if is_reserved_word(name) {
        Cow::Owned(format!("_{name}"))
    } else {
        Cow::Borrowed(name)
    }
}
