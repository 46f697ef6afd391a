//! Pointer paths for locating fragments in instance and schema documents.
//!
//! This module provides the [`Ptr`] type, a JSON-Pointer-like locator made of
//! `/`-separated segments and rooted at `#` once finalized, plus the
//! [`escape`] helper for preparing individual segments.

use std::fmt::{self, Display};

/// A pointer path into a tree-structured document.
///
/// A `Ptr` is either empty (the document root) or a sequence of `/`-separated
/// segments. Paths start out *relative* while a validation tree is being
/// composed and become absolute (`#`-rooted) exactly once, at finalization.
///
/// Segments are stored verbatim: reserved characters must be escaped with
/// [`escape`] before a segment enters a path.
///
/// # Example
///
/// ```rust
/// use faultline::Ptr;
///
/// let path = Ptr::join(&Ptr::new("properties/age"), &Ptr::new("type"));
/// assert_eq!(path.as_str(), "properties/age/type");
/// assert_eq!(path.to_absolute().as_str(), "#/properties/age/type");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Ptr(String);

impl Ptr {
    /// Creates an empty path representing the document root.
    pub fn root() -> Self {
        Self::default()
    }

    /// Creates a path from an already-escaped pointer string.
    pub fn new(ptr: impl Into<String>) -> Self {
        Self(ptr.into())
    }

    /// Returns true if this is the empty (root) path.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Joins two paths with a single separator.
    ///
    /// Joining with an empty operand is identity on the other operand, so a
    /// relative fragment can be prepended level by level without ever
    /// producing a leading or doubled separator.
    pub fn join(prefix: &Ptr, suffix: &Ptr) -> Ptr {
        if prefix.is_empty() {
            return suffix.clone();
        }
        if suffix.is_empty() {
            return prefix.clone();
        }
        Ptr(format!("{}/{}", prefix.0, suffix.0))
    }

    /// Returns the absolute, `#`-rooted form of this path.
    ///
    /// The empty path collapses to exactly `#`; a path that already starts
    /// with the root marker is returned unchanged, so the operation is
    /// idempotent.
    pub fn to_absolute(&self) -> Ptr {
        if self.0.is_empty() {
            return Ptr("#".to_string());
        }
        if self.0.starts_with('#') {
            return self.clone();
        }
        Ptr(format!("#/{}", self.0))
    }
}

impl From<&str> for Ptr {
    fn from(ptr: &str) -> Self {
        Ptr(ptr.to_string())
    }
}

impl From<String> for Ptr {
    fn from(ptr: String) -> Self {
        Ptr(ptr)
    }
}

impl Display for Ptr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Escapes a single path segment per JSON-Pointer rules.
///
/// `~` becomes `~0` and `/` becomes `~1`. Callers apply this to property
/// names before building fragments; [`Ptr::join`] itself never escapes.
pub fn escape(segment: &str) -> String {
    segment.replace('~', "~0").replace('/', "~1")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_path_is_empty() {
        let path = Ptr::root();
        assert!(path.is_empty());
        assert_eq!(path.as_str(), "");
        assert_eq!(path.to_string(), "");
    }

    #[test]
    fn test_join_empty_prefix_is_identity() {
        let suffix = Ptr::new("properties/name");
        assert_eq!(Ptr::join(&Ptr::root(), &suffix), suffix);
    }

    #[test]
    fn test_join_empty_suffix_is_identity() {
        let prefix = Ptr::new("items/0");
        assert_eq!(Ptr::join(&prefix, &Ptr::root()), prefix);
    }

    #[test]
    fn test_join_single_separator() {
        let joined = Ptr::join(&Ptr::new("properties"), &Ptr::new("age"));
        assert_eq!(joined.as_str(), "properties/age");
    }

    #[test]
    fn test_join_composes_left_to_right() {
        let outer = Ptr::join(&Ptr::new("a"), &Ptr::new("b"));
        let full = Ptr::join(&outer, &Ptr::new("c"));
        assert_eq!(full.as_str(), "a/b/c");
    }

    #[test]
    fn test_to_absolute_empty_is_root_marker() {
        assert_eq!(Ptr::root().to_absolute().as_str(), "#");
    }

    #[test]
    fn test_to_absolute_prefixes_relative() {
        assert_eq!(Ptr::new("age").to_absolute().as_str(), "#/age");
    }

    #[test]
    fn test_to_absolute_idempotent() {
        let paths = [Ptr::root(), Ptr::new("a/b"), Ptr::new("#/a/b"), Ptr::new("#")];
        for p in paths {
            let once = p.to_absolute();
            assert_eq!(once.to_absolute(), once);
        }
    }

    #[test]
    fn test_escape_reserved_characters() {
        assert_eq!(escape("a/b"), "a~1b");
        assert_eq!(escape("a~b"), "a~0b");
        assert_eq!(escape("~/"), "~0~1");
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_from_str() {
        let p: Ptr = "properties/x".into();
        assert_eq!(p.as_str(), "properties/x");
    }
}
