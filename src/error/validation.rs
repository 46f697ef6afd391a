//! Validation failure trees and pointer-context composition.
//!
//! This module provides [`ValidationError`], the tree node produced by a
//! failed keyword check, together with the context-attachment and
//! finalization protocol that turns locally relative pointer fragments into
//! full instance-side and schema-side paths.

use std::fmt::{self, Display};

use crate::error::{Error, InvalidCause};
use crate::ptr::Ptr;

/// Identity of a schema scope: the owning document plus the schema's own
/// location within that document.
///
/// Supplied by the schema compiler at `finalize_schema_context` call sites.
/// The `ptr` is the schema's absolute pointer in its document (`#` for a
/// document root), so joining it in front of a relative path roots the path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaScope {
    /// URL of the schema document.
    pub url: String,
    /// Absolute pointer to this schema within its document.
    pub ptr: Ptr,
}

impl SchemaScope {
    /// Creates a scope for a schema at `ptr` inside the document at `url`.
    pub fn new(url: impl Into<String>, ptr: impl Into<Ptr>) -> Self {
        Self {
            url: url.into(),
            ptr: ptr.into(),
        }
    }
}

/// A single failed keyword check, with the nested failures that caused it.
///
/// A `ValidationError` is created by a keyword check knowing only its local
/// path fragments; ancestors compose the full paths as the recursion unwinds:
///
/// 1. [`attach_context`](Self::attach_context) prepends one level of path
///    context per recursion level (O(1) appends, paths stay relative),
/// 2. [`finalize_schema_context`](Self::finalize_schema_context) anchors the
///    subtree to its owning schema document when that schema's scope exits,
/// 3. [`finalize_instance_context`](Self::finalize_instance_context) makes
///    instance paths absolute, once, at the outermost validation return.
///
/// After step 3 the tree is complete and is never mutated again.
///
/// # Example
///
/// ```rust
/// use faultline::{Ptr, SchemaScope, ValidationError};
///
/// // A "type" check under property "age" failed.
/// let mut leaf = ValidationError::new("type", "expected integer, but got string");
/// leaf.attach_context(&Ptr::new("age"), &Ptr::new("properties/age"));
///
/// let mut root = ValidationError::new("", "validation failed");
/// root.add_cause(leaf.into()).unwrap();
/// root.finalize_schema_context(&SchemaScope::new("schema.json", "#"));
/// root.finalize_instance_context();
///
/// let cause = &root.causes[0];
/// assert_eq!(cause.instance_ptr.as_str(), "#/age");
/// assert_eq!(cause.schema_ptr.as_str(), "#/properties/age/type");
/// assert_eq!(cause.schema_url, "schema.json");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Human-readable description of the local failure.
    pub message: String,
    /// Pointer into the instance document; relative until
    /// `finalize_instance_context` runs.
    pub instance_ptr: Ptr,
    /// URL of the schema document this failure belongs to; empty until the
    /// owning schema scope finalizes the subtree.
    pub schema_url: String,
    /// Pointer into the schema document; frozen once `schema_url` is set.
    pub schema_ptr: Ptr,
    /// Nested failures, in evaluation order.
    pub causes: Vec<ValidationError>,
}

impl ValidationError {
    /// Creates a leaf failure for a keyword check at `schema_ptr`, a path
    /// fragment relative to the schema being evaluated.
    pub fn new(schema_ptr: impl Into<Ptr>, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            instance_ptr: Ptr::root(),
            schema_url: String::new(),
            schema_ptr: schema_ptr.into(),
            causes: Vec::new(),
        }
    }

    /// Prepends one level of path context to this node and every descendant.
    ///
    /// `instance_prefix` (a property name, an array index) is prepended to
    /// every node's instance pointer. `schema_prefix` (a keyword name) is
    /// prepended to the schema pointer only on nodes whose `schema_url` is
    /// still unset: a set URL means the node was already anchored to a
    /// referenced schema document and no longer shares this ancestor's
    /// schema root.
    pub fn attach_context(&mut self, instance_prefix: &Ptr, schema_prefix: &Ptr) {
        self.instance_ptr = Ptr::join(instance_prefix, &self.instance_ptr);
        if self.schema_url.is_empty() {
            self.schema_ptr = Ptr::join(schema_prefix, &self.schema_ptr);
        }
        for cause in &mut self.causes {
            cause.attach_context(instance_prefix, schema_prefix);
        }
    }

    /// Attaches a nested failure as the next cause of this one.
    ///
    /// The cause receives this node's current (still relative) pointers as
    /// context and is appended after any existing causes; composition never
    /// reorders. Only the validation variant can be composed into a tree;
    /// passing a flat error returns [`InvalidCause`] with the offending
    /// value.
    pub fn add_cause(&mut self, cause: Error) -> Result<&mut Self, InvalidCause> {
        let mut cause = cause.into_validation()?;
        cause.attach_context(&self.instance_ptr, &self.schema_ptr);
        self.causes.push(cause);
        Ok(self)
    }

    /// Anchors this subtree to the schema scope that owns it.
    ///
    /// First writer wins: if `schema_url` is already set the node was
    /// finalized by a more deeply nested, referenced schema document, and
    /// descent stops without touching the subtree. Otherwise the scope's URL
    /// is recorded, the schema pointer is rooted under the scope's own
    /// pointer, and finalization recurses into the causes.
    pub fn finalize_schema_context(&mut self, scope: &SchemaScope) {
        if self.schema_url.is_empty() {
            self.schema_url = scope.url.clone();
            self.schema_ptr = Ptr::join(&scope.ptr, &self.schema_ptr);
            for cause in &mut self.causes {
                cause.finalize_schema_context(scope);
            }
        }
    }

    /// Makes every instance pointer in the tree absolute.
    ///
    /// Called exactly once, at the outermost validation return, after all
    /// `attach_context` calls have composed the full relative path from the
    /// document root.
    pub fn finalize_instance_context(&mut self) {
        self.instance_ptr = self.instance_ptr.to_absolute();
        for cause in &mut self.causes {
            cause.finalize_instance_context();
        }
    }

    /// Returns a depth-first, insertion-order iterator over this node and
    /// all of its descendants.
    pub fn iter(&self) -> Iter<'_> {
        Iter { stack: vec![self] }
    }
}

/// Depth-first iterator over a failure tree. See [`ValidationError::iter`].
pub struct Iter<'a> {
    stack: Vec<&'a ValidationError>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a ValidationError;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.causes.iter().rev());
        Some(node)
    }
}

impl Display for ValidationError {
    /// Renders `I[<instance>] S[<schema>] <message>`.
    ///
    /// The alternate form (`{:#}`) appends each cause's tree rendering,
    /// every nesting level indented two further spaces, depth-first and in
    /// insertion order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "I[{}] S[{}] {}",
            self.instance_ptr, self.schema_ptr, self.message
        )?;
        if f.alternate() {
            for cause in &self.causes {
                for line in format!("{:#}", cause).lines() {
                    write!(f, "\n  {}", line)?;
                }
            }
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// The composition protocol assumes exclusive ownership per validation call;
// the types themselves must stay safe to move across threads.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<ValidationError>();
    assert_sync::<ValidationError>();
};
