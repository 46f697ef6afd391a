//! # Faultline
//!
//! Hierarchical error aggregation for structural validators.
//!
//! ## Overview
//!
//! A validator recurses through nested schema constructs, and each recursive
//! call only knows its local path fragment. Faultline composes those
//! fragments into two full pointer paths per failure (into the instance and
//! into the schema), keeps failures raised inside externally referenced
//! schema documents anchored to their own document, and renders the composed
//! cause tree deterministically. It never decides validity itself; it
//! canonicalizes and aggregates failures the evaluator already found.
//!
//! ## Core Types
//!
//! - [`Ptr`]: a pointer path (`/`-separated segments, `#`-rooted once
//!   finalized) with pure join and rooting operations
//! - [`ValidationError`]: one failed keyword check with its nested causes,
//!   plus the context-attachment and finalization protocol
//! - [`SchemaScope`]: the owning schema document's URL and internal pointer,
//!   supplied by the compiler at finalization
//! - [`Error`]: the closed sum of everything this crate reports, including
//!   the flat [`Error::InvalidJsonType`] and [`Error::InfiniteLoop`]
//!   sentinels and the [`CompileError`] wrapper
//!
//! ## Example
//!
//! ```rust
//! use faultline::{Ptr, SchemaScope, ValidationError};
//!
//! // A keyword check deep in the recursion fails with local context only.
//! let mut failure = ValidationError::new("type", "expected integer, but got string");
//!
//! // Each level on the way out attaches its own fragment.
//! failure.attach_context(&Ptr::new("age"), &Ptr::new("properties/age"));
//!
//! // The owning schema scope and the top-level return finalize the paths.
//! failure.finalize_schema_context(&SchemaScope::new("schema.json", "#"));
//! failure.finalize_instance_context();
//!
//! assert_eq!(
//!     failure.to_string(),
//!     "I[#/age] S[#/properties/age/type] expected integer, but got string"
//! );
//! ```

pub mod error;
pub mod ptr;

pub use error::{json_kind, CompileError, Error, InvalidCause, SchemaScope, ValidationError};
pub use ptr::{escape, Ptr};
