//! Error taxonomy for validation and compilation failures.
//!
//! Every error this crate reports is one variant of the closed [`Error`]
//! sum: two flat sentinels ([`Error::InvalidJsonType`],
//! [`Error::InfiniteLoop`]), the compile-failure wrapper ([`CompileError`])
//! and the tree-shaped [`ValidationError`]. Only the validation variant
//! carries the tree-composition operations; converting any other variant
//! into a tree is a checked operation that fails with [`InvalidCause`].

mod compile;
mod validation;

pub use compile::CompileError;
pub use validation::{Iter, SchemaScope, ValidationError};

use serde_json::Value;
use thiserror::Error as ThisError;

use crate::ptr::Ptr;

/// Any error produced by schema compilation or instance validation.
#[derive(Debug, Clone, PartialEq, ThisError)]
pub enum Error {
    /// The caller supplied a decoded value outside the supported JSON value
    /// kinds. A usage error, not a data-validity error.
    #[error("invalid json type: {0}")]
    InvalidJsonType(String),

    /// A schema reference cycle was detected during compilation, at the
    /// given schema path.
    #[error("infinite loop at {0}")]
    InfiniteLoop(Ptr),

    /// A schema document failed to compile.
    #[error(transparent)]
    Compile(#[from] CompileError),

    /// An instance failed validation; the full failure tree.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl Error {
    /// Extracts the tree-shaped validation variant.
    ///
    /// Composition requires a tree; any other variant is a contract
    /// violation and comes back wrapped in [`InvalidCause`].
    pub fn into_validation(self) -> Result<ValidationError, InvalidCause> {
        match self {
            Error::Validation(ve) => Ok(ve),
            other => Err(InvalidCause(other)),
        }
    }

    /// Returns true for the tree-shaped validation variant.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }
}

/// A flat error was supplied where a failure tree is required.
///
/// Carries the offending error so the caller can still report it.
#[derive(Debug, Clone, PartialEq, ThisError)]
#[error("only validation failures can be composed as causes, got: {0}")]
pub struct InvalidCause(pub Error);

/// Names the JSON kind of a decoded value.
///
/// Evaluators use this when formatting type errors and when raising
/// [`Error::InvalidJsonType`] for values their own model does not support.
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sentinel_display() {
        assert_eq!(
            Error::InvalidJsonType("channel".to_string()).to_string(),
            "invalid json type: channel"
        );
        assert_eq!(
            Error::InfiniteLoop(Ptr::new("#/definitions/node")).to_string(),
            "infinite loop at #/definitions/node"
        );
    }

    #[test]
    fn test_into_validation_accepts_trees() {
        let tree: Error = ValidationError::new("type", "expected string").into();
        let ve = tree.into_validation().unwrap();
        assert_eq!(ve.message, "expected string");
    }

    #[test]
    fn test_into_validation_rejects_flat_errors() {
        let err = Error::InvalidJsonType("function".to_string())
            .into_validation()
            .unwrap_err();
        assert_eq!(err.0, Error::InvalidJsonType("function".to_string()));
        assert!(err.to_string().contains("invalid json type: function"));
    }

    #[test]
    fn test_json_kind_covers_all_variants() {
        assert_eq!(json_kind(&json!(null)), "null");
        assert_eq!(json_kind(&json!(true)), "boolean");
        assert_eq!(json_kind(&json!(3.5)), "number");
        assert_eq!(json_kind(&json!("x")), "string");
        assert_eq!(json_kind(&json!([1])), "array");
        assert_eq!(json_kind(&json!({"a": 1})), "object");
    }
}
