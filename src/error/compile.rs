//! Compile-failure wrapper for schemas that could not be compiled.

use std::fmt::{self, Display};

use crate::error::Error;

/// A schema document that failed to compile.
///
/// The cause is frequently a finalized [`ValidationError`] tree from
/// validating the schema document against its own meta-schema.
///
/// [`ValidationError`]: crate::ValidationError
#[derive(Debug, Clone, PartialEq)]
pub struct CompileError {
    /// URL of the schema that failed to compile.
    pub schema_url: String,
    /// The underlying error.
    pub cause: Box<Error>,
}

impl CompileError {
    /// Wraps `cause` as a compile failure of the schema at `schema_url`.
    pub fn new(schema_url: impl Into<String>, cause: Error) -> Self {
        Self {
            schema_url: schema_url.into(),
            cause: Box::new(cause),
        }
    }
}

impl Display for CompileError {
    /// The alternate form (`{:#}`) appends the cause, rendered as a full
    /// tree when the cause is a validation failure.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "json-schema {:?} compilation failed", self.schema_url)?;
        if f.alternate() {
            match &*self.cause {
                Error::Validation(ve) => write!(f, ". Reason:\n{:#}", ve)?,
                other => write!(f, ". Reason: {}", other)?,
            }
        }
        Ok(())
    }
}

impl std::error::Error for CompileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&*self.cause)
    }
}
