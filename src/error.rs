//! Error types for the agreement engine.
//!
//! Missing linguistic information is never an error; features that cannot be
//! determined come back as `None`. These errors cover malformed input handed
//! to the crate by its callers.

use thiserror::Error;

/// Errors raised while reading trees or tags.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CorefError {
    /// Malformed bracketed parse tree.
    #[error("tree error at byte {offset}: {message}")]
    Tree { offset: usize, message: String },

    /// A named-entity tag outside the supported tag set.
    #[error("unknown entity type tag: {0:?}")]
    UnknownEntityType(String),

    /// A gender value that is not one of the dictionary spellings.
    #[error("unknown gender: {0:?}")]
    UnknownGender(String),
}

impl CorefError {
    pub(crate) fn tree(offset: usize, message: impl Into<String>) -> Self {
        Self::Tree {
            offset,
            message: message.into(),
        }
    }
}

/// Result type for fallible operations in this crate.
pub type CorefResult<T> = Result<T, CorefError>;
