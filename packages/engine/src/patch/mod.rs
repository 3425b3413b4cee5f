//! JSON Patch (RFC 6902)
//!
//! A patch is an ordered list of operations applied one after another to a
//! mutable document. Application stops at the first failing operation.

mod builder;
mod ops;

pub use builder::JsonPatch;
pub use ops::PatchOperation;

/// Patch construction and application errors
///
/// Messages end with the operation name and its position in the patch,
/// e.g. `no item to remove (remove:2)`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatchError {
    #[error("{message} ({op}:{index})")]
    Operation {
        op: String,
        index: usize,
        message: String,
    },

    #[error("test failed (test:{index})")]
    TestFailure { index: usize },

    #[error("expected an array of patch operations")]
    NotAnArray,
}

impl PatchError {
    pub(crate) fn operation(op: &str, index: usize, message: impl Into<String>) -> Self {
        Self::Operation {
            op: op.to_owned(),
            index,
            message: message.into(),
        }
    }

    /// Position of the failing operation, if the error belongs to one
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::Operation { index, .. } | Self::TestFailure { index } => Some(*index),
            Self::NotAnArray => None,
        }
    }
}

/// Patch result type
pub type PatchResult<T> = Result<T, PatchError>;
