//! JSON Pointer (RFC 6901) and Relative JSON Pointer
//!
//! Independent of the query engine, except that a query result node can be
//! converted into the pointer addressing it.

mod core;
mod relative;

pub(crate) use self::core::parse_index;
pub use self::core::JsonPointer;
pub use relative::{RelativeJsonPointer, RelativeTarget};

/// Pointer parsing and resolution errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PointerError {
    #[error("{0}")]
    Syntax(String),

    #[error("{0}")]
    Index(String),

    #[error("no such property or item '{0}'")]
    NotFound(String),
}

/// Pointer result type
pub type PointerResult<T> = Result<T, PointerError>;
