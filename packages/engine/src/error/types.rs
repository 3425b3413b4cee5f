//! JSON Path Error Types
//!
//! Core error types for query compilation and evaluation.

use std::error::Error;
use std::fmt;

use crate::jsonpath::tokens::Token;

/// JSON Path error categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed query text, invalid literal or unbalanced brackets
    Syntax,
    /// Function arity or argument type mismatch, non-comparable operand
    Type,
    /// Undefined function extension
    Name,
    /// Descendant segment depth limit exceeded
    Recursion,
    /// A function extension failed at evaluation time
    Function,
}

impl ErrorKind {
    /// Name used when rendering errors, e.g. `SyntaxError`
    #[inline]
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Syntax => "SyntaxError",
            Self::Type => "TypeError",
            Self::Name => "NameError",
            Self::Recursion => "RecursionError",
            Self::Function => "FunctionError",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Main JSON Path error type
///
/// Every error carries the token it was raised for. Errors that do not come
/// from the query text, like a recursion limit hit while walking a document,
/// carry the token of the segment or function call that raised them.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonPathError {
    pub kind: ErrorKind,
    pub message: String,
    pub token: Token,
}

impl fmt::Display for JsonPathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (line, column) = self.line_and_column();
        write!(
            f,
            "{}: {}, line {line}, column {column}",
            self.kind, self.message
        )
    }
}

impl Error for JsonPathError {}

/// Result type for JSON Path operations
pub type JsonPathResult<T> = Result<T, JsonPathError>;
