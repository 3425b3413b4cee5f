//! `JSONPath` error handling module
//!
//! Error types raised while tokenizing, parsing and evaluating `JSONPath`
//! queries, together with constructors and caret-style diagnostics.

mod constructors;
mod diagnostics;
mod types;

pub use types::{ErrorKind, JsonPathError, JsonPathResult};
