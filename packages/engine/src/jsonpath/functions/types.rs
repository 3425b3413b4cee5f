//! Function extension interface

use std::fmt;

use crate::jsonpath::type_system::{FilterValue, FunctionType};

/// Errors a function extension can raise while being called
#[derive(Debug, thiserror::Error)]
pub enum FunctionError {
    #[error("invalid regular expression '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: Box<regex::Error>,
    },

    #[error("{0}")]
    Failed(String),
}

/// A function callable from filter expressions
///
/// The declared parameter and result types are checked when a query is
/// compiled, so `call` receives exactly `parameter_types().len()` arguments.
/// Node list arguments for value-typed parameters arrive unpacked: no nodes
/// as [`FilterValue::Nothing`] and a single node as its value.
pub trait FunctionExtension: Send + Sync + fmt::Debug {
    fn parameter_types(&self) -> &[FunctionType];

    fn return_type(&self) -> FunctionType;

    /// Evaluate the function
    ///
    /// # Errors
    ///
    /// Returns a [`FunctionError`] when the function cannot produce a result.
    /// The built-in functions only fail for invalid patterns in strict mode.
    fn call<'a>(&self, args: Vec<FilterValue<'a>>) -> Result<FilterValue<'a>, FunctionError>;
}
