//! RFC 9535 `JSONPath` Function Extensions (Section 2.4)
//!
//! Implements the five built-in function extensions:
//! - `length()` (2.4.4) - Returns length of strings, arrays, or objects
//! - `count()` (2.4.5) - Returns count of nodes in a nodelist
//! - `match()` (2.4.6) - Tests if string matches regular expression
//! - `search()` (2.4.7) - Tests if string contains match for regex
//! - `value()` (2.4.8) - Converts single-node nodelist to value
//!
//! Further extensions implement [`FunctionExtension`] and are added to a
//! [`FunctionRegistry`] through the configuration builder.

pub mod function_evaluator;
pub mod iregexp;
pub mod regex_cache;
pub mod registry;
pub mod types;

pub use function_evaluator::{Count, Length, Match, Search, ValueOf};
pub use regex_cache::RegexCache;
pub use registry::{FunctionRegistry, RegistryError};
pub use types::{FunctionError, FunctionExtension};
