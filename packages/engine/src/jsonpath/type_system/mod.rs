//! RFC 9535 `JSONPath` function type system
//!
//! Expression types, runtime filter values and the parse-time well-typedness
//! checks applied to function calls and comparisons.

mod core;
mod signatures;

pub use self::core::{FilterValue, FunctionType};
pub(crate) use signatures::TypeSystem;
