//! Filter expression evaluation (RFC 9535 Section 2.3.5)

mod comparisons;
mod core;

pub use comparisons::{compare, json_eq};
pub(crate) use self::core::FilterContext;
