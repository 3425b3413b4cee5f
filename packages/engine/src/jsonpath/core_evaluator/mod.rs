//! Query evaluation
//!
//! Segments are applied one after another, each to every node produced by
//! the previous one. Selectors resolve against a single node and append their
//! matches to an output list, so the document order of results is preserved.

mod core;
mod iterator;
mod recursive_descent;
pub mod selectors;

pub(crate) use self::core::Evaluator;
pub use iterator::NodeIter;
pub use selectors::{
    ArrayIndexSelector, CaseInsensitiveNameSelector, ExactNameSelector, IndexSelector,
    KeyedIndexSelector, NameSelector,
};
