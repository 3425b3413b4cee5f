//! Selector resolution

mod arrays;
mod core;
mod filters;
mod names;
mod wildcards;

pub use arrays::{ArrayIndexSelector, IndexSelector, KeyedIndexSelector};
pub use names::{CaseInsensitiveNameSelector, ExactNameSelector, NameSelector};
