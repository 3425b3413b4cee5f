//! Node locations and normalized path strings
//!
//! A location is a persistent linked chain from a node back to the document
//! root. Children share their parent's chain, so extending a location during
//! traversal is O(1). Canonical `$['a'][0]` strings are only built on demand.

mod generator;
mod types;

pub use generator::canonical_string;
pub use types::{Location, PathElement};
