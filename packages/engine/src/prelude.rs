//! Commonly used types
//!
//! `use jsonp3_engine::prelude::*;` brings in everything needed to compile
//! and run queries, plus the pointer and patch types.

// Queries
pub use crate::jsonpath::{CompiledQuery, JsonPathCompiler, JsonPathNode, NodeIter, NodeList};

// Configuration
pub use crate::config::{JsonPathConfig, JsonPathConfigBuilder};

// Function extensions
pub use crate::jsonpath::functions::{FunctionError, FunctionExtension, FunctionRegistry};
pub use crate::jsonpath::type_system::{FilterValue, FunctionType};

// Errors
pub use crate::error::{ErrorKind, JsonPathError, JsonPathResult};

// Pointers and patches
pub use crate::patch::{JsonPatch, PatchError};
pub use crate::pointer::{JsonPointer, PointerError, RelativeJsonPointer};
