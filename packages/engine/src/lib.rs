//! # jsonp3 engine
//!
//! RFC 9535 `JSONPath` queries over `serde_json` values, with the companion
//! JSON Pointer (RFC 6901) and JSON Patch (RFC 6902) utilities.
//!
//! ```
//! use jsonp3_engine::prelude::*;
//! use serde_json::json;
//!
//! let doc = json!({"store": {"book": [{"price": 8}, {"price": 23}]}});
//! let query = CompiledQuery::compile("$.store.book[?@.price < 10]").unwrap();
//! let node = query.first(&doc).unwrap().unwrap();
//! assert_eq!(node.path(), "$['store']['book'][0]");
//! assert_eq!(node.pointer().to_string(), "/store/book/0");
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod jsonpath;
pub mod patch;
pub mod pointer;
pub mod prelude;

pub use config::{JsonPathConfig, JsonPathConfigBuilder};
pub use error::{ErrorKind, JsonPathError, JsonPathResult};
pub use jsonpath::{CompiledQuery, JsonPathCompiler, JsonPathNode, NodeIter, NodeList};
pub use patch::{JsonPatch, PatchError};
pub use pointer::{JsonPointer, PointerError, RelativeJsonPointer};
