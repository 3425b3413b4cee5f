//! RFC 9535 `JSONPath` query engine
//!
//! Queries are scanned by a state machine lexer, parsed into a closed syntax
//! tree with function calls type checked against the registry, and then run
//! against `serde_json` documents either eagerly or lazily.
//!
//! # Examples
//!
//! ```
//! use jsonp3_engine::jsonpath::CompiledQuery;
//! use serde_json::json;
//!
//! let doc = json!({"a": [1, 2, 3, 4, 5]});
//! let query = CompiledQuery::compile("$.a[3:0:-1]").unwrap();
//! let nodes = query.find(&doc).unwrap();
//! assert_eq!(nodes.values(), vec![&json!(4), &json!(3), &json!(2)]);
//! assert_eq!(nodes.paths(), vec!["$['a'][3]", "$['a'][2]", "$['a'][1]"]);
//! ```

pub mod ast;
pub mod compiler;
pub mod core_evaluator;
pub mod expression;
pub mod filter;
mod filter_parser;
pub mod functions;
pub mod node;
pub mod normalized_paths;
pub(crate) mod parser;
mod selector_parser;
pub mod tokenizer;
pub mod tokens;
pub mod type_system;
pub mod unescape;

pub use compiler::JsonPathCompiler;
pub use core_evaluator::NodeIter;
pub use expression::CompiledQuery;
pub use node::{JsonPathNode, NodeList};
pub use normalized_paths::{Location, PathElement};
pub use tokenizer::tokenize;
pub use tokens::{Token, TokenKind};
pub use type_system::{FilterValue, FunctionType};
