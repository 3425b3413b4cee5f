//! # jsonp3
//!
//! RFC 9535 `JSONPath` for `serde_json` values, with JSON Pointer (RFC 6901)
//! and JSON Patch (RFC 6902) utilities.
//!
//! The free functions in this crate use the default configuration. Compile
//! once with [`compile`] and reuse the [`CompiledQuery`] when a query runs
//! more than once, or build a [`JsonPathCompiler`] for a custom
//! configuration.
//!
//! ```
//! use serde_json::json;
//!
//! let doc = json!({"c": "cd", "values": [{"a": "ab"}, {"c": "d"}, {"a": null}]});
//! let nodes = jsonp3::find("$.values[?length(@.a) == 2]", &doc).unwrap();
//! assert_eq!(nodes.paths(), vec!["$['values'][0]"]);
//!
//! let query = jsonp3::compile("$..c").unwrap();
//! assert_eq!(jsonp3::find(&query, &doc).unwrap().len(), 2);
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

use std::borrow::Cow;

use serde_json::Value;

// Re-export the engine's public API
pub use jsonp3_engine::config::{self, JsonPathConfig, JsonPathConfigBuilder};
pub use jsonp3_engine::error::{ErrorKind, JsonPathError, JsonPathResult};
pub use jsonp3_engine::jsonpath::functions::{
    FunctionError, FunctionExtension, FunctionRegistry, RegistryError,
};
pub use jsonp3_engine::jsonpath::{
    self, CompiledQuery, FilterValue, FunctionType, JsonPathCompiler, JsonPathNode, NodeIter,
    NodeList,
};
pub use jsonp3_engine::patch::{self, JsonPatch, PatchError, PatchOperation};
pub use jsonp3_engine::pointer::{self, JsonPointer, PointerError, RelativeJsonPointer};
pub use jsonp3_engine::prelude;

/// A query given either as text or already compiled
pub trait AsQuery {
    /// The compiled form, compiling with the default configuration if needed
    ///
    /// # Errors
    ///
    /// Returns the compilation error for query text.
    fn as_query(&self) -> JsonPathResult<Cow<'_, CompiledQuery>>;
}

impl AsQuery for str {
    fn as_query(&self) -> JsonPathResult<Cow<'_, CompiledQuery>> {
        compile(self).map(Cow::Owned)
    }
}

impl AsQuery for String {
    fn as_query(&self) -> JsonPathResult<Cow<'_, CompiledQuery>> {
        self.as_str().as_query()
    }
}

impl AsQuery for CompiledQuery {
    fn as_query(&self) -> JsonPathResult<Cow<'_, CompiledQuery>> {
        Ok(Cow::Borrowed(self))
    }
}

/// Compile `query` with the default configuration
///
/// # Errors
///
/// Returns a syntax, type or name error for invalid queries.
pub fn compile(query: &str) -> JsonPathResult<CompiledQuery> {
    CompiledQuery::compile(query)
}

/// All nodes `query` selects from `value`
///
/// # Errors
///
/// Returns compilation errors for query text, and recursion or function
/// errors raised while evaluating.
pub fn find<'a, Q: AsQuery + ?Sized>(query: &Q, value: &'a Value) -> JsonPathResult<NodeList<'a>> {
    query.as_query()?.find(value)
}

/// Lazily select nodes with a compiled query
pub fn find_iter<'q, 'a: 'q>(query: &'q CompiledQuery, value: &'a Value) -> NodeIter<'q, 'a> {
    query.find_iter(value)
}

/// The first node `query` selects from `value`
///
/// # Errors
///
/// See [`find`].
pub fn first<'a, Q: AsQuery + ?Sized>(
    query: &Q,
    value: &'a Value,
) -> JsonPathResult<Option<JsonPathNode<'a>>> {
    query.as_query()?.first(value)
}

/// True if `query` selects at least one node from `value`
///
/// # Errors
///
/// See [`find`].
pub fn is_match<Q: AsQuery + ?Sized>(query: &Q, value: &Value) -> JsonPathResult<bool> {
    query.as_query()?.is_match(value)
}

/// Resolve a JSON Pointer, returning `default` if it does not resolve
///
/// # Errors
///
/// Returns a [`PointerError`] if `pointer` is malformed.
pub fn resolve_pointer<'a>(
    pointer: &str,
    value: &'a Value,
    default: &'a Value,
) -> Result<&'a Value, PointerError> {
    Ok(JsonPointer::parse(pointer)?.resolve_or(value, default))
}

/// Apply a JSON Patch document to `value`
///
/// # Errors
///
/// Returns a [`PatchError`] if `patch` is not a valid patch document or an
/// operation fails. `value` may be partially modified in the latter case.
pub fn apply_patch(patch: &Value, value: &mut Value) -> Result<(), PatchError> {
    let patch = JsonPatch::from_value(patch)?;
    tracing::debug!(operations = patch.len(), "applying JSON patch");
    patch.apply(value)
}
