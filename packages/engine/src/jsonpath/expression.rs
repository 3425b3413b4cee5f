//! Compiled queries

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::config::JsonPathConfig;
use crate::error::JsonPathResult;
use crate::jsonpath::ast::Query;
use crate::jsonpath::compiler::JsonPathCompiler;
use crate::jsonpath::core_evaluator::{Evaluator, NodeIter};
use crate::jsonpath::node::{JsonPathNode, NodeList};

/// A parsed and checked query, ready to run against any number of documents
///
/// Compiled queries are immutable and can be shared between threads.
///
/// # Examples
/// ```
/// use jsonp3_engine::jsonpath::CompiledQuery;
/// use serde_json::json;
///
/// let query = CompiledQuery::compile("$.users[?@.age > 30].name").unwrap();
/// let doc = json!({"users": [{"name": "ada", "age": 36}, {"name": "bob", "age": 25}]});
/// let nodes = query.find(&doc).unwrap();
/// assert_eq!(nodes.values(), vec![&json!("ada")]);
/// assert_eq!(nodes.paths(), vec!["$['users'][0]['name']"]);
/// ```
#[derive(Debug, Clone)]
pub struct CompiledQuery {
    source: Arc<str>,
    query: Query,
    config: Arc<JsonPathConfig>,
}

impl CompiledQuery {
    pub(crate) fn new(source: Arc<str>, query: Query, config: Arc<JsonPathConfig>) -> Self {
        Self {
            source,
            query,
            config,
        }
    }

    /// Compile `query` with the default configuration
    ///
    /// # Errors
    ///
    /// See [`JsonPathCompiler::compile`].
    pub fn compile(query: &str) -> JsonPathResult<Self> {
        JsonPathCompiler::default().compile(query)
    }

    /// Compile `query` with `config`
    ///
    /// # Errors
    ///
    /// See [`JsonPathCompiler::compile`].
    pub fn compile_with(query: &str, config: Arc<JsonPathConfig>) -> JsonPathResult<Self> {
        JsonPathCompiler::with_shared(config).compile(query)
    }

    /// All nodes selected from `value`, in document order
    ///
    /// # Errors
    ///
    /// Returns a recursion error if a descendant segment goes deeper than the
    /// configured limit, or a function error from a strict regex function.
    pub fn find<'a>(&self, value: &'a Value) -> JsonPathResult<NodeList<'a>> {
        self.evaluator()
            .resolve(self.query.segments(), JsonPathNode::root(value))
    }

    /// Lazily select nodes from `value`
    ///
    /// Yields the same nodes in the same order as [`find`](Self::find). An
    /// error is yielded at most once and ends the iteration.
    pub fn find_iter<'q, 'a: 'q>(&'q self, value: &'a Value) -> NodeIter<'q, 'a> {
        NodeIter::new(self.evaluator(), self.query.segments(), JsonPathNode::root(value))
    }

    /// The first selected node, if any
    ///
    /// # Errors
    ///
    /// See [`find`](Self::find). Errors after the first node are not reported.
    pub fn first<'a>(&self, value: &'a Value) -> JsonPathResult<Option<JsonPathNode<'a>>> {
        self.find_iter(value).next().transpose()
    }

    /// True if the query selects at least one node
    ///
    /// # Errors
    ///
    /// See [`first`](Self::first).
    pub fn is_match(&self, value: &Value) -> JsonPathResult<bool> {
        Ok(self.first(value)?.is_some())
    }

    /// True if the query can select at most one node from any document
    /// under its configuration
    #[inline]
    #[must_use]
    pub fn is_singular(&self) -> bool {
        self.query.is_singular_in(&self.config)
    }

    /// True for `$`, which selects only the root
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.query.is_empty()
    }

    /// The query text this was compiled from
    #[inline]
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    #[inline]
    #[must_use]
    pub fn query(&self) -> &Query {
        &self.query
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &Arc<JsonPathConfig> {
        &self.config
    }

    fn evaluator(&self) -> Evaluator<'_> {
        Evaluator::new(&self.config, &self.source)
    }
}

/// Renders the canonical form of the query
impl fmt::Display for CompiledQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.query, f)
    }
}

impl PartialEq for CompiledQuery {
    fn eq(&self, other: &Self) -> bool {
        self.query == other.query
    }
}
