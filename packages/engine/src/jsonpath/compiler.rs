//! Query compiler
//!
//! Owns a configuration and turns query strings into [`CompiledQuery`]
//! values that share it.

use std::sync::Arc;

use crate::config::JsonPathConfig;
use crate::error::JsonPathResult;
use crate::jsonpath::expression::CompiledQuery;
use crate::jsonpath::parser::Parser;
use crate::jsonpath::tokenizer::tokenize;

/// Compiles queries against one configuration
#[derive(Debug, Clone, Default)]
pub struct JsonPathCompiler {
    config: Arc<JsonPathConfig>,
}

impl JsonPathCompiler {
    #[must_use]
    pub fn new(config: JsonPathConfig) -> Self {
        Self::with_shared(Arc::new(config))
    }

    #[must_use]
    pub fn with_shared(config: Arc<JsonPathConfig>) -> Self {
        Self { config }
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &Arc<JsonPathConfig> {
        &self.config
    }

    /// Compile `query`
    ///
    /// # Errors
    ///
    /// Returns a syntax error for malformed queries, a type error for
    /// ill-typed function calls or comparisons and a name error for calls
    /// to unknown functions.
    pub fn compile(&self, query: &str) -> JsonPathResult<CompiledQuery> {
        let tokens = tokenize(query)?;
        let parsed = Parser::new(&self.config).parse(&tokens)?;
        tracing::debug!(
            query,
            segments = parsed.segments().len(),
            "compiled JSONPath query"
        );
        let source = tokens
            .first()
            .map_or_else(|| Arc::from(query), |token| token.shared_source());
        Ok(CompiledQuery::new(source, parsed, Arc::clone(&self.config)))
    }
}
