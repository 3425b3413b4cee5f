//! Configuration types and builder

use std::fmt;
use std::sync::Arc;

use super::validation::{ConfigResult, Validator};
use crate::jsonpath::core_evaluator::{
    ArrayIndexSelector, ExactNameSelector, IndexSelector, NameSelector,
};
use crate::jsonpath::functions::{FunctionExtension, FunctionRegistry};

/// Default limit on descendant segment depth
pub const DEFAULT_MAX_RECURSION_DEPTH: usize = 100;

/// Default number of compiled patterns cached by each regex function
pub const DEFAULT_REGEX_CACHE_SIZE: usize = 128;

/// Largest index accepted in an index or slice selector, `2^53 - 1`
pub const MAX_INT_INDEX: i64 = (1 << 53) - 1;

/// Smallest index accepted in an index or slice selector, `-(2^53 - 1)`
pub const MIN_INT_INDEX: i64 = -MAX_INT_INDEX;

/// Settings shared by compilation and evaluation
#[derive(Clone)]
pub struct JsonPathConfig {
    max_recursion_depth: usize,
    min_int_index: i64,
    max_int_index: i64,
    name_selector: Arc<dyn NameSelector>,
    index_selector: Arc<dyn IndexSelector>,
    functions: FunctionRegistry,
    regex_cache_size: usize,
    strict_regex: bool,
}

impl JsonPathConfig {
    #[must_use]
    pub fn builder() -> JsonPathConfigBuilder {
        JsonPathConfigBuilder::default()
    }

    #[inline]
    #[must_use]
    pub fn max_recursion_depth(&self) -> usize {
        self.max_recursion_depth
    }

    #[inline]
    #[must_use]
    pub fn min_int_index(&self) -> i64 {
        self.min_int_index
    }

    #[inline]
    #[must_use]
    pub fn max_int_index(&self) -> i64 {
        self.max_int_index
    }

    #[inline]
    #[must_use]
    pub fn name_selector(&self) -> &dyn NameSelector {
        self.name_selector.as_ref()
    }

    #[inline]
    #[must_use]
    pub fn index_selector(&self) -> &dyn IndexSelector {
        self.index_selector.as_ref()
    }

    #[inline]
    #[must_use]
    pub fn functions(&self) -> &FunctionRegistry {
        &self.functions
    }

    #[inline]
    #[must_use]
    pub fn regex_cache_size(&self) -> usize {
        self.regex_cache_size
    }

    #[inline]
    #[must_use]
    pub fn strict_regex(&self) -> bool {
        self.strict_regex
    }
}

impl Default for JsonPathConfig {
    fn default() -> Self {
        Self {
            max_recursion_depth: DEFAULT_MAX_RECURSION_DEPTH,
            min_int_index: MIN_INT_INDEX,
            max_int_index: MAX_INT_INDEX,
            name_selector: Arc::new(ExactNameSelector),
            index_selector: Arc::new(ArrayIndexSelector),
            functions: FunctionRegistry::with_standard_functions(DEFAULT_REGEX_CACHE_SIZE, false),
            regex_cache_size: DEFAULT_REGEX_CACHE_SIZE,
            strict_regex: false,
        }
    }
}

impl fmt::Debug for JsonPathConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonPathConfig")
            .field("max_recursion_depth", &self.max_recursion_depth)
            .field("min_int_index", &self.min_int_index)
            .field("max_int_index", &self.max_int_index)
            .field("name_selector", &self.name_selector)
            .field("index_selector", &self.index_selector)
            .field("functions", &self.functions)
            .field("regex_cache_size", &self.regex_cache_size)
            .field("strict_regex", &self.strict_regex)
            .finish()
    }
}

/// Builder for [`JsonPathConfig`]
///
/// The standard functions are registered when the configuration is built,
/// using the final regex settings. Functions added with
/// [`function`](Self::function) are registered afterwards and may replace
/// a standard function of the same name.
///
/// # Examples
/// ```
/// use jsonp3_engine::config::JsonPathConfig;
/// use jsonp3_engine::jsonpath::core_evaluator::CaseInsensitiveNameSelector;
///
/// let config = JsonPathConfig::builder()
///     .max_recursion_depth(20)
///     .name_selector(CaseInsensitiveNameSelector)
///     .build()
///     .unwrap();
/// assert_eq!(config.max_recursion_depth(), 20);
/// ```
#[derive(Debug)]
pub struct JsonPathConfigBuilder {
    max_recursion_depth: usize,
    min_int_index: i64,
    max_int_index: i64,
    name_selector: Arc<dyn NameSelector>,
    index_selector: Arc<dyn IndexSelector>,
    extensions: Vec<(String, Arc<dyn FunctionExtension>)>,
    removed: Vec<String>,
    regex_cache_size: usize,
    strict_regex: bool,
}

impl Default for JsonPathConfigBuilder {
    fn default() -> Self {
        Self {
            max_recursion_depth: DEFAULT_MAX_RECURSION_DEPTH,
            min_int_index: MIN_INT_INDEX,
            max_int_index: MAX_INT_INDEX,
            name_selector: Arc::new(ExactNameSelector),
            index_selector: Arc::new(ArrayIndexSelector),
            extensions: Vec::new(),
            removed: Vec::new(),
            regex_cache_size: DEFAULT_REGEX_CACHE_SIZE,
            strict_regex: false,
        }
    }
}

impl JsonPathConfigBuilder {
    #[must_use]
    pub fn max_recursion_depth(mut self, depth: usize) -> Self {
        self.max_recursion_depth = depth;
        self
    }

    /// Bounds for index and slice selector integers
    #[must_use]
    pub fn index_bounds(mut self, min: i64, max: i64) -> Self {
        self.min_int_index = min;
        self.max_int_index = max;
        self
    }

    #[must_use]
    pub fn name_selector(mut self, selector: impl NameSelector + 'static) -> Self {
        self.name_selector = Arc::new(selector);
        self
    }

    #[must_use]
    pub fn index_selector(mut self, selector: impl IndexSelector + 'static) -> Self {
        self.index_selector = Arc::new(selector);
        self
    }

    /// Register a function extension, replacing any function of that name
    #[must_use]
    pub fn function(mut self, name: impl Into<String>, function: impl FunctionExtension + 'static) -> Self {
        let name = name.into();
        self.removed.retain(|removed| *removed != name);
        self.extensions.push((name, Arc::new(function)));
        self
    }

    /// Drop a function, standard or previously added
    #[must_use]
    pub fn without_function(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.extensions.retain(|(registered, _)| *registered != name);
        self.removed.push(name);
        self
    }

    /// Capacity of each regex function's pattern cache, 0 disables caching
    #[must_use]
    pub fn regex_cache_size(mut self, size: usize) -> Self {
        self.regex_cache_size = size;
        self
    }

    /// Raise an error for invalid `match`/`search` patterns instead of
    /// evaluating to false
    #[must_use]
    pub fn strict_regex(mut self, strict: bool) -> Self {
        self.strict_regex = strict;
        self
    }

    /// Validate and build the configuration
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigurationError`](super::ConfigurationError) if the
    /// recursion limit is zero, the index bounds do not straddle zero, or a
    /// function name is not a valid function identifier.
    pub fn build(self) -> ConfigResult<JsonPathConfig> {
        let mut functions =
            FunctionRegistry::with_standard_functions(self.regex_cache_size, self.strict_regex);
        for name in &self.removed {
            functions.remove(name);
        }
        for (name, function) in self.extensions {
            functions.register_shared(name, function);
        }

        let config = JsonPathConfig {
            max_recursion_depth: self.max_recursion_depth,
            min_int_index: self.min_int_index,
            max_int_index: self.max_int_index,
            name_selector: self.name_selector,
            index_selector: self.index_selector,
            functions,
            regex_cache_size: self.regex_cache_size,
            strict_regex: self.strict_regex,
        };
        config.validate()?;
        Ok(config)
    }
}
