//! Name keyed table of function extensions

use std::fmt;
use std::sync::Arc;

use hashbrown::HashMap;

use super::function_evaluator::{Count, Length, Match, Search, ValueOf};
use super::types::FunctionExtension;

/// Function registry lookup errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("function '{0}' is not defined")]
    Undefined(String),
}

/// Registered function extensions, consulted when compiling a query to check
/// call signatures and when evaluating it to dispatch calls
#[derive(Clone, Default)]
pub struct FunctionRegistry {
    functions: HashMap<String, Arc<dyn FunctionExtension>>,
}

impl FunctionRegistry {
    /// An empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding `length`, `count`, `value`, `match` and `search`.
    ///
    /// `regex_cache_size` bounds the compiled pattern cache of each regex
    /// function. With `strict_regex` set, invalid patterns raise an error
    /// instead of evaluating to false.
    #[must_use]
    pub fn with_standard_functions(regex_cache_size: usize, strict_regex: bool) -> Self {
        let mut registry = Self::new();
        registry.register("length", Length);
        registry.register("count", Count);
        registry.register("value", ValueOf);
        registry.register("match", Match::new(regex_cache_size, strict_regex));
        registry.register("search", Search::new(regex_cache_size, strict_regex));
        registry
    }

    /// Add a function, replacing any existing function with the same name
    pub fn register(&mut self, name: impl Into<String>, function: impl FunctionExtension + 'static) {
        self.register_shared(name, Arc::new(function));
    }

    pub fn register_shared(&mut self, name: impl Into<String>, function: Arc<dyn FunctionExtension>) {
        let name = name.into();
        tracing::debug!(function = %name, "registering function extension");
        self.functions.insert(name, function);
    }

    /// Remove a function, returning it if it was registered
    pub fn remove(&mut self, name: &str) -> Option<Arc<dyn FunctionExtension>> {
        self.functions.remove(name)
    }

    /// Look up a function by name
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Undefined`] if no function has that name.
    pub fn get(&self, name: &str) -> Result<&Arc<dyn FunctionExtension>, RegistryError> {
        self.functions
            .get(name)
            .ok_or_else(|| RegistryError::Undefined(name.to_string()))
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Registered names in no particular order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.functions.keys().map(String::as_str)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

impl fmt::Debug for FunctionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.names().collect();
        names.sort_unstable();
        f.debug_struct("FunctionRegistry")
            .field("functions", &names)
            .finish()
    }
}
