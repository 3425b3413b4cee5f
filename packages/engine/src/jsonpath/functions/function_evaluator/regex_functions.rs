//! RFC 9535 Section 2.4.6 & 2.4.7: `match()` and `search()` functions
//!
//! Patterns are I-Regexp, translated to `regex` crate syntax and cached per
//! function. Non-string arguments evaluate to false. An invalid pattern also
//! evaluates to false unless the function was created in strict mode.

use crate::jsonpath::functions::iregexp;
use crate::jsonpath::functions::regex_cache::RegexCache;
use crate::jsonpath::functions::types::{FunctionError, FunctionExtension};
use crate::jsonpath::type_system::{FilterValue, FunctionType};

const PARAMETERS: [FunctionType; 2] = [FunctionType::ValueType, FunctionType::ValueType];

/// Whole string regular expression match
#[derive(Debug)]
pub struct Match {
    cache: RegexCache,
    strict: bool,
}

impl Match {
    #[must_use]
    pub fn new(cache_size: usize, strict: bool) -> Self {
        Self {
            cache: RegexCache::new(cache_size),
            strict,
        }
    }
}

impl Default for Match {
    fn default() -> Self {
        Self::new(128, false)
    }
}

impl FunctionExtension for Match {
    fn parameter_types(&self) -> &[FunctionType] {
        &PARAMETERS
    }

    fn return_type(&self) -> FunctionType {
        FunctionType::LogicalType
    }

    fn call<'a>(&self, args: Vec<FilterValue<'a>>) -> Result<FilterValue<'a>, FunctionError> {
        evaluate(&self.cache, self.strict, &args, iregexp::full_match)
    }
}

/// Regular expression search anywhere in a string
#[derive(Debug)]
pub struct Search {
    cache: RegexCache,
    strict: bool,
}

impl Search {
    #[must_use]
    pub fn new(cache_size: usize, strict: bool) -> Self {
        Self {
            cache: RegexCache::new(cache_size),
            strict,
        }
    }
}

impl Default for Search {
    fn default() -> Self {
        Self::new(128, false)
    }
}

impl FunctionExtension for Search {
    fn parameter_types(&self) -> &[FunctionType] {
        &PARAMETERS
    }

    fn return_type(&self) -> FunctionType {
        FunctionType::LogicalType
    }

    fn call<'a>(&self, args: Vec<FilterValue<'a>>) -> Result<FilterValue<'a>, FunctionError> {
        evaluate(&self.cache, self.strict, &args, iregexp::translate)
    }
}

fn evaluate<'a>(
    cache: &RegexCache,
    strict: bool,
    args: &[FilterValue<'_>],
    build: fn(&str) -> String,
) -> Result<FilterValue<'a>, FunctionError> {
    let (Some(value), Some(pattern)) = (
        args.first().and_then(FilterValue::as_str),
        args.get(1).and_then(FilterValue::as_str),
    ) else {
        return Ok(FilterValue::Logical(false));
    };

    match cache.get_or_compile(&build(pattern)) {
        Ok(regex) => Ok(FilterValue::Logical(regex.is_match(value))),
        Err(error) if strict => Err(FunctionError::InvalidPattern {
            pattern: pattern.to_string(),
            source: Box::new(error),
        }),
        Err(error) => {
            tracing::warn!(pattern, %error, "regular expression failed to compile");
            Ok(FilterValue::Logical(false))
        }
    }
}
