//! Query configuration
//!
//! A [`JsonPathConfig`] is built once, validated, and shared between the
//! compiler and every query it produces.

mod core;
mod validation;

pub use self::core::{
    DEFAULT_MAX_RECURSION_DEPTH, DEFAULT_REGEX_CACHE_SIZE, JsonPathConfig, JsonPathConfigBuilder,
    MAX_INT_INDEX, MIN_INT_INDEX,
};
pub use validation::{ConfigResult, ConfigValidator, ConfigurationError, Validator};
