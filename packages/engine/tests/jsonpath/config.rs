//! Configuration builder and validation tests

use jsonp3_engine::config::{
    ConfigValidator, ConfigurationError, DEFAULT_MAX_RECURSION_DEPTH, DEFAULT_REGEX_CACHE_SIZE,
    JsonPathConfig, MAX_INT_INDEX, MIN_INT_INDEX, Validator,
};
use jsonp3_engine::jsonpath::functions::{FunctionError, FunctionExtension};
use jsonp3_engine::jsonpath::type_system::{FilterValue, FunctionType};
use pretty_assertions::assert_eq;

#[derive(Debug)]
struct Noop;

impl FunctionExtension for Noop {
    fn parameter_types(&self) -> &[FunctionType] {
        &[]
    }

    fn return_type(&self) -> FunctionType {
        FunctionType::LogicalType
    }

    fn call<'a>(&self, _args: Vec<FilterValue<'a>>) -> Result<FilterValue<'a>, FunctionError> {
        Ok(FilterValue::Logical(true))
    }
}

#[test]
fn test_defaults() {
    let config = JsonPathConfig::default();
    assert_eq!(config.max_recursion_depth(), DEFAULT_MAX_RECURSION_DEPTH);
    assert_eq!(config.max_recursion_depth(), 100);
    assert_eq!(config.max_int_index(), MAX_INT_INDEX);
    assert_eq!(config.min_int_index(), MIN_INT_INDEX);
    assert_eq!(MAX_INT_INDEX, 9_007_199_254_740_991);
    assert_eq!(MIN_INT_INDEX, -9_007_199_254_740_991);
    assert_eq!(config.regex_cache_size(), DEFAULT_REGEX_CACHE_SIZE);
    assert_eq!(config.regex_cache_size(), 128);
    assert!(!config.strict_regex());
    assert!(config.validate().is_ok());
}

#[test]
fn test_standard_functions_registered() {
    let config = JsonPathConfig::default();
    let mut names: Vec<&str> = config.functions().names().collect();
    names.sort_unstable();
    assert_eq!(names, vec!["count", "length", "match", "search", "value"]);
}

#[test]
fn test_builder_overrides() {
    let config = JsonPathConfig::builder()
        .max_recursion_depth(7)
        .index_bounds(-5, 5)
        .regex_cache_size(4)
        .strict_regex(true)
        .function("noop", Noop)
        .without_function("search")
        .build()
        .expect("Failed to build config");

    assert_eq!(config.max_recursion_depth(), 7);
    assert_eq!((config.min_int_index(), config.max_int_index()), (-5, 5));
    assert_eq!(config.regex_cache_size(), 4);
    assert!(config.strict_regex());
    assert!(config.functions().contains("noop"));
    assert!(!config.functions().contains("search"));
    assert!(config.functions().contains("match"));
}

#[test]
fn test_zero_recursion_depth_rejected() {
    let error = JsonPathConfig::builder()
        .max_recursion_depth(0)
        .build()
        .expect_err("Expected a validation error");
    assert!(matches!(error, ConfigurationError::InvalidParameter(_)));
}

#[test]
fn test_index_bounds_must_straddle_zero() {
    for (min, max) in [(0, 10), (-10, 0), (5, 10), (10, -10)] {
        let error = JsonPathConfig::builder()
            .index_bounds(min, max)
            .build()
            .expect_err("Expected a validation error");
        assert!(matches!(error, ConfigurationError::Conflict(_)), "{min}..{max}");
    }
}

#[test]
fn test_invalid_function_names_rejected() {
    for name in ["Upper", "1st", "has-dash", "", "_private"] {
        let error = JsonPathConfig::builder()
            .function(name, Noop)
            .build()
            .expect_err("Expected a validation error");
        assert_eq!(error, ConfigurationError::InvalidFunctionName(name.to_string()));
    }
}

#[test]
fn test_validate_range() {
    assert!(ConfigValidator::validate_range(5, 1, 10, "depth").is_ok());
    let error = ConfigValidator::validate_range(11, 1, 10, "depth").expect_err("Expected a range error");
    assert_eq!(
        error.to_string(),
        "Invalid configuration parameter: depth must be between 1 and 10, got 11"
    );
}

#[test]
fn test_validate_function_name() {
    assert!(ConfigValidator::validate_function_name("snake_case_2").is_ok());
    assert!(ConfigValidator::validate_function_name("x").is_ok());
    assert!(ConfigValidator::validate_function_name("camelCase").is_err());
}

#[test]
fn test_debug_lists_functions() {
    let rendered = format!("{:?}", JsonPathConfig::default());
    assert!(rendered.contains("max_recursion_depth: 100"), "{rendered}");
    assert!(rendered.contains("length"), "{rendered}");
}
