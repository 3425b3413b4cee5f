//! Configuration validation

use super::core::JsonPathConfig;

/// Configuration validation result type
pub type ConfigResult<T> = Result<T, ConfigurationError>;

/// Configuration error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("Invalid configuration parameter: {0}")]
    InvalidParameter(String),

    #[error("Invalid function name: '{0}'")]
    InvalidFunctionName(String),

    #[error("Configuration conflict: {0}")]
    Conflict(String),
}

/// Configuration validation trait
pub trait Validator {
    /// Validates the configuration settings
    ///
    /// # Errors
    ///
    /// Returns a `ConfigurationError` variant if any validation fails:
    /// - `InvalidParameter` - if a parameter is outside its valid range
    /// - `InvalidFunctionName` - if a registered function name is not an identifier
    /// - `Conflict` - if settings contradict each other
    fn validate(&self) -> ConfigResult<()>;
}

/// Common configuration validation utilities
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate numeric range
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidParameter` if the value is outside
    /// the specified range [min, max] (inclusive).
    pub fn validate_range<T>(value: T, min: T, max: T, name: &str) -> ConfigResult<()>
    where
        T: PartialOrd + std::fmt::Display + Copy,
    {
        if value < min || value > max {
            return Err(ConfigurationError::InvalidParameter(format!(
                "{name} must be between {min} and {max}, got {value}"
            )));
        }

        Ok(())
    }

    /// Validate a function extension name
    ///
    /// Names must match `[a-z][a-z0-9_]*` to be reachable from a query.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidFunctionName` otherwise.
    pub fn validate_function_name(name: &str) -> ConfigResult<()> {
        let mut chars = name.chars();
        let valid = chars.next().is_some_and(|c| c.is_ascii_lowercase())
            && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');
        if valid {
            Ok(())
        } else {
            Err(ConfigurationError::InvalidFunctionName(name.to_owned()))
        }
    }
}

impl Validator for JsonPathConfig {
    fn validate(&self) -> ConfigResult<()> {
        ConfigValidator::validate_range(self.max_recursion_depth(), 1, usize::MAX, "max_recursion_depth")?;

        if self.min_int_index() >= 0 || self.max_int_index() <= 0 {
            return Err(ConfigurationError::Conflict(format!(
                "index bounds must satisfy min < 0 < max, got {} and {}",
                self.min_int_index(),
                self.max_int_index()
            )));
        }

        for name in self.functions().names() {
            ConfigValidator::validate_function_name(name)?;
        }

        Ok(())
    }
}
