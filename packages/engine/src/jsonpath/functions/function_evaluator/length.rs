//! RFC 9535 Section 2.4.4: `length()` function implementation
//!
//! Returns number of characters in string, elements in array, or members in object

use serde_json::Value;

use crate::jsonpath::functions::types::{FunctionError, FunctionExtension};
use crate::jsonpath::type_system::{FilterValue, FunctionType};

#[derive(Debug, Clone, Copy, Default)]
pub struct Length;

impl FunctionExtension for Length {
    fn parameter_types(&self) -> &[FunctionType] {
        &[FunctionType::ValueType]
    }

    fn return_type(&self) -> FunctionType {
        FunctionType::ValueType
    }

    fn call<'a>(&self, args: Vec<FilterValue<'a>>) -> Result<FilterValue<'a>, FunctionError> {
        let length = match args.first().and_then(FilterValue::as_value) {
            Some(Value::String(s)) => s.chars().count(),
            Some(Value::Array(items)) => items.len(),
            Some(Value::Object(members)) => members.len(),
            _ => return Ok(FilterValue::Nothing),
        };
        Ok(FilterValue::owned(Value::from(length)))
    }
}
