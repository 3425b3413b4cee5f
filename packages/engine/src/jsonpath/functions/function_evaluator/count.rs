//! RFC 9535 Section 2.4.5: `count()` function implementation

use serde_json::Value;

use crate::jsonpath::functions::types::{FunctionError, FunctionExtension};
use crate::jsonpath::type_system::{FilterValue, FunctionType};

/// Number of nodes in a node list
#[derive(Debug, Clone, Copy, Default)]
pub struct Count;

impl FunctionExtension for Count {
    fn parameter_types(&self) -> &[FunctionType] {
        &[FunctionType::NodesType]
    }

    fn return_type(&self) -> FunctionType {
        FunctionType::ValueType
    }

    fn call<'a>(&self, args: Vec<FilterValue<'a>>) -> Result<FilterValue<'a>, FunctionError> {
        match args.first() {
            Some(FilterValue::Nodes(nodes)) => Ok(FilterValue::owned(Value::from(nodes.len()))),
            _ => Ok(FilterValue::Nothing),
        }
    }
}
