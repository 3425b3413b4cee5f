//! RFC 9535 Section 2.4.8: `value()` function implementation

use crate::jsonpath::functions::types::{FunctionError, FunctionExtension};
use crate::jsonpath::type_system::{FilterValue, FunctionType};

/// The value of a single node list, Nothing for empty or multiple nodes
#[derive(Debug, Clone, Copy, Default)]
pub struct ValueOf;

impl FunctionExtension for ValueOf {
    fn parameter_types(&self) -> &[FunctionType] {
        &[FunctionType::NodesType]
    }

    fn return_type(&self) -> FunctionType {
        FunctionType::ValueType
    }

    fn call<'a>(&self, args: Vec<FilterValue<'a>>) -> Result<FilterValue<'a>, FunctionError> {
        match args.into_iter().next() {
            Some(FilterValue::Nodes(nodes)) if nodes.len() == 1 => Ok(nodes
                .into_first()
                .map_or(FilterValue::Nothing, |node| FilterValue::borrowed(node.value()))),
            _ => Ok(FilterValue::Nothing),
        }
    }
}
