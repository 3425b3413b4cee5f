//! Selector dispatch

use crate::error::JsonPathResult;
use crate::jsonpath::ast::Selector;
use crate::jsonpath::core_evaluator::Evaluator;
use crate::jsonpath::node::{JsonPathNode, NodeList};

use super::{arrays, filters, wildcards};

impl Evaluator<'_> {
    /// Append the nodes `selector` matches in `node` to `out`
    pub(crate) fn resolve_selector<'a>(
        &self,
        selector: &Selector,
        node: &JsonPathNode<'a>,
        out: &mut NodeList<'a>,
    ) -> JsonPathResult<()> {
        match selector {
            Selector::Name(name) => {
                self.config().name_selector().select(node, name, out);
                Ok(())
            }
            Selector::Index(index) => {
                self.config().index_selector().select(node, *index, out);
                Ok(())
            }
            Selector::Wildcard => {
                wildcards::select_all(node, out);
                Ok(())
            }
            Selector::Slice(slice) => {
                arrays::select_slice(slice, node, out);
                Ok(())
            }
            Selector::Filter(expression) => filters::select_matching(self, expression, node, out),
        }
    }
}
