//! Segment resolution

use std::sync::Arc;

use super::recursive_descent::DescendantWalker;
use crate::config::JsonPathConfig;
use crate::error::{JsonPathError, JsonPathResult};
use crate::jsonpath::ast::{Segment, Selector, Span};
use crate::jsonpath::functions::FunctionError;
use crate::jsonpath::node::{JsonPathNode, NodeList};
use crate::jsonpath::tokens::{Token, TokenKind};

/// Evaluates parsed segments against documents
#[derive(Clone, Copy)]
pub(crate) struct Evaluator<'q> {
    config: &'q JsonPathConfig,
    source: &'q Arc<str>,
}

impl<'q> Evaluator<'q> {
    pub(crate) fn new(config: &'q JsonPathConfig, source: &'q Arc<str>) -> Self {
        Self { config, source }
    }

    #[inline]
    pub(crate) fn config(&self) -> &'q JsonPathConfig {
        self.config
    }

    /// Apply `segments` in order, starting from `start`
    pub(crate) fn resolve<'a>(
        &self,
        segments: &[Segment],
        start: JsonPathNode<'a>,
    ) -> JsonPathResult<NodeList<'a>> {
        let mut nodes = NodeList::from(vec![start]);
        for segment in segments {
            let mut next = NodeList::new();
            for node in &nodes {
                self.resolve_segment(segment, node, &mut next)?;
            }
            nodes = next;
        }
        Ok(nodes)
    }

    pub(crate) fn resolve_segment<'a>(
        &self,
        segment: &Segment,
        node: &JsonPathNode<'a>,
        out: &mut NodeList<'a>,
    ) -> JsonPathResult<()> {
        match segment {
            Segment::Child(selectors) => self.apply_selectors(selectors, node, out),
            Segment::Descendant(selectors, span) => {
                let walker = DescendantWalker::new(node.clone(), self.config.max_recursion_depth());
                for visited in walker {
                    let visited = visited.map_err(|_| self.recursion_error(*span))?;
                    self.apply_selectors(selectors, &visited, out)?;
                }
                Ok(())
            }
        }
    }

    /// Apply every selector to `node`, in declared order
    pub(crate) fn apply_selectors<'a>(
        &self,
        selectors: &[Selector],
        node: &JsonPathNode<'a>,
        out: &mut NodeList<'a>,
    ) -> JsonPathResult<()> {
        for selector in selectors {
            self.resolve_selector(selector, node, out)?;
        }
        Ok(())
    }

    /// Error for a descendant segment, at `span`, that walked too deep
    pub(crate) fn recursion_error(&self, span: Span) -> JsonPathError {
        let token = Token::new(TokenKind::DoubleDot, "..", span.offset(), Arc::clone(self.source));
        JsonPathError::recursion("recursion limit exceeded", token)
    }

    /// Error raised by the function called at `span`
    pub(crate) fn function_error(&self, name: &str, span: Span, error: &FunctionError) -> JsonPathError {
        let token = Token::new(TokenKind::Function, name, span.offset(), Arc::clone(self.source));
        JsonPathError::function(error.to_string(), token)
    }
}
