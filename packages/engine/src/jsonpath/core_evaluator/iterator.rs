//! Lazy query evaluation
//!
//! Nodes are produced one input node at a time, so a consumer that stops
//! early never pays for the rest of the document. Ordering is identical to
//! eager evaluation. After an error the iterator is exhausted.

use std::iter;

use super::core::Evaluator;
use super::recursive_descent::DescendantWalker;
use crate::error::JsonPathResult;
use crate::jsonpath::ast::Segment;
use crate::jsonpath::node::{JsonPathNode, NodeList};

type Stage<'q, 'a> = Box<dyn Iterator<Item = JsonPathResult<JsonPathNode<'a>>> + 'q>;

/// Iterator over the nodes selected by a compiled query
pub struct NodeIter<'q, 'a> {
    inner: Stage<'q, 'a>,
    done: bool,
}

impl<'q, 'a: 'q> NodeIter<'q, 'a> {
    pub(crate) fn new(evaluator: Evaluator<'q>, segments: &'q [Segment], start: JsonPathNode<'a>) -> Self {
        let mut inner: Stage<'q, 'a> = Box::new(iter::once(Ok(start)));
        for segment in segments {
            inner = Box::new(inner.flat_map(move |item| match item {
                Ok(node) => lazy_segment(evaluator, segment, node),
                Err(error) => Box::new(iter::once(Err(error))),
            }));
        }
        Self { inner, done: false }
    }
}

fn lazy_segment<'q, 'a: 'q>(
    evaluator: Evaluator<'q>,
    segment: &'q Segment,
    node: JsonPathNode<'a>,
) -> Stage<'q, 'a> {
    match segment {
        Segment::Child(selectors) => {
            let mut out = NodeList::new();
            match evaluator.apply_selectors(selectors, &node, &mut out) {
                Ok(()) => Box::new(out.into_iter().map(Ok)),
                Err(error) => Box::new(iter::once(Err(error))),
            }
        }
        Segment::Descendant(selectors, span) => {
            let walker = DescendantWalker::new(node, evaluator.config().max_recursion_depth());
            Box::new(walker.flat_map(move |visited| {
                let results: Vec<JsonPathResult<JsonPathNode<'a>>> = match visited {
                    Ok(visited) => {
                        let mut out = NodeList::new();
                        match evaluator.apply_selectors(selectors, &visited, &mut out) {
                            Ok(()) => out.into_iter().map(Ok).collect(),
                            Err(error) => vec![Err(error)],
                        }
                    }
                    Err(_) => vec![Err(evaluator.recursion_error(*span))],
                };
                results
            }))
        }
    }
}

impl<'a> Iterator for NodeIter<'_, 'a> {
    type Item = JsonPathResult<JsonPathNode<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let item = self.inner.next();
        match &item {
            Some(Err(_)) | None => self.done = true,
            Some(Ok(_)) => {}
        }
        item
    }
}
