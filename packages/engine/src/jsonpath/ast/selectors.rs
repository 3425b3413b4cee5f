//! Segments and selectors

use super::expressions::FilterExpression;
use super::span::Span;
use crate::config::JsonPathConfig;

/// A parsed query: an ordered sequence of segments.
///
/// Used for both the top level query and queries embedded in filters.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Query {
    segments: Vec<Segment>,
}

impl Query {
    #[must_use]
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    #[inline]
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// True if this query has no segments and selects only its start node
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// True if this query can select at most one node: every segment is a
    /// child segment with exactly one name or index selector
    #[must_use]
    pub fn is_singular(&self) -> bool {
        self.segments.iter().all(|segment| match segment {
            Segment::Child(selectors) => {
                selectors.len() == 1 && selectors.iter().all(Selector::is_singular)
            }
            Segment::Descendant(..) => false,
        })
    }

    /// [`is_singular`](Self::is_singular), also requiring the configured
    /// name and index strategies to select at most one node each
    pub(crate) fn is_singular_in(&self, config: &JsonPathConfig) -> bool {
        self.is_singular()
            && self.segments.iter().flat_map(Segment::selectors).all(|selector| match selector {
                Selector::Name(_) => config.name_selector().is_singular(),
                Selector::Index(_) => config.index_selector().is_singular(),
                _ => false,
            })
    }
}

/// A query segment
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// `[...]`, `.name` or `.*`
    Child(Vec<Selector>),
    /// `..[...]`, `..name` or `..*`, with the position of its `..`
    Descendant(Vec<Selector>, Span),
}

impl Segment {
    #[inline]
    #[must_use]
    pub fn selectors(&self) -> &[Selector] {
        match self {
            Self::Child(selectors) | Self::Descendant(selectors, _) => selectors,
        }
    }
}

/// A single selector within a segment
#[derive(Debug, Clone, PartialEq)]
pub enum Selector {
    /// Object member by name
    Name(String),
    /// Array element by index, negative counts from the end
    Index(i64),
    /// All members or elements
    Wildcard,
    /// Array slice
    Slice(SliceSelector),
    /// Members or elements for which the expression is true
    Filter(Box<FilterExpression>),
}

impl Selector {
    /// Name and index selectors select at most one node
    #[inline]
    #[must_use]
    pub fn is_singular(&self) -> bool {
        matches!(self, Self::Name(_) | Self::Index(_))
    }
}

/// `start:stop:step` bounds of a slice selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SliceSelector {
    pub start: Option<i64>,
    pub stop: Option<i64>,
    pub step: Option<i64>,
}

impl SliceSelector {
    #[must_use]
    pub fn new(start: Option<i64>, stop: Option<i64>, step: Option<i64>) -> Self {
        Self { start, stop, step }
    }

    /// Indices selected from an array of `len` elements, in selection order.
    ///
    /// Negative bounds count from the end. A negative step walks backwards
    /// and a zero step selects nothing.
    #[must_use]
    pub fn indices(&self, len: usize) -> Vec<usize> {
        let step = self.step.unwrap_or(1);
        if len == 0 || step == 0 {
            return Vec::new();
        }

        let len = i64::try_from(len).unwrap_or(i64::MAX);

        let start = match self.start {
            None => {
                if step < 0 {
                    len - 1
                } else {
                    0
                }
            }
            Some(start) if start < 0 => len.saturating_add(start).max(if step < 0 { -1 } else { 0 }),
            Some(start) => start.min(if step < 0 { len - 1 } else { len }),
        };

        let stop = match self.stop {
            None => {
                if step < 0 {
                    -1
                } else {
                    len
                }
            }
            Some(stop) if stop < 0 => len.saturating_add(stop).max(-1),
            Some(stop) => stop.min(len),
        };

        let mut indices = Vec::new();
        let mut next = Some(start);
        while let Some(i) = next.filter(|&i| if step > 0 { i < stop } else { i > stop }) {
            indices.extend(usize::try_from(i).ok());
            next = i.checked_add(step);
        }
        indices
    }
}
