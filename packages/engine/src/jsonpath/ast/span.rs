//! Source positions carried by syntax nodes

use std::hash::{Hash, Hasher};

/// Byte offset of a syntax node in the query it was parsed from
///
/// Spans never take part in equality or hashing, so a tree parsed from its
/// canonical form equals the tree it was rendered from. Trees built by hand
/// use `Span::default()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Span {
    offset: usize,
}

impl Span {
    #[must_use]
    pub const fn new(offset: usize) -> Self {
        Self { offset }
    }

    #[inline]
    #[must_use]
    pub const fn offset(self) -> usize {
        self.offset
    }
}

impl PartialEq for Span {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for Span {}

impl Hash for Span {
    fn hash<H: Hasher>(&self, _state: &mut H) {}
}
