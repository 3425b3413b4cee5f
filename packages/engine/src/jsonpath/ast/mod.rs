//! Abstract syntax tree for compiled `JSONPath` queries
//!
//! Closed sum types for segments, selectors and filter expressions. All nodes
//! are immutable after parsing and compare structurally. `Display` renders the
//! canonical form of each node, which parses back to an equal tree.

mod display;
mod expressions;
mod selectors;
mod span;

pub(crate) use expressions::precedence;
pub use expressions::{ComparisonOp, FilterExpression, LogicalOp};
pub use selectors::{Query, Segment, Selector, SliceSelector};
pub use span::Span;
