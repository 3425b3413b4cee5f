//! Filter expressions

use super::selectors::Query;
use super::span::Span;

/// Comparison operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComparisonOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl ComparisonOp {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Eq => "==",
            Self::Ne => "!=",
            Self::Lt => "<",
            Self::Le => "<=",
            Self::Gt => ">",
            Self::Ge => ">=",
        }
    }
}

/// Logical infix operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalOp {
    And,
    Or,
}

impl LogicalOp {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::And => "&&",
            Self::Or => "||",
        }
    }
}

/// Binding power of filter expression operators
pub(crate) mod precedence {
    pub(crate) const LOWEST: u8 = 1;
    pub(crate) const LOGICAL_OR: u8 = 3;
    pub(crate) const LOGICAL_AND: u8 = 4;
    pub(crate) const RELATIONAL: u8 = 5;
    pub(crate) const PREFIX: u8 = 7;
}

/// A filter selector expression
#[derive(Debug, Clone, PartialEq)]
pub enum FilterExpression {
    Bool(bool),
    Null,
    String(String),
    Int(i64),
    Float(f64),
    Not(Box<FilterExpression>),
    Logical {
        op: LogicalOp,
        left: Box<FilterExpression>,
        right: Box<FilterExpression>,
    },
    Comparison {
        op: ComparisonOp,
        left: Box<FilterExpression>,
        right: Box<FilterExpression>,
    },
    /// `$...`, evaluated against the document root
    RootQuery(Query),
    /// `@...`, evaluated against the current node
    RelativeQuery(Query),
    Function {
        name: String,
        args: Vec<FilterExpression>,
        /// Position of the function name
        span: Span,
    },
}

impl FilterExpression {
    #[inline]
    #[must_use]
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            Self::Bool(_) | Self::Null | Self::String(_) | Self::Int(_) | Self::Float(_)
        )
    }

    #[inline]
    #[must_use]
    pub fn is_query(&self) -> bool {
        matches!(self, Self::RootQuery(_) | Self::RelativeQuery(_))
    }

    /// The embedded query, for `$...` and `@...` expressions
    #[must_use]
    pub fn query(&self) -> Option<&Query> {
        match self {
            Self::RootQuery(query) | Self::RelativeQuery(query) => Some(query),
            _ => None,
        }
    }

    /// Logical, comparison and negation expressions
    #[inline]
    #[must_use]
    pub fn is_logical(&self) -> bool {
        matches!(
            self,
            Self::Not(_) | Self::Logical { .. } | Self::Comparison { .. }
        )
    }

    pub(crate) fn precedence(&self) -> u8 {
        match self {
            Self::Logical {
                op: LogicalOp::Or, ..
            } => precedence::LOGICAL_OR,
            Self::Logical {
                op: LogicalOp::And, ..
            } => precedence::LOGICAL_AND,
            Self::Comparison { .. } => precedence::RELATIONAL,
            _ => precedence::PREFIX,
        }
    }
}
