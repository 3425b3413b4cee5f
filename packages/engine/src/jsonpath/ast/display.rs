//! Canonical rendering of parsed queries

use std::fmt::{self, Display, Formatter, Write};

use super::expressions::{FilterExpression, precedence};
use super::selectors::{Query, Segment, Selector, SliceSelector};
use crate::jsonpath::normalized_paths::canonical_string;

impl Query {
    pub(crate) fn fmt_with_identifier(&self, f: &mut Formatter<'_>, identifier: char) -> fmt::Result {
        f.write_char(identifier)?;
        for segment in self.segments() {
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

impl Display for Query {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.fmt_with_identifier(f, '$')
    }
}

impl Display for Segment {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if matches!(self, Self::Descendant(..)) {
            f.write_str("..")?;
        }
        f.write_char('[')?;
        for (i, selector) in self.selectors().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{selector}")?;
        }
        f.write_char(']')
    }
}

impl Display for Selector {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => f.write_str(&canonical_string(name)),
            Self::Index(index) => write!(f, "{index}"),
            Self::Wildcard => f.write_char('*'),
            Self::Slice(slice) => write!(f, "{slice}"),
            Self::Filter(expression) => write!(f, "?{expression}"),
        }
    }
}

impl Display for SliceSelector {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if let Some(start) = self.start {
            write!(f, "{start}")?;
        }
        f.write_char(':')?;
        if let Some(stop) = self.stop {
            write!(f, "{stop}")?;
        }
        if let Some(step) = self.step {
            write!(f, ":{step}")?;
        }
        Ok(())
    }
}

impl Display for FilterExpression {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "{value}"),
            Self::Null => f.write_str("null"),
            Self::String(value) => f.write_str(&canonical_string(value)),
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => f.write_str(&format_float(*value)),
            Self::Not(operand) => {
                f.write_char('!')?;
                write_operand(f, operand, operand.precedence() < precedence::PREFIX)
            }
            Self::Logical { op, left, right } => {
                let own = self.precedence();
                write_operand(f, left, left.precedence() < own)?;
                write!(f, " {} ", op.as_str())?;
                write_operand(f, right, right.precedence() <= own)
            }
            Self::Comparison { op, left, right } => {
                write_operand(f, left, left.is_logical())?;
                write!(f, " {} ", op.as_str())?;
                write_operand(f, right, right.is_logical())
            }
            Self::RootQuery(query) => query.fmt_with_identifier(f, '$'),
            Self::RelativeQuery(query) => query.fmt_with_identifier(f, '@'),
            Self::Function { name, args, .. } => {
                write!(f, "{name}(")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                f.write_char(')')
            }
        }
    }
}

fn write_operand(f: &mut Formatter<'_>, operand: &FilterExpression, grouped: bool) -> fmt::Result {
    if grouped {
        write!(f, "({operand})")
    } else {
        write!(f, "{operand}")
    }
}

/// Floats always render with a decimal point or exponent so they do not
/// re-parse as integers
fn format_float(value: f64) -> String {
    let rendered = value.to_string();
    if rendered.contains(['.', 'e', 'E']) || !value.is_finite() {
        rendered
    } else {
        format!("{rendered}.0")
    }
}
