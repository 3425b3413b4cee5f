//! Relative JSON Pointers
//!
//! `<origin>[+|-<offset>]<pointer>` or `<origin>[+|-<offset>]#`. The origin
//! walks up from a starting location, the offset moves between array
//! siblings, and the remainder either descends with a pointer or asks for
//! the key or index of the location reached.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use super::core::{JsonPointer, parse_index};
use super::{PointerError, PointerResult};

/// What a relative pointer resolves to once its origin has been applied
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RelativeTarget {
    /// Descend with a pointer
    Pointer(JsonPointer),
    /// `#`, the member name or array index of the location
    KeyOrIndex,
}

/// A parsed relative JSON Pointer, e.g. `1/name` or `0-1#`
///
/// # Examples
/// ```
/// use jsonp3_engine::pointer::{JsonPointer, RelativeJsonPointer};
///
/// let start = JsonPointer::parse("/users/1/name").unwrap();
/// let relative = RelativeJsonPointer::parse("1-1/name").unwrap();
/// assert_eq!(relative.to(&start).unwrap().to_string(), "/users/0/name");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RelativeJsonPointer {
    origin: usize,
    offset: i64,
    target: RelativeTarget,
}

impl RelativeJsonPointer {
    /// Parse a relative pointer string
    ///
    /// # Errors
    ///
    /// Returns [`PointerError::Syntax`] for a missing or zero-padded origin,
    /// a zero or zero-padded index offset, or a malformed trailing pointer.
    pub fn parse(relative: &str) -> PointerResult<Self> {
        let origin_end = relative
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(relative.len());
        if origin_end == 0 {
            return Err(PointerError::Syntax("failed to parse relative pointer".to_owned()));
        }
        let origin = parse_int(&relative[..origin_end])?;
        let mut rest = &relative[origin_end..];

        let mut offset = 0;
        if let Some(sign @ ('+' | '-')) = rest.chars().next() {
            let digits_end = rest[1..]
                .find(|c: char| !c.is_ascii_digit())
                .map_or(rest.len(), |end| end + 1);
            let magnitude = parse_int(&rest[1..digits_end])?;
            if magnitude == 0 {
                return Err(PointerError::Syntax("index offset can't be zero".to_owned()));
            }
            let magnitude = i64::try_from(magnitude)
                .map_err(|_| PointerError::Syntax("index offset out of range".to_owned()))?;
            offset = if sign == '-' { -magnitude } else { magnitude };
            rest = &rest[digits_end..];
        }

        let target = if rest == "#" {
            RelativeTarget::KeyOrIndex
        } else {
            RelativeTarget::Pointer(JsonPointer::parse(rest)?)
        };

        Ok(Self {
            origin,
            offset,
            target,
        })
    }

    #[inline]
    #[must_use]
    pub fn origin(&self) -> usize {
        self.origin
    }

    #[inline]
    #[must_use]
    pub fn offset(&self) -> i64 {
        self.offset
    }

    #[inline]
    #[must_use]
    pub fn target(&self) -> &RelativeTarget {
        &self.target
    }

    /// The absolute location this pointer reaches from `start`
    ///
    /// For `#` pointers this is the location whose key or index is wanted.
    ///
    /// # Errors
    ///
    /// Returns [`PointerError::Index`] if the origin walks above the root, or
    /// if an index offset is applied to a location that is not an array
    /// index or moves before the first element.
    pub fn to(&self, start: &JsonPointer) -> PointerResult<JsonPointer> {
        let depth = start.tokens().len();
        if self.origin > depth {
            return Err(PointerError::Index(format!(
                "origin ({}) exceeds root ({depth})",
                self.origin
            )));
        }

        let mut pointer = JsonPointer::from_tokens(&start.tokens()[..depth - self.origin]);

        if self.offset != 0 {
            let index = pointer
                .last()
                .and_then(parse_index)
                .and_then(|index| i64::try_from(index).ok())
                .ok_or_else(|| {
                    PointerError::Index(format!("index offset applied to non-index location '{pointer}'"))
                })?;
            let moved = index
                .checked_add(self.offset)
                .filter(|moved| *moved >= 0)
                .ok_or_else(|| PointerError::Index("index offset out of range".to_owned()))?;
            pointer.pop();
            pointer.push(moved.to_string());
        }

        if let RelativeTarget::Pointer(tail) = &self.target {
            for token in tail.tokens() {
                pointer.push(token.as_str());
            }
        }

        Ok(pointer)
    }

    /// Resolve against `value` with `start` as the starting location
    ///
    /// `#` pointers produce the member name as a string or the array index
    /// as a number.
    ///
    /// # Errors
    ///
    /// See [`to`](Self::to). Also returns [`PointerError::NotFound`] if the
    /// location does not exist, and [`PointerError::Index`] when `#` is asked
    /// of the root.
    pub fn resolve<'a>(&self, start: &JsonPointer, value: &'a Value) -> PointerResult<Cow<'a, Value>> {
        let location = self.to(start)?;
        match &self.target {
            RelativeTarget::Pointer(_) => location.resolve(value).map(Cow::Borrowed),
            RelativeTarget::KeyOrIndex => {
                location.resolve(value)?;
                let Some(last) = location.last() else {
                    return Err(PointerError::Index("the root has no key or index".to_owned()));
                };
                let parent = location.parent().resolve(value)?;
                Ok(Cow::Owned(match (parent, parse_index(last)) {
                    (Value::Array(_), Some(index)) => Value::from(index),
                    _ => Value::String(last.to_owned()),
                }))
            }
        }
    }
}

impl fmt::Display for RelativeJsonPointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.origin)?;
        if self.offset > 0 {
            write!(f, "+{}", self.offset)?;
        } else if self.offset < 0 {
            write!(f, "{}", self.offset)?;
        }
        match &self.target {
            RelativeTarget::Pointer(pointer) => write!(f, "{pointer}"),
            RelativeTarget::KeyOrIndex => f.write_str("#"),
        }
    }
}

impl FromStr for RelativeJsonPointer {
    type Err = PointerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn parse_int(digits: &str) -> PointerResult<usize> {
    if digits.len() > 1 && digits.starts_with('0') {
        return Err(PointerError::Syntax("unexpected leading zero".to_owned()));
    }
    digits
        .parse()
        .map_err(|_| PointerError::Syntax(format!("expected an integer, found '{digits}'")))
}
