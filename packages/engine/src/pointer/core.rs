//! RFC 6901 pointers

use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use super::relative::RelativeJsonPointer;
use super::{PointerError, PointerResult};
use crate::jsonpath::normalized_paths::{Location, PathElement};

/// A parsed JSON Pointer, e.g. `/users/0/name`
///
/// Reference tokens are stored unescaped. Whether a token is an array index
/// or a member name is decided against the value it is applied to.
///
/// # Examples
/// ```
/// use jsonp3_engine::pointer::JsonPointer;
/// use serde_json::json;
///
/// let doc = json!({"a/b": [10, 20]});
/// let pointer = JsonPointer::parse("/a~1b/1").unwrap();
/// assert_eq!(pointer.resolve(&doc).unwrap(), &json!(20));
/// assert_eq!(pointer.to_string(), "/a~1b/1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct JsonPointer {
    tokens: Vec<String>,
}

impl JsonPointer {
    /// The pointer to the whole document, `""`
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    /// Build a pointer from unescaped reference tokens
    #[must_use]
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }

    /// The pointer addressing a query result location
    #[must_use]
    pub fn from_location(location: &Location<'_>) -> Self {
        Self::from_tokens(location.elements().into_iter().map(|element| match element {
            PathElement::Name(name) => name.to_owned(),
            PathElement::Index(index) => index.to_string(),
        }))
    }

    /// Parse a pointer string
    ///
    /// # Errors
    ///
    /// Returns [`PointerError::Syntax`] if a non-empty pointer does not start
    /// with `/`.
    pub fn parse(pointer: &str) -> PointerResult<Self> {
        if pointer.is_empty() {
            return Ok(Self::root());
        }
        let Some(rest) = pointer.strip_prefix('/') else {
            return Err(PointerError::Syntax(
                "pointers must start with a slash or be the empty string".to_owned(),
            ));
        };
        Ok(Self {
            tokens: split_tokens(rest),
        })
    }

    #[inline]
    #[must_use]
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    #[inline]
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The final reference token, `None` for the root
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.tokens.last().map(String::as_str)
    }

    /// Resolve against `value`
    ///
    /// # Errors
    ///
    /// Returns [`PointerError::NotFound`] naming the longest prefix that
    /// could not be resolved.
    pub fn resolve<'a>(&self, value: &'a Value) -> PointerResult<&'a Value> {
        let mut current = value;
        for (position, token) in self.tokens.iter().enumerate() {
            current = get_item(current, token).ok_or_else(|| {
                PointerError::NotFound(Self::from_tokens(&self.tokens[..=position]).to_string())
            })?;
        }
        Ok(current)
    }

    /// Resolve against `value`, or return `default` if the pointer does not
    /// resolve
    #[must_use]
    pub fn resolve_or<'a>(&self, value: &'a Value, default: &'a Value) -> &'a Value {
        self.resolve(value).unwrap_or(default)
    }

    /// Resolve both the parent of the target and the target itself.
    ///
    /// The root has no parent. A missing target under an existing parent
    /// gives `(Some(parent), None)`.
    #[must_use]
    pub fn resolve_with_parent<'a>(&self, value: &'a Value) -> (Option<&'a Value>, Option<&'a Value>) {
        let Some((last, init)) = self.tokens.split_last() else {
            return (None, Some(value));
        };
        let parent = init
            .iter()
            .try_fold(value, |current, token| get_item(current, token));
        let target = parent.and_then(|parent| get_item(parent, last));
        (parent, target)
    }

    /// Mutable access to the target, if it exists
    pub fn resolve_mut<'a>(&self, value: &'a mut Value) -> Option<&'a mut Value> {
        self.tokens
            .iter()
            .try_fold(value, |current, token| get_item_mut(current, token))
    }

    /// True if the pointer resolves, even to `null` or `false`
    #[must_use]
    pub fn exists(&self, value: &Value) -> bool {
        self.resolve(value).is_ok()
    }

    /// The pointer one level up. The root is its own parent.
    #[must_use]
    pub fn parent(&self) -> Self {
        match self.tokens.split_last() {
            Some((_, init)) => Self {
                tokens: init.to_vec(),
            },
            None => self.clone(),
        }
    }

    /// Append parts to this pointer
    ///
    /// Each part is a pointer fragment without its leading slash, such as
    /// `"b/0"`. A part that starts with `/` replaces everything before it.
    ///
    /// # Errors
    ///
    /// Returns [`PointerError::Syntax`] for a malformed absolute part.
    pub fn join<I, S>(&self, parts: I) -> PointerResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut pointer = self.clone();
        for part in parts {
            let part = part.as_ref().trim_start();
            if part.starts_with('/') {
                pointer = Self::parse(part)?;
            } else if !part.is_empty() {
                pointer.tokens.extend(split_tokens(part));
            }
        }
        Ok(pointer)
    }

    /// True if `other` is a proper prefix of this pointer
    #[must_use]
    pub fn is_relative_to(&self, other: &Self) -> bool {
        other.tokens.len() < self.tokens.len() && self.tokens.starts_with(&other.tokens)
    }

    /// Apply a relative pointer with this pointer as its starting point
    ///
    /// # Errors
    ///
    /// See [`RelativeJsonPointer::to`].
    pub fn to(&self, relative: &RelativeJsonPointer) -> PointerResult<Self> {
        relative.to(self)
    }

    pub(crate) fn push(&mut self, token: impl Into<String>) {
        self.tokens.push(token.into());
    }

    pub(crate) fn pop(&mut self) -> Option<String> {
        self.tokens.pop()
    }
}

impl fmt::Display for JsonPointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            write!(f, "/{}", token.replace('~', "~0").replace('/', "~1"))?;
        }
        Ok(())
    }
}

impl FromStr for JsonPointer {
    type Err = PointerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn split_tokens(pointer: &str) -> Vec<String> {
    pointer
        .split('/')
        .map(|token| token.replace("~1", "/").replace("~0", "~"))
        .collect()
}

/// Parse an array index token: `0` or a decimal without leading zeros
pub(crate) fn parse_index(token: &str) -> Option<usize> {
    let valid = token == "0"
        || (!token.is_empty()
            && !token.starts_with('0')
            && token.bytes().all(|b| b.is_ascii_digit()));
    if valid { token.parse().ok() } else { None }
}

fn get_item<'a>(value: &'a Value, token: &str) -> Option<&'a Value> {
    match value {
        Value::Array(items) => items.get(parse_index(token)?),
        Value::Object(members) => members.get(token),
        _ => None,
    }
}

fn get_item_mut<'a>(value: &'a mut Value, token: &str) -> Option<&'a mut Value> {
    match value {
        Value::Array(items) => items.get_mut(parse_index(token)?),
        Value::Object(members) => members.get_mut(token),
        _ => None,
    }
}
