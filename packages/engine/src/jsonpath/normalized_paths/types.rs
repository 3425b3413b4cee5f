//! Location chain types

use std::fmt;
use std::sync::Arc;

use super::generator;

/// One step in a node location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathElement<'a> {
    /// Object member name
    Name(&'a str),
    /// Array index
    Index(usize),
}

impl fmt::Display for PathElement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => write!(f, "[{}]", generator::canonical_string(name)),
            Self::Index(index) => write!(f, "[{index}]"),
        }
    }
}

#[derive(Debug)]
struct Link<'a> {
    parent: Location<'a>,
    element: PathElement<'a>,
}

/// Location of a node relative to the document root
#[derive(Debug, Clone, Default)]
pub struct Location<'a> {
    head: Option<Arc<Link<'a>>>,
    depth: usize,
}

impl<'a> Location<'a> {
    /// The empty location of the document root
    #[inline]
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    /// Extend this location by one step without copying it
    #[must_use]
    pub fn child(&self, element: PathElement<'a>) -> Self {
        Self {
            head: Some(Arc::new(Link {
                parent: self.clone(),
                element,
            })),
            depth: self.depth + 1,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.head.is_none()
    }

    /// Number of steps from the root
    #[inline]
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The last step, if this is not the root
    #[must_use]
    pub fn last(&self) -> Option<PathElement<'a>> {
        self.head.as_ref().map(|link| link.element)
    }

    #[must_use]
    pub fn parent(&self) -> Option<Location<'a>> {
        self.head.as_ref().map(|link| link.parent.clone())
    }

    /// Steps from the root down to this location
    #[must_use]
    pub fn elements(&self) -> Vec<PathElement<'a>> {
        let mut elements = Vec::with_capacity(self.depth);
        let mut cursor = self.head.as_ref();
        while let Some(link) = cursor {
            elements.push(link.element);
            cursor = link.parent.head.as_ref();
        }
        elements.reverse();
        elements
    }

    /// Normalized path string, e.g. `$['store']['book'][0]`
    #[must_use]
    pub fn to_path(&self) -> String {
        generator::normalized_path(&self.elements())
    }
}

impl PartialEq for Location<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.depth == other.depth && self.elements() == other.elements()
    }
}

impl fmt::Display for Location<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_path())
    }
}
