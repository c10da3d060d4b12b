//! Property paths
//!
//! A [`PropertyPath`] points at the place inside a (possibly nested) value
//! where a violation happened, e.g. `components[0].tags`.
//!
//! Paths are persistent: extending a path never touches the original, so two
//! sibling branches of a recursive validation can both extend the same parent
//! without observing each other. Internally the path is a reverse-linked list
//! of `Arc` nodes, which makes extension O(1) and cloning a pointer copy.

use std::fmt;
use std::sync::Arc;

use serde::{Serialize, Serializer};

// ============================================================================
// PATH ELEMENT
// ============================================================================

/// A single segment of a property path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathElement {
    /// Named property of a struct or key of a map (`.name`).
    Property(Arc<str>),
    /// Position inside a list (`[3]`).
    Index(usize),
}

impl PathElement {
    /// Creates a named property element.
    pub fn property(name: impl Into<Arc<str>>) -> Self {
        Self::Property(name.into())
    }

    /// Creates an array index element.
    #[must_use]
    pub const fn index(index: usize) -> Self {
        Self::Index(index)
    }

    /// Returns `true` for [`PathElement::Index`].
    #[must_use]
    pub const fn is_index(&self) -> bool {
        matches!(self, Self::Index(_))
    }
}

impl fmt::Display for PathElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Property(name) => f.write_str(name),
            Self::Index(index) => write!(f, "[{index}]"),
        }
    }
}

impl From<&str> for PathElement {
    fn from(name: &str) -> Self {
        Self::property(name)
    }
}

impl From<String> for PathElement {
    fn from(name: String) -> Self {
        Self::property(name)
    }
}

impl From<usize> for PathElement {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

// ============================================================================
// PROPERTY PATH
// ============================================================================

#[derive(Debug)]
struct Node {
    parent: Option<Arc<Node>>,
    element: PathElement,
    len: usize,
}

/// Immutable, cheaply clonable sequence of [`PathElement`]s.
///
/// # Examples
///
/// ```rust,ignore
/// use nebula_validation::PropertyPath;
///
/// let path = PropertyPath::new()
///     .with_property("array")
///     .with_index(1)
///     .with_property("property");
///
/// assert_eq!(path.format(), "array[1].property");
/// ```
#[derive(Clone, Default)]
pub struct PropertyPath {
    head: Option<Arc<Node>>,
}

impl PropertyPath {
    /// Creates an empty path.
    #[must_use]
    pub const fn new() -> Self {
        Self { head: None }
    }

    /// Builds a path from elements, root first.
    pub fn from_elements<I, E>(elements: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<PathElement>,
    {
        elements
            .into_iter()
            .fold(Self::new(), |path, element| path.with(element))
    }

    /// Returns a new path with `element` appended. `self` is left untouched.
    #[must_use]
    pub fn with(&self, element: impl Into<PathElement>) -> Self {
        let len = self.len() + 1;
        Self {
            head: Some(Arc::new(Node {
                parent: self.head.clone(),
                element: element.into(),
                len,
            })),
        }
    }

    /// Shorthand for `with(PathElement::property(name))`.
    #[must_use]
    pub fn with_property(&self, name: impl Into<Arc<str>>) -> Self {
        self.with(PathElement::property(name))
    }

    /// Shorthand for `with(PathElement::Index(index))`.
    #[must_use]
    pub fn with_index(&self, index: usize) -> Self {
        self.with(PathElement::Index(index))
    }

    /// Returns a new path with every element of `other` appended.
    #[must_use]
    pub fn join(&self, other: &PropertyPath) -> Self {
        other
            .elements()
            .into_iter()
            .fold(self.clone(), |path, element| path.with(element))
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.head.as_ref().map_or(0, |node| node.len)
    }

    /// Returns `true` when the path points at the root value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Last (innermost) element, if any.
    #[must_use]
    pub fn last(&self) -> Option<&PathElement> {
        self.head.as_ref().map(|node| &node.element)
    }

    /// Elements in root-to-leaf order.
    #[must_use]
    pub fn elements(&self) -> Vec<PathElement> {
        let mut elements = Vec::with_capacity(self.len());
        let mut cursor = self.head.as_deref();
        while let Some(node) = cursor {
            elements.push(node.element.clone());
            cursor = node.parent.as_deref();
        }
        elements.reverse();
        elements
    }

    /// Renders the canonical form: `.` between properties, `[i]` for indexes,
    /// no leading dot.
    #[must_use]
    pub fn format(&self) -> String {
        let mut out = String::with_capacity(self.len() * 8);
        for (i, element) in self.elements().iter().enumerate() {
            match element {
                PathElement::Property(name) => {
                    if i > 0 {
                        out.push('.');
                    }
                    out.push_str(name);
                }
                PathElement::Index(index) => {
                    out.push('[');
                    out.push_str(&index.to_string());
                    out.push(']');
                }
            }
        }
        out
    }
}

impl fmt::Display for PropertyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

impl fmt::Debug for PropertyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PropertyPath({:?})", self.format())
    }
}

impl PartialEq for PropertyPath {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.elements() == other.elements()
    }
}

impl Eq for PropertyPath {}

impl<E: Into<PathElement>> FromIterator<E> for PropertyPath {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self::from_elements(iter)
    }
}

impl Serialize for PropertyPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.format())
    }
}

// ============================================================================
// TESTS
// ============================================================================
