//! Message template parameters
//!
//! Violation messages are rendered by literal find/replace of each parameter
//! key (conventionally `{{ name }}`) with its value, in list order.

use std::borrow::Cow;
use std::fmt;

use smallvec::SmallVec;

/// A single substitution for a message template.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TemplateParameter {
    /// Marker in the template, e.g. `{{ value }}`.
    pub key: Cow<'static, str>,
    /// Replacement text.
    pub value: Cow<'static, str>,
}

impl TemplateParameter {
    /// Creates a new parameter.
    pub fn new(key: impl Into<Cow<'static, str>>, value: impl Into<Cow<'static, str>>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl<K, V> From<(K, V)> for TemplateParameter
where
    K: Into<Cow<'static, str>>,
    V: Into<Cow<'static, str>>,
{
    fn from((key, value): (K, V)) -> Self {
        Self::new(key, value)
    }
}

/// Ordered list of template parameters.
///
/// Kept as a list rather than a map: duplicate keys are legal and are applied
/// in sequence, so whichever entry comes first wins the substitution.
/// [`prepend`](Self::prepend) is how callers make their values win over the
/// defaults a constraint supplies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateParameterList {
    params: SmallVec<[TemplateParameter; 3]>,
}

impl TemplateParameterList {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a new list with `parameters` appended.
    #[must_use]
    pub fn with<I>(&self, parameters: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<TemplateParameter>,
    {
        let mut params = self.params.clone();
        params.extend(parameters.into_iter().map(Into::into));
        Self { params }
    }

    /// Returns a new list with `parameters` placed in front.
    #[must_use]
    pub fn prepend<I>(&self, parameters: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<TemplateParameter>,
    {
        let mut params: SmallVec<[TemplateParameter; 3]> =
            parameters.into_iter().map(Into::into).collect();
        params.extend(self.params.iter().cloned());
        Self { params }
    }

    /// Appends a parameter in place (used by builders that own the list).
    pub fn push(&mut self, parameter: impl Into<TemplateParameter>) {
        self.params.push(parameter.into());
    }

    /// Value of the first parameter with the given key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|p| p.key == key)
            .map(|p| &*p.value)
    }

    /// Number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Returns `true` if the list holds no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Iterates in list order.
    pub fn iter(&self) -> std::slice::Iter<'_, TemplateParameter> {
        self.params.iter()
    }

    /// Substitutes every parameter into `template`, in list order.
    #[must_use]
    pub fn render(&self, template: &str) -> String {
        self.params
            .iter()
            .fold(template.to_owned(), |message, p| {
                if message.contains(&*p.key) {
                    message.replace(&*p.key, &p.value)
                } else {
                    message
                }
            })
    }
}

impl<P: Into<TemplateParameter>> FromIterator<P> for TemplateParameterList {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self {
            params: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a TemplateParameterList {
    type Item = &'a TemplateParameter;
    type IntoIter = std::slice::Iter<'a, TemplateParameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.params.iter()
    }
}

impl fmt::Display for TemplateParameterList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, p) in self.params.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}={}", p.key, p.value)?;
        }
        Ok(())
    }
}
