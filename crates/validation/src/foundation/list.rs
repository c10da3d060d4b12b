//! Violation accumulation
//!
//! [`ViolationList`] is always flat: appending a list into a list splices its
//! elements, it never nests. An empty list means "valid".

use std::fmt;
use std::ops::Index;

use serde::Serialize;

use crate::foundation::error::{FatalError, ValidationError, ValidationResult};
use crate::foundation::violation::Violation;

/// Ordered, flat collection of violations.
///
/// Order is the order constraints ran in: declared option order first, then
/// depth-first order of recursion into nested values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ViolationList {
    violations: Vec<Violation>,
}

impl ViolationList {
    /// Creates an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            violations: Vec::new(),
        }
    }

    /// Number of violations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Returns `true` when there are no violations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// First violation, if any.
    #[must_use]
    pub fn first(&self) -> Option<&Violation> {
        self.violations.first()
    }

    /// Iterates in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Violation> {
        self.violations.iter()
    }

    /// Appends one violation.
    pub fn push(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    /// Splices all violations of `other` onto the end.
    pub fn append(&mut self, other: ViolationList) {
        self.violations.extend(other.violations);
    }

    /// Merges an error into the list.
    ///
    /// Violations are appended (flattened); a fatal error is handed back
    /// untouched so the caller can abort.
    pub fn append_error(&mut self, error: ValidationError) -> Result<(), FatalError> {
        match error {
            ValidationError::Violations(list) => {
                self.append(list);
                Ok(())
            }
            ValidationError::Fatal(fatal) => Err(fatal),
        }
    }

    /// Like [`append_error`](Self::append_error); `Ok(())` is a no-op.
    pub fn append_result(&mut self, result: ValidationResult) -> Result<(), FatalError> {
        match result {
            Ok(()) => Ok(()),
            Err(error) => self.append_error(error),
        }
    }

    /// Normalizes an arbitrary boxed error and merges it, see
    /// [`ValidationError::from_error`].
    pub fn append_boxed_error(
        &mut self,
        error: Box<dyn std::error::Error + Send + Sync + 'static>,
    ) -> Result<(), FatalError> {
        self.append_error(ValidationError::from_error(error))
    }

    /// Returns `true` when some violation carries `code`.
    #[must_use]
    pub fn has_code(&self, code: &str) -> bool {
        self.violations.iter().any(|v| v.code() == code)
    }

    /// Violations carrying `code`, in order.
    #[must_use]
    pub fn filter_by_code(&self, code: &str) -> ViolationList {
        self.violations
            .iter()
            .filter(|v| v.code() == code)
            .cloned()
            .collect()
    }

    /// `Ok(())` when empty, otherwise the list as an error.
    pub fn into_result(self) -> ValidationResult {
        if self.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::Violations(self))
        }
    }

    /// Serializes the list as a JSON array.
    pub fn to_json_value(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

impl fmt::Display for ViolationList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("the list of violations is empty");
        }
        for (i, violation) in self.violations.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ViolationList {}

impl From<Vec<Violation>> for ViolationList {
    fn from(violations: Vec<Violation>) -> Self {
        Self { violations }
    }
}

impl From<Violation> for ViolationList {
    fn from(violation: Violation) -> Self {
        Self {
            violations: vec![violation],
        }
    }
}

impl FromIterator<Violation> for ViolationList {
    fn from_iter<I: IntoIterator<Item = Violation>>(iter: I) -> Self {
        Self {
            violations: iter.into_iter().collect(),
        }
    }
}

impl Extend<Violation> for ViolationList {
    fn extend<I: IntoIterator<Item = Violation>>(&mut self, iter: I) {
        self.violations.extend(iter);
    }
}

impl IntoIterator for ViolationList {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.into_iter()
    }
}

impl<'a> IntoIterator for &'a ViolationList {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.iter()
    }
}

impl Index<usize> for ViolationList {
    type Output = Violation;

    fn index(&self, index: usize) -> &Self::Output {
        &self.violations[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::path::PropertyPath;
    use pretty_assertions::assert_eq;

    fn violation(code: &'static str) -> Violation {
        Violation::new(code, "Broken.")
    }

    #[test]
    fn test_append_never_nests() {
        let mut outer: ViolationList = vec![violation("a")].into();
        let inner: ViolationList = vec![violation("b"), violation("c")].into();

        outer
            .append_error(ValidationError::Violations(inner))
            .unwrap();

        let codes: Vec<_> = outer.iter().map(Violation::code).collect();
        assert_eq!(codes, ["a", "b", "c"]);
    }

    #[test]
    fn test_append_fatal_is_returned() {
        let mut list = ViolationList::new();
        let fatal = list
            .append_result(Err(FatalError::ConstraintNotFound { key: "x".into() }.into()))
            .unwrap_err();

        assert!(matches!(fatal, FatalError::ConstraintNotFound { .. }));
        assert!(list.is_empty());
    }

    #[test]
    fn test_into_result() {
        assert!(ViolationList::new().into_result().is_ok());
        let error = ViolationList::from(violation("a")).into_result().unwrap_err();
        assert!(error.is_violations());
    }

    #[test]
    fn test_display_joins_with_semicolon() {
        let list: ViolationList = vec![
            violation("a").with_property_path(PropertyPath::new().with_property("name")),
            violation("b"),
        ]
        .into();

        assert_eq!(
            list.to_string(),
            "violation at 'name': Broken.; violation: Broken."
        );
    }

    #[test]
    fn test_json_shape() {
        let list: ViolationList = vec![
            violation("a").with_property_path(PropertyPath::new().with_property("tags").with_index(0)),
            violation("b"),
        ]
        .into();

        assert_eq!(
            list.to_json_value().unwrap(),
            serde_json::json!([
                { "code": "a", "message": "Broken.", "propertyPath": "tags[0]" },
                { "code": "b", "message": "Broken." },
            ])
        );
    }

    #[test]
    fn test_filter_by_code() {
        let list: ViolationList = vec![violation("a"), violation("b"), violation("a")].into();
        assert_eq!(list.filter_by_code("a").len(), 2);
        assert!(list.has_code("b"));
        assert!(!list.has_code("c"));
    }
}
