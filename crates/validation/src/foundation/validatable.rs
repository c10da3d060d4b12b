//! Self-validating values

use crate::foundation::error::ValidationResult;
use crate::foundation::scope::Scope;

/// A type that knows how to validate itself.
///
/// The engine hands over the caller's [`Scope`] unchanged (after applying the
/// caller's path, group and language options), so every violation produced
/// inside lands under the caller's property path.
///
/// # Examples
///
/// ```rust,ignore
/// use nebula_validation::prelude::*;
///
/// struct Component {
///     name: String,
///     tags: Vec<String>,
/// }
///
/// impl Validatable for Component {
///     fn validate(&self, scope: &Scope) -> ValidationResult {
///         scope.validate([
///             string(&self.name, options![property_name("name"), it::is_not_blank()]),
///             iterable(&self.tags, options![property_name("tags"), it::has_min_count(1)]),
///         ])
///     }
/// }
///
/// validatable_value!(Component);
/// ```
pub trait Validatable {
    /// Validates `self` within `scope`.
    fn validate(&self, scope: &Scope) -> ValidationResult;
}

impl<T: Validatable + ?Sized> Validatable for &T {
    fn validate(&self, scope: &Scope) -> ValidationResult {
        (**self).validate(scope)
    }
}

impl<T: Validatable + ?Sized> Validatable for Box<T> {
    fn validate(&self, scope: &Scope) -> ValidationResult {
        (**self).validate(scope)
    }
}

impl<T: Validatable + ?Sized> Validatable for std::sync::Arc<T> {
    fn validate(&self, scope: &Scope) -> ValidationResult {
        (**self).validate(scope)
    }
}
