//! Validation outcome and fatal errors
//!
//! Every validation step returns a [`ValidationResult`]. Its error side keeps
//! the two classes apart:
//!
//! - [`ValidationError::Violations`]: data failed one or more constraints.
//!   Recoverable; callers keep collecting.
//! - [`ValidationError::Fatal`]: the validation itself is misconfigured
//!   (unsupported value, inapplicable constraint, failing set-up, ...).
//!   Aborts the whole call immediately.

use std::error::Error as StdError;
use std::sync::Arc;

use tracing::debug;

use crate::foundation::list::ViolationList;
use crate::foundation::value::ValueKind;
use crate::foundation::violation::Violation;

/// Result of any validation step.
pub type ValidationResult = Result<(), ValidationError>;

// ============================================================================
// FATAL ERROR
// ============================================================================

/// Misconfiguration or unsupported operation; never merged into violations.
#[derive(Debug, Clone, thiserror::Error)]
#[non_exhaustive]
pub enum FatalError {
    /// The value has no kind the engine can dispatch on.
    #[error("cannot validate value of type \"{type_name}\"")]
    NotValidatable {
        /// Rust type name of the value.
        type_name: String,
    },

    /// A constraint was applied to a value kind it does not support.
    #[error("constraint \"{constraint}\" cannot be applied to value of kind \"{kind}\"")]
    InapplicableConstraint {
        /// Constraint name.
        constraint: String,
        /// Kind of the value it was applied to.
        kind: ValueKind,
    },

    /// A constraint rejected its own configuration.
    #[error("failed to set up constraint \"{constraint}\": {reason}")]
    SetUp {
        /// Constraint name.
        constraint: String,
        /// What is wrong with it.
        reason: String,
    },

    /// `validate_by` was called with a key nothing was stored under.
    #[error("constraint with key \"{key}\" is not stored in the validator")]
    ConstraintNotFound {
        /// Requested key.
        key: String,
    },

    /// Two constraints were stored under the same key.
    #[error("constraint with key \"{key}\" already stored")]
    ConstraintAlreadyStored {
        /// Duplicated key.
        key: String,
    },

    /// A combinator was built without any sub-arguments.
    #[error("{combinator} requires at least one argument")]
    EmptyArguments {
        /// Combinator name.
        combinator: &'static str,
    },

    /// Translation catalogs are misconfigured.
    #[error(transparent)]
    Translation(#[from] TranslationError),

    /// Any other error returned by a self-validating value.
    #[error(transparent)]
    Custom(Arc<dyn StdError + Send + Sync>),
}

impl FatalError {
    /// Shorthand for [`FatalError::SetUp`].
    pub fn set_up(constraint: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::SetUp {
            constraint: constraint.into(),
            reason: reason.into(),
        }
    }

    /// Shorthand for [`FatalError::InapplicableConstraint`].
    pub fn inapplicable(constraint: impl Into<String>, kind: ValueKind) -> Self {
        let constraint = constraint.into();
        debug!(%constraint, %kind, "constraint is not applicable to value kind");
        Self::InapplicableConstraint { constraint, kind }
    }

    /// Wraps an arbitrary error.
    pub fn custom(error: impl StdError + Send + Sync + 'static) -> Self {
        Self::Custom(Arc::new(error))
    }
}

/// Translation catalog misconfiguration, surfaced when a validator is built.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum TranslationError {
    /// No catalog is loaded for the fallback language.
    #[error("no translations loaded for fallback language \"{language}\"")]
    MissingFallback {
        /// Fallback language tag.
        language: String,
    },

    /// A language tag could not be parsed.
    #[error("invalid language tag \"{tag}\"")]
    InvalidLanguageTag {
        /// Offending input.
        tag: String,
    },
}

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// Error side of a [`ValidationResult`].
#[derive(Debug, Clone, thiserror::Error)]
pub enum ValidationError {
    /// One or more constraints failed; never empty.
    #[error(transparent)]
    Violations(ViolationList),

    /// Validation could not run.
    #[error(transparent)]
    Fatal(FatalError),
}

impl ValidationError {
    /// Returns the violations when this is the recoverable class.
    #[must_use]
    pub fn violations(&self) -> Option<&ViolationList> {
        match self {
            Self::Violations(list) => Some(list),
            Self::Fatal(_) => None,
        }
    }

    /// Consumes `self`, returning the violations when this is the recoverable class.
    #[must_use]
    pub fn into_violations(self) -> Option<ViolationList> {
        match self {
            Self::Violations(list) => Some(list),
            Self::Fatal(_) => None,
        }
    }

    /// Returns the fatal error, if any.
    #[must_use]
    pub fn fatal(&self) -> Option<&FatalError> {
        match self {
            Self::Fatal(error) => Some(error),
            Self::Violations(_) => None,
        }
    }

    /// Returns `true` for the recoverable class.
    #[must_use]
    pub fn is_violations(&self) -> bool {
        matches!(self, Self::Violations(_))
    }

    /// Returns `true` for the fatal class.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Fatal(_))
    }

    /// Normalizes an arbitrary error.
    ///
    /// Walks the `source()` chain looking for a [`ValidationError`],
    /// [`ViolationList`] or [`Violation`]; the first one found decides the
    /// class. Anything else becomes [`FatalError::Custom`].
    pub fn from_error(error: Box<dyn StdError + Send + Sync + 'static>) -> Self {
        let mut cursor: Option<&(dyn StdError + 'static)> = Some(error.as_ref());
        while let Some(current) = cursor {
            if let Some(found) = current.downcast_ref::<ValidationError>() {
                return found.clone();
            }
            if let Some(list) = current.downcast_ref::<ViolationList>() {
                return list.clone().into();
            }
            if let Some(violation) = current.downcast_ref::<Violation>() {
                return violation.clone().into();
            }
            if let Some(fatal) = current.downcast_ref::<FatalError>() {
                return fatal.clone().into();
            }
            cursor = current.source();
        }
        Self::Fatal(FatalError::Custom(Arc::from(error)))
    }
}

impl From<Violation> for ValidationError {
    fn from(violation: Violation) -> Self {
        Self::Violations(ViolationList::from(vec![violation]))
    }
}

impl From<ViolationList> for ValidationError {
    fn from(list: ViolationList) -> Self {
        Self::Violations(list)
    }
}

impl From<FatalError> for ValidationError {
    fn from(error: FatalError) -> Self {
        Self::Fatal(error)
    }
}

impl From<TranslationError> for ValidationError {
    fn from(error: TranslationError) -> Self {
        Self::Fatal(FatalError::Translation(error))
    }
}

// ============================================================================
// FILTER
// ============================================================================

/// Merges several results into one.
///
/// Violations from every result are flattened in order. The first fatal error
/// is returned as-is and the remaining results are ignored.
///
/// # Examples
///
/// ```rust,ignore
/// let result = nebula_validation::filter([
///     validator.validate_value(&a, options![it::is_not_blank()]),
///     validator.validate_value(&b, options![it::is_not_blank()]),
/// ]);
/// ```
pub fn filter<I>(results: I) -> ValidationResult
where
    I: IntoIterator<Item = ValidationResult>,
{
    let mut violations = ViolationList::new();
    for result in results {
        violations.append_result(result)?;
    }
    violations.into_result()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    #[derive(Debug)]
    struct Wrapper(Box<dyn StdError + Send + Sync>);

    impl fmt::Display for Wrapper {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "wrapped: {}", self.0)
        }
    }

    impl StdError for Wrapper {
        fn source(&self) -> Option<&(dyn StdError + 'static)> {
            Some(self.0.as_ref())
        }
    }

    #[derive(Debug, thiserror::Error)]
    #[error("boom")]
    struct Boom;

    fn violation(code: &'static str) -> Violation {
        Violation::new(code, "message")
    }

    #[test]
    fn test_from_error_unwraps_wrapped_violation() {
        let wrapped = Wrapper(Box::new(violation("code")));
        let error = ValidationError::from_error(Box::new(wrapped));

        let list = error.into_violations().unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].code(), "code");
    }

    #[test]
    fn test_from_error_unwraps_wrapped_list() {
        let list: ViolationList = vec![violation("a"), violation("b")].into();
        let direct = ValidationError::from_error(Box::new(list.clone()));
        let wrapped = ValidationError::from_error(Box::new(Wrapper(Box::new(list))));

        assert_eq!(direct.violations(), wrapped.violations());
        assert_eq!(wrapped.violations().unwrap().len(), 2);
    }

    #[test]
    fn test_from_error_unknown_is_fatal() {
        let error = ValidationError::from_error(Box::new(Boom));
        assert!(error.is_fatal());
        assert_eq!(error.to_string(), "boom");
    }

    #[test]
    fn test_filter_flattens_and_stops_on_fatal() {
        let ok = filter([Ok(()), Ok(())]);
        assert!(ok.is_ok());

        let merged = filter([
            Err(violation("a").into()),
            Ok(()),
            Err(ViolationList::from(vec![violation("b"), violation("c")]).into()),
        ])
        .unwrap_err();
        let codes: Vec<_> = merged.violations().unwrap().iter().map(Violation::code).collect();
        assert_eq!(codes, ["a", "b", "c"]);

        let fatal = filter([
            Err(violation("a").into()),
            Err(FatalError::ConstraintNotFound { key: "k".into() }.into()),
            Err(violation("b").into()),
        ])
        .unwrap_err();
        assert!(matches!(
            fatal,
            ValidationError::Fatal(FatalError::ConstraintNotFound { .. })
        ));
    }

    #[test]
    fn test_fatal_display() {
        let error = FatalError::inapplicable("IsTrue", ValueKind::String);
        assert_eq!(
            error.to_string(),
            "constraint \"IsTrue\" cannot be applied to value of kind \"string\""
        );
    }
}
