//! Constraint contracts
//!
//! A constraint declares which value kinds it supports by returning itself
//! from the matching `as_*` accessor of [`Constraint`]. The dispatcher uses
//! those accessors as its dispatch table: a constraint whose accessor for the
//! value's kind returns `None` is a programming error and aborts validation
//! with [`FatalError::InapplicableConstraint`](crate::FatalError).
//!
//! Nil is the one exception: constraints without a [`NilConstraint`] view are
//! silently skipped for absent values, because most rules treat "nothing" as
//! valid and leave rejecting it to [`is_not_nil`](crate::it::is_not_nil).
//!
//! # Implementing a constraint
//!
//! ```rust,ignore
//! use nebula_validation::prelude::*;
//!
//! #[derive(Debug, Clone)]
//! struct IsEven;
//!
//! impl Constraint for IsEven {
//!     fn name(&self) -> &str { "IsEven" }
//!     fn as_number(&self) -> Option<&dyn NumberConstraint> { Some(self) }
//! }
//!
//! impl NumberConstraint for IsEven {
//!     fn validate_number(&self, value: Number, scope: &Scope) -> ValidationResult {
//!         match value {
//!             Number::Int(v) if v % 2 != 0 => Err(scope.build_violation("notEven", "Odd!").create().into()),
//!             _ => Ok(()),
//!         }
//!     }
//! }
//! ```

use chrono::{DateTime, Utc};

use crate::foundation::error::{FatalError, ValidationResult};
use crate::foundation::scope::Scope;
use crate::foundation::value::{Iterable, Number, ValueKind};

/// Base trait for every constraint.
///
/// Constraints are immutable once built and are shared across concurrent
/// validations; every per-call detail arrives through the [`Scope`].
pub trait Constraint: Send + Sync {
    /// Name reported in fatal errors.
    fn name(&self) -> &str;

    /// Checks the constraint's own configuration before it is used.
    fn set_up(&self) -> Result<(), FatalError> {
        Ok(())
    }

    /// Nil contract view.
    fn as_nil(&self) -> Option<&dyn NilConstraint> {
        None
    }

    /// Bool contract view.
    fn as_bool(&self) -> Option<&dyn BoolConstraint> {
        None
    }

    /// Number contract view.
    fn as_number(&self) -> Option<&dyn NumberConstraint> {
        None
    }

    /// String contract view.
    fn as_string(&self) -> Option<&dyn StringConstraint> {
        None
    }

    /// Countable contract view.
    fn as_countable(&self) -> Option<&dyn CountableConstraint> {
        None
    }

    /// Time contract view.
    fn as_time(&self) -> Option<&dyn TimeConstraint> {
        None
    }

    /// Iterable contract view.
    fn as_iterable(&self) -> Option<&dyn IterableConstraint> {
        None
    }

    /// Returns `true` when the constraint supports `kind`.
    fn supports(&self, kind: ValueKind) -> bool {
        match kind {
            ValueKind::Nil => self.as_nil().is_some(),
            ValueKind::Bool => self.as_bool().is_some(),
            ValueKind::Number => self.as_number().is_some(),
            ValueKind::String => self.as_string().is_some(),
            ValueKind::Countable => self.as_countable().is_some(),
            ValueKind::Time => self.as_time().is_some(),
            ValueKind::Iterable => {
                self.as_iterable().is_some() || self.as_countable().is_some()
            }
            ValueKind::Validatable => false,
        }
    }
}

/// Checks absent values.
pub trait NilConstraint: Constraint {
    /// Validates a `None`.
    fn validate_nil(&self, scope: &Scope) -> ValidationResult;
}

/// Checks booleans.
pub trait BoolConstraint: Constraint {
    /// Validates a boolean.
    fn validate_bool(&self, value: bool, scope: &Scope) -> ValidationResult;
}

/// Checks numbers of any kind.
pub trait NumberConstraint: Constraint {
    /// Validates a normalized number.
    fn validate_number(&self, value: Number, scope: &Scope) -> ValidationResult;
}

/// Checks text.
pub trait StringConstraint: Constraint {
    /// Validates a string.
    fn validate_string(&self, value: &str, scope: &Scope) -> ValidationResult;
}

/// Checks element counts.
pub trait CountableConstraint: Constraint {
    /// Validates an element count.
    fn validate_countable(&self, count: usize, scope: &Scope) -> ValidationResult;
}

/// Checks points in time.
pub trait TimeConstraint: Constraint {
    /// Validates a UTC date-time.
    fn validate_time(&self, value: &DateTime<Utc>, scope: &Scope) -> ValidationResult;
}

/// Checks lists and maps as a whole.
pub trait IterableConstraint: Constraint {
    /// Validates a collection.
    fn validate_iterable(&self, value: &dyn Iterable, scope: &Scope) -> ValidationResult;
}
