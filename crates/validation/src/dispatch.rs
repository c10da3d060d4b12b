//! Value dispatcher
//!
//! Routes a classified [`Value`] to the matching constraint contract of every
//! constraint in an option list, recursing into self-validating values.
//!
//! Dispatch order:
//!
//! 1. the scope is derived from the option list (path, groups, language,
//!    constraint set-up);
//! 2. a [`Value::Validatable`] delegates entirely to its own `validate`, the
//!    caller's constraints are ignored;
//! 3. every other kind runs each constraint through its contract view. A
//!    constraint without a view for the kind is a fatal error, except for
//!    nil, where it is skipped;
//! 4. iterables additionally recurse into self-validating elements, extending
//!    the path with the element's index or key.

use chrono::{DateTime, Utc};
use tracing::{debug, trace};

use crate::foundation::constraint::Constraint;
use crate::foundation::error::{FatalError, ValidationError, ValidationResult};
use crate::foundation::list::ViolationList;
use crate::foundation::scope::{Opt, Scope};
use crate::foundation::value::{Iterable, Number, Value, ValueKind};

// ============================================================================
// ENTRY POINTS
// ============================================================================

/// Validates any classified value.
pub fn validate_value(value: Value<'_>, options: &[Opt], scope: &Scope) -> ValidationResult {
    let scope = scope.apply_options(options)?;
    validate_in_scope(value, options, &scope)
}

/// Validates a boolean.
pub fn validate_bool(value: bool, options: &[Opt], scope: &Scope) -> ValidationResult {
    let scope = scope.apply_options(options)?;
    run_constraints(options, &scope, ValueKind::Bool, |constraint| {
        constraint
            .as_bool()
            .map(|c| c.validate_bool(value, &scope))
    })
}

/// Validates a number.
pub fn validate_number(value: Number, options: &[Opt], scope: &Scope) -> ValidationResult {
    let scope = scope.apply_options(options)?;
    run_constraints(options, &scope, ValueKind::Number, |constraint| {
        constraint
            .as_number()
            .map(|c| c.validate_number(value, &scope))
    })
}

/// Validates a string.
pub fn validate_string(value: &str, options: &[Opt], scope: &Scope) -> ValidationResult {
    let scope = scope.apply_options(options)?;
    run_constraints(options, &scope, ValueKind::String, |constraint| {
        constraint
            .as_string()
            .map(|c| c.validate_string(value, &scope))
    })
}

/// Validates an element count.
pub fn validate_countable(count: usize, options: &[Opt], scope: &Scope) -> ValidationResult {
    let scope = scope.apply_options(options)?;
    countable_in_scope(count, options, &scope)
}

/// Validates a point in time.
pub fn validate_time(value: &DateTime<Utc>, options: &[Opt], scope: &Scope) -> ValidationResult {
    let scope = scope.apply_options(options)?;
    run_constraints(options, &scope, ValueKind::Time, |constraint| {
        constraint
            .as_time()
            .map(|c| c.validate_time(value, &scope))
    })
}

/// Validates a collection as a whole, then its self-validating elements.
pub fn validate_iterable(value: &dyn Iterable, options: &[Opt], scope: &Scope) -> ValidationResult {
    let scope = scope.apply_options(options)?;
    iterable_in_scope(value, options, &scope)
}

/// Validates a nil value.
pub fn validate_nil(options: &[Opt], scope: &Scope) -> ValidationResult {
    let scope = scope.apply_options(options)?;
    nil_in_scope(options, &scope)
}

/// Validates every element of a collection against the same options.
///
/// Elements are located at `path[index]` or `path.key`.
pub fn validate_each(value: &dyn Iterable, options: &[Opt], scope: &Scope) -> ValidationResult {
    let scope = scope.apply_options(options)?;
    let mut violations = ViolationList::new();

    value.try_for_each_element(&mut |key, element| {
        let element_scope = scope.at_key(&key);
        violations
            .append_result(validate_in_scope(element, options, &element_scope))
            .map_err(ValidationError::Fatal)
    })?;

    violations.into_result()
}

/// Validates every string of a slice against the same options.
pub fn validate_each_string<S: AsRef<str>>(
    values: &[S],
    options: &[Opt],
    scope: &Scope,
) -> ValidationResult {
    let scope = scope.apply_options(options)?;
    let mut violations = ViolationList::new();

    for (index, value) in values.iter().enumerate() {
        let element_scope = scope.at_index(index);
        let result = run_constraints(options, &element_scope, ValueKind::String, |constraint| {
            constraint
                .as_string()
                .map(|c| c.validate_string(value.as_ref(), &element_scope))
        });
        violations.append_result(result)?;
    }

    violations.into_result()
}

// ============================================================================
// DISPATCH
// ============================================================================

/// Dispatches `value` in a scope the options were already applied to.
fn validate_in_scope(value: Value<'_>, options: &[Opt], scope: &Scope) -> ValidationResult {
    trace!(
        kind = value.kind().map_or("unsupported", ValueKind::as_str),
        path = %scope.property_path(),
        "dispatching value"
    );

    match value {
        Value::Validatable(validatable) => validatable.validate(scope),
        Value::Nil => nil_in_scope(options, scope),
        Value::Bool(v) => run_constraints(options, scope, ValueKind::Bool, |constraint| {
            constraint.as_bool().map(|c| c.validate_bool(v, scope))
        }),
        Value::Number(v) => run_constraints(options, scope, ValueKind::Number, |constraint| {
            constraint.as_number().map(|c| c.validate_number(v, scope))
        }),
        Value::String(v) => run_constraints(options, scope, ValueKind::String, |constraint| {
            constraint.as_string().map(|c| c.validate_string(v, scope))
        }),
        Value::Time(v) => run_constraints(options, scope, ValueKind::Time, |constraint| {
            constraint.as_time().map(|c| c.validate_time(&v, scope))
        }),
        Value::Iterable(v) => iterable_in_scope(v, options, scope),
        Value::Unsupported(type_name) => {
            debug!(type_name, path = %scope.property_path(), "value is not validatable");
            Err(FatalError::NotValidatable {
                type_name: type_name.to_owned(),
            }
            .into())
        }
    }
}

fn nil_in_scope(options: &[Opt], scope: &Scope) -> ValidationResult {
    run_constraints(options, scope, ValueKind::Nil, |constraint| {
        Some(
            constraint
                .as_nil()
                .map_or(Ok(()), |c| c.validate_nil(scope)),
        )
    })
}

fn countable_in_scope(count: usize, options: &[Opt], scope: &Scope) -> ValidationResult {
    run_constraints(options, scope, ValueKind::Countable, |constraint| {
        constraint
            .as_countable()
            .map(|c| c.validate_countable(count, scope))
    })
}

fn iterable_in_scope(value: &dyn Iterable, options: &[Opt], scope: &Scope) -> ValidationResult {
    let mut violations = ViolationList::new();

    let own = run_constraints(options, scope, ValueKind::Iterable, |constraint| {
        if let Some(c) = constraint.as_iterable() {
            Some(c.validate_iterable(value, scope))
        } else {
            constraint
                .as_countable()
                .map(|c| c.validate_countable(value.count(), scope))
        }
    });
    violations.append_result(own)?;

    value.try_for_each_element(&mut |key, element| {
        let Value::Validatable(validatable) = element else {
            return Ok(());
        };
        let element_scope = scope.at_key(&key);
        violations
            .append_result(validatable.validate(&element_scope))
            .map_err(ValidationError::Fatal)
    })?;

    violations.into_result()
}

/// Runs `check` for every constraint of `options`, flattening violations.
///
/// `check` returns `None` when the constraint has no view for `kind`.
fn run_constraints<F>(options: &[Opt], scope: &Scope, kind: ValueKind, mut check: F) -> ValidationResult
where
    F: FnMut(&dyn Constraint) -> Option<ValidationResult>,
{
    let mut violations = ViolationList::new();
    for constraint in options.iter().filter_map(Opt::as_constraint) {
        match check(constraint) {
            Some(result) => violations.append_result(result)?,
            None => return Err(FatalError::inapplicable(constraint.name(), kind).into()),
        }
    }
    violations.into_result()
}
