//! Validation arguments
//!
//! An [`Argument`] pairs a value with its option list and is evaluated lazily
//! against a [`Scope`]. Arguments are what [`Scope::validate`] and
//! [`Validator::validate`](crate::Validator::validate) consume; the
//! combinators in [`combinators`](crate::combinators) are arguments too.
//!
//! ```rust,ignore
//! validator.validate(arguments![
//!     string(&user.name, options![property_name("name"), it::is_not_blank()]),
//!     number(user.age, options![property_name("age"), it::is_greater_than_or_equal(18)]),
//!     each_string(&user.emails, options![property_name("emails"), it::is_email()]),
//! ])
//! ```

use std::fmt;

use chrono::{DateTime, Utc};

use crate::dispatch;
use crate::foundation::error::ValidationResult;
use crate::foundation::scope::{Opt, Scope};
use crate::foundation::validatable::Validatable;
use crate::foundation::value::{AsValue, Iterable, Number};

/// A deferred validation step.
pub struct Argument<'a> {
    run: Box<dyn FnOnce(&Scope) -> ValidationResult + 'a>,
}

impl<'a> Argument<'a> {
    /// Wraps a closure.
    pub fn new<F>(run: F) -> Self
    where
        F: FnOnce(&Scope) -> ValidationResult + 'a,
    {
        Self { run: Box::new(run) }
    }

    /// Evaluates the argument in `scope`.
    pub fn validate(self, scope: &Scope) -> ValidationResult {
        (self.run)(scope)
    }
}

impl fmt::Debug for Argument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Argument").finish_non_exhaustive()
    }
}

fn collect(options: impl IntoIterator<Item = Opt>) -> Vec<Opt> {
    options.into_iter().collect()
}

/// Any value implementing [`AsValue`], dispatched by its kind.
pub fn value<'a, T>(value: &'a T, options: impl IntoIterator<Item = Opt>) -> Argument<'a>
where
    T: AsValue + ?Sized,
{
    let options = collect(options);
    Argument::new(move |scope| dispatch::validate_value(value.as_value(), &options, scope))
}

/// A boolean; `None` is validated as nil.
pub fn bool<'a>(value: impl Into<Option<bool>>, options: impl IntoIterator<Item = Opt>) -> Argument<'a> {
    let value = value.into();
    let options = collect(options);
    Argument::new(move |scope| match value {
        Some(v) => dispatch::validate_bool(v, &options, scope),
        None => dispatch::validate_nil(&options, scope),
    })
}

/// A number of any primitive kind.
pub fn number<'a>(value: impl Into<Number>, options: impl IntoIterator<Item = Opt>) -> Argument<'a> {
    let value = value.into();
    let options = collect(options);
    Argument::new(move |scope| dispatch::validate_number(value, &options, scope))
}

/// A string.
pub fn string<'a>(value: &'a str, options: impl IntoIterator<Item = Opt>) -> Argument<'a> {
    let options = collect(options);
    Argument::new(move |scope| dispatch::validate_string(value, &options, scope))
}

/// Optional string; `None` is validated as nil.
pub fn nil_string<'a>(value: Option<&'a str>, options: impl IntoIterator<Item = Opt>) -> Argument<'a> {
    let options = collect(options);
    Argument::new(move |scope| match value {
        Some(v) => dispatch::validate_string(v, &options, scope),
        None => dispatch::validate_nil(&options, scope),
    })
}

/// Every string of a slice; elements are located at `[index]`.
pub fn strings<'a, S>(values: &'a [S], options: impl IntoIterator<Item = Opt>) -> Argument<'a>
where
    S: AsRef<str>,
{
    each_string(values, options)
}

/// A list or map as a whole, recursing into self-validating elements.
pub fn iterable<'a, T>(value: &'a T, options: impl IntoIterator<Item = Opt>) -> Argument<'a>
where
    T: Iterable,
{
    let options = collect(options);
    Argument::new(move |scope| dispatch::validate_iterable(value, &options, scope))
}

/// An element count.
pub fn countable<'a>(count: usize, options: impl IntoIterator<Item = Opt>) -> Argument<'a> {
    let options = collect(options);
    Argument::new(move |scope| dispatch::validate_countable(count, &options, scope))
}

/// A point in time.
pub fn time<'a>(value: DateTime<Utc>, options: impl IntoIterator<Item = Opt>) -> Argument<'a> {
    let options = collect(options);
    Argument::new(move |scope| dispatch::validate_time(&value, &options, scope))
}

/// Every element of a list or map, each against the same options.
pub fn each<'a, T>(value: &'a T, options: impl IntoIterator<Item = Opt>) -> Argument<'a>
where
    T: Iterable,
{
    let options = collect(options);
    Argument::new(move |scope| dispatch::validate_each(value, &options, scope))
}

/// Every string of a slice, each against the same options.
pub fn each_string<'a, S>(values: &'a [S], options: impl IntoIterator<Item = Opt>) -> Argument<'a>
where
    S: AsRef<str>,
{
    let options = collect(options);
    Argument::new(move |scope| dispatch::validate_each_string(values, &options, scope))
}

/// A self-validating value; constraints among `options` are ignored.
pub fn valid<'a, V>(value: &'a V, options: impl IntoIterator<Item = Opt>) -> Argument<'a>
where
    V: Validatable + ?Sized,
{
    let options = collect(options);
    Argument::new(move |scope| {
        let scope = scope.apply_options(&options)?;
        value.validate(&scope)
    })
}

/// Nil-ness of any value: runs nil constraints when `is_nil` is true and
/// nothing otherwise.
pub fn nil<'a>(is_nil: bool, options: impl IntoIterator<Item = Opt>) -> Argument<'a> {
    let options = collect(options);
    Argument::new(move |scope| {
        if is_nil {
            dispatch::validate_nil(&options, scope)
        } else {
            scope.apply_options(&options).map(drop).map_err(Into::into)
        }
    })
}

/// Feeds an already computed result into the current validation.
///
/// Violations are merged; a fatal error aborts as usual.
pub fn check_no_violations<'a>(result: ValidationResult) -> Argument<'a> {
    Argument::new(move |_| result)
}
