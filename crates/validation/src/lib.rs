//! # nebula-validation
//!
//! Scope-driven value validation with property paths, validation groups and
//! localized violation messages.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use nebula_validation::prelude::*;
//!
//! let result = validate(arguments![
//!     string(&user.name, options![property_name("name"), it::is_not_blank()]),
//!     number(user.age, options![property_name("age"), it::is_greater_than_or_equal(18)]),
//!     each_string(&user.emails, options![property_name("emails"), it::is_email()]),
//! ]);
//!
//! if let Err(ValidationError::Violations(violations)) = result {
//!     for violation in &violations {
//!         println!("{}: {}", violation.property_path(), violation.message());
//!     }
//! }
//! ```
//!
//! ## Concepts
//!
//! - **Arguments** ([`argument`]) pair a value with options: constraints
//!   plus path, group and language modifiers.
//! - **Constraints** ([`Constraint`]) implement one contract per value kind
//!   they support; the dispatcher picks the contract for each value.
//! - **Scope** ([`Scope`]) carries the property path, active groups, language
//!   and violation factory down the validation tree.
//! - **Results** are either a flat [`ViolationList`] or a [`FatalError`],
//!   both wrapped in [`ValidationError`].
//! - **Self-validation**: types implementing [`Validatable`] validate their
//!   own fields and nest under the caller's path.
//!
//! ## Built-in Constraints
//!
//! Every constructor lives in [`it`]: blank and nil checks, counts, lengths,
//! numeric and time comparisons, choices, patterns and the web formats
//! (email, URL, IP). Pure predicates live in [`is`].

// ValidationError wraps a whole violation list; boxing it would add an
// allocation to every failed validation.
#![allow(clippy::result_large_err)]

pub mod argument;
pub mod code;
pub mod combinators;
pub mod dispatch;
pub mod foundation;
pub mod is;
mod macros;
pub mod message;
pub mod prelude;
pub mod translation;
mod validator;
pub mod validators;

pub use argument::Argument;
pub use foundation::{
    AsValue, BoolConstraint, Constraint, CountableConstraint, DEFAULT_GROUP, FatalError, Iterable,
    IterableConstraint, Key, NilConstraint, Number, NumberConstraint, Opt, PathElement,
    PropertyPath, Scope, StringConstraint, TemplateParameter, TemplateParameterList,
    TimeConstraint, TranslatingViolationFactory, TranslationError, Validatable, ValidationError,
    ValidationResult, Value, ValueKind, Violation, ViolationBuilder, ViolationFactory,
    ViolationList, filter,
};
pub use translation::{LanguageTag, Translator};
pub use validator::{
    Validator, ValidatorBuilder, default_validator, set_default_validator, validate,
    validate_bool, validate_countable, validate_each, validate_each_string, validate_iterable,
    validate_number, validate_string, validate_strings, validate_time, validate_validatable,
    validate_value,
};
pub use validators::it;
