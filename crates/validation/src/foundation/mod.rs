//! Core validation types and traits
//!
//! - **Locations**: [`PropertyPath`], [`PathElement`]
//! - **Messages**: [`TemplateParameter`], [`TemplateParameterList`]
//! - **Results**: [`Violation`], [`ViolationList`], [`ValidationError`], [`FatalError`]
//! - **Context**: [`Scope`] and its options ([`Opt`])
//! - **Contracts**: [`Constraint`] and the per-kind sub-traits
//! - **Values**: [`Value`], [`AsValue`], [`Number`], [`Iterable`], [`Validatable`]
//!
//! # Architecture
//!
//! ## 1. Violations are data, fatal errors abort
//!
//! A constraint either accepts a value or reports a [`Violation`]. Violations
//! accumulate across arguments, elements and nested values into one
//! [`ViolationList`]. Anything else, a misconfigured constraint or an
//! unsupported value, is a [`FatalError`] and stops validation at once.
//!
//! ## 2. Scope carries the context
//!
//! Constraints hold no per-call state. The [`Scope`] passed to them knows the
//! current property path, the active groups, the language and the violation
//! factory, and every nested validation derives a child scope from it.
//!
//! ```rust,ignore
//! let scope = Scope::default().at_property("user").at_index(0);
//! assert_eq!(scope.property_path().format(), "user[0]");
//! ```

pub mod constraint;
pub mod error;
pub mod list;
pub mod path;
pub mod scope;
pub mod template;
pub mod validatable;
pub mod value;
pub mod violation;

pub use constraint::{
    BoolConstraint, Constraint, CountableConstraint, IterableConstraint, NilConstraint,
    NumberConstraint, StringConstraint, TimeConstraint,
};
pub use error::{FatalError, TranslationError, ValidationError, ValidationResult, filter};
pub use list::ViolationList;
pub use path::{PathElement, PropertyPath};
pub use scope::{
    DEFAULT_GROUP, Opt, Scope, array_index, groups, language, property_name, property_path,
};
pub use template::{TemplateParameter, TemplateParameterList};
pub use validatable::Validatable;
pub use value::{AsValue, Iterable, Key, Number, Value, ValueKind};
pub use violation::{TranslatingViolationFactory, Violation, ViolationBuilder, ViolationFactory};
