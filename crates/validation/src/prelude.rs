//! Prelude module for convenient imports.
//!
//! Provides a single `use nebula_validation::prelude::*;` import that brings
//! in the argument constructors, scope options, combinators, constraint
//! contracts and the [`it`](crate::it) module.
//!
//! # Examples
//!
//! ```rust,ignore
//! use nebula_validation::prelude::*;
//!
//! validate(arguments![
//!     string(&title, options![property_name("title"), it::is_not_blank()]),
//!     at_least_one_of(arguments![
//!         string(&email, options![it::is_email()]),
//!         string(&phone, options![it::is_not_blank()]),
//!     ]),
//! ])?;
//! ```

// ============================================================================
// FOUNDATION: Core types, errors, contracts
// ============================================================================

pub use crate::foundation::{
    AsValue, BoolConstraint, Constraint, CountableConstraint, FatalError, Iterable,
    IterableConstraint, NilConstraint, Number, NumberConstraint, Opt, PropertyPath, Scope,
    StringConstraint, TimeConstraint, Validatable, ValidationError, ValidationResult, Value,
    Violation, ViolationList, array_index, filter, groups, language, property_name,
    property_path,
};

// ============================================================================
// ARGUMENTS AND COMBINATORS
// ============================================================================

pub use crate::argument::{
    Argument, check_no_violations, countable, each, each_string, iterable, nil, nil_string,
    number, string, strings, time, valid, value,
};
pub use crate::combinators::{at_least_one_of, sequentially, when};

// ============================================================================
// VALIDATOR AND TRANSLATION
// ============================================================================

pub use crate::translation::LanguageTag;
pub use crate::validator::{Validator, validate};
pub use crate::validators::it;
pub use crate::{arguments, options, validatable_value};
