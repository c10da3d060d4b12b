//! Macros for building option and argument lists.
//!
//! # Available Macros
//!
//! - [`options!`] - collect constraints and scope options into a `Vec<Opt>`
//! - [`arguments!`] - collect arguments and combinators into a `Vec<Argument>`
//! - [`validatable_value!`] - let a [`Validatable`](crate::Validatable) type
//!   be passed wherever an [`AsValue`](crate::AsValue) is expected
//!
//! # Examples
//!
//! ```rust,ignore
//! use nebula_validation::prelude::*;
//!
//! validator.validate(arguments![
//!     string(&user.name, options![property_name("name"), it::is_not_blank()]),
//!     when(user.is_admin).then(arguments![
//!         iterable(&user.roles, options![property_name("roles"), it::has_min_count(1)]),
//!     ]),
//! ])
//! ```

// ============================================================================
// OPTIONS MACRO
// ============================================================================

/// Builds a `Vec<Opt>` from constraints and scope options.
///
/// Every element goes through `Into<Opt>`, so constraints need no `.into()`:
///
/// ```rust,ignore
/// let options = options![property_name("age"), it::is_positive(), it::is_less_than(150)];
/// ```
#[macro_export]
macro_rules! options {
    () => {
        ::std::vec::Vec::<$crate::Opt>::new()
    };
    ($($option:expr),+ $(,)?) => {
        ::std::vec![$(::core::convert::Into::<$crate::Opt>::into($option)),+]
    };
}

// ============================================================================
// ARGUMENTS MACRO
// ============================================================================

/// Builds a `Vec<Argument>` from arguments and combinators.
///
/// ```rust,ignore
/// let arguments = arguments![
///     string(&name, options![it::is_not_blank()]),
///     sequentially(arguments![...]),
/// ];
/// ```
#[macro_export]
macro_rules! arguments {
    () => {
        ::std::vec::Vec::<$crate::Argument<'_>>::new()
    };
    ($($argument:expr),+ $(,)?) => {
        ::std::vec![$(::core::convert::Into::<$crate::Argument<'_>>::into($argument)),+]
    };
}

// ============================================================================
// VALIDATABLE VALUE MACRO
// ============================================================================

/// Implements [`AsValue`](crate::AsValue) for types implementing
/// [`Validatable`](crate::Validatable), so they can be dispatched as values,
/// stored in collections passed to `iterable` / `each`, or wrapped in
/// `Option`.
///
/// ```rust,ignore
/// struct Component { name: String }
///
/// impl Validatable for Component {
///     fn validate(&self, scope: &Scope) -> ValidationResult { ... }
/// }
///
/// validatable_value!(Component);
///
/// // elements are validated at `components[0]`, `components[1]`, ...
/// validator.validate([iterable(&product.components, options![property_name("components")])])
/// ```
#[macro_export]
macro_rules! validatable_value {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::AsValue for $ty {
                fn as_value(&self) -> $crate::Value<'_> {
                    $crate::Value::Validatable(self)
                }
            }
        )+
    };
}

#[cfg(test)]
mod tests {
    use crate::argument::{Argument, string};
    use crate::foundation::scope::{Opt, Scope, property_name};
    use crate::validators::it;

    #[test]
    fn test_options_accepts_constraints_and_scope_options() {
        let options: Vec<Opt> = options![property_name("name"), it::is_not_blank(), it::has_max_length(3)];
        assert_eq!(options.len(), 3);
        assert!(options[0].as_constraint().is_none());
        assert!(options[1].as_constraint().is_some());
        assert!(options![].is_empty());
    }

    #[test]
    fn test_arguments_accepts_combinators() {
        let arguments: Vec<Argument<'_>> = arguments![
            string("", options![property_name("a"), it::is_not_blank()]),
            crate::combinators::when(true).then(arguments![string("", options![it::is_not_blank()])]),
        ];
        let error = Scope::default().validate(arguments).unwrap_err();
        assert_eq!(error.violations().unwrap().len(), 2);
    }
}
