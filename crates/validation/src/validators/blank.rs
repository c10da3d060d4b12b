//! Blank and nil checks
//!
//! "Blank" is the zero value of each kind: nil, `false`, numeric zero, the
//! empty string, an empty collection and the Unix epoch.

use chrono::{DateTime, Utc};

use crate::code;
use crate::foundation::constraint::{
    BoolConstraint, Constraint, CountableConstraint, NilConstraint, NumberConstraint,
    StringConstraint, TimeConstraint,
};
use crate::foundation::error::ValidationResult;
use crate::foundation::scope::Scope;
use crate::foundation::value::Number;
use crate::message;
use crate::validators::rule::{Rule, rule_methods};

fn is_blank_time(value: &DateTime<Utc>) -> bool {
    *value == DateTime::UNIX_EPOCH
}

/// Implements every contract view for a constraint with a `check_blank`
/// method and a `check_nil` method.
macro_rules! all_kinds {
    ($name:ident) => {
        impl Constraint for $name {
            fn name(&self) -> &str {
                stringify!($name)
            }

            fn as_nil(&self) -> Option<&dyn NilConstraint> {
                Some(self)
            }

            fn as_bool(&self) -> Option<&dyn BoolConstraint> {
                Some(self)
            }

            fn as_number(&self) -> Option<&dyn NumberConstraint> {
                Some(self)
            }

            fn as_string(&self) -> Option<&dyn StringConstraint> {
                Some(self)
            }

            fn as_countable(&self) -> Option<&dyn CountableConstraint> {
                Some(self)
            }

            fn as_time(&self) -> Option<&dyn TimeConstraint> {
                Some(self)
            }
        }

        impl NilConstraint for $name {
            fn validate_nil(&self, scope: &Scope) -> ValidationResult {
                self.check_nil(scope)
            }
        }

        impl BoolConstraint for $name {
            fn validate_bool(&self, value: bool, scope: &Scope) -> ValidationResult {
                self.check_blank(!value, scope)
            }
        }

        impl NumberConstraint for $name {
            fn validate_number(&self, value: Number, scope: &Scope) -> ValidationResult {
                self.check_blank(value.is_zero(), scope)
            }
        }

        impl StringConstraint for $name {
            fn validate_string(&self, value: &str, scope: &Scope) -> ValidationResult {
                self.check_blank(value.is_empty(), scope)
            }
        }

        impl CountableConstraint for $name {
            fn validate_countable(&self, count: usize, scope: &Scope) -> ValidationResult {
                self.check_blank(count == 0, scope)
            }
        }

        impl TimeConstraint for $name {
            fn validate_time(&self, value: &DateTime<Utc>, scope: &Scope) -> ValidationResult {
                self.check_blank(is_blank_time(value), scope)
            }
        }
    };
}

// ============================================================================
// NOT BLANK
// ============================================================================

/// Rejects blank values, and nil unless [`allow_nil`](Self::allow_nil) is set.
#[derive(Debug, Clone)]
pub struct NotBlank {
    rule: Rule,
    allow_nil: bool,
}

/// Value must not be blank.
pub fn is_not_blank() -> NotBlank {
    NotBlank {
        rule: Rule::new(code::NOT_BLANK, message::NOT_BLANK),
        allow_nil: false,
    }
}

impl NotBlank {
    /// Accepts nil.
    #[must_use = "builder methods must be chained or built"]
    pub fn allow_nil(mut self) -> Self {
        self.allow_nil = true;
        self
    }

    fn check_nil(&self, scope: &Scope) -> ValidationResult {
        if self.allow_nil {
            return Ok(());
        }
        self.check_blank(true, scope)
    }

    fn check_blank(&self, blank: bool, scope: &Scope) -> ValidationResult {
        if self.rule.is_skipped(scope) {
            return Ok(());
        }
        self.rule.check(!blank, scope, [])
    }
}

rule_methods!(NotBlank);
all_kinds!(NotBlank);

// ============================================================================
// BLANK
// ============================================================================

/// Accepts only blank values (nil included).
#[derive(Debug, Clone)]
pub struct Blank {
    rule: Rule,
}

/// Value must be blank.
pub fn is_blank() -> Blank {
    Blank {
        rule: Rule::new(code::BLANK, message::BLANK),
    }
}

impl Blank {
    fn check_nil(&self, _scope: &Scope) -> ValidationResult {
        Ok(())
    }

    fn check_blank(&self, blank: bool, scope: &Scope) -> ValidationResult {
        if self.rule.is_skipped(scope) {
            return Ok(());
        }
        self.rule.check(blank, scope, [])
    }
}

rule_methods!(Blank);
all_kinds!(Blank);

// ============================================================================
// NOT NIL
// ============================================================================

/// Rejects nil; every present value passes.
#[derive(Debug, Clone)]
pub struct NotNil {
    rule: Rule,
}

/// Value must be present.
pub fn is_not_nil() -> NotNil {
    NotNil {
        rule: Rule::new(code::NOT_NIL, message::NOT_NIL),
    }
}

impl NotNil {
    fn check_nil(&self, scope: &Scope) -> ValidationResult {
        if self.rule.is_skipped(scope) {
            return Ok(());
        }
        Err(self.rule.violation(scope, []))
    }

    fn check_blank(&self, _blank: bool, _scope: &Scope) -> ValidationResult {
        Ok(())
    }
}

rule_methods!(NotNil);
all_kinds!(NotNil);

// ============================================================================
// NIL
// ============================================================================

/// Accepts only nil.
#[derive(Debug, Clone)]
pub struct Nil {
    rule: Rule,
}

/// Value must be absent.
pub fn is_nil() -> Nil {
    Nil {
        rule: Rule::new(code::NIL, message::NIL),
    }
}

impl Nil {
    fn check_nil(&self, _scope: &Scope) -> ValidationResult {
        Ok(())
    }

    fn check_blank(&self, _blank: bool, scope: &Scope) -> ValidationResult {
        if self.rule.is_skipped(scope) {
            return Ok(());
        }
        Err(self.rule.violation(scope, []))
    }
}

rule_methods!(Nil);
all_kinds!(Nil);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::argument::{countable, number, string, time, value};
    use crate::foundation::error::ValidationError;
    use rstest::rstest;

    fn run(argument: crate::argument::Argument<'_>) -> Vec<String> {
        match Scope::default().validate([argument]) {
            Ok(()) => Vec::new(),
            Err(ValidationError::Violations(list)) => {
                list.iter().map(|v| v.code().to_owned()).collect()
            }
            Err(ValidationError::Fatal(error)) => panic!("unexpected fatal error: {error}"),
        }
    }

    #[rstest]
    #[case::empty_string(string("", [is_not_blank().into()]), vec![code::NOT_BLANK])]
    #[case::string(string("a", [is_not_blank().into()]), vec![])]
    #[case::zero_int(number(0, [is_not_blank().into()]), vec![code::NOT_BLANK])]
    #[case::zero_float(number(0.0, [is_not_blank().into()]), vec![code::NOT_BLANK])]
    #[case::float(number(0.1, [is_not_blank().into()]), vec![])]
    #[case::empty_count(countable(0, [is_not_blank().into()]), vec![code::NOT_BLANK])]
    #[case::epoch(time(DateTime::UNIX_EPOCH, [is_not_blank().into()]), vec![code::NOT_BLANK])]
    #[case::disabled(string("", [is_not_blank().when(false).into()]), vec![])]
    #[case::blank_string(string("", [is_blank().into()]), vec![])]
    #[case::blank_violated(number(1, [is_blank().into()]), vec![code::BLANK])]
    fn test_blank_rules(#[case] argument: crate::argument::Argument<'static>, #[case] expected: Vec<&str>) {
        assert_eq!(run(argument), expected);
    }

    #[test]
    fn test_nil_policies() {
        let none: Option<String> = None;
        let some = Some(String::new());

        assert_eq!(run(value(&none, [is_not_blank().into()])), [code::NOT_BLANK]);
        assert!(run(value(&none, [is_not_blank().allow_nil().into()])).is_empty());
        assert!(run(value(&none, [is_blank().into()])).is_empty());
        assert_eq!(run(value(&none, [is_not_nil().into()])), [code::NOT_NIL]);
        assert!(run(value(&some, [is_not_nil().into()])).is_empty());
        assert!(run(value(&none, [is_nil().into()])).is_empty());
        assert_eq!(run(value(&some, [is_nil().into()])), [code::NIL]);
    }

    #[test]
    fn test_custom_message_is_rendered() {
        let error = Scope::default()
            .validate([string("", [is_not_blank().message("Custom message.").into()])])
            .unwrap_err();
        assert_eq!(error.violations().unwrap()[0].message(), "Custom message.");
    }
}
