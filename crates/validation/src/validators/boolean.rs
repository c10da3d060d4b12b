//! Boolean checks

use crate::code;
use crate::foundation::constraint::{BoolConstraint, Constraint};
use crate::foundation::error::ValidationResult;
use crate::foundation::scope::Scope;
use crate::message;
use crate::validators::rule::{Rule, rule_methods};

/// Requires a boolean to hold an expected value. Nil is not checked.
#[derive(Debug, Clone)]
pub struct BoolValue {
    expected: bool,
    rule: Rule,
}

/// Value must be `true`.
pub fn is_true() -> BoolValue {
    BoolValue {
        expected: true,
        rule: Rule::new(code::NOT_TRUE, message::NOT_TRUE),
    }
}

/// Value must be `false`.
pub fn is_false() -> BoolValue {
    BoolValue {
        expected: false,
        rule: Rule::new(code::NOT_FALSE, message::NOT_FALSE),
    }
}

rule_methods!(BoolValue);

impl Constraint for BoolValue {
    fn name(&self) -> &str {
        if self.expected { "IsTrue" } else { "IsFalse" }
    }

    fn as_bool(&self) -> Option<&dyn BoolConstraint> {
        Some(self)
    }
}

impl BoolConstraint for BoolValue {
    fn validate_bool(&self, value: bool, scope: &Scope) -> ValidationResult {
        if self.rule.is_skipped(scope) {
            return Ok(());
        }
        self.rule.check(value == self.expected, scope, [])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::argument::{bool, string};
    use crate::foundation::error::{FatalError, ValidationError};

    #[test]
    fn test_expected_values() {
        let scope = Scope::default();
        assert!(scope.validate([bool(true, [is_true().into()])]).is_ok());
        assert!(scope.validate([bool(false, [is_false().into()])]).is_ok());

        let error = scope.validate([bool(false, [is_true().into()])]).unwrap_err();
        assert_eq!(error.violations().unwrap()[0].code(), code::NOT_TRUE);
        assert_eq!(error.violations().unwrap()[0].message(), message::NOT_TRUE);
    }

    #[test]
    fn test_nil_is_skipped() {
        assert!(Scope::default().validate([bool(None::<bool>, [is_true().into()])]).is_ok());
    }

    #[test]
    fn test_string_is_inapplicable() {
        let error = Scope::default().validate([string("yes", [is_true().into()])]).unwrap_err();
        assert!(matches!(
            error,
            ValidationError::Fatal(FatalError::InapplicableConstraint { .. })
        ));
    }
}
