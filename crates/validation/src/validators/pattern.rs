//! Regular expression matching

use regex::Regex;

use crate::code;
use crate::foundation::constraint::{Constraint, StringConstraint};
use crate::foundation::error::ValidationResult;
use crate::foundation::scope::Scope;
use crate::message;
use crate::validators::rule::{Rule, param, rule_methods};

/// Matches a string against a compiled pattern. The empty string is skipped.
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
    must_match: bool,
    rule: Rule,
}

/// Value must match `regex`.
pub fn matches(regex: Regex) -> Pattern {
    Pattern {
        regex,
        must_match: true,
        rule: Rule::new(code::MATCHING_FAILED, message::NOT_VALID),
    }
}

/// Value must not match `regex`.
pub fn does_not_match(regex: Regex) -> Pattern {
    Pattern {
        regex,
        must_match: false,
        rule: Rule::new(code::MATCHING_FAILED, message::NOT_VALID),
    }
}

rule_methods!(Pattern);

impl Constraint for Pattern {
    fn name(&self) -> &str {
        "Pattern"
    }

    fn as_string(&self) -> Option<&dyn StringConstraint> {
        Some(self)
    }
}

impl StringConstraint for Pattern {
    fn validate_string(&self, value: &str, scope: &Scope) -> ValidationResult {
        if value.is_empty() || self.rule.is_skipped(scope) {
            return Ok(());
        }
        let valid = self.regex.is_match(value) == self.must_match;

        self.rule.check(
            valid,
            scope,
            [
                param("{{ value }}", value),
                param("{{ pattern }}", self.regex.as_str()),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::argument::string;
    use crate::foundation::error::ValidationError;
    use rstest::rstest;

    fn digits() -> Regex {
        Regex::new(r"^\d+$").unwrap()
    }

    #[rstest]
    #[case(matches(digits()), "123", None)]
    #[case(matches(digits()), "12a", Some(code::MATCHING_FAILED))]
    #[case(matches(digits()), "", None)]
    #[case(does_not_match(digits()), "123", Some(code::MATCHING_FAILED))]
    #[case(does_not_match(digits()), "abc", None)]
    fn test_patterns(#[case] pattern: Pattern, #[case] value: &str, #[case] expected: Option<&str>) {
        let code = Scope::default()
            .validate([string(value, [pattern.into()])])
            .err()
            .and_then(ValidationError::into_violations)
            .map(|list| list[0].code().to_owned());
        assert_eq!(code.as_deref(), expected);
    }

    #[test]
    fn test_default_message() {
        let error = Scope::default()
            .validate([string("x", [matches(digits()).into()])])
            .unwrap_err();
        assert_eq!(error.violations().unwrap()[0].message(), message::NOT_VALID);
    }
}
