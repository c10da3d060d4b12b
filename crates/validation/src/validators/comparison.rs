//! Numeric comparisons
//!
//! Comparisons are exact across integer and float representations (see
//! [`Number::compare`]). `NaN` compares to nothing, so every constraint here
//! reports it as a violation.

use std::cmp::Ordering;

use crate::code;
use crate::foundation::constraint::{Constraint, NumberConstraint};
use crate::foundation::error::{FatalError, ValidationResult};
use crate::foundation::scope::Scope;
use crate::foundation::value::Number;
use crate::message;
use crate::validators::rule::{Rule, param, rule_methods};

// ============================================================================
// COMPARISON
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operator {
    Equal,
    Greater,
    GreaterOrEqual,
    Less,
    LessOrEqual,
}

impl Operator {
    const fn holds(self, ordering: Ordering) -> bool {
        match self {
            Self::Equal => matches!(ordering, Ordering::Equal),
            Self::Greater => matches!(ordering, Ordering::Greater),
            Self::GreaterOrEqual => !matches!(ordering, Ordering::Less),
            Self::Less => matches!(ordering, Ordering::Less),
            Self::LessOrEqual => !matches!(ordering, Ordering::Greater),
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Equal => "NumberEqual",
            Self::Greater => "NumberGreaterThan",
            Self::GreaterOrEqual => "NumberGreaterThanOrEqual",
            Self::Less => "NumberLessThan",
            Self::LessOrEqual => "NumberLessThanOrEqual",
        }
    }
}

/// Compares a number against a fixed value.
#[derive(Debug, Clone)]
pub struct NumberComparison {
    operator: Operator,
    compared: Number,
    rule: Rule,
}

impl NumberComparison {
    fn new(operator: Operator, compared: Number, code: &'static str, message: &'static str) -> Self {
        Self {
            operator,
            compared,
            rule: Rule::new(code, message),
        }
    }
}

/// Value must equal `value`.
pub fn is_equal_to_number(value: impl Into<Number>) -> NumberComparison {
    NumberComparison::new(Operator::Equal, value.into(), code::NOT_EQUAL, message::NOT_EQUAL)
}

/// Value must be strictly greater than `value`.
pub fn is_greater_than(value: impl Into<Number>) -> NumberComparison {
    NumberComparison::new(Operator::Greater, value.into(), code::TOO_LOW, message::TOO_LOW)
}

/// Value must be greater than or equal to `value`.
pub fn is_greater_than_or_equal(value: impl Into<Number>) -> NumberComparison {
    NumberComparison::new(
        Operator::GreaterOrEqual,
        value.into(),
        code::TOO_LOW_OR_EQUAL,
        message::TOO_LOW_OR_EQUAL,
    )
}

/// Value must be strictly less than `value`.
pub fn is_less_than(value: impl Into<Number>) -> NumberComparison {
    NumberComparison::new(Operator::Less, value.into(), code::TOO_HIGH, message::TOO_HIGH)
}

/// Value must be less than or equal to `value`.
pub fn is_less_than_or_equal(value: impl Into<Number>) -> NumberComparison {
    NumberComparison::new(
        Operator::LessOrEqual,
        value.into(),
        code::TOO_HIGH_OR_EQUAL,
        message::TOO_HIGH_OR_EQUAL,
    )
}

rule_methods!(NumberComparison);

impl Constraint for NumberComparison {
    fn name(&self) -> &str {
        self.operator.name()
    }

    fn as_number(&self) -> Option<&dyn NumberConstraint> {
        Some(self)
    }
}

impl NumberConstraint for NumberComparison {
    fn validate_number(&self, value: Number, scope: &Scope) -> ValidationResult {
        if self.rule.is_skipped(scope) {
            return Ok(());
        }
        let holds = value
            .compare(&self.compared)
            .is_some_and(|ordering| self.operator.holds(ordering));

        self.rule.check(
            holds,
            scope,
            [
                param("{{ comparedValue }}", self.compared),
                param("{{ value }}", value),
            ],
        )
    }
}

// ============================================================================
// RANGE
// ============================================================================

/// Inclusive numeric range.
#[derive(Debug, Clone)]
pub struct NumberRange {
    min: Number,
    max: Number,
    rule: Rule,
}

/// Value must lie within `min..=max`.
pub fn is_between(min: impl Into<Number>, max: impl Into<Number>) -> NumberRange {
    NumberRange {
        min: min.into(),
        max: max.into(),
        rule: Rule::new(code::NOT_IN_RANGE, message::NOT_IN_RANGE),
    }
}

rule_methods!(NumberRange);

impl Constraint for NumberRange {
    fn name(&self) -> &str {
        "NumberRange"
    }

    fn set_up(&self) -> Result<(), FatalError> {
        match self.min.compare(&self.max) {
            Some(Ordering::Less | Ordering::Equal) => Ok(()),
            _ => Err(FatalError::set_up(
                self.name(),
                format!("invalid range {}..={}", self.min, self.max),
            )),
        }
    }

    fn as_number(&self) -> Option<&dyn NumberConstraint> {
        Some(self)
    }
}

impl NumberConstraint for NumberRange {
    fn validate_number(&self, value: Number, scope: &Scope) -> ValidationResult {
        if self.rule.is_skipped(scope) {
            return Ok(());
        }
        let above_min = matches!(value.compare(&self.min), Some(Ordering::Greater | Ordering::Equal));
        let below_max = matches!(value.compare(&self.max), Some(Ordering::Less | Ordering::Equal));

        self.rule.check(
            above_min && below_max,
            scope,
            [
                param("{{ min }}", self.min),
                param("{{ max }}", self.max),
                param("{{ value }}", value),
            ],
        )
    }
}

// ============================================================================
// SIGN
// ============================================================================

/// Requires a strictly positive or strictly negative number. Zero fails both.
#[derive(Debug, Clone)]
pub struct NumberSign {
    positive: bool,
    rule: Rule,
}

/// Value must be greater than zero.
pub fn is_positive() -> NumberSign {
    NumberSign {
        positive: true,
        rule: Rule::new(code::NOT_POSITIVE, message::NOT_POSITIVE),
    }
}

/// Value must be less than zero.
pub fn is_negative() -> NumberSign {
    NumberSign {
        positive: false,
        rule: Rule::new(code::NOT_NEGATIVE, message::NOT_NEGATIVE),
    }
}

rule_methods!(NumberSign);

impl Constraint for NumberSign {
    fn name(&self) -> &str {
        if self.positive { "IsPositive" } else { "IsNegative" }
    }

    fn as_number(&self) -> Option<&dyn NumberConstraint> {
        Some(self)
    }
}

impl NumberConstraint for NumberSign {
    fn validate_number(&self, value: Number, scope: &Scope) -> ValidationResult {
        if self.rule.is_skipped(scope) {
            return Ok(());
        }
        let expected = if self.positive { Ordering::Greater } else { Ordering::Less };
        let holds = value.compare(&Number::Int(0)) == Some(expected);

        self.rule.check(holds, scope, [param("{{ value }}", value)])
    }
}
