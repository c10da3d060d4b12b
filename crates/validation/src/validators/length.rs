//! String length limits
//!
//! Length is measured in characters (Unicode scalar values), not bytes. The
//! empty string is left to [`is_not_blank`](crate::it::is_not_blank).

use std::borrow::Cow;

use crate::code;
use crate::foundation::constraint::{Constraint, StringConstraint};
use crate::foundation::error::{FatalError, ValidationResult};
use crate::foundation::scope::Scope;
use crate::foundation::template::TemplateParameterList;
use crate::message;
use crate::validators::rule::{Rule, param};

/// Character count bounds of a string.
#[derive(Debug, Clone)]
pub struct LengthLimit {
    min: Option<usize>,
    max: Option<usize>,
    min_rule: Rule,
    max_rule: Rule,
    exact_rule: Rule,
    enabled: bool,
    groups: Vec<Cow<'static, str>>,
}

/// String must have at least `min` characters.
pub fn has_min_length(min: usize) -> LengthLimit {
    LengthLimit::new(Some(min), None)
}

/// String must have at most `max` characters.
pub fn has_max_length(max: usize) -> LengthLimit {
    LengthLimit::new(None, Some(max))
}

/// String must have between `min` and `max` characters, inclusive.
pub fn has_length_between(min: usize, max: usize) -> LengthLimit {
    LengthLimit::new(Some(min), Some(max))
}

/// String must have exactly `length` characters.
pub fn has_exact_length(length: usize) -> LengthLimit {
    LengthLimit::new(Some(length), Some(length))
}

impl LengthLimit {
    fn new(min: Option<usize>, max: Option<usize>) -> Self {
        Self {
            min,
            max,
            min_rule: Rule::new(code::LENGTH_TOO_FEW, message::LENGTH_TOO_FEW),
            max_rule: Rule::new(code::LENGTH_TOO_MANY, message::LENGTH_TOO_MANY),
            exact_rule: Rule::new(code::LENGTH_EXACT, message::LENGTH_EXACT),
            enabled: true,
            groups: Vec::new(),
        }
    }

    /// Message used when the string is too short.
    #[must_use = "builder methods must be chained or built"]
    pub fn min_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.min_rule.set_message(message.into(), TemplateParameterList::new());
        self
    }

    /// Message used when the string is too long.
    #[must_use = "builder methods must be chained or built"]
    pub fn max_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.max_rule.set_message(message.into(), TemplateParameterList::new());
        self
    }

    /// Message used when an exact length is violated.
    #[must_use = "builder methods must be chained or built"]
    pub fn exact_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.exact_rule.set_message(message.into(), TemplateParameterList::new());
        self
    }

    /// Runs the constraint only when `condition` is true.
    #[must_use = "builder methods must be chained or built"]
    pub fn when(mut self, condition: bool) -> Self {
        self.enabled = condition;
        self
    }

    /// Runs the constraint only for the given validation groups.
    #[must_use = "builder methods must be chained or built"]
    pub fn when_groups<I, S>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Cow<'static, str>>,
    {
        self.groups = groups.into_iter().map(Into::into).collect();
        self
    }

    fn violation(
        rule: &Rule,
        value: &str,
        length: usize,
        limit: usize,
        scope: &Scope,
    ) -> ValidationResult {
        Err(rule.violation_counted(
            scope,
            limit,
            [
                param("{{ length }}", length),
                param("{{ limit }}", limit),
                param("{{ value }}", value),
            ],
        ))
    }
}

impl Constraint for LengthLimit {
    fn name(&self) -> &str {
        "LengthLimit"
    }

    fn set_up(&self) -> Result<(), FatalError> {
        match (self.min, self.max) {
            (Some(min), Some(max)) if min > max => Err(FatalError::set_up(
                self.name(),
                format!("minimum {min} is greater than maximum {max}"),
            )),
            _ => Ok(()),
        }
    }

    fn as_string(&self) -> Option<&dyn StringConstraint> {
        Some(self)
    }
}

impl StringConstraint for LengthLimit {
    fn validate_string(&self, value: &str, scope: &Scope) -> ValidationResult {
        if value.is_empty() || !self.enabled || scope.is_ignored(&self.groups) {
            return Ok(());
        }
        let length = value.chars().count();
        match (self.min, self.max) {
            (Some(min), Some(max)) if min == max && length != min => {
                Self::violation(&self.exact_rule, value, length, min, scope)
            }
            (Some(min), _) if length < min => {
                Self::violation(&self.min_rule, value, length, min, scope)
            }
            (_, Some(max)) if length > max => {
                Self::violation(&self.max_rule, value, length, max, scope)
            }
            _ => Ok(()),
        }
    }
}
