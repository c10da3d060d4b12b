//! Element count limits for collections

use std::borrow::Cow;

use crate::code;
use crate::foundation::constraint::{Constraint, CountableConstraint};
use crate::foundation::error::{FatalError, ValidationResult};
use crate::foundation::scope::Scope;
use crate::foundation::template::TemplateParameterList;
use crate::message;
use crate::validators::rule::{Rule, param};

/// Element count bounds. Applies to collections and to plain counts.
#[derive(Debug, Clone)]
pub struct CountLimit {
    min: Option<usize>,
    max: Option<usize>,
    min_rule: Rule,
    max_rule: Rule,
    exact_rule: Rule,
    enabled: bool,
    groups: Vec<Cow<'static, str>>,
}

impl CountLimit {
    fn new(min: Option<usize>, max: Option<usize>) -> Self {
        Self {
            min,
            max,
            min_rule: Rule::new(code::COUNT_TOO_FEW, message::COUNT_TOO_FEW),
            max_rule: Rule::new(code::COUNT_TOO_MANY, message::COUNT_TOO_MANY),
            exact_rule: Rule::new(code::COUNT_EXACT, message::COUNT_EXACT),
            enabled: true,
            groups: Vec::new(),
        }
    }

    /// Message used when the collection is too small.
    #[must_use = "builder methods must be chained or built"]
    pub fn min_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.min_rule.set_message(message.into(), TemplateParameterList::new());
        self
    }

    /// Message used when the collection is too large.
    #[must_use = "builder methods must be chained or built"]
    pub fn max_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.max_rule.set_message(message.into(), TemplateParameterList::new());
        self
    }

    /// Message used when an exact count is violated.
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

    fn violation(&self, rule: &Rule, count: usize, limit: usize, scope: &Scope) -> ValidationResult {
        Err(rule.violation_counted(
            scope,
            limit,
            [param("{{ count }}", count), param("{{ limit }}", limit)],
        ))
    }
}

/// Collection must contain at least `min` elements.
pub fn has_min_count(min: usize) -> CountLimit {
    CountLimit::new(Some(min), None)
}

/// Collection must contain at most `max` elements.
pub fn has_max_count(max: usize) -> CountLimit {
    CountLimit::new(None, Some(max))
}

/// Collection must contain between `min` and `max` elements, inclusive.
pub fn has_count_between(min: usize, max: usize) -> CountLimit {
    CountLimit::new(Some(min), Some(max))
}

/// Collection must contain exactly `count` elements.
pub fn has_exact_count(count: usize) -> CountLimit {
    CountLimit::new(Some(count), Some(count))
}

impl Constraint for CountLimit {
    fn name(&self) -> &str {
        "CountLimit"
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

    fn as_countable(&self) -> Option<&dyn CountableConstraint> {
        Some(self)
    }
}

impl CountableConstraint for CountLimit {
    fn validate_countable(&self, count: usize, scope: &Scope) -> ValidationResult {
        if !self.enabled || scope.is_ignored(&self.groups) {
            return Ok(());
        }
        match (self.min, self.max) {
            (Some(min), Some(max)) if min == max && count != min => {
                self.violation(&self.exact_rule, count, min, scope)
            }
            (Some(min), _) if count < min => self.violation(&self.min_rule, count, min, scope),
            (_, Some(max)) if count > max => self.violation(&self.max_rule, count, max, scope),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::argument::{countable, iterable};
    use crate::foundation::error::ValidationError;
    use crate::foundation::scope::language;
    use crate::translation::LanguageTag;
    use rstest::rstest;

    #[rstest]
    #[case(has_min_count(2), 1, Some(code::COUNT_TOO_FEW))]
    #[case(has_min_count(2), 2, None)]
    #[case(has_max_count(2), 3, Some(code::COUNT_TOO_MANY))]
    #[case(has_count_between(1, 3), 0, Some(code::COUNT_TOO_FEW))]
    #[case(has_count_between(1, 3), 4, Some(code::COUNT_TOO_MANY))]
    #[case(has_exact_count(2), 3, Some(code::COUNT_EXACT))]
    #[case(has_exact_count(2), 2, None)]
    fn test_count_limits(#[case] limit: CountLimit, #[case] count: usize, #[case] expected: Option<&str>) {
        let result = Scope::default().validate([countable(count, [limit.into()])]);
        let code = result
            .err()
            .and_then(ValidationError::into_violations)
            .map(|list| list[0].code().to_owned());
        assert_eq!(code.as_deref(), expected);
    }

    #[test]
    fn test_iterable_uses_count() {
        let tags: Vec<String> = vec!["a".into()];
        let error = Scope::default()
            .validate([iterable(&tags, [has_min_count(3).into()])])
            .unwrap_err();

        let violation = &error.violations().unwrap()[0];
        assert_eq!(
            violation.message(),
            "This collection should contain 3 elements or more."
        );
        assert_eq!(violation.parameters().get("{{ count }}"), Some("1"));
    }

    #[test]
    fn test_min_greater_than_max_fails_set_up() {
        let error = Scope::default()
            .validate([countable(1, [has_count_between(3, 1).into()])])
            .unwrap_err();
        assert!(matches!(error, ValidationError::Fatal(FatalError::SetUp { .. })));
    }

    #[test]
    fn test_bound_specific_message() {
        let error = Scope::default()
            .validate([countable(5, [has_count_between(1, 2)
                .max_message("At most {{ limit }}, got {{ count }}.")
                .into()])])
            .unwrap_err();
        assert_eq!(error.violations().unwrap()[0].message(), "At most 2, got 5.");
    }

    #[test]
    fn test_plural_message_in_english() {
        let error = Scope::default()
            .validate([countable(0, [language(LanguageTag::ENGLISH), has_min_count(1).into()])])
            .unwrap_err();
        assert_eq!(
            error.violations().unwrap()[0].message(),
            "This collection should contain 1 element or more."
        );
    }

    #[rstest]
    #[case(has_min_count(2).when(false), Scope::default(), None)]
    #[case(has_min_count(2).when(true), Scope::default(), Some(code::COUNT_TOO_FEW))]
    #[case(has_min_count(2).when_groups(["admin"]), Scope::default(), None)]
    #[case(has_min_count(2).when_groups(["admin"]), Scope::default().with_groups(["user"]), None)]
    #[case(
        has_min_count(2).when_groups(["admin"]),
        Scope::default().with_groups(["admin"]),
        Some(code::COUNT_TOO_FEW)
    )]
    fn test_conditions(#[case] limit: CountLimit, #[case] scope: Scope, #[case] expected: Option<&str>) {
        let code = scope
            .validate([countable(1, [limit.into()])])
            .err()
            .and_then(ValidationError::into_violations)
            .map(|list| list[0].code().to_owned());
        assert_eq!(code.as_deref(), expected);
    }
}
