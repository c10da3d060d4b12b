//! Choice from a fixed set of strings

use std::borrow::Cow;

use crate::code;
use crate::foundation::constraint::{Constraint, StringConstraint};
use crate::foundation::error::{FatalError, ValidationResult};
use crate::foundation::scope::Scope;
use crate::message;
use crate::validators::rule::{Rule, param, rule_methods};

/// Accepts only one of the configured strings. The empty string is skipped.
#[derive(Debug, Clone)]
pub struct StringChoice {
    choices: Vec<Cow<'static, str>>,
    rule: Rule,
}

/// Value must be one of `choices`.
pub fn is_one_of_strings<I, S>(choices: I) -> StringChoice
where
    I: IntoIterator<Item = S>,
    S: Into<Cow<'static, str>>,
{
    StringChoice {
        choices: choices.into_iter().map(Into::into).collect(),
        rule: Rule::new(code::NO_SUCH_CHOICE, message::NO_SUCH_CHOICE),
    }
}

rule_methods!(StringChoice);

impl Constraint for StringChoice {
    fn name(&self) -> &str {
        "StringChoice"
    }

    fn set_up(&self) -> Result<(), FatalError> {
        if self.choices.is_empty() {
            return Err(FatalError::set_up(self.name(), "empty list of choices"));
        }
        Ok(())
    }

    fn as_string(&self) -> Option<&dyn StringConstraint> {
        Some(self)
    }
}

impl StringConstraint for StringChoice {
    fn validate_string(&self, value: &str, scope: &Scope) -> ValidationResult {
        if value.is_empty() || self.rule.is_skipped(scope) {
            return Ok(());
        }
        let found = self.choices.iter().any(|choice| choice == value);

        self.rule.check(
            found,
            scope,
            [
                param("{{ value }}", value),
                param("{{ choices }}", self.choices.join(", ")),
            ],
        )
    }
}
