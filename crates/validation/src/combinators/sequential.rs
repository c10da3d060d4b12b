//! SEQUENTIALLY combinator - stop at the first failing step
//!
//! Evaluates arguments in order and returns as soon as one of them produces
//! violations. Useful when later checks only make sense once earlier ones
//! passed (format first, then uniqueness).

use std::borrow::Cow;

use crate::argument::Argument;
use crate::foundation::error::{FatalError, ValidationResult};
use crate::foundation::scope::{Opt, Scope};

/// Short-circuiting argument list, see [`sequentially`].
#[derive(Debug)]
#[must_use = "combinators do nothing until converted into an `Argument`"]
pub struct Sequential<'a> {
    enabled: bool,
    groups: Vec<Cow<'static, str>>,
    options: Vec<Opt>,
    arguments: Vec<Argument<'a>>,
}

/// Evaluates `arguments` step by step, stopping at the first violation.
pub fn sequentially<'a>(arguments: impl IntoIterator<Item = Argument<'a>>) -> Sequential<'a> {
    Sequential {
        enabled: true,
        groups: Vec::new(),
        options: Vec::new(),
        arguments: arguments.into_iter().collect(),
    }
}

impl Sequential<'_> {
    /// Appends options applied to the scope before any step runs.
    pub fn with(mut self, options: impl IntoIterator<Item = Opt>) -> Self {
        self.options.extend(options);
        self
    }

    /// Skips the whole combinator when `condition` is false.
    pub fn when(mut self, condition: bool) -> Self {
        self.enabled = condition;
        self
    }

    /// Restricts the combinator to validation groups.
    pub fn when_groups<I, S>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Cow<'static, str>>,
    {
        self.groups = groups.into_iter().map(Into::into).collect();
        self
    }

    fn validate(self, scope: &Scope) -> ValidationResult {
        if self.arguments.is_empty() {
            return Err(FatalError::EmptyArguments {
                combinator: "Sequentially",
            }
            .into());
        }
        let scope = scope.apply_options(&self.options)?;
        if !self.enabled || scope.is_ignored(&self.groups) {
            return Ok(());
        }

        for argument in self.arguments {
            argument.validate(&scope)?;
        }
        Ok(())
    }
}

impl<'a> From<Sequential<'a>> for Argument<'a> {
    fn from(combinator: Sequential<'a>) -> Self {
        Argument::new(move |scope| combinator.validate(scope))
    }
}
