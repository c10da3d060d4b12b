//! AT LEAST ONE OF combinator - any alternative may pass
//!
//! Succeeds as soon as one argument produces no violations. When every
//! alternative fails, the violations of all of them are reported, in order.

use std::borrow::Cow;

use crate::argument::Argument;
use crate::foundation::error::{FatalError, ValidationResult};
use crate::foundation::list::ViolationList;
use crate::foundation::scope::{Opt, Scope};

/// Alternative argument list, see [`at_least_one_of`].
#[derive(Debug)]
#[must_use = "combinators do nothing until converted into an `Argument`"]
pub struct AtLeastOneOf<'a> {
    enabled: bool,
    groups: Vec<Cow<'static, str>>,
    options: Vec<Opt>,
    arguments: Vec<Argument<'a>>,
}

/// Passes when at least one of `arguments` passes.
pub fn at_least_one_of<'a>(arguments: impl IntoIterator<Item = Argument<'a>>) -> AtLeastOneOf<'a> {
    AtLeastOneOf {
        enabled: true,
        groups: Vec::new(),
        options: Vec::new(),
        arguments: arguments.into_iter().collect(),
    }
}

impl AtLeastOneOf<'_> {
    /// Appends options applied to the scope before any alternative runs.
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
                combinator: "AtLeastOneOf",
            }
            .into());
        }
        let scope = scope.apply_options(&self.options)?;
        if !self.enabled || scope.is_ignored(&self.groups) {
            return Ok(());
        }

        let mut violations = ViolationList::new();
        for argument in self.arguments {
            match argument.validate(&scope) {
                Ok(()) => return Ok(()),
                Err(error) => violations.append_error(error)?,
            }
        }
        violations.into_result()
    }
}

impl<'a> From<AtLeastOneOf<'a>> for Argument<'a> {
    fn from(combinator: AtLeastOneOf<'a>) -> Self {
        Argument::new(move |scope| combinator.validate(scope))
    }
}
