//! WHEN combinator - conditional validation
//!
//! Runs one of two argument lists depending on a condition captured when the
//! combinator is built.
//!
//! # Examples
//!
//! ```rust,ignore
//! use nebula_validation::prelude::*;
//!
//! validator.validate(arguments![
//!     when(order.is_shipped)
//!         .then(arguments![string(&order.tracking, options![it::is_not_blank()])])
//!         .otherwise(arguments![string(&order.tracking, options![it::is_blank()])]),
//! ])
//! ```

use std::borrow::Cow;

use crate::argument::Argument;
use crate::foundation::error::{FatalError, ValidationResult};
use crate::foundation::scope::{Opt, Scope};

/// Conditional argument, see [`when`].
#[derive(Debug)]
#[must_use = "combinators do nothing until converted into an `Argument`"]
pub struct When<'a> {
    condition: bool,
    groups: Vec<Cow<'static, str>>,
    options: Vec<Opt>,
    then_arguments: Vec<Argument<'a>>,
    else_arguments: Vec<Argument<'a>>,
}

/// Starts a conditional argument.
pub fn when<'a>(condition: bool) -> When<'a> {
    When {
        condition,
        groups: Vec::new(),
        options: Vec::new(),
        then_arguments: Vec::new(),
        else_arguments: Vec::new(),
    }
}

impl<'a> When<'a> {
    /// Arguments evaluated when the condition is true.
    pub fn then(mut self, arguments: impl IntoIterator<Item = Argument<'a>>) -> Self {
        self.then_arguments = arguments.into_iter().collect();
        self
    }

    /// Arguments evaluated when the condition is false.
    pub fn otherwise(mut self, arguments: impl IntoIterator<Item = Argument<'a>>) -> Self {
        self.else_arguments = arguments.into_iter().collect();
        self
    }

    /// Appends options applied to the scope before either branch runs.
    pub fn with(mut self, options: impl IntoIterator<Item = Opt>) -> Self {
        self.options.extend(options);
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
        if self.then_arguments.is_empty() && self.else_arguments.is_empty() {
            return Err(FatalError::EmptyArguments { combinator: "When" }.into());
        }
        let scope = scope.apply_options(&self.options)?;
        if scope.is_ignored(&self.groups) {
            return Ok(());
        }

        let branch = if self.condition {
            self.then_arguments
        } else {
            self.else_arguments
        };
        scope.validate(branch)
    }
}

impl<'a> From<When<'a>> for Argument<'a> {
    fn from(combinator: When<'a>) -> Self {
        Argument::new(move |scope| combinator.validate(scope))
    }
}
