//! Shared configuration of built-in constraints
//!
//! Every built-in constraint carries a [`Rule`]: its code, message template,
//! caller parameters and the `when` / `when_groups` switches. The
//! `rule_methods!` macro generates the fluent
//! configuration methods from it.

use std::borrow::Cow;

use crate::foundation::error::{ValidationError, ValidationResult};
use crate::foundation::scope::Scope;
use crate::foundation::template::{TemplateParameter, TemplateParameterList};

/// Code, message and conditions of a constraint.
#[derive(Debug, Clone)]
pub(crate) struct Rule {
    enabled: bool,
    groups: Vec<Cow<'static, str>>,
    code: Cow<'static, str>,
    message: Cow<'static, str>,
    parameters: TemplateParameterList,
}

impl Rule {
    /// Rule with the given default code and message.
    pub fn new(code: &'static str, message: &'static str) -> Self {
        Self {
            enabled: true,
            groups: Vec::new(),
            code: Cow::Borrowed(code),
            message: Cow::Borrowed(message),
            parameters: TemplateParameterList::new(),
        }
    }

    /// Violation code.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns `true` when the constraint must not run in `scope`.
    #[must_use]
    pub fn is_skipped(&self, scope: &Scope) -> bool {
        !self.enabled || scope.is_ignored(&self.groups)
    }

    /// Builds the violation error. Caller parameters are placed in front of
    /// `defaults`, so they win the substitution.
    pub fn violation<I>(&self, scope: &Scope, defaults: I) -> ValidationError
    where
        I: IntoIterator<Item = TemplateParameter>,
    {
        self.violation_counted(scope, 0, defaults)
    }

    /// Like [`violation`](Self::violation) with a plural count.
    pub fn violation_counted<I>(&self, scope: &Scope, plural_count: usize, defaults: I) -> ValidationError
    where
        I: IntoIterator<Item = TemplateParameter>,
    {
        let parameters = defaults
            .into_iter()
            .collect::<TemplateParameterList>()
            .prepend(self.parameters.iter().cloned());

        scope
            .build_violation(self.code.clone(), self.message.clone())
            .with_parameters(parameters)
            .with_plural_count(plural_count)
            .create()
            .into()
    }

    /// `Ok(())` when `valid`, otherwise the violation with `defaults`.
    pub fn check<I>(&self, valid: bool, scope: &Scope, defaults: I) -> ValidationResult
    where
        I: IntoIterator<Item = TemplateParameter>,
    {
        if valid {
            Ok(())
        } else {
            Err(self.violation(scope, defaults))
        }
    }

    pub(crate) fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub(crate) fn set_groups(&mut self, groups: Vec<Cow<'static, str>>) {
        self.groups = groups;
    }

    pub(crate) fn set_code(&mut self, code: Cow<'static, str>) {
        self.code = code;
    }

    pub(crate) fn set_message(&mut self, message: Cow<'static, str>, parameters: TemplateParameterList) {
        self.message = message;
        self.parameters = parameters;
    }
}

/// Shorthand for a `{{ value }}`-style parameter.
pub(crate) fn param(key: &'static str, value: impl ToString) -> TemplateParameter {
    TemplateParameter::new(key, value.to_string())
}

/// Generates `when` and `when_groups` for a constraint holding a
/// `rule: Rule` field.
macro_rules! condition_methods {
    ($name:ident) => {
        impl $name {
            /// Runs the constraint only when `condition` is true.
            #[must_use = "builder methods must be chained or built"]
            pub fn when(mut self, condition: bool) -> Self {
                self.rule.set_enabled(condition);
                self
            }

            /// Runs the constraint only for the given validation groups.
            #[must_use = "builder methods must be chained or built"]
            pub fn when_groups<I, S>(mut self, groups: I) -> Self
            where
                I: IntoIterator<Item = S>,
                S: Into<::std::borrow::Cow<'static, str>>,
            {
                self.rule.set_groups(groups.into_iter().map(Into::into).collect());
                self
            }
        }
    };
}

/// Generates the fluent configuration methods of a constraint holding a
/// `rule: Rule` field.
macro_rules! rule_methods {
    ($name:ident) => {
        impl $name {
            /// Overrides the message template.
            #[must_use = "builder methods must be chained or built"]
            pub fn message(mut self, message: impl Into<::std::borrow::Cow<'static, str>>) -> Self {
                self.rule.set_message(message.into(), crate::foundation::template::TemplateParameterList::new());
                self
            }

            /// Overrides the message template with extra parameters; the
            /// parameters win over the constraint's own.
            #[must_use = "builder methods must be chained or built"]
            pub fn message_with<I, P>(
                mut self,
                message: impl Into<::std::borrow::Cow<'static, str>>,
                parameters: I,
            ) -> Self
            where
                I: IntoIterator<Item = P>,
                P: Into<crate::foundation::template::TemplateParameter>,
            {
                self.rule.set_message(message.into(), parameters.into_iter().collect());
                self
            }

            /// Overrides the violation code.
            #[must_use = "builder methods must be chained or built"]
            pub fn code(mut self, code: impl Into<::std::borrow::Cow<'static, str>>) -> Self {
                self.rule.set_code(code.into());
                self
            }
        }

        crate::validators::rule::condition_methods!($name);
    };
}

pub(crate) use condition_methods;
pub(crate) use rule_methods;
