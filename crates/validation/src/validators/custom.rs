//! String constraint from a plain predicate

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::code;
use crate::foundation::constraint::{Constraint, StringConstraint};
use crate::foundation::error::ValidationResult;
use crate::foundation::scope::Scope;
use crate::message;
use crate::validators::rule::{Rule, param, rule_methods};

type Predicate = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// Turns any `Fn(&str) -> bool` into a string constraint.
///
/// The empty string is skipped. Defaults to the `notValid` code and the
/// generic "This value is not valid." message.
///
/// ```rust,ignore
/// let is_slug = CustomStringConstraint::new(|s| s.chars().all(|c| c.is_ascii_lowercase() || c == '-'))
///     .with_name("IsSlug")
///     .code("notSlug")
///     .message("This value is not a valid slug.");
/// ```
#[derive(Clone)]
pub struct CustomStringConstraint {
    name: Cow<'static, str>,
    predicate: Predicate,
    rule: Rule,
}

impl CustomStringConstraint {
    /// Wraps `predicate`; a `false` result is a violation.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self {
            name: Cow::Borrowed("CustomStringConstraint"),
            predicate: Arc::new(predicate),
            rule: Rule::new(code::NOT_VALID, message::NOT_VALID),
        }
    }

    /// Name reported in fatal errors.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_name(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.name = name.into();
        self
    }
}

impl fmt::Debug for CustomStringConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomStringConstraint")
            .field("name", &self.name)
            .field("code", &self.rule.code())
            .finish_non_exhaustive()
    }
}

rule_methods!(CustomStringConstraint);

impl Constraint for CustomStringConstraint {
    fn name(&self) -> &str {
        &self.name
    }

    fn as_string(&self) -> Option<&dyn StringConstraint> {
        Some(self)
    }
}

impl StringConstraint for CustomStringConstraint {
    fn validate_string(&self, value: &str, scope: &Scope) -> ValidationResult {
        if value.is_empty() || self.rule.is_skipped(scope) {
            return Ok(());
        }
        self.rule
            .check((self.predicate)(value), scope, [param("{{ value }}", value)])
    }
}
