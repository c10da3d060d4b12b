//! Validator facade and the process-wide default validator
//!
//! A [`Validator`] is a configured root [`Scope`] plus a registry of stored
//! constraints. It is cheap to clone and safe to share between threads;
//! `with_*` / `at_*` return derived validators and never mutate the original.
//!
//! ```rust,ignore
//! let validator = Validator::builder()
//!     .default_language(LanguageTag::RUSSIAN)
//!     .with_catalog(russian::catalog())
//!     .store_constraint("isTag", it::is_one_of_strings(["news", "blog"]))
//!     .build()?;
//!
//! validator.validate(arguments![
//!     string(&post.title, options![property_name("title"), it::is_not_blank()]),
//!     each_string(&post.tags, options![property_name("tags"), validator.validate_by("isTag")]),
//! ])?;
//! ```

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;
use std::sync::{Arc, LazyLock};

use arc_swap::ArcSwap;
use chrono::{DateTime, Utc};
use tracing::debug;

use crate::argument::{self, Argument};
use crate::foundation::constraint::Constraint;
use crate::foundation::error::{FatalError, ValidationResult};
use crate::foundation::scope::{Opt, Scope};
use crate::foundation::validatable::Validatable;
use crate::foundation::value::{AsValue, Iterable, Number};
use crate::foundation::violation::{TranslatingViolationFactory, ViolationBuilder, ViolationFactory};
use crate::translation::{Catalog, LanguageTag, Translator, TranslatorBuilder};

// ============================================================================
// VALIDATOR
// ============================================================================

/// Entry point for validation.
#[derive(Clone)]
pub struct Validator {
    scope: Scope,
    constraints: Arc<HashMap<String, Arc<dyn Constraint>>>,
}

impl Validator {
    /// Starts configuring a validator.
    pub fn builder() -> ValidatorBuilder {
        ValidatorBuilder::default()
    }

    /// Root scope of this validator.
    #[must_use]
    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    /// Validates every argument, flattening violations. A fatal error aborts.
    pub fn validate<'a, I>(&self, arguments: I) -> ValidationResult
    where
        I: IntoIterator<Item = Argument<'a>>,
    {
        self.scope.validate(arguments)
    }

    /// Validates any value, dispatched by its kind.
    pub fn validate_value<T>(&self, value: &T, options: impl IntoIterator<Item = Opt>) -> ValidationResult
    where
        T: AsValue + ?Sized,
    {
        self.validate([argument::value(value, options)])
    }

    /// Validates a boolean; `None` is nil.
    pub fn validate_bool(
        &self,
        value: impl Into<Option<bool>>,
        options: impl IntoIterator<Item = Opt>,
    ) -> ValidationResult {
        self.validate([argument::bool(value, options)])
    }

    /// Validates a number.
    pub fn validate_number(
        &self,
        value: impl Into<Number>,
        options: impl IntoIterator<Item = Opt>,
    ) -> ValidationResult {
        self.validate([argument::number(value, options)])
    }

    /// Validates a string.
    pub fn validate_string(&self, value: &str, options: impl IntoIterator<Item = Opt>) -> ValidationResult {
        self.validate([argument::string(value, options)])
    }

    /// Validates every string of a slice.
    pub fn validate_strings<S>(&self, values: &[S], options: impl IntoIterator<Item = Opt>) -> ValidationResult
    where
        S: AsRef<str>,
    {
        self.validate([argument::strings(values, options)])
    }

    /// Validates a collection as a whole.
    pub fn validate_iterable<T>(&self, value: &T, options: impl IntoIterator<Item = Opt>) -> ValidationResult
    where
        T: Iterable,
    {
        self.validate([argument::iterable(value, options)])
    }

    /// Validates an element count.
    pub fn validate_countable(&self, count: usize, options: impl IntoIterator<Item = Opt>) -> ValidationResult {
        self.validate([argument::countable(count, options)])
    }

    /// Validates a point in time.
    pub fn validate_time(
        &self,
        value: DateTime<Utc>,
        options: impl IntoIterator<Item = Opt>,
    ) -> ValidationResult {
        self.validate([argument::time(value, options)])
    }

    /// Validates every element of a collection.
    pub fn validate_each<T>(&self, value: &T, options: impl IntoIterator<Item = Opt>) -> ValidationResult
    where
        T: Iterable,
    {
        self.validate([argument::each(value, options)])
    }

    /// Validates every string of a slice.
    pub fn validate_each_string<S>(
        &self,
        values: &[S],
        options: impl IntoIterator<Item = Opt>,
    ) -> ValidationResult
    where
        S: AsRef<str>,
    {
        self.validate([argument::each_string(values, options)])
    }

    /// Runs a value's own validation.
    pub fn validate_validatable<V>(&self, value: &V, options: impl IntoIterator<Item = Opt>) -> ValidationResult
    where
        V: Validatable + ?Sized,
    {
        self.validate([argument::valid(value, options)])
    }

    /// Stored constraint as an option.
    ///
    /// An unknown key yields a placeholder whose set-up fails with
    /// [`FatalError::ConstraintNotFound`], so the mistake surfaces on first use.
    #[must_use]
    pub fn validate_by(&self, key: &str) -> Opt {
        match self.constraints.get(key) {
            Some(constraint) => Opt::constraint(Arc::clone(constraint)),
            None => Opt::constraint(Arc::new(MissingConstraint { key: key.to_owned() })),
        }
    }

    /// Starts a violation at the root path of this validator.
    pub fn build_violation(
        &self,
        code: impl Into<std::borrow::Cow<'static, str>>,
        message_template: impl Into<std::borrow::Cow<'static, str>>,
    ) -> ViolationBuilder<'_> {
        self.scope.build_violation(code, message_template)
    }

    /// Validator running only rules of the given groups.
    #[must_use]
    pub fn with_groups<I, S>(&self, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<std::borrow::Cow<'static, str>>,
    {
        self.derive(self.scope.with_groups(groups))
    }

    /// Validator producing messages in `language`.
    #[must_use]
    pub fn with_language(&self, language: LanguageTag) -> Self {
        self.derive(self.scope.with_language(language))
    }

    /// Validator rooted one property deeper.
    #[must_use]
    pub fn at_property(&self, name: impl Into<Arc<str>>) -> Self {
        self.derive(self.scope.at_property(name))
    }

    /// Validator rooted one index deeper.
    #[must_use]
    pub fn at_index(&self, index: usize) -> Self {
        self.derive(self.scope.at_index(index))
    }

    fn derive(&self, scope: Scope) -> Self {
        Self {
            scope,
            constraints: Arc::clone(&self.constraints),
        }
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self {
            scope: Scope::default(),
            constraints: Arc::default(),
        }
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<&str> = self.constraints.keys().map(String::as_str).collect();
        keys.sort_unstable();
        f.debug_struct("Validator")
            .field("scope", &self.scope)
            .field("constraints", &keys)
            .finish()
    }
}

/// Stand-in for an unknown stored constraint key.
#[derive(Debug)]
struct MissingConstraint {
    key: String,
}

impl Constraint for MissingConstraint {
    fn name(&self) -> &str {
        "MissingConstraint"
    }

    fn set_up(&self) -> Result<(), FatalError> {
        Err(FatalError::ConstraintNotFound {
            key: self.key.clone(),
        })
    }
}

// ============================================================================
// BUILDER
// ============================================================================

/// Configures a [`Validator`].
#[must_use = "builder methods must be chained or built"]
#[derive(Default)]
pub struct ValidatorBuilder {
    translator: TranslatorBuilder,
    factory: Option<Arc<dyn ViolationFactory>>,
    constraints: Vec<(String, Arc<dyn Constraint>)>,
}

impl ValidatorBuilder {
    /// Language used when a scope has no explicit language.
    pub fn default_language(mut self, tag: LanguageTag) -> Self {
        self.translator = self.translator.default_language(tag);
        self
    }

    /// Language used when no catalog matches the requested one.
    pub fn fallback_language(mut self, tag: LanguageTag) -> Self {
        self.translator = self.translator.fallback_language(tag);
        self
    }

    /// Adds a translation catalog.
    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.translator = self.translator.with_catalog(catalog);
        self
    }

    /// Replaces the translating violation factory.
    ///
    /// Translation settings are still validated by [`build`](Self::build)
    /// but the custom factory decides how messages are produced.
    pub fn violation_factory(mut self, factory: Arc<dyn ViolationFactory>) -> Self {
        self.factory = Some(factory);
        self
    }

    /// Stores a constraint under `key` for [`Validator::validate_by`].
    pub fn store_constraint<C>(mut self, key: impl Into<String>, constraint: C) -> Self
    where
        C: Constraint + 'static,
    {
        self.constraints.push((key.into(), Arc::new(constraint)));
        self
    }

    /// Builds the validator.
    ///
    /// # Errors
    ///
    /// - [`FatalError::Translation`] when the fallback language has no catalog
    /// - [`FatalError::ConstraintAlreadyStored`] when a key is stored twice
    pub fn build(self) -> Result<Validator, FatalError> {
        let translator: Translator = self.translator.build()?;

        let mut constraints = HashMap::with_capacity(self.constraints.len());
        for (key, constraint) in self.constraints {
            match constraints.entry(key) {
                Entry::Occupied(entry) => {
                    debug!(key = %entry.key(), "constraint stored twice");
                    return Err(FatalError::ConstraintAlreadyStored {
                        key: entry.key().clone(),
                    });
                }
                Entry::Vacant(entry) => {
                    entry.insert(constraint);
                }
            }
        }

        let factory = self
            .factory
            .unwrap_or_else(|| Arc::new(TranslatingViolationFactory::new(Arc::new(translator))));

        debug!(stored_constraints = constraints.len(), "validator built");

        Ok(Validator {
            scope: Scope::new(factory),
            constraints: Arc::new(constraints),
        })
    }
}

impl fmt::Debug for ValidatorBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatorBuilder")
            .field("custom_factory", &self.factory.is_some())
            .field("stored_constraints", &self.constraints.len())
            .finish_non_exhaustive()
    }
}

// ============================================================================
// DEFAULT VALIDATOR
// ============================================================================

static DEFAULT_VALIDATOR: LazyLock<ArcSwap<Validator>> =
    LazyLock::new(|| ArcSwap::from_pointee(Validator::default()));

/// Replaces the process-wide default validator used by the free functions.
pub fn set_default_validator(validator: Validator) {
    DEFAULT_VALIDATOR.store(Arc::new(validator));
}

/// Current process-wide default validator.
#[must_use]
pub fn default_validator() -> Arc<Validator> {
    DEFAULT_VALIDATOR.load_full()
}

/// [`Validator::validate`] on the default validator.
pub fn validate<'a, I>(arguments: I) -> ValidationResult
where
    I: IntoIterator<Item = Argument<'a>>,
{
    DEFAULT_VALIDATOR.load().validate(arguments)
}

/// [`Validator::validate_value`] on the default validator.
pub fn validate_value<T>(value: &T, options: impl IntoIterator<Item = Opt>) -> ValidationResult
where
    T: AsValue + ?Sized,
{
    DEFAULT_VALIDATOR.load().validate_value(value, options)
}

/// [`Validator::validate_bool`] on the default validator.
pub fn validate_bool(value: impl Into<Option<bool>>, options: impl IntoIterator<Item = Opt>) -> ValidationResult {
    DEFAULT_VALIDATOR.load().validate_bool(value, options)
}

/// [`Validator::validate_number`] on the default validator.
pub fn validate_number(value: impl Into<Number>, options: impl IntoIterator<Item = Opt>) -> ValidationResult {
    DEFAULT_VALIDATOR.load().validate_number(value, options)
}

/// [`Validator::validate_string`] on the default validator.
pub fn validate_string(value: &str, options: impl IntoIterator<Item = Opt>) -> ValidationResult {
    DEFAULT_VALIDATOR.load().validate_string(value, options)
}

/// [`Validator::validate_strings`] on the default validator.
pub fn validate_strings<S: AsRef<str>>(values: &[S], options: impl IntoIterator<Item = Opt>) -> ValidationResult {
    DEFAULT_VALIDATOR.load().validate_strings(values, options)
}

/// [`Validator::validate_iterable`] on the default validator.
pub fn validate_iterable<T: Iterable>(value: &T, options: impl IntoIterator<Item = Opt>) -> ValidationResult {
    DEFAULT_VALIDATOR.load().validate_iterable(value, options)
}

/// [`Validator::validate_countable`] on the default validator.
pub fn validate_countable(count: usize, options: impl IntoIterator<Item = Opt>) -> ValidationResult {
    DEFAULT_VALIDATOR.load().validate_countable(count, options)
}

/// [`Validator::validate_time`] on the default validator.
pub fn validate_time(value: DateTime<Utc>, options: impl IntoIterator<Item = Opt>) -> ValidationResult {
    DEFAULT_VALIDATOR.load().validate_time(value, options)
}

/// [`Validator::validate_each`] on the default validator.
pub fn validate_each<T: Iterable>(value: &T, options: impl IntoIterator<Item = Opt>) -> ValidationResult {
    DEFAULT_VALIDATOR.load().validate_each(value, options)
}

/// [`Validator::validate_each_string`] on the default validator.
pub fn validate_each_string<S: AsRef<str>>(
    values: &[S],
    options: impl IntoIterator<Item = Opt>,
) -> ValidationResult {
    DEFAULT_VALIDATOR.load().validate_each_string(values, options)
}

/// [`Validator::validate_validatable`] on the default validator.
pub fn validate_validatable<V: Validatable + ?Sized>(
    value: &V,
    options: impl IntoIterator<Item = Opt>,
) -> ValidationResult {
    DEFAULT_VALIDATOR.load().validate_validatable(value, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::argument::string;
    use crate::foundation::error::{TranslationError, ValidationError};
    use crate::foundation::scope::property_name;
    use crate::translation::russian;
    use crate::validators::it;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_validator_uses_english() {
        let error = Validator::default()
            .validate_string("", [it::is_not_blank().into()])
            .unwrap_err();
        assert_eq!(
            error.violations().unwrap()[0].message(),
            "This value should not be blank."
        );
    }

    #[test]
    fn test_default_language_from_builder() {
        let validator = Validator::builder()
            .default_language(LanguageTag::RUSSIAN)
            .with_catalog(russian::catalog())
            .build()
            .unwrap();

        let error = validator.validate_string("", [it::is_not_blank().into()]).unwrap_err();
        assert_eq!(
            error.violations().unwrap()[0].message(),
            "Значение не должно быть пустым."
        );

        let error = validator
            .with_language(LanguageTag::ENGLISH)
            .validate_string("", [it::is_not_blank().into()])
            .unwrap_err();
        assert_eq!(
            error.violations().unwrap()[0].message(),
            "This value should not be blank."
        );
    }

    #[test]
    fn test_missing_fallback_catalog_fails_build() {
        let error = Validator::builder()
            .fallback_language(LanguageTag::RUSSIAN)
            .build()
            .unwrap_err();
        assert!(matches!(
            error,
            FatalError::Translation(TranslationError::MissingFallback { .. })
        ));
    }

    #[test]
    fn test_stored_constraints() {
        let validator = Validator::builder()
            .store_constraint("isTag", it::is_one_of_strings(["news", "blog"]))
            .build()
            .unwrap();

        assert!(validator.validate_string("news", [validator.validate_by("isTag")]).is_ok());

        let error = validator
            .validate_string("misc", [validator.validate_by("isTag")])
            .unwrap_err();
        assert!(error.is_violations());

        let error = validator
            .validate_string("news", [validator.validate_by("unknown")])
            .unwrap_err();
        assert!(matches!(
            error,
            ValidationError::Fatal(FatalError::ConstraintNotFound { ref key }) if key == "unknown"
        ));
    }

    #[test]
    fn test_duplicate_stored_constraint_fails_build() {
        let error = Validator::builder()
            .store_constraint("a", it::is_not_blank())
            .store_constraint("a", it::is_blank())
            .build()
            .unwrap_err();
        assert!(matches!(error, FatalError::ConstraintAlreadyStored { ref key } if key == "a"));
    }

    #[test]
    fn test_derived_validators_extend_path() {
        let validator = Validator::default().at_property("order").at_index(2);
        let error = validator
            .validate([string("", [property_name("sku"), it::is_not_blank().into()])])
            .unwrap_err();
        assert_eq!(
            error.violations().unwrap()[0].property_path().format(),
            "order[2].sku"
        );
    }

    #[test]
    fn test_custom_violation_factory() {
        let factory = |code: std::borrow::Cow<'static, str>,
                       _template: std::borrow::Cow<'static, str>,
                       _plural_count: usize,
                       _parameters: crate::foundation::template::TemplateParameterList,
                       path: crate::foundation::path::PropertyPath,
                       _language: &LanguageTag| {
            crate::foundation::violation::Violation::new(code, "custom").with_property_path(path)
        };
        let validator = Validator::builder()
            .violation_factory(Arc::new(factory))
            .build()
            .unwrap();

        let error = validator.validate_string("", [it::is_not_blank().into()]).unwrap_err();
        assert_eq!(error.violations().unwrap()[0].message(), "custom");
    }
}
