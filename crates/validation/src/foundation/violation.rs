//! Violations and their construction
//!
//! A [`Violation`] is created exactly once, by a [`ViolationFactory`], at the
//! point a constraint rejects a value. Constraints never build violations
//! directly; they call [`Scope::build_violation`](crate::Scope::build_violation)
//! which pre-seeds a [`ViolationBuilder`] with the current path and language.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::foundation::path::PropertyPath;
use crate::foundation::template::{TemplateParameter, TemplateParameterList};
use crate::translation::{LanguageTag, Translator};

// ============================================================================
// VIOLATION
// ============================================================================

/// A single failed constraint.
///
/// Serializes as `{ "code", "message", "propertyPath" }`; the path is omitted
/// when empty, the raw template and parameters are not serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Violation {
    code: Cow<'static, str>,
    message: String,
    #[serde(skip)]
    message_template: Cow<'static, str>,
    #[serde(skip)]
    parameters: TemplateParameterList,
    #[serde(skip_serializing_if = "PropertyPath::is_empty")]
    property_path: PropertyPath,
}

impl Violation {
    /// Creates an untranslated violation whose message is its own template.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        let message_template = message.into();
        Self {
            code: code.into(),
            message: message_template.to_string(),
            message_template,
            parameters: TemplateParameterList::new(),
            property_path: PropertyPath::new(),
        }
    }

    /// Creates a violation from already rendered parts.
    pub fn from_parts(
        code: impl Into<Cow<'static, str>>,
        message: impl Into<String>,
        message_template: impl Into<Cow<'static, str>>,
        parameters: TemplateParameterList,
        property_path: PropertyPath,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            message_template: message_template.into(),
            parameters,
            property_path,
        }
    }

    /// Returns a copy located at `path`.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_property_path(mut self, path: PropertyPath) -> Self {
        self.property_path = path;
        self
    }

    /// Stable, semantic code, see [`code`](crate::code).
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Translated, rendered message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Raw template the message was rendered from.
    #[must_use]
    pub fn message_template(&self) -> &str {
        &self.message_template
    }

    /// Parameters substituted into the template.
    #[must_use]
    pub fn parameters(&self) -> &TemplateParameterList {
        &self.parameters
    }

    /// Location of the violated value.
    #[must_use]
    pub fn property_path(&self) -> &PropertyPath {
        &self.property_path
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("violation")?;
        if !self.property_path.is_empty() {
            write!(f, " at '{}'", self.property_path)?;
        }
        write!(f, ": {}", self.message)
    }
}

impl std::error::Error for Violation {}

// ============================================================================
// FACTORY
// ============================================================================

/// Single construction point for violations.
///
/// The default factory translates the template and renders parameters into
/// it. Plug in a custom one with
/// [`ValidatorBuilder::violation_factory`](crate::ValidatorBuilder::violation_factory);
/// any `Fn` with the same signature works.
pub trait ViolationFactory: Send + Sync {
    /// Creates a violation.
    fn create_violation(
        &self,
        code: Cow<'static, str>,
        message_template: Cow<'static, str>,
        plural_count: usize,
        parameters: TemplateParameterList,
        property_path: PropertyPath,
        language: &LanguageTag,
    ) -> Violation;
}

impl<F> ViolationFactory for F
where
    F: Fn(
            Cow<'static, str>,
            Cow<'static, str>,
            usize,
            TemplateParameterList,
            PropertyPath,
            &LanguageTag,
        ) -> Violation
        + Send
        + Sync,
{
    fn create_violation(
        &self,
        code: Cow<'static, str>,
        message_template: Cow<'static, str>,
        plural_count: usize,
        parameters: TemplateParameterList,
        property_path: PropertyPath,
        language: &LanguageTag,
    ) -> Violation {
        self(code, message_template, plural_count, parameters, property_path, language)
    }
}

/// Translates the template, then renders the parameters into it.
#[derive(Debug, Clone, Default)]
pub struct TranslatingViolationFactory {
    translator: Arc<Translator>,
}

impl TranslatingViolationFactory {
    /// Creates a factory over `translator`.
    pub fn new(translator: Arc<Translator>) -> Self {
        Self { translator }
    }

    /// Translator in use.
    #[must_use]
    pub fn translator(&self) -> &Translator {
        &self.translator
    }
}

impl ViolationFactory for TranslatingViolationFactory {
    fn create_violation(
        &self,
        code: Cow<'static, str>,
        message_template: Cow<'static, str>,
        plural_count: usize,
        parameters: TemplateParameterList,
        property_path: PropertyPath,
        language: &LanguageTag,
    ) -> Violation {
        let translated = self
            .translator
            .translate(language, &message_template, plural_count);
        let message = parameters.render(translated);

        Violation {
            code,
            message,
            message_template,
            parameters,
            property_path,
        }
    }
}

// ============================================================================
// BUILDER
// ============================================================================

/// Fluent builder handed out by [`Scope::build_violation`](crate::Scope::build_violation).
#[must_use = "call `create()` to obtain the violation"]
pub struct ViolationBuilder<'a> {
    factory: &'a dyn ViolationFactory,
    code: Cow<'static, str>,
    message_template: Cow<'static, str>,
    plural_count: usize,
    parameters: TemplateParameterList,
    property_path: PropertyPath,
    language: LanguageTag,
}

impl<'a> ViolationBuilder<'a> {
    /// Starts a violation with the given code and template.
    pub fn new(
        factory: &'a dyn ViolationFactory,
        code: impl Into<Cow<'static, str>>,
        message_template: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            factory,
            code: code.into(),
            message_template: message_template.into(),
            plural_count: 0,
            parameters: TemplateParameterList::new(),
            property_path: PropertyPath::new(),
            language: LanguageTag::UND,
        }
    }

    /// Replaces all parameters.
    pub fn with_parameters(mut self, parameters: TemplateParameterList) -> Self {
        self.parameters = parameters;
        self
    }

    /// Appends one parameter.
    pub fn with_parameter(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.parameters.push(TemplateParameter::new(key, value));
        self
    }

    /// Sets the path of the violated value.
    pub fn with_property_path(mut self, path: PropertyPath) -> Self {
        self.property_path = path;
        self
    }

    /// Sets the count used to pick a plural form.
    pub fn with_plural_count(mut self, count: usize) -> Self {
        self.plural_count = count;
        self
    }

    /// Sets the message language.
    pub fn with_language(mut self, language: LanguageTag) -> Self {
        self.language = language;
        self
    }

    /// Creates the violation through the factory.
    #[must_use]
    pub fn create(self) -> Violation {
        self.factory.create_violation(
            self.code,
            self.message_template,
            self.plural_count,
            self.parameters,
            self.property_path,
            &self.language,
        )
    }
}

impl fmt::Debug for ViolationBuilder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViolationBuilder")
            .field("code", &self.code)
            .field("message_template", &self.message_template)
            .field("plural_count", &self.plural_count)
            .field("parameters", &self.parameters)
            .field("property_path", &self.property_path)
            .field("language", &self.language)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message;
    use crate::translation::russian;
    use pretty_assertions::assert_eq;

    fn factory() -> TranslatingViolationFactory {
        let translator = Translator::builder()
            .with_catalog(russian::catalog())
            .build()
            .unwrap();
        TranslatingViolationFactory::new(Arc::new(translator))
    }

    #[test]
    fn test_builder_renders_parameters() {
        let factory = factory();
        let violation = ViolationBuilder::new(&factory, "code", r#"Unexpected value "{{ value }}""#)
            .with_parameter("{{ value }}", "foo")
            .create();

        assert_eq!(violation.message(), r#"Unexpected value "foo""#);
        assert_eq!(violation.message_template(), r#"Unexpected value "{{ value }}""#);
        assert_eq!(violation.parameters().get("{{ value }}"), Some("foo"));
    }

    #[test]
    fn test_builder_translates_with_plural() {
        let factory = factory();
        let violation = ViolationBuilder::new(&factory, "countTooFew", message::COUNT_TOO_FEW)
            .with_parameter("{{ limit }}", "3")
            .with_plural_count(3)
            .with_language(LanguageTag::RUSSIAN)
            .create();

        assert_eq!(
            violation.message(),
            "Эта коллекция должна содержать 3 элемента или больше."
        );
    }

    #[test]
    fn test_display_with_and_without_path() {
        let violation = Violation::new("code", "Broken.");
        assert_eq!(violation.to_string(), "violation: Broken.");

        let located = violation.with_property_path(PropertyPath::new().with_property("a").with_index(1));
        assert_eq!(located.to_string(), "violation at 'a[1]': Broken.");
    }

    #[test]
    fn test_closure_factory() {
        let factory = |code: Cow<'static, str>,
                       template: Cow<'static, str>,
                       _: usize,
                       _: TemplateParameterList,
                       path: PropertyPath,
                       _: &LanguageTag| {
            Violation::new(code, template).with_property_path(path)
        };
        let violation = ViolationBuilder::new(&factory, "custom", "{{ raw }}")
            .with_parameter("{{ raw }}", "ignored")
            .create();

        assert_eq!(violation.code(), "custom");
        assert_eq!(violation.message(), "{{ raw }}");
    }
}
