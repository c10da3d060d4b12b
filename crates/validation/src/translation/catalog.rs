//! Message catalogs and plural rules

use std::borrow::Cow;
use std::collections::HashMap;

use crate::translation::language::LanguageTag;

// ============================================================================
// PLURAL RULES
// ============================================================================

/// CLDR plural category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluralCategory {
    /// Singular.
    One,
    /// Paucal (Slavic 2..4).
    Few,
    /// Plural of many.
    Many,
    /// Everything else.
    Other,
}

/// Selects a plural category for a count.
pub type PluralRule = fn(usize) -> PluralCategory;

/// English (and the default for unknown languages).
#[must_use]
pub fn english_plural(n: usize) -> PluralCategory {
    if n == 1 {
        PluralCategory::One
    } else {
        PluralCategory::Other
    }
}

/// Russian.
#[must_use]
pub fn russian_plural(n: usize) -> PluralCategory {
    let (mod10, mod100) = (n % 10, n % 100);
    if mod10 == 1 && mod100 != 11 {
        PluralCategory::One
    } else if (2..=4).contains(&mod10) && !(12..=14).contains(&mod100) {
        PluralCategory::Few
    } else {
        PluralCategory::Many
    }
}

// ============================================================================
// MESSAGES
// ============================================================================

/// Plural variants of a message. Missing categories fall back to `other`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluralForms {
    /// Singular form.
    pub one: Cow<'static, str>,
    /// Paucal form.
    pub few: Option<Cow<'static, str>>,
    /// "Many" form.
    pub many: Option<Cow<'static, str>>,
    /// Fallback form.
    pub other: Cow<'static, str>,
}

impl PluralForms {
    /// Two-form message (`one` / `other`).
    pub fn new(one: impl Into<Cow<'static, str>>, other: impl Into<Cow<'static, str>>) -> Self {
        Self {
            one: one.into(),
            few: None,
            many: None,
            other: other.into(),
        }
    }

    /// Sets the paucal form.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_few(mut self, few: impl Into<Cow<'static, str>>) -> Self {
        self.few = Some(few.into());
        self
    }

    /// Sets the "many" form.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_many(mut self, many: impl Into<Cow<'static, str>>) -> Self {
        self.many = Some(many.into());
        self
    }

    /// Form for a category.
    #[must_use]
    pub fn select(&self, category: PluralCategory) -> &str {
        match category {
            PluralCategory::One => &self.one,
            PluralCategory::Few => self.few.as_deref().unwrap_or(&self.other),
            PluralCategory::Many => self.many.as_deref().unwrap_or(&self.other),
            PluralCategory::Other => &self.other,
        }
    }
}

/// Translated message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Count-independent text.
    Simple(Cow<'static, str>),
    /// Count-dependent text.
    Plural(PluralForms),
}

impl From<&'static str> for Message {
    fn from(text: &'static str) -> Self {
        Self::Simple(Cow::Borrowed(text))
    }
}

impl From<String> for Message {
    fn from(text: String) -> Self {
        Self::Simple(Cow::Owned(text))
    }
}

impl From<PluralForms> for Message {
    fn from(forms: PluralForms) -> Self {
        Self::Plural(forms)
    }
}

// ============================================================================
// CATALOG
// ============================================================================

/// Messages of one language, keyed by message template.
#[derive(Debug, Clone)]
pub struct Catalog {
    language: LanguageTag,
    plural_rule: PluralRule,
    messages: HashMap<Cow<'static, str>, Message>,
}

impl Catalog {
    /// Creates an empty catalog using English plural rules.
    pub fn new(language: LanguageTag) -> Self {
        Self::with_plural_rule(language, english_plural)
    }

    /// Creates an empty catalog with a custom plural rule.
    pub fn with_plural_rule(language: LanguageTag, plural_rule: PluralRule) -> Self {
        Self {
            language,
            plural_rule,
            messages: HashMap::new(),
        }
    }

    /// Adds (or replaces) a translation.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(
        mut self,
        template: impl Into<Cow<'static, str>>,
        message: impl Into<Message>,
    ) -> Self {
        self.insert(template, message);
        self
    }

    /// Adds (or replaces) a translation in place.
    pub fn insert(&mut self, template: impl Into<Cow<'static, str>>, message: impl Into<Message>) {
        self.messages.insert(template.into(), message.into());
    }

    /// Merges `other` into `self`; entries of `other` win.
    pub fn merge(&mut self, other: Catalog) {
        self.messages.extend(other.messages);
    }

    /// Catalog language.
    #[must_use]
    pub fn language(&self) -> &LanguageTag {
        &self.language
    }

    /// Number of translated templates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns `true` when no templates are translated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Looks up `template`, selecting the plural form for `plural_count`.
    #[must_use]
    pub fn lookup(&self, template: &str, plural_count: usize) -> Option<&str> {
        self.messages.get(template).map(|message| match message {
            Message::Simple(text) => text.as_ref(),
            Message::Plural(forms) => forms.select((self.plural_rule)(plural_count)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_russian_plural_categories() {
        let categories: Vec<_> = [1, 2, 5, 11, 21, 22, 25, 112]
            .into_iter()
            .map(russian_plural)
            .collect();
        assert_eq!(
            categories,
            [
                PluralCategory::One,
                PluralCategory::Few,
                PluralCategory::Many,
                PluralCategory::Many,
                PluralCategory::One,
                PluralCategory::Few,
                PluralCategory::Many,
                PluralCategory::Many,
            ]
        );
    }

    #[test]
    fn test_lookup_selects_plural_form() {
        let catalog = Catalog::new(LanguageTag::ENGLISH)
            .with_message("item", PluralForms::new("one item", "{{ n }} items"))
            .with_message("plain", "Plain.");

        assert_eq!(catalog.lookup("item", 1), Some("one item"));
        assert_eq!(catalog.lookup("item", 0), Some("{{ n }} items"));
        assert_eq!(catalog.lookup("plain", 7), Some("Plain."));
        assert_eq!(catalog.lookup("missing", 1), None);
    }

    #[test]
    fn test_missing_category_uses_other() {
        let forms = PluralForms::new("one", "other").with_few("few");
        assert_eq!(forms.select(PluralCategory::Few), "few");
        assert_eq!(forms.select(PluralCategory::Many), "other");
    }
}
