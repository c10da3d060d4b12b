//! Template translation

use std::collections::HashMap;

use tracing::debug;

use crate::foundation::error::TranslationError;
use crate::translation::catalog::Catalog;
use crate::translation::english;
use crate::translation::language::LanguageTag;

/// Resolves message templates to localized text.
///
/// Lookup for `translate(tag, template, n)`:
///
/// 1. [`LanguageTag::UND`] is replaced by the default language;
/// 2. the catalogs for the exact tag, its base tag and the fallback language
///    are tried in that order, the first one containing `template` wins;
/// 3. a template no catalog knows is returned unchanged.
///
/// The English catalog is always loaded.
#[derive(Debug, Clone)]
pub struct Translator {
    default_language: LanguageTag,
    fallback_language: LanguageTag,
    catalogs: HashMap<LanguageTag, Catalog>,
}

impl Translator {
    /// Starts configuring a translator.
    #[must_use]
    pub fn builder() -> TranslatorBuilder {
        TranslatorBuilder::default()
    }

    /// Language used for [`LanguageTag::UND`].
    #[must_use]
    pub fn default_language(&self) -> &LanguageTag {
        &self.default_language
    }

    /// Language used when no catalog matches the requested one.
    #[must_use]
    pub fn fallback_language(&self) -> &LanguageTag {
        &self.fallback_language
    }

    /// Returns `true` when a catalog is loaded for exactly `tag`.
    #[must_use]
    pub fn has_language(&self, tag: &LanguageTag) -> bool {
        self.catalogs.contains_key(tag)
    }

    /// Translates `template` into `tag`, choosing the plural form for `plural_count`.
    #[must_use]
    pub fn translate<'a>(&'a self, tag: &LanguageTag, template: &'a str, plural_count: usize) -> &'a str {
        let tag = if tag.is_und() { &self.default_language } else { tag };
        let base = tag.base();

        [tag, &base, &self.fallback_language]
            .into_iter()
            .filter_map(|candidate| self.catalogs.get(candidate))
            .find_map(|catalog| catalog.lookup(template, plural_count))
            .unwrap_or(template)
    }
}

impl Default for Translator {
    fn default() -> Self {
        let english = english::catalog();
        Self {
            default_language: LanguageTag::ENGLISH,
            fallback_language: LanguageTag::ENGLISH,
            catalogs: HashMap::from([(LanguageTag::ENGLISH, english)]),
        }
    }
}

// ============================================================================
// BUILDER
// ============================================================================

/// Builder for [`Translator`].
#[derive(Debug, Clone)]
pub struct TranslatorBuilder {
    default_language: LanguageTag,
    fallback_language: LanguageTag,
    catalogs: Vec<Catalog>,
}

impl Default for TranslatorBuilder {
    fn default() -> Self {
        Self {
            default_language: LanguageTag::UND,
            fallback_language: LanguageTag::ENGLISH,
            catalogs: Vec::new(),
        }
    }
}

impl TranslatorBuilder {
    /// Language used for [`LanguageTag::UND`]. `UND` itself means English.
    #[must_use = "builder methods must be chained or built"]
    pub fn default_language(mut self, tag: LanguageTag) -> Self {
        self.default_language = tag;
        self
    }

    /// Language used when no catalog matches. Defaults to English.
    #[must_use = "builder methods must be chained or built"]
    pub fn fallback_language(mut self, tag: LanguageTag) -> Self {
        self.fallback_language = tag;
        self
    }

    /// Adds a catalog; catalogs of the same language are merged, later entries win.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalogs.push(catalog);
        self
    }

    /// Builds the translator.
    ///
    /// # Errors
    ///
    /// [`TranslationError::MissingFallback`] when no catalog is loaded for the
    /// fallback language.
    pub fn build(self) -> Result<Translator, TranslationError> {
        let mut catalogs = HashMap::new();
        catalogs.insert(LanguageTag::ENGLISH, english::catalog());
        for catalog in self.catalogs {
            match catalogs.get_mut(catalog.language()) {
                Some(existing) => Catalog::merge(existing, catalog),
                None => {
                    catalogs.insert(catalog.language().clone(), catalog);
                }
            }
        }

        if !catalogs.contains_key(&self.fallback_language) {
            debug!(fallback = %self.fallback_language, "translator has no fallback catalog");
            return Err(TranslationError::MissingFallback {
                language: self.fallback_language.to_string(),
            });
        }

        let default_language = if self.default_language.is_und() {
            LanguageTag::ENGLISH
        } else {
            self.default_language
        };

        debug!(
            default = %default_language,
            fallback = %self.fallback_language,
            languages = catalogs.len(),
            "translator built"
        );

        Ok(Translator {
            default_language,
            fallback_language: self.fallback_language,
            catalogs,
        })
    }
}
