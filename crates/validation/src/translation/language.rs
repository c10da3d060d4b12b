//! Language tags

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::foundation::error::TranslationError;

/// Normalized BCP-47 language tag (`en`, `en-us`, `ru`).
///
/// Tags are compared case-insensitively and `_` is accepted as a separator,
/// so `en_US`, `EN-us` and `en-us` are the same tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LanguageTag(Cow<'static, str>);

impl LanguageTag {
    /// Undetermined language; resolved to the validator's default language.
    pub const UND: Self = Self(Cow::Borrowed("und"));
    /// English.
    pub const ENGLISH: Self = Self(Cow::Borrowed("en"));
    /// Russian.
    pub const RUSSIAN: Self = Self(Cow::Borrowed("ru"));

    /// Parses and normalizes a tag.
    ///
    /// # Errors
    ///
    /// Returns [`TranslationError::InvalidLanguageTag`] when the input is
    /// empty or a subtag is not 1..=8 ASCII alphanumerics.
    pub fn parse(tag: &str) -> Result<Self, TranslationError> {
        let normalized = tag.trim().replace('_', "-").to_ascii_lowercase();
        let valid = !normalized.is_empty()
            && normalized.split('-').all(|subtag| {
                (1..=8).contains(&subtag.len())
                    && subtag.bytes().all(|b| b.is_ascii_alphanumeric())
            });
        if !valid {
            return Err(TranslationError::InvalidLanguageTag { tag: tag.to_owned() });
        }
        Ok(Self(Cow::Owned(normalized)))
    }

    /// Normalized tag text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` for [`LanguageTag::UND`].
    #[must_use]
    pub fn is_und(&self) -> bool {
        *self == Self::UND
    }

    /// Primary language subtag, e.g. `en` for `en-us`.
    #[must_use]
    pub fn base(&self) -> Self {
        match self.0.split_once('-') {
            Some((base, _)) => Self(Cow::Owned(base.to_owned())),
            None => self.clone(),
        }
    }
}

impl Default for LanguageTag {
    fn default() -> Self {
        Self::UND
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for LanguageTag {
    type Err = TranslationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
