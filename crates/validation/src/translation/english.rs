//! Built-in English catalog
//!
//! Only count-dependent templates need entries; every other template is its
//! own English text.

use crate::message;
use crate::translation::catalog::{Catalog, PluralForms, english_plural};
use crate::translation::language::LanguageTag;

/// English translations of the built-in templates.
#[must_use]
pub fn catalog() -> Catalog {
    Catalog::with_plural_rule(LanguageTag::ENGLISH, english_plural)
        .with_message(
            message::COUNT_TOO_FEW,
            PluralForms::new(
                message::COUNT_TOO_FEW,
                "This collection should contain {{ limit }} elements or more.",
            ),
        )
        .with_message(
            message::COUNT_TOO_MANY,
            PluralForms::new(
                message::COUNT_TOO_MANY,
                "This collection should contain {{ limit }} elements or less.",
            ),
        )
        .with_message(
            message::COUNT_EXACT,
            PluralForms::new(
                message::COUNT_EXACT,
                "This collection should contain exactly {{ limit }} elements.",
            ),
        )
        .with_message(
            message::LENGTH_TOO_FEW,
            PluralForms::new(
                message::LENGTH_TOO_FEW,
                "This value is too short. It should have {{ limit }} characters or more.",
            ),
        )
        .with_message(
            message::LENGTH_TOO_MANY,
            PluralForms::new(
                message::LENGTH_TOO_MANY,
                "This value is too long. It should have {{ limit }} characters or less.",
            ),
        )
        .with_message(
            message::LENGTH_EXACT,
            PluralForms::new(
                message::LENGTH_EXACT,
                "This value should have exactly {{ limit }} characters.",
            ),
        )
}
