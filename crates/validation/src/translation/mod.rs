//! Message localization
//!
//! The engine only ever calls [`Translator::translate`]; catalogs are plain
//! data assembled once when a [`Validator`](crate::Validator) is built.

mod catalog;
pub mod english;
mod language;
pub mod russian;
mod translator;

pub use catalog::{
    Catalog, Message, PluralCategory, PluralForms, PluralRule, english_plural, russian_plural,
};
pub use language::LanguageTag;
pub use translator::{Translator, TranslatorBuilder};
