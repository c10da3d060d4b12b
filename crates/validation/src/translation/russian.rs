//! Built-in Russian catalog

use crate::message;
use crate::translation::catalog::{Catalog, PluralForms, russian_plural};
use crate::translation::language::LanguageTag;

fn forms(one: &'static str, few: &'static str, many: &'static str) -> PluralForms {
    PluralForms::new(one, many).with_few(few).with_many(many)
}

/// Russian translations of the built-in templates.
#[must_use]
pub fn catalog() -> Catalog {
    Catalog::with_plural_rule(LanguageTag::RUSSIAN, russian_plural)
        .with_message(message::NOT_BLANK, "Значение не должно быть пустым.")
        .with_message(message::BLANK, "Значение должно быть пустым.")
        .with_message(message::NOT_NIL, "Значение не должно быть nil.")
        .with_message(message::NIL, "Значение должно быть nil.")
        .with_message(message::NOT_VALID, "Значение недопустимо.")
        .with_message(message::NO_SUCH_CHOICE, "Выбранное Вами значение недопустимо.")
        .with_message(
            message::COUNT_TOO_FEW,
            forms(
                "Эта коллекция должна содержать {{ limit }} элемент или больше.",
                "Эта коллекция должна содержать {{ limit }} элемента или больше.",
                "Эта коллекция должна содержать {{ limit }} элементов или больше.",
            ),
        )
        .with_message(
            message::COUNT_TOO_MANY,
            forms(
                "Эта коллекция должна содержать {{ limit }} элемент или меньше.",
                "Эта коллекция должна содержать {{ limit }} элемента или меньше.",
                "Эта коллекция должна содержать {{ limit }} элементов или меньше.",
            ),
        )
        .with_message(
            message::COUNT_EXACT,
            forms(
                "Эта коллекция должна содержать ровно {{ limit }} элемент.",
                "Эта коллекция должна содержать ровно {{ limit }} элемента.",
                "Эта коллекция должна содержать ровно {{ limit }} элементов.",
            ),
        )
        .with_message(
            message::LENGTH_TOO_FEW,
            forms(
                "Значение слишком короткое. Должно быть {{ limit }} символ или больше.",
                "Значение слишком короткое. Должно быть {{ limit }} символа или больше.",
                "Значение слишком короткое. Должно быть {{ limit }} символов или больше.",
            ),
        )
        .with_message(
            message::LENGTH_TOO_MANY,
            forms(
                "Значение слишком длинное. Должно быть {{ limit }} символ или меньше.",
                "Значение слишком длинное. Должно быть {{ limit }} символа или меньше.",
                "Значение слишком длинное. Должно быть {{ limit }} символов или меньше.",
            ),
        )
        .with_message(
            message::LENGTH_EXACT,
            forms(
                "Значение должно содержать ровно {{ limit }} символ.",
                "Значение должно содержать ровно {{ limit }} символа.",
                "Значение должно содержать ровно {{ limit }} символов.",
            ),
        )
        .with_message(message::NOT_EQUAL, "Значение должно быть равно {{ comparedValue }}.")
        .with_message(message::TOO_HIGH, "Значение должно быть меньше чем {{ comparedValue }}.")
        .with_message(
            message::TOO_HIGH_OR_EQUAL,
            "Значение должно быть меньше или равно {{ comparedValue }}.",
        )
        .with_message(message::TOO_LOW, "Значение должно быть больше чем {{ comparedValue }}.")
        .with_message(
            message::TOO_LOW_OR_EQUAL,
            "Значение должно быть больше или равно {{ comparedValue }}.",
        )
        .with_message(message::NOT_IN_RANGE, "Значение должно быть между {{ min }} и {{ max }}.")
        .with_message(message::NOT_POSITIVE, "Значение должно быть положительным.")
        .with_message(message::NOT_NEGATIVE, "Значение должно быть отрицательным.")
        .with_message(message::NOT_TRUE, "Значение должно быть истинным.")
        .with_message(message::NOT_FALSE, "Значение должно быть ложным.")
        .with_message(message::TOO_EARLY, "Значение должно быть позже чем {{ comparedValue }}.")
        .with_message(message::TOO_LATE, "Значение должно быть раньше чем {{ comparedValue }}.")
        .with_message(message::INVALID_EMAIL, "Значение адреса электронной почты недопустимо.")
        .with_message(message::INVALID_URL, "Значение не является допустимым URL.")
        .with_message(message::INVALID_IP, "Это некорректный IP адрес.")
        .with_message(message::PROHIBITED_IP, "Этот IP адрес запрещен для использования.")
}
