//! Rendered messages with caller templates.

use nebula_validation::prelude::*;
use nebula_validation::{Opt, validate_string};
use pretty_assertions::assert_eq;
use regex::Regex;
use rstest::rstest;

fn first_message(result: ValidationResult) -> String {
    result.unwrap_err().violations().unwrap()[0].message().to_owned()
}

#[rstest]
#[case::custom(
    "foo",
    it::CustomStringConstraint::new(|_| false)
        .message("Unexpected value \"{{ value }}\"")
        .into(),
    "Unexpected value \"foo\""
)]
#[case::choice(
    "unexpected",
    it::is_one_of_strings(["alpha", "beta", "gamma"])
        .message("Unexpected value \"{{ value }}\", expected values are: {{ choices }}.")
        .into(),
    "Unexpected value \"unexpected\", expected values are: alpha, beta, gamma."
)]
#[case::url(
    "example.com",
    it::is_url().message("Unexpected URL \"{{ value }}\"").into(),
    "Unexpected URL \"example.com\""
)]
#[case::pattern(
    "abc",
    it::matches(Regex::new(r"^\d+$").unwrap())
        .message("{{ value }} does not match {{ pattern }}")
        .into(),
    "abc does not match ^\\d+$"
)]
#[case::length(
    "abc",
    it::has_max_length(1).max_message("{{ value }} has {{ length }} characters").into(),
    "abc has 3 characters"
)]
fn value_is_rendered_verbatim(#[case] value: &str, #[case] option: Opt, #[case] expected: &str) {
    assert_eq!(first_message(validate_string(value, vec![option])), expected);
}
