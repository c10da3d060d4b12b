//! Merging results and serializing violations.

use std::fmt;

use nebula_validation::prelude::*;
use nebula_validation::{PropertyPath, ViolationList};
use pretty_assertions::assert_eq;
use serde_json::json;

fn sample() -> ValidationResult {
    validate(arguments![
        string("", options![property_name("name"), it::is_not_blank()]),
        iterable(
            &Vec::<String>::new(),
            options![property_name("tags"), it::has_min_count(1)]
        ),
        number(-1, options![it::is_positive()]),
    ])
}

/// Application error wrapping a validation failure.
#[derive(Debug)]
struct RequestError {
    source: ValidationError,
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "request rejected")
    }
}

impl std::error::Error for RequestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

#[derive(Debug)]
struct Io;

impl fmt::Display for Io {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "disk on fire")
    }
}

impl std::error::Error for Io {}

#[test]
fn filter_flattens_in_order() {
    let validator = Validator::default();
    let result = filter([
        validator.validate_string("", options![property_name("a"), it::is_not_blank()]),
        Ok(()),
        validator.validate_string("", options![property_name("b"), it::is_not_blank()]),
    ]);

    let paths: Vec<_> = result
        .unwrap_err()
        .violations()
        .unwrap()
        .iter()
        .map(|v| v.property_path().format())
        .collect();
    assert_eq!(paths, ["a", "b"]);
}

#[test]
fn filter_of_passing_results_is_ok() {
    assert!(filter([Ok(()), Ok(())]).is_ok());
    assert!(filter(Vec::new()).is_ok());
}

#[test]
fn filter_returns_first_fatal_error() {
    let fatal: ValidationResult = Err(FatalError::EmptyArguments { combinator: "When" }.into());
    let result = filter([sample(), fatal, Err(FatalError::custom(Io).into())]);

    assert!(matches!(
        result.unwrap_err(),
        ValidationError::Fatal(FatalError::EmptyArguments { .. })
    ));
}

#[test]
fn wrapped_validation_error_is_unwrapped() {
    let wrapped = RequestError {
        source: sample().unwrap_err(),
    };

    let mut list = ViolationList::new();
    list.append_boxed_error(Box::new(wrapped)).unwrap();
    assert_eq!(list.len(), 3);
}

#[test]
fn foreign_error_becomes_fatal() {
    let error = ValidationError::from_error(Box::new(Io));
    assert!(error.is_fatal());
    assert_eq!(error.to_string(), "disk on fire");
}

#[test]
fn list_display_joins_messages() {
    let error = validate(arguments![string("", options![property_name("name"), it::is_not_blank()])])
        .unwrap_err();
    assert_eq!(
        error.to_string(),
        "violation at 'name': This value should not be blank."
    );
}

#[test]
fn violations_serialize_to_json() {
    let list = sample().unwrap_err().into_violations().unwrap();

    assert_eq!(
        list.to_json_value().unwrap(),
        json!([
            { "code": "notBlank", "message": "This value should not be blank.", "propertyPath": "name" },
            { "code": "countTooFew", "message": "This collection should contain 1 element or more.", "propertyPath": "tags" },
            { "code": "notPositive", "message": "This value should be positive." }
        ])
    );
}

#[test]
fn violations_json_snapshot() {
    let list = validate(arguments![string(
        "",
        options![
            property_path(PropertyPath::new().with_property("items").with_index(0)),
            property_name("title"),
            it::is_not_blank()
        ]
    )])
    .unwrap_err()
    .into_violations()
    .unwrap();

    insta::assert_json_snapshot!(list, @r#"
    [
      {
        "code": "notBlank",
        "message": "This value should not be blank.",
        "propertyPath": "items[0].title"
      }
    ]
    "#);
}
