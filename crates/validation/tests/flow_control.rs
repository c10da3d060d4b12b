//! Conditional, sequential and alternative validation through the public API.

use nebula_validation::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

fn codes(result: ValidationResult) -> Vec<String> {
    match result {
        Ok(()) => Vec::new(),
        Err(ValidationError::Violations(list)) => list.iter().map(|v| v.code().to_owned()).collect(),
        Err(ValidationError::Fatal(error)) => panic!("unexpected fatal error: {error}"),
    }
}

#[rstest]
#[case::company(true, "", vec!["notBlank"])]
#[case::person(false, "", vec!["lengthTooFew"])]
#[case::person_valid(false, "Alice Smith", vec![])]
fn when_switches_rules_by_condition(
    #[case] is_company: bool,
    #[case] name: &str,
    #[case] expected: Vec<&str>,
) {
    let result = validate(arguments![when(is_company)
        .then(arguments![string(name, options![it::is_not_blank()])])
        .otherwise(arguments![string(
            if name.is_empty() { "A" } else { name },
            options![it::has_min_length(3)]
        )])]);
    assert_eq!(codes(result), expected);
}

#[test]
fn sequentially_stops_before_expensive_checks() {
    let email = "not an email";
    let result = validate(arguments![sequentially(arguments![
        string(email, options![it::is_not_blank()]),
        string(email, options![it::is_email()]),
        string(email, options![it::has_max_length(5)]),
    ])]);
    assert_eq!(codes(result), ["invalidEmail"]);
}

#[test]
fn at_least_one_of_contact_methods() {
    let email = "";
    let phone = "+1 555 0100";

    let contact = |email: &'static str, phone: &'static str| {
        validate(arguments![at_least_one_of(arguments![
            string(email, options![property_name("email"), it::is_not_blank()]),
            string(phone, options![property_name("phone"), it::is_not_blank()]),
        ])])
    };

    assert!(contact(email, phone).is_ok());

    let error = contact("", "").unwrap_err();
    let paths: Vec<_> = error
        .violations()
        .unwrap()
        .iter()
        .map(|v| v.property_path().format())
        .collect();
    assert_eq!(paths, ["email", "phone"]);
}

#[test]
fn combinator_options_prefix_nested_paths() {
    let result = validate(arguments![sequentially(arguments![string(
        "",
        options![property_name("street"), it::is_not_blank()]
    )])
    .with(options![property_name("address")])]);

    let error = result.unwrap_err();
    assert_eq!(
        error.violations().unwrap()[0].property_path().format(),
        "address.street"
    );
}

#[test]
fn groups_select_rules() {
    let title = "";
    let rules = || {
        arguments![
            string(title, options![it::is_not_blank().when_groups(["publish"])]),
            string(title, options![it::has_max_length(3)]),
            string("long value", options![it::has_max_length(3).when_groups(["draft", "publish"])]),
        ]
    };
    let validator = Validator::default();

    assert_eq!(codes(validator.validate(rules())), Vec::<String>::new());
    assert_eq!(
        codes(validator.with_groups(["publish"]).validate(rules())),
        ["notBlank", "lengthTooMany"]
    );
    assert_eq!(
        codes(validator.with_groups(["draft"]).validate(rules())),
        ["lengthTooMany"]
    );
}

#[test]
fn group_option_overrides_validator_groups() {
    let validator = Validator::default().with_groups(["draft"]);
    let result = validator.validate(arguments![string(
        "",
        options![groups(["publish"]), it::is_not_blank().when_groups(["publish"])]
    )]);
    assert_eq!(codes(result), ["notBlank"]);
}

#[test]
fn check_no_violations_merges_existing_results() {
    let earlier = validate(arguments![string("", options![property_name("a"), it::is_not_blank()])]);
    let result = validate(arguments![
        check_no_violations(earlier),
        string("", options![property_name("b"), it::is_not_blank()]),
    ]);
    assert_eq!(codes(result), ["notBlank", "notBlank"]);
}

#[test]
fn fatal_error_aborts_remaining_arguments() {
    let error = validate(arguments![
        string("", options![it::is_not_blank()]),
        number(1, options![it::is_email()]),
        string("", options![it::is_not_blank()]),
    ])
    .unwrap_err();
    assert!(matches!(
        error,
        ValidationError::Fatal(FatalError::InapplicableConstraint { .. })
    ));
}
