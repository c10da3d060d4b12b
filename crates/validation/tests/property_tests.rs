//! Property-based tests for nebula-validation.

use std::cmp::Ordering;

use nebula_validation::prelude::*;
use nebula_validation::PathElement;
use proptest::prelude::*;

fn element() -> impl Strategy<Value = PathElement> {
    prop_oneof![
        "[a-z][a-zA-Z0-9]{0,7}".prop_map(PathElement::property),
        (0usize..100).prop_map(PathElement::Index),
    ]
}

fn path() -> impl Strategy<Value = PropertyPath> {
    prop::collection::vec(element(), 0..6).prop_map(PropertyPath::from_elements)
}

fn expected_format(elements: &[PathElement]) -> String {
    let mut out = String::new();
    for (i, element) in elements.iter().enumerate() {
        match element {
            PathElement::Property(name) if i == 0 => out.push_str(name),
            PathElement::Property(name) => {
                out.push('.');
                out.push_str(name);
            }
            PathElement::Index(index) => out.push_str(&format!("[{index}]")),
        }
    }
    out
}

// ============================================================================
// PROPERTY PATH
// ============================================================================

proptest! {
    #[test]
    fn path_format_matches_elements(elements in prop::collection::vec(element(), 0..8)) {
        let path = PropertyPath::from_elements(elements.clone());
        prop_assert_eq!(path.format(), expected_format(&elements));
        prop_assert_eq!(path.len(), elements.len());
    }

    #[test]
    fn path_join_is_associative(a in path(), b in path(), c in path()) {
        prop_assert_eq!(a.join(&b).join(&c), a.join(&b.join(&c)));
    }

    #[test]
    fn path_extension_leaves_parent_untouched(parent in path(), index in 0usize..10) {
        let before = parent.format();
        let child = parent.with_index(index);
        prop_assert_eq!(parent.format(), before);
        prop_assert_eq!(child.len(), parent.len() + 1);
    }
}

// ============================================================================
// FLATTENING
// ============================================================================

fn result_with(count: usize, tag: usize) -> ValidationResult {
    let names: Vec<String> = (0..count).map(|i| format!("p{tag}_{i}")).collect();
    filter(
        names
            .iter()
            .map(|name| validate(arguments![string("", options![property_name(name.as_str()), it::is_not_blank()])])),
    )
}

proptest! {
    #[test]
    fn filter_preserves_count_and_order(counts in prop::collection::vec(0usize..4, 0..5)) {
        let results: Vec<_> = counts.iter().enumerate().map(|(tag, &n)| result_with(n, tag)).collect();
        let total: usize = counts.iter().sum();

        match filter(results) {
            Ok(()) => prop_assert_eq!(total, 0),
            Err(error) => {
                let list = error.violations().unwrap();
                prop_assert_eq!(list.len(), total);
                let expected: Vec<String> = counts
                    .iter()
                    .enumerate()
                    .flat_map(|(tag, &n)| (0..n).map(move |i| format!("p{tag}_{i}")))
                    .collect();
                let actual: Vec<String> = list.iter().map(|v| v.property_path().format()).collect();
                prop_assert_eq!(actual, expected);
            }
        }
    }

    #[test]
    fn filter_is_idempotent(counts in prop::collection::vec(0usize..4, 0..5)) {
        let once = filter(counts.iter().enumerate().map(|(tag, &n)| result_with(n, tag)));
        let twice = filter([filter(counts.iter().enumerate().map(|(tag, &n)| result_with(n, tag)))]);
        prop_assert_eq!(
            once.err().and_then(ValidationError::into_violations),
            twice.err().and_then(ValidationError::into_violations)
        );
    }
}

// ============================================================================
// NUMBERS
// ============================================================================

proptest! {
    #[test]
    fn integer_comparison_matches_native(a in any::<i64>(), b in any::<i64>()) {
        prop_assert_eq!(Number::from(a).compare(&Number::from(b)), Some(a.cmp(&b)));
    }

    #[test]
    fn unsigned_above_signed_range_is_greater(a in (i64::MAX as u64 + 1)..=u64::MAX, b in any::<i64>()) {
        prop_assert_eq!(Number::from(a).compare(&Number::from(b)), Some(Ordering::Greater));
    }

    #[test]
    fn small_float_comparison_matches_native(a in -1.0e6f64..1.0e6, b in -1_000_000i32..1_000_000) {
        prop_assert_eq!(Number::from(a).compare(&Number::from(b)), a.partial_cmp(&f64::from(b)));
    }
}
