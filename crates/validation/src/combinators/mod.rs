//! Flow-control combinators
//!
//! Combinators compose argument lists with the same accumulation rules as
//! the dispatcher:
//!
//! - [`when`]: conditional `then` / `otherwise` branches
//! - [`sequentially`]: stop at the first step with violations
//! - [`at_least_one_of`]: pass as soon as one alternative passes
//!
//! Each one converts into an [`Argument`](crate::Argument), honors group
//! filtering and rejects an empty argument list with
//! [`FatalError::EmptyArguments`](crate::FatalError::EmptyArguments).

mod at_least_one_of;
mod sequential;
mod when;

pub use at_least_one_of::{AtLeastOneOf, at_least_one_of};
pub use sequential::{Sequential, sequentially};
pub use when::{When, when};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::argument::{Argument, string};
    use crate::foundation::error::{FatalError, ValidationError, ValidationResult};
    use crate::foundation::scope::{Scope, groups, property_name};
    use crate::validators::it;
    use pretty_assertions::assert_eq;

    fn fail<'a>(code: &'static str) -> Argument<'a> {
        Argument::new(move |scope: &Scope| Err(scope.build_violation(code, "Broken.").create().into()))
    }

    fn pass<'a>() -> Argument<'a> {
        Argument::new(|_: &Scope| Ok(()))
    }

    fn codes(result: ValidationResult) -> Vec<String> {
        match result {
            Ok(()) => Vec::new(),
            Err(error) => error
                .violations()
                .unwrap()
                .iter()
                .map(|v| v.code().to_owned())
                .collect(),
        }
    }

    #[test]
    fn test_when_picks_branch() {
        let scope = Scope::default();

        let result = scope.validate([when(false).then([fail("A")]).otherwise([pass()]).into()]);
        assert_eq!(codes(result), Vec::<String>::new());

        let result = scope.validate([when(true).then([fail("A")]).otherwise([pass()]).into()]);
        assert_eq!(codes(result), ["A"]);
    }

    #[test]
    fn test_when_without_branches_is_fatal() {
        let error = Scope::default().validate([when(true).into()]).unwrap_err();
        assert!(matches!(
            error,
            ValidationError::Fatal(FatalError::EmptyArguments { combinator: "When" })
        ));
    }

    #[test]
    fn test_when_with_options_extends_path() {
        let result = Scope::default().validate([when(true)
            .with([property_name("address")])
            .then([string("", [property_name("city"), it::is_not_blank().into()])])
            .into()]);

        let error = result.unwrap_err();
        assert_eq!(error.violations().unwrap()[0].property_path().format(), "address.city");
    }

    #[test]
    fn test_sequentially_stops_at_first_violation() {
        let result = Scope::default().validate([sequentially([pass(), fail("A"), fail("B")]).into()]);
        assert_eq!(codes(result), ["A"]);
    }

    #[test]
    fn test_sequentially_skipped_when_disabled() {
        let result = Scope::default().validate([sequentially([fail("A")]).when(false).into()]);
        assert!(result.is_ok());
    }

    #[test]
    fn test_at_least_one_of_short_circuits_on_pass() {
        let result =
            Scope::default().validate([at_least_one_of([fail("A"), pass(), fail("C")]).into()]);
        assert!(result.is_ok());
    }

    #[test]
    fn test_at_least_one_of_collects_every_failure() {
        let result = Scope::default().validate([at_least_one_of([fail("A"), fail("B")]).into()]);
        assert_eq!(codes(result), ["A", "B"]);
    }

    #[test]
    fn test_empty_combinators_are_fatal() {
        let scope = Scope::default();
        for argument in [
            Argument::from(sequentially(Vec::new())),
            Argument::from(at_least_one_of(Vec::new())),
        ] {
            let error = scope.validate([argument]).unwrap_err();
            assert!(matches!(
                error,
                ValidationError::Fatal(FatalError::EmptyArguments { .. })
            ));
        }
    }

    #[test]
    fn test_combinator_groups() {
        let scope = Scope::default();
        let admin_only = || sequentially([fail("A")]).when_groups(["admin"]);

        assert!(scope.validate([admin_only().into()]).is_ok());
        assert!(scope.with_groups(["user"]).validate([admin_only().into()]).is_ok());
        assert_eq!(
            codes(scope.with_groups(["admin"]).validate([admin_only().into()])),
            ["A"]
        );
        assert_eq!(
            codes(scope.validate([admin_only().with([groups(["admin"])]).into()])),
            ["A"]
        );
    }

    #[test]
    fn test_fatal_inside_at_least_one_of_aborts() {
        let fatal = Argument::new(|_: &Scope| {
            Err(FatalError::ConstraintNotFound { key: "x".into() }.into())
        });
        let result = Scope::default().validate([at_least_one_of([fail("A"), fatal, pass()]).into()]);
        assert!(result.unwrap_err().is_fatal());
    }
}
