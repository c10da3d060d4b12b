//! Time comparisons

use chrono::{DateTime, SecondsFormat, Utc};

use crate::code;
use crate::foundation::constraint::{Constraint, TimeConstraint};
use crate::foundation::error::ValidationResult;
use crate::foundation::scope::Scope;
use crate::message;
use crate::validators::rule::{Rule, param, rule_methods};

/// Compares a point in time against a fixed instant.
#[derive(Debug, Clone)]
pub struct TimeComparison {
    compared: DateTime<Utc>,
    earlier: bool,
    inclusive: bool,
    rule: Rule,
}

/// Value must be strictly before `instant`.
pub fn is_earlier_than(instant: DateTime<Utc>) -> TimeComparison {
    TimeComparison {
        compared: instant,
        earlier: true,
        inclusive: false,
        rule: Rule::new(code::TOO_LATE, message::TOO_LATE),
    }
}

/// Value must be strictly after `instant`.
pub fn is_later_than(instant: DateTime<Utc>) -> TimeComparison {
    TimeComparison {
        compared: instant,
        earlier: false,
        inclusive: false,
        rule: Rule::new(code::TOO_EARLY, message::TOO_EARLY),
    }
}

impl TimeComparison {
    /// Accepts the compared instant itself.
    #[must_use = "builder methods must be chained or built"]
    pub fn or_equal(mut self) -> Self {
        self.inclusive = true;
        self
    }
}

rule_methods!(TimeComparison);

fn format(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

impl Constraint for TimeComparison {
    fn name(&self) -> &str {
        if self.earlier { "TimeEarlierThan" } else { "TimeLaterThan" }
    }

    fn as_time(&self) -> Option<&dyn TimeConstraint> {
        Some(self)
    }
}

impl TimeConstraint for TimeComparison {
    fn validate_time(&self, value: &DateTime<Utc>, scope: &Scope) -> ValidationResult {
        if self.rule.is_skipped(scope) {
            return Ok(());
        }
        let holds = match (self.earlier, self.inclusive) {
            (true, false) => *value < self.compared,
            (true, true) => *value <= self.compared,
            (false, false) => *value > self.compared,
            (false, true) => *value >= self.compared,
        };

        self.rule.check(
            holds,
            scope,
            [
                param("{{ comparedValue }}", format(&self.compared)),
                param("{{ value }}", format(value)),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::argument::time;
    use chrono::TimeZone;

    fn instant(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, hour, 0, 0).single().unwrap()
    }

    #[test]
    fn test_earlier_than() {
        let scope = Scope::default();
        assert!(scope.validate([time(instant(1), [is_earlier_than(instant(2)).into()])]).is_ok());

        let error = scope
            .validate([time(instant(2), [is_earlier_than(instant(2)).into()])])
            .unwrap_err();
        let violation = &error.violations().unwrap()[0];
        assert_eq!(violation.code(), code::TOO_LATE);
        assert_eq!(
            violation.message(),
            "This value should be earlier than 2024-01-01T02:00:00Z."
        );
    }

    #[test]
    fn test_later_than_or_equal() {
        let scope = Scope::default();
        assert!(scope
            .validate([time(instant(2), [is_later_than(instant(2)).or_equal().into()])])
            .is_ok());

        let error = scope
            .validate([time(instant(1), [is_later_than(instant(2)).into()])])
            .unwrap_err();
        assert_eq!(error.violations().unwrap()[0].code(), code::TOO_EARLY);
    }
}
