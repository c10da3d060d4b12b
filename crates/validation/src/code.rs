//! Violation codes of the built-in constraints
//!
//! Codes are short, stable identifiers meant for programmatic checks. Unlike
//! the texts in [`message`](crate::message) they never change between
//! releases.

pub const NOT_BLANK: &str = "notBlank";
pub const BLANK: &str = "blank";
pub const NOT_NIL: &str = "notNil";
pub const NIL: &str = "nil";
pub const NOT_VALID: &str = "notValid";
pub const NO_SUCH_CHOICE: &str = "noSuchChoice";

pub const COUNT_TOO_FEW: &str = "countTooFew";
pub const COUNT_TOO_MANY: &str = "countTooMany";
pub const COUNT_EXACT: &str = "countExact";

pub const LENGTH_TOO_FEW: &str = "lengthTooFew";
pub const LENGTH_TOO_MANY: &str = "lengthTooMany";
pub const LENGTH_EXACT: &str = "lengthExact";

pub const NOT_EQUAL: &str = "notEqual";
pub const TOO_HIGH: &str = "tooHigh";
pub const TOO_HIGH_OR_EQUAL: &str = "tooHighOrEqual";
pub const TOO_LOW: &str = "tooLow";
pub const TOO_LOW_OR_EQUAL: &str = "tooLowOrEqual";
pub const NOT_IN_RANGE: &str = "notInRange";
pub const NOT_POSITIVE: &str = "notPositive";
pub const NOT_NEGATIVE: &str = "notNegative";

pub const NOT_TRUE: &str = "notTrue";
pub const NOT_FALSE: &str = "notFalse";

pub const TOO_EARLY: &str = "tooEarly";
pub const TOO_LATE: &str = "tooLate";

pub const MATCHING_FAILED: &str = "matchingFailed";
pub const INVALID_EMAIL: &str = "invalidEmail";
pub const INVALID_URL: &str = "invalidURL";
pub const INVALID_IP: &str = "invalidIP";
pub const PROHIBITED_IP: &str = "prohibitedIP";
