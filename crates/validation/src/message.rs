//! Default message templates of the built-in constraints
//!
//! Templates double as catalog keys: the translator looks a template up and
//! falls back to the template itself when no translation exists. Count-based
//! templates are written in their singular English form and carry plural
//! variants in the built-in catalogs.

pub const NOT_BLANK: &str = "This value should not be blank.";
pub const BLANK: &str = "This value should be blank.";
pub const NOT_NIL: &str = "This value should not be nil.";
pub const NIL: &str = "This value should be nil.";
pub const NOT_VALID: &str = "This value is not valid.";
pub const NO_SUCH_CHOICE: &str = "The value you selected is not a valid choice.";

pub const COUNT_TOO_FEW: &str = "This collection should contain {{ limit }} element or more.";
pub const COUNT_TOO_MANY: &str = "This collection should contain {{ limit }} element or less.";
pub const COUNT_EXACT: &str = "This collection should contain exactly {{ limit }} element.";

pub const LENGTH_TOO_FEW: &str =
    "This value is too short. It should have {{ limit }} character or more.";
pub const LENGTH_TOO_MANY: &str =
    "This value is too long. It should have {{ limit }} character or less.";
pub const LENGTH_EXACT: &str = "This value should have exactly {{ limit }} character.";

pub const NOT_EQUAL: &str = "This value should be equal to {{ comparedValue }}.";
pub const TOO_HIGH: &str = "This value should be less than {{ comparedValue }}.";
pub const TOO_HIGH_OR_EQUAL: &str = "This value should be less than or equal to {{ comparedValue }}.";
pub const TOO_LOW: &str = "This value should be greater than {{ comparedValue }}.";
pub const TOO_LOW_OR_EQUAL: &str =
    "This value should be greater than or equal to {{ comparedValue }}.";
pub const NOT_IN_RANGE: &str = "This value should be between {{ min }} and {{ max }}.";
pub const NOT_POSITIVE: &str = "This value should be positive.";
pub const NOT_NEGATIVE: &str = "This value should be negative.";

pub const NOT_TRUE: &str = "This value should be true.";
pub const NOT_FALSE: &str = "This value should be false.";

pub const TOO_EARLY: &str = "This value should be later than {{ comparedValue }}.";
pub const TOO_LATE: &str = "This value should be earlier than {{ comparedValue }}.";

pub const INVALID_EMAIL: &str = "This value is not a valid email address.";
pub const INVALID_URL: &str = "This value is not a valid URL.";
pub const INVALID_IP: &str = "This is not a valid IP address.";
pub const PROHIBITED_IP: &str = "This IP address is prohibited for use.";
