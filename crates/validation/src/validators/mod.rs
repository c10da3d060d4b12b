//! Built-in constraints
//!
//! Constraints are plain immutable values configured through fluent methods
//! (`message`, `code`, `when`, `when_groups`, ...) and turned into options
//! with `.into()` or the [`options!`](crate::options) macro. The [`it`]
//! module gathers every constructor:
//!
//! ```rust,ignore
//! use nebula_validation::it;
//!
//! let options = options![
//!     property_name("title"),
//!     it::is_not_blank(),
//!     it::has_max_length(120).when_groups(["publish"]),
//! ];
//! ```
//!
//! Unless noted otherwise, constraints treat nil and the empty string as
//! valid and leave rejecting them to [`it::is_not_nil`] and
//! [`it::is_not_blank`].

mod blank;
mod boolean;
mod choice;
mod comparison;
mod count;
mod custom;
mod length;
mod pattern;
pub(crate) mod rule;
mod time;
#[cfg(feature = "web")]
mod web;

pub use blank::{Blank, Nil, NotBlank, NotNil};
pub use boolean::BoolValue;
pub use choice::StringChoice;
pub use comparison::{NumberComparison, NumberRange, NumberSign};
pub use count::CountLimit;
pub use custom::CustomStringConstraint;
pub use length::LengthLimit;
pub use pattern::Pattern;
pub use time::TimeComparison;
#[cfg(feature = "web")]
pub use web::{Email, Ip, Url};

/// Constructors of every built-in constraint.
pub mod it {
    pub use super::blank::{is_blank, is_nil, is_not_blank, is_not_nil};
    pub use super::boolean::{is_false, is_true};
    pub use super::choice::is_one_of_strings;
    pub use super::comparison::{
        is_between, is_equal_to_number, is_greater_than, is_greater_than_or_equal, is_less_than,
        is_less_than_or_equal, is_negative, is_positive,
    };
    pub use super::count::{has_count_between, has_exact_count, has_max_count, has_min_count};
    pub use super::custom::CustomStringConstraint;
    pub use super::length::{has_exact_length, has_length_between, has_max_length, has_min_length};
    pub use super::pattern::{does_not_match, matches};
    pub use super::time::{is_earlier_than, is_later_than};
    #[cfg(feature = "web")]
    pub use super::web::{is_email, is_html5_email, is_ip, is_ipv4, is_ipv6, is_url};
}
