//! Value classification
//!
//! Instead of inspecting types at runtime, every value entering the engine is
//! classified once into the closed [`Value`] union through the [`AsValue`]
//! trait. The dispatcher then matches on the variant.
//!
//! # Numbers
//!
//! All integer and floating kinds normalize into [`Number`]. Comparisons are
//! exact across representations:
//!
//! - integer vs integer compares in `i128`, so `u64::MAX` and `-1` order
//!   correctly;
//! - float vs integer compares the truncated float in `i128` and breaks ties
//!   with the fractional part, so `2.5 > 2` and `9007199254740993 > 9.007199254740992e15`;
//! - `NaN` is incomparable with everything.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};

use crate::foundation::validatable::Validatable;

// ============================================================================
// VALUE KIND
// ============================================================================

/// Kind of a classified value, used in fatal error reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// Absent value.
    Nil,
    /// `bool`.
    Bool,
    /// Any integer or float.
    Number,
    /// Text.
    String,
    /// Element count of a collection.
    Countable,
    /// Point in time.
    Time,
    /// List or map.
    Iterable,
    /// Self-validating value.
    Validatable,
}

impl ValueKind {
    /// Lowercase name used in messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Nil => "nil",
            Self::Bool => "bool",
            Self::Number => "number",
            Self::String => "string",
            Self::Countable => "countable",
            Self::Time => "time",
            Self::Iterable => "iterable",
            Self::Validatable => "validatable",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// NUMBER
// ============================================================================

/// Normalized numeric value.
#[derive(Debug, Clone, Copy)]
pub enum Number {
    /// Signed integer.
    Int(i64),
    /// Unsigned integer that may exceed `i64::MAX`.
    Uint(u64),
    /// Floating point.
    Float(f64),
}

impl Number {
    /// Returns `true` for integer zero and for `0.0` / `-0.0`.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        match *self {
            Self::Int(v) => v == 0,
            Self::Uint(v) => v == 0,
            Self::Float(v) => v == 0.0,
        }
    }

    /// Returns `true` for integer variants.
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        !matches!(self, Self::Float(_))
    }

    /// Lossy conversion to `f64`, for display or arithmetic outside comparisons.
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match *self {
            Self::Int(v) => v as f64,
            Self::Uint(v) => v as f64,
            Self::Float(v) => v,
        }
    }

    /// Exact comparison across representations. `None` when either side is `NaN`.
    #[must_use]
    pub fn compare(&self, other: &Number) -> Option<Ordering> {
        match (self.as_i128(), other.as_i128()) {
            (Some(a), Some(b)) => Some(a.cmp(&b)),
            (None, Some(b)) => compare_float_int(self.as_f64(), b),
            (Some(a), None) => compare_float_int(other.as_f64(), a).map(Ordering::reverse),
            (None, None) => self.as_f64().partial_cmp(&other.as_f64()),
        }
    }

    fn as_i128(&self) -> Option<i128> {
        match *self {
            Self::Int(v) => Some(i128::from(v)),
            Self::Uint(v) => Some(i128::from(v)),
            Self::Float(_) => None,
        }
    }
}

// 2^127 as f64; every integer we compare against fits well inside.
const I128_BOUND: f64 = 170_141_183_460_469_231_731_687_303_715_884_105_728.0;

fn compare_float_int(f: f64, i: i128) -> Option<Ordering> {
    if f.is_nan() {
        return None;
    }
    if f >= I128_BOUND {
        return Some(Ordering::Greater);
    }
    if f < -I128_BOUND {
        return Some(Ordering::Less);
    }
    let whole = f.trunc();
    match (whole as i128).cmp(&i) {
        Ordering::Equal => whole.partial_cmp(&f).map(Ordering::reverse),
        other => Some(other),
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(other)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Uint(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
        }
    }
}

macro_rules! number_from {
    ($variant:ident as $target:ty: $($t:ty),+) => {
        $(
            impl From<$t> for Number {
                fn from(value: $t) -> Self {
                    Self::$variant(<$target>::from(value))
                }
            }
        )+
    };
}

number_from!(Int as i64: i8, i16, i32, i64);
number_from!(Uint as u64: u8, u16, u32, u64);
number_from!(Float as f64: f32, f64);

impl From<isize> for Number {
    fn from(value: isize) -> Self {
        Self::Int(value as i64)
    }
}

impl From<usize> for Number {
    fn from(value: usize) -> Self {
        Self::Uint(value as u64)
    }
}

// ============================================================================
// ITERABLE
// ============================================================================

/// Key of an element inside an [`Iterable`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// Position in a list.
    Index(usize),
    /// Map key, rendered with `Display`.
    Name(String),
}

/// A list or map whose elements can be classified.
pub trait Iterable {
    /// Number of elements.
    fn count(&self) -> usize;

    /// Visits every element with its key, stopping at the first error.
    fn try_for_each_element(
        &self,
        f: &mut dyn FnMut(Key, Value<'_>) -> Result<(), crate::ValidationError>,
    ) -> Result<(), crate::ValidationError>;
}

impl<T: AsValue> Iterable for [T] {
    fn count(&self) -> usize {
        self.len()
    }

    fn try_for_each_element(
        &self,
        f: &mut dyn FnMut(Key, Value<'_>) -> Result<(), crate::ValidationError>,
    ) -> Result<(), crate::ValidationError> {
        self.iter()
            .enumerate()
            .try_for_each(|(i, element)| f(Key::Index(i), element.as_value()))
    }
}

impl<T: AsValue> Iterable for Vec<T> {
    fn count(&self) -> usize {
        self.len()
    }

    fn try_for_each_element(
        &self,
        f: &mut dyn FnMut(Key, Value<'_>) -> Result<(), crate::ValidationError>,
    ) -> Result<(), crate::ValidationError> {
        self.as_slice().try_for_each_element(f)
    }
}

impl<T: AsValue, const N: usize> Iterable for [T; N] {
    fn count(&self) -> usize {
        N
    }

    fn try_for_each_element(
        &self,
        f: &mut dyn FnMut(Key, Value<'_>) -> Result<(), crate::ValidationError>,
    ) -> Result<(), crate::ValidationError> {
        self.as_slice().try_for_each_element(f)
    }
}

impl<T: AsValue> Iterable for VecDeque<T> {
    fn count(&self) -> usize {
        self.len()
    }

    fn try_for_each_element(
        &self,
        f: &mut dyn FnMut(Key, Value<'_>) -> Result<(), crate::ValidationError>,
    ) -> Result<(), crate::ValidationError> {
        self.iter()
            .enumerate()
            .try_for_each(|(i, element)| f(Key::Index(i), element.as_value()))
    }
}

impl<K: fmt::Display, V: AsValue, S> Iterable for HashMap<K, V, S> {
    fn count(&self) -> usize {
        self.len()
    }

    fn try_for_each_element(
        &self,
        f: &mut dyn FnMut(Key, Value<'_>) -> Result<(), crate::ValidationError>,
    ) -> Result<(), crate::ValidationError> {
        self.iter()
            .try_for_each(|(key, element)| f(Key::Name(key.to_string()), element.as_value()))
    }
}

impl<K: fmt::Display, V: AsValue> Iterable for BTreeMap<K, V> {
    fn count(&self) -> usize {
        self.len()
    }

    fn try_for_each_element(
        &self,
        f: &mut dyn FnMut(Key, Value<'_>) -> Result<(), crate::ValidationError>,
    ) -> Result<(), crate::ValidationError> {
        self.iter()
            .try_for_each(|(key, element)| f(Key::Name(key.to_string()), element.as_value()))
    }
}

// ============================================================================
// VALUE
// ============================================================================

/// A value classified for dispatch.
#[derive(Clone, Copy)]
pub enum Value<'a> {
    /// Absent value (`None`).
    Nil,
    /// Boolean.
    Bool(bool),
    /// Any numeric kind.
    Number(Number),
    /// Text.
    String(&'a str),
    /// Point in time, normalized to UTC.
    Time(DateTime<Utc>),
    /// List or map.
    Iterable(&'a dyn Iterable),
    /// Value that validates itself.
    Validatable(&'a dyn Validatable),
    /// Anything the engine cannot inspect; carries the Rust type name.
    Unsupported(&'static str),
}

impl Value<'_> {
    /// Kind of this value, `None` for [`Value::Unsupported`].
    #[must_use]
    pub const fn kind(&self) -> Option<ValueKind> {
        match self {
            Self::Nil => Some(ValueKind::Nil),
            Self::Bool(_) => Some(ValueKind::Bool),
            Self::Number(_) => Some(ValueKind::Number),
            Self::String(_) => Some(ValueKind::String),
            Self::Time(_) => Some(ValueKind::Time),
            Self::Iterable(_) => Some(ValueKind::Iterable),
            Self::Validatable(_) => Some(ValueKind::Validatable),
            Self::Unsupported(_) => None,
        }
    }
}

impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => f.write_str("Nil"),
            Self::Bool(v) => f.debug_tuple("Bool").field(v).finish(),
            Self::Number(v) => f.debug_tuple("Number").field(v).finish(),
            Self::String(v) => f.debug_tuple("String").field(v).finish(),
            Self::Time(v) => f.debug_tuple("Time").field(v).finish(),
            Self::Iterable(v) => write!(f, "Iterable(count = {})", v.count()),
            Self::Validatable(_) => f.write_str("Validatable"),
            Self::Unsupported(name) => f.debug_tuple("Unsupported").field(name).finish(),
        }
    }
}

// ============================================================================
// AS VALUE
// ============================================================================

/// Classifies a Rust value into a [`Value`].
///
/// Implemented for primitives, strings, `chrono` date-times, collections and
/// pointer-like wrappers. Use [`validatable_value!`](crate::validatable_value)
/// for types implementing [`Validatable`].
pub trait AsValue {
    /// Returns the classified view of `self`.
    fn as_value(&self) -> Value<'_>;
}

impl AsValue for bool {
    fn as_value(&self) -> Value<'_> {
        Value::Bool(*self)
    }
}

macro_rules! number_as_value {
    ($($t:ty),+) => {
        $(
            impl AsValue for $t {
                fn as_value(&self) -> Value<'_> {
                    Value::Number(Number::from(*self))
                }
            }
        )+
    };
}

number_as_value!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl AsValue for Number {
    fn as_value(&self) -> Value<'_> {
        Value::Number(*self)
    }
}

impl AsValue for str {
    fn as_value(&self) -> Value<'_> {
        Value::String(self)
    }
}

impl AsValue for String {
    fn as_value(&self) -> Value<'_> {
        Value::String(self)
    }
}

impl AsValue for Cow<'_, str> {
    fn as_value(&self) -> Value<'_> {
        Value::String(self)
    }
}

impl AsValue for DateTime<Utc> {
    fn as_value(&self) -> Value<'_> {
        Value::Time(*self)
    }
}

impl AsValue for DateTime<FixedOffset> {
    fn as_value(&self) -> Value<'_> {
        Value::Time(self.with_timezone(&Utc))
    }
}

impl AsValue for NaiveDateTime {
    fn as_value(&self) -> Value<'_> {
        Value::Time(self.and_utc())
    }
}

impl<T: AsValue> AsValue for Option<T> {
    fn as_value(&self) -> Value<'_> {
        match self {
            Some(value) => value.as_value(),
            None => Value::Nil,
        }
    }
}

impl<T: AsValue + ?Sized> AsValue for &T {
    fn as_value(&self) -> Value<'_> {
        (**self).as_value()
    }
}

impl<T: AsValue + ?Sized> AsValue for Box<T> {
    fn as_value(&self) -> Value<'_> {
        (**self).as_value()
    }
}

impl<T: AsValue + ?Sized> AsValue for Arc<T> {
    fn as_value(&self) -> Value<'_> {
        (**self).as_value()
    }
}

impl<T: AsValue + ?Sized> AsValue for Rc<T> {
    fn as_value(&self) -> Value<'_> {
        (**self).as_value()
    }
}

impl<T: AsValue> AsValue for Vec<T> {
    fn as_value(&self) -> Value<'_> {
        Value::Iterable(self)
    }
}

impl<T: AsValue, const N: usize> AsValue for [T; N] {
    fn as_value(&self) -> Value<'_> {
        Value::Iterable(self)
    }
}

impl<T: AsValue> AsValue for VecDeque<T> {
    fn as_value(&self) -> Value<'_> {
        Value::Iterable(self)
    }
}

impl<K: fmt::Display, V: AsValue, S> AsValue for HashMap<K, V, S> {
    fn as_value(&self) -> Value<'_> {
        Value::Iterable(self)
    }
}

impl<K: fmt::Display, V: AsValue> AsValue for BTreeMap<K, V> {
    fn as_value(&self) -> Value<'_> {
        Value::Iterable(self)
    }
}

impl AsValue for () {
    fn as_value(&self) -> Value<'_> {
        Value::Unsupported("()")
    }
}

impl AsValue for char {
    fn as_value(&self) -> Value<'_> {
        Value::Unsupported("char")
    }
}

impl AsValue for dyn Validatable + '_ {
    fn as_value(&self) -> Value<'_> {
        Value::Validatable(self)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_is_zero() {
        assert!(Number::from(0i8).is_zero());
        assert!(Number::from(0u64).is_zero());
        assert!(Number::from(-0.0f64).is_zero());
        assert!(!Number::from(0.1f32).is_zero());
    }

    #[test]
    fn test_integer_comparison_across_signedness() {
        assert!(Number::from(u64::MAX) > Number::from(-1i64));
        assert!(Number::from(-1i64) < Number::from(0u8));
        assert_eq!(Number::from(5u32), Number::from(5i16));
    }

    #[test]
    fn test_float_integer_comparison_is_exact() {
        assert!(Number::from(2.5f64) > Number::from(2i32));
        assert!(Number::from(-2.5f64) < Number::from(-2i32));
        assert_eq!(Number::from(3.0f64), Number::from(3u8));
        // 2^53 + 1 is not representable as f64; it must still compare greater.
        let big = Number::from(9_007_199_254_740_993i64);
        assert!(big > Number::from(9_007_199_254_740_992.0f64));
        assert!(Number::from(1e300f64) > Number::from(u64::MAX));
    }

    #[test]
    fn test_nan_is_incomparable() {
        let nan = Number::from(f64::NAN);
        assert_eq!(nan.compare(&Number::from(0i32)), None);
        assert_eq!(Number::from(0i32).compare(&nan), None);
        assert_ne!(nan, Number::from(f64::NAN));
    }

    #[test]
    fn test_option_classification() {
        let none: Option<String> = None;
        assert!(matches!(none.as_value(), Value::Nil));
        assert!(matches!(Some("a".to_string()).as_value(), Value::String("a")));
        assert!(matches!(Some(Some(1u8)).as_value(), Value::Number(_)));
    }

    #[test]
    fn test_pointer_classification() {
        let boxed: Box<bool> = Box::new(true);
        assert!(matches!(boxed.as_value(), Value::Bool(true)));
        let shared = Arc::new(vec![1, 2, 3]);
        match shared.as_value() {
            Value::Iterable(it) => assert_eq!(it.count(), 3),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_map_keys_are_names() {
        let mut map = BTreeMap::new();
        map.insert(1, "a");
        map.insert(2, "b");

        let mut keys = Vec::new();
        map.try_for_each_element(&mut |key, _| {
            keys.push(key);
            Ok(())
        })
        .unwrap();

        assert_eq!(keys, [Key::Name("1".into()), Key::Name("2".into())]);
    }

    #[test]
    fn test_unsupported_has_no_kind() {
        assert_eq!(().as_value().kind(), None);
        assert_eq!(true.as_value().kind(), Some(ValueKind::Bool));
    }
}
