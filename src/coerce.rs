//! Best-effort numeric coercion used by the aggregation operators.
//!
//! Values are turned into `f64` with the following precedence:
//!
//! | input                | result                                             |
//! |----------------------|----------------------------------------------------|
//! | any number           | the value itself                                   |
//! | `bool`               | `1.0` / `0.0`                                      |
//! | `char`               | its decimal digit value, otherwise `0.0`           |
//! | string               | every `$` and `,` removed, trimmed, then parsed    |
//! | anything unparseable | `0.0`                                              |
//!
//! [`ToDouble`] is the capability every aggregatable value implements, and
//! [`Coercible`] is a tagged union for sequences that mix those kinds.
//! [`parse_numeric`] is the strict string parser the lenient path is built on.

use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Conversion into `f64` that never fails.
pub trait ToDouble {
    fn to_double(&self) -> f64;
}

/// Coerce any [`ToDouble`] value, falling back to `0.0`.
///
/// ```
/// use sequery::coerce::safe_to_double;
///
/// assert_eq!(safe_to_double(&"$1,234.50"), 1234.5);
/// assert_eq!(safe_to_double(&true), 1.0);
/// assert_eq!(safe_to_double(&'7'), 7.0);
/// assert_eq!(safe_to_double(&"n/a"), 0.0);
/// ```
pub fn safe_to_double<V: ToDouble + ?Sized>(value: &V) -> f64 {
    value.to_double()
}

/// Strictly parse a currency-style numeric string.
///
/// Every `$` and `,` is dropped, then surrounding whitespace is trimmed, so
/// `"$ 1,234.50"` reads as `1234.5`. The remainder is a decimal literal with
/// an optional sign, fraction, exponent and one trailing `d`/`D`/`f`/`F`
/// type suffix (`"1.5d"`). The only words accepted are `NaN` and
/// `Infinity`, optionally signed and spelled exactly so; `inf`, `nan` and
/// other spellings are rejected. Hexadecimal literals are not supported.
///
/// # Errors
/// Returns an error naming the original input when the cleaned text is not
/// a valid floating-point literal (including when it is empty).
pub fn parse_numeric(text: &str) -> Result<f64> {
    let cleaned: String = text.chars().filter(|c| *c != '$' && *c != ',').collect();
    let literal = cleaned.trim();
    if literal.is_empty() {
        return Err(anyhow!("no digits in {text:?}"));
    }

    let unsigned = literal.strip_prefix(['+', '-']).unwrap_or(literal);
    if unsigned.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return match unsigned {
            "NaN" | "Infinity" => Ok(literal.parse::<f64>()?),
            _ => Err(anyhow!("{text:?} is not a number")),
        };
    }

    let body = literal
        .strip_suffix(['d', 'D', 'f', 'F'])
        .filter(|b| b.ends_with(|c: char| c.is_ascii_digit() || c == '.'))
        .unwrap_or(literal);
    body.parse::<f64>()
        .map_err(|e| anyhow!("cannot read {text:?} as a number: {e}"))
}

fn text_to_double(text: &str) -> f64 {
    match parse_numeric(text) {
        Ok(v) => v,
        Err(err) => {
            tracing::trace!(error = %err, "numeric coercion fell back to 0.0");
            0.0
        }
    }
}

fn char_to_double(c: char) -> f64 {
    match c.to_digit(10) {
        Some(d) => f64::from(d),
        None => {
            tracing::trace!(?c, "non-digit character coerced to 0.0");
            0.0
        }
    }
}

macro_rules! lossless_to_double {
    ($($t:ty),*) => {
        $(
            impl ToDouble for $t {
                #[inline]
                fn to_double(&self) -> f64 {
                    f64::from(*self)
                }
            }
        )*
    };
}

macro_rules! lossy_to_double {
    ($($t:ty),*) => {
        $(
            impl ToDouble for $t {
                #[inline]
                #[allow(clippy::cast_precision_loss)]
                fn to_double(&self) -> f64 {
                    *self as f64
                }
            }
        )*
    };
}

lossless_to_double!(i8, i16, i32, u8, u16, u32, f32, f64);
lossy_to_double!(i64, i128, isize, u64, u128, usize);

impl ToDouble for bool {
    #[inline]
    fn to_double(&self) -> f64 {
        if *self { 1.0 } else { 0.0 }
    }
}

impl ToDouble for char {
    fn to_double(&self) -> f64 {
        char_to_double(*self)
    }
}

impl ToDouble for str {
    fn to_double(&self) -> f64 {
        text_to_double(self)
    }
}

impl ToDouble for String {
    fn to_double(&self) -> f64 {
        text_to_double(self)
    }
}

impl ToDouble for Cow<'_, str> {
    fn to_double(&self) -> f64 {
        text_to_double(self)
    }
}

impl<T: ToDouble + ?Sized> ToDouble for &T {
    #[inline]
    fn to_double(&self) -> f64 {
        (**self).to_double()
    }
}

impl<T: ToDouble + ?Sized> ToDouble for Box<T> {
    #[inline]
    fn to_double(&self) -> f64 {
        (**self).to_double()
    }
}

/// A missing value contributes `0.0`.
impl<T: ToDouble> ToDouble for Option<T> {
    fn to_double(&self) -> f64 {
        self.as_ref().map_or(0.0, ToDouble::to_double)
    }
}

/// One value of a heterogeneous, aggregatable sequence.
///
/// Serialized untagged, so JSON `3`, `true`, `"7"` and `"$4.20"` all
/// deserialize into the matching variant (one-character strings become
/// [`Coercible::Char`]).
///
/// ```
/// use sequery::coerce::Coercible;
/// use sequery::from_slice;
///
/// let mixed = [
///     Coercible::Number(1.5),
///     Coercible::Bool(true),
///     Coercible::Char('3'),
///     Coercible::from("$1,000"),
/// ];
/// assert_eq!(from_slice(&mixed).sum(), 1005.5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Coercible<'a> {
    Number(f64),
    Bool(bool),
    Char(char),
    #[serde(borrow)]
    Text(Cow<'a, str>),
}

impl ToDouble for Coercible<'_> {
    fn to_double(&self) -> f64 {
        match self {
            Coercible::Number(n) => *n,
            Coercible::Bool(b) => b.to_double(),
            Coercible::Char(c) => char_to_double(*c),
            Coercible::Text(s) => text_to_double(s),
        }
    }
}

impl From<f64> for Coercible<'_> {
    fn from(value: f64) -> Self {
        Coercible::Number(value)
    }
}

impl From<i64> for Coercible<'_> {
    #[allow(clippy::cast_precision_loss)]
    fn from(value: i64) -> Self {
        Coercible::Number(value as f64)
    }
}

impl From<bool> for Coercible<'_> {
    fn from(value: bool) -> Self {
        Coercible::Bool(value)
    }
}

impl From<char> for Coercible<'_> {
    fn from(value: char) -> Self {
        Coercible::Char(value)
    }
}

impl<'a> From<&'a str> for Coercible<'a> {
    fn from(value: &'a str) -> Self {
        Coercible::Text(Cow::Borrowed(value))
    }
}

impl From<String> for Coercible<'_> {
    fn from(value: String) -> Self {
        Coercible::Text(Cow::Owned(value))
    }
}

/// JSON numbers are taken as-is, booleans and strings are coerced, `null`,
/// arrays and objects contribute `0.0`.
#[cfg(feature = "json")]
impl ToDouble for serde_json::Value {
    fn to_double(&self) -> f64 {
        use serde_json::Value;
        match self {
            Value::Number(n) => n.as_f64().unwrap_or(0.0),
            Value::Bool(b) => b.to_double(),
            Value::String(s) => text_to_double(s),
            Value::Null | Value::Array(_) | Value::Object(_) => {
                tracing::trace!(value = %self, "non-scalar JSON value coerced to 0.0");
                0.0
            }
        }
    }
}
