//! Text to scalar conversion.

use core::fmt;
use core::num::IntErrorKind;
use core::str::FromStr;

use rust_decimal::Decimal;

use crate::{Locale, ScalarType, ScalarValue};

/// A raw setting value that could not be converted to its target kind
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertError {
    /// The raw value, as given
    pub value: String,
    /// The kind it was converted to
    pub expected: ScalarType,
    /// What went wrong
    pub reason: ConvertFailure,
}

/// Why a conversion failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConvertFailure {
    /// Neither `true` nor `false`
    NotABool,
    /// Zero or several characters where one was expected
    NotOneChar,
    /// Not a base-10 integer
    NotAnInteger,
    /// Not a number in the locale's conventions
    NotANumber {
        /// Locale the value was read with
        locale: &'static str,
    },
    /// Not a date in ISO 8601 or the locale's short date format
    NotADate {
        /// Locale the value was read with
        locale: &'static str,
    },
    /// A well-formed number that doesn't fit the target type
    OutOfRange,
    /// Text can't be converted to this kind at all
    Unsupported,
}

impl fmt::Display for ConvertFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertFailure::NotABool => write!(f, "expected `true` or `false`"),
            ConvertFailure::NotOneChar => write!(f, "expected exactly one character"),
            ConvertFailure::NotAnInteger => write!(f, "not a base-10 integer"),
            ConvertFailure::NotANumber { locale } => write!(f, "not a {locale} number"),
            ConvertFailure::NotADate { locale } => {
                write!(f, "not an ISO 8601 or {locale} short date")
            }
            ConvertFailure::OutOfRange => write!(f, "out of range"),
            ConvertFailure::Unsupported => write!(f, "unsupported target type"),
        }
    }
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "`{}` can't be converted to `{}`: {}",
            self.value, self.expected, self.reason
        )
    }
}

impl core::error::Error for ConvertError {}

/// Converts `raw` to a value of kind `kind`, reading numbers and dates with
/// `locale`'s conventions.
///
/// | kind | accepted text |
/// |---|---|
/// | `bool` | `true` / `false`, any case, surrounding whitespace ignored |
/// | `char` | exactly one character |
/// | `i16`, `i32`, `i64` | base-10 integer with optional sign, range-checked |
/// | `Decimal` | locale number without exponent, e.g. `1 234,5` in `sv-SE` |
/// | `f32`, `f64` | locale number with optional exponent, `NaN`, `Infinity`, `-Infinity` |
/// | `NaiveDate` | ISO 8601 or locale short date |
/// | `NaiveDateTime` | the above, optionally followed by `HH:MM[:SS]`; a bare date is midnight |
/// | `String` | anything, unchanged |
///
/// Other kinds always fail with [`ConvertFailure::Unsupported`].
pub fn convert(kind: ScalarType, raw: &str, locale: &Locale) -> Result<ScalarValue, ConvertError> {
    let fail = |reason| ConvertError {
        value: raw.to_string(),
        expected: kind,
        reason,
    };

    let value = match kind {
        ScalarType::Bool => {
            let trimmed = raw.trim();
            if trimmed.eq_ignore_ascii_case("true") {
                ScalarValue::Bool(true)
            } else if trimmed.eq_ignore_ascii_case("false") {
                ScalarValue::Bool(false)
            } else {
                return Err(fail(ConvertFailure::NotABool));
            }
        }
        ScalarType::Char => {
            let mut chars = raw.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => ScalarValue::Char(c),
                _ => return Err(fail(ConvertFailure::NotOneChar)),
            }
        }
        ScalarType::String => ScalarValue::String(raw.to_string()),
        ScalarType::I16 => ScalarValue::I16(parse_int(raw).map_err(fail)?),
        ScalarType::I32 => ScalarValue::I32(parse_int(raw).map_err(fail)?),
        ScalarType::I64 => ScalarValue::I64(parse_int(raw).map_err(fail)?),
        ScalarType::F32 => ScalarValue::F32(parse_float(raw, locale).map_err(fail)?),
        ScalarType::F64 => ScalarValue::F64(parse_float(raw, locale).map_err(fail)?),
        ScalarType::Decimal => {
            let not_a_number = ConvertFailure::NotANumber {
                locale: locale.name(),
            };
            let normalized = locale
                .normalize_number(raw, false)
                .ok_or_else(|| fail(not_a_number))?;
            let decimal = Decimal::from_str(&normalized)
                .map_err(|_| fail(ConvertFailure::OutOfRange))?;
            ScalarValue::Decimal(decimal)
        }
        ScalarType::NaiveDate => ScalarValue::NaiveDate(locale.parse_date(raw).ok_or_else(|| {
            fail(ConvertFailure::NotADate {
                locale: locale.name(),
            })
        })?),
        ScalarType::NaiveDateTime => {
            ScalarValue::NaiveDateTime(locale.parse_datetime(raw).ok_or_else(|| {
                fail(ConvertFailure::NotADate {
                    locale: locale.name(),
                })
            })?)
        }
        _ => return Err(fail(ConvertFailure::Unsupported)),
    };
    Ok(value)
}

fn parse_int<T: FromStr<Err = core::num::ParseIntError>>(raw: &str) -> Result<T, ConvertFailure> {
    raw.trim().parse().map_err(|e: core::num::ParseIntError| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ConvertFailure::OutOfRange,
        _ => ConvertFailure::NotAnInteger,
    })
}

trait Float: FromStr {
    fn is_infinite(&self) -> bool;
}

impl Float for f32 {
    fn is_infinite(&self) -> bool {
        f32::is_infinite(*self)
    }
}

impl Float for f64 {
    fn is_infinite(&self) -> bool {
        f64::is_infinite(*self)
    }
}

/// Only the explicit `Infinity` spellings may produce an infinite value;
/// finite text that overflows the type is out of range.
fn parse_float<T: Float>(raw: &str, locale: &Locale) -> Result<T, ConvertFailure> {
    let not_a_number = ConvertFailure::NotANumber {
        locale: locale.name(),
    };
    let trimmed = raw.trim();
    let special = if trimmed.eq_ignore_ascii_case("nan") {
        Some("NaN")
    } else if trimmed.eq_ignore_ascii_case("infinity") || trimmed.eq_ignore_ascii_case("+infinity")
    {
        Some("inf")
    } else if trimmed.eq_ignore_ascii_case("-infinity") {
        Some("-inf")
    } else {
        None
    };
    let normalized = match special {
        Some(special) => special.to_string(),
        None => locale
            .normalize_number(trimmed, true)
            .ok_or(not_a_number)?,
    };
    let value: T = normalized.parse().map_err(|_| not_a_number)?;
    if special.is_none() && value.is_infinite() {
        return Err(ConvertFailure::OutOfRange);
    }
    Ok(value)
}
