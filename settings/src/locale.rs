//! Culture conventions for numbers and dates.
//!
//! A [`Locale`] says which character separates the integer and fractional
//! parts of a number, which characters may group digits, and how a short date
//! is written. It is picked from the environment the way C libraries do it
//! (`LC_ALL`, then `LC_NUMERIC`, then `LANG`) or set explicitly.

use core::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Order of the day, month and year components in a short date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateOrder {
    /// `2016-04-22`
    Ymd,
    /// `22/04/2016`
    Dmy,
    /// `04/22/2016`
    Mdy,
}

/// Numeric and short-date conventions used when converting setting values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locale {
    name: &'static str,
    decimal_separator: char,
    group_separators: &'static [char],
    date_order: DateOrder,
    date_separator: char,
}

const NBSP: char = '\u{a0}';
const NARROW_NBSP: char = '\u{202f}';

impl Locale {
    /// Culture-neutral conventions: `1,234.5` and `04/22/2016`.
    pub const INVARIANT: Locale = Locale::new("invariant", '.', &[','], DateOrder::Mdy, '/');

    /// `en-US`: `1,234.5` and `4/22/2016`
    pub const EN_US: Locale = Locale::new("en-US", '.', &[','], DateOrder::Mdy, '/');

    /// `en-GB`: `1,234.5` and `22/04/2016`
    pub const EN_GB: Locale = Locale::new("en-GB", '.', &[','], DateOrder::Dmy, '/');

    /// `sv-SE`: `1 234,5` and `2016-04-22`
    pub const SV_SE: Locale = Locale::new("sv-SE", ',', &[' ', NBSP], DateOrder::Ymd, '-');

    /// `de-DE`: `1.234,5` and `22.04.2016`
    pub const DE_DE: Locale = Locale::new("de-DE", ',', &['.'], DateOrder::Dmy, '.');

    /// `fr-FR`: `1 234,5` and `22/04/2016`
    pub const FR_FR: Locale =
        Locale::new("fr-FR", ',', &[' ', NBSP, NARROW_NBSP], DateOrder::Dmy, '/');

    const PRESETS: &'static [Locale] = &[
        Locale::EN_US,
        Locale::EN_GB,
        Locale::SV_SE,
        Locale::DE_DE,
        Locale::FR_FR,
    ];

    /// Builds a custom locale.
    ///
    /// If `decimal_separator` is also listed in `group_separators`, it is
    /// read as the decimal separator.
    pub const fn new(
        name: &'static str,
        decimal_separator: char,
        group_separators: &'static [char],
        date_order: DateOrder,
        date_separator: char,
    ) -> Self {
        Self {
            name,
            decimal_separator,
            group_separators,
            date_order,
            date_separator,
        }
    }

    /// Looks up a preset by BCP-47 (`sv-SE`) or POSIX (`sv_SE.UTF-8`) tag.
    ///
    /// Matching is case-insensitive; encoding and `@modifier` suffixes are
    /// ignored, and a bare language (`de`) picks that language's preset.
    /// `C` and `POSIX` are the invariant locale. Unknown tags yield `None`.
    pub fn from_tag(tag: &str) -> Option<Locale> {
        let tag = tag.trim();
        let tag = tag.split(['.', '@']).next().unwrap_or(tag);
        if tag.eq_ignore_ascii_case("C") || tag.eq_ignore_ascii_case("POSIX") {
            return Some(Locale::INVARIANT);
        }

        let mut parts = tag.split(['-', '_']);
        let language = parts.next().filter(|l| !l.is_empty())?;
        let region = parts.next();

        let by_language = Self::PRESETS.iter().filter(|preset| {
            preset
                .language()
                .is_some_and(|l| l.eq_ignore_ascii_case(language))
        });
        match region {
            Some(region) => by_language
                .clone()
                .find(|preset| {
                    preset
                        .region()
                        .is_some_and(|r| r.eq_ignore_ascii_case(region))
                })
                .or_else(|| by_language.clone().next())
                .copied(),
            None => by_language.clone().next().copied(),
        }
    }

    /// The host's locale, from `LC_ALL`, `LC_NUMERIC` or `LANG` (first one
    /// set and non-empty wins). Falls back to [`Locale::INVARIANT`].
    pub fn current() -> Locale {
        Self::from_env(&StdEnv)
    }

    /// Same as [`Locale::current`], reading variables from `env`
    pub fn from_env<E: EnvSource + ?Sized>(env: &E) -> Locale {
        let tag = ["LC_ALL", "LC_NUMERIC", "LANG"]
            .into_iter()
            .filter_map(|name| env.get(name))
            .find(|value| !value.trim().is_empty());
        match tag {
            Some(tag) => Self::from_tag(&tag).unwrap_or_else(|| {
                tracing::debug!("Unknown locale {tag:?}, using the invariant locale");
                Locale::INVARIANT
            }),
            None => Locale::INVARIANT,
        }
    }

    /// Name of the locale, e.g. `sv-SE`
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Separator between the integer and fractional parts of a number
    pub fn decimal_separator(&self) -> char {
        self.decimal_separator
    }

    /// Characters that may group digits of the integer part
    pub fn group_separators(&self) -> &'static [char] {
        self.group_separators
    }

    /// Component order of a short date
    pub fn date_order(&self) -> DateOrder {
        self.date_order
    }

    /// Separator between the components of a short date
    pub fn date_separator(&self) -> char {
        self.date_separator
    }

    fn language(&self) -> Option<&'static str> {
        self.name.split('-').next()
    }

    fn region(&self) -> Option<&'static str> {
        self.name.split('-').nth(1)
    }

    /// Rewrites a number written in this locale as a Rust literal: optional
    /// `-`, digits, optional `.` and fraction, and with `allow_exponent`, an
    /// optional `e` exponent. Returns `None` if `raw` isn't such a number.
    pub(crate) fn normalize_number(&self, raw: &str, allow_exponent: bool) -> Option<String> {
        let raw = raw.trim();
        let mut out = String::with_capacity(raw.len());
        let mut chars = raw.chars().peekable();

        match chars.peek() {
            Some('-') => {
                out.push('-');
                chars.next();
            }
            Some('+') => {
                chars.next();
            }
            _ => {}
        }

        let mut int_digits = 0;
        let mut last_was_group = false;
        while let Some(&c) = chars.peek() {
            if c.is_ascii_digit() {
                out.push(c);
                int_digits += 1;
                last_was_group = false;
            } else if c != self.decimal_separator && self.group_separators.contains(&c) {
                // groups only sit between digits
                if int_digits == 0 || last_was_group {
                    return None;
                }
                last_was_group = true;
            } else {
                break;
            }
            chars.next();
        }
        if last_was_group {
            return None;
        }

        let mut frac_digits = 0;
        if chars.peek() == Some(&self.decimal_separator) {
            chars.next();
            if int_digits == 0 {
                out.push('0');
            }
            out.push('.');
            while let Some(&c) = chars.peek() {
                if !c.is_ascii_digit() {
                    break;
                }
                out.push(c);
                frac_digits += 1;
                chars.next();
            }
        }
        if int_digits + frac_digits == 0 {
            return None;
        }

        if allow_exponent && matches!(chars.peek(), Some('e' | 'E')) {
            chars.next();
            out.push('e');
            if let Some(&sign @ ('-' | '+')) = chars.peek() {
                out.push(sign);
                chars.next();
            }
            let mut exp_digits = 0;
            while let Some(&c) = chars.peek() {
                if !c.is_ascii_digit() {
                    break;
                }
                out.push(c);
                exp_digits += 1;
                chars.next();
            }
            if exp_digits == 0 {
                return None;
            }
        }

        chars.next().is_none().then_some(out)
    }

    /// Parses a date-time: ISO 8601 first, then this locale's short date
    /// with an optional `HH:MM[:SS]` time. A date alone is midnight.
    pub fn parse_datetime(&self, raw: &str) -> Option<NaiveDateTime> {
        let raw = raw.trim();
        const ISO_DATETIME: &[&str] = &[
            "%Y-%m-%dT%H:%M:%S%.f",
            "%Y-%m-%dT%H:%M",
            "%Y-%m-%d %H:%M:%S%.f",
            "%Y-%m-%d %H:%M",
        ];
        if let Some(dt) = ISO_DATETIME
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        {
            return Some(dt);
        }

        let (date, time) = match raw.split_once(char::is_whitespace) {
            Some((date, time)) => (date, Some(time.trim())),
            None => (raw, None),
        };
        let date = self.parse_date(date)?;
        let time = match time {
            Some(time) => NaiveTime::parse_from_str(time, "%H:%M:%S")
                .or_else(|_| NaiveTime::parse_from_str(time, "%H:%M"))
                .ok()?,
            None => NaiveTime::from_hms_opt(0, 0, 0)?,
        };
        Some(date.and_time(time))
    }

    /// Parses a date: ISO 8601 (`2016-04-22`) first, then this locale's
    /// short date. Two-digit years map to 1950..=2049.
    pub fn parse_date(&self, raw: &str) -> Option<NaiveDate> {
        let raw = raw.trim();
        if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            return Some(date);
        }

        let mut parts = raw.split(self.date_separator);
        let (a, b, c) = (parts.next()?, parts.next()?, parts.next()?);
        if parts.next().is_some() {
            return None;
        }
        let (year, month, day) = match self.date_order {
            DateOrder::Ymd => (a, b, c),
            DateOrder::Dmy => (c, b, a),
            DateOrder::Mdy => (c, a, b),
        };

        let year = parse_year(year)?;
        let month = parse_component(month)?;
        let day = parse_component(day)?;
        NaiveDate::from_ymd_opt(year, month, day)
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::INVARIANT
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

fn parse_component(s: &str) -> Option<u32> {
    if s.is_empty() || s.len() > 2 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

fn parse_year(s: &str) -> Option<i32> {
    if !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    match s.len() {
        1 | 2 => {
            let yy: i32 = s.parse().ok()?;
            Some(if yy < 50 { 2000 + yy } else { 1900 + yy })
        }
        4 => s.parse().ok(),
        _ => None,
    }
}

/// Where [`Locale::from_env`] reads environment variables from.
///
/// This allows testing without modifying the actual environment.
pub trait EnvSource {
    /// Get the value of an environment variable by name.
    fn get(&self, name: &str) -> Option<String>;
}

/// Environment source that reads from the actual process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdEnv;

impl EnvSource for StdEnv {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

impl<K: AsRef<str>, V: AsRef<str>> EnvSource for [(K, V)] {
    fn get(&self, name: &str) -> Option<String> {
        self.iter()
            .find(|(k, _)| k.as_ref() == name)
            .map(|(_, v)| v.as_ref().to_string())
    }
}

impl<K: AsRef<str>, V: AsRef<str>, const N: usize> EnvSource for [(K, V); N] {
    fn get(&self, name: &str) -> Option<String> {
        EnvSource::get(self.as_slice(), name)
    }
}
