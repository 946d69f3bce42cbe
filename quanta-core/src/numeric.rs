//! Number parsing, rounding and fixed-point formatting
//!
//! Quantity text arrives in three flavours: machine-written (`.` decimal mark,
//! no grouping), written for a specific locale, or of unknown origin. The
//! [`SeparatorMode`] picks how strictly a numeric literal is interpreted.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// How decimal and digit-group separators are interpreted when parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SeparatorMode {
    /// `.` as decimal mark, no digit grouping
    Programmatic,
    /// The locale's decimal mark and digit grouping
    Locale,
    /// Programmatic first, then the locale, then common comma-decimal conventions
    #[default]
    BestGuess,
}

impl SeparatorMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SeparatorMode::Programmatic => "programmatic",
            SeparatorMode::Locale => "locale",
            SeparatorMode::BestGuess => "best-guess",
        }
    }
}

impl fmt::Display for SeparatorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SeparatorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "programmatic" | "c" => Ok(SeparatorMode::Programmatic),
            "locale" => Ok(SeparatorMode::Locale),
            "best-guess" | "bestguess" => Ok(SeparatorMode::BestGuess),
            other => Err(format!("unknown separator mode: {}", other)),
        }
    }
}

/// Numeric conventions of a locale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locale {
    /// Decimal mark
    pub decimal: char,
    /// Digit group separator
    pub group: char,
}

static CURRENT_LOCALE: LazyLock<Locale> = LazyLock::new(Locale::from_env);

const COMMA_DOT_LANGUAGES: &[&str] = &[
    "de", "es", "it", "nl", "pt", "da", "id", "tr", "el", "ro", "hr", "sl", "sr",
];

const COMMA_SPACE_LANGUAGES: &[&str] = &[
    "fr", "ru", "pl", "cs", "sk", "sv", "fi", "nb", "no", "uk", "hu", "bg", "lt", "lv", "et",
];

impl Locale {
    /// Locale-invariant conventions
    pub const C: Locale = Locale { decimal: '.', group: ',' };

    /// `1.013,25`
    pub const COMMA_DECIMAL_DOT_GROUP: Locale = Locale { decimal: ',', group: '.' };

    /// `1 013,25`
    pub const COMMA_DECIMAL_SPACE_GROUP: Locale = Locale { decimal: ',', group: ' ' };

    pub const fn new(decimal: char, group: char) -> Self {
        Locale { decimal, group }
    }

    /// Resolve a POSIX-style locale tag such as `de_DE.UTF-8` or `fr-FR`.
    ///
    /// Unknown languages get the invariant conventions.
    pub fn for_tag(tag: &str) -> Self {
        let tag = tag.split(['.', '@']).next().unwrap_or("").trim();
        let mut parts = tag.split(['_', '-']);
        let language = parts.next().unwrap_or("").to_lowercase();
        let region = parts.next().unwrap_or("").to_uppercase();

        if language == "de" && region == "CH" {
            return Locale::new('.', '\'');
        }
        if COMMA_DOT_LANGUAGES.contains(&language.as_str()) {
            Locale::COMMA_DECIMAL_DOT_GROUP
        } else if COMMA_SPACE_LANGUAGES.contains(&language.as_str()) {
            Locale::COMMA_DECIMAL_SPACE_GROUP
        } else {
            Locale::C
        }
    }

    /// Read `LC_ALL`, `LC_NUMERIC`, then `LANG`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve the locale from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        ["LC_ALL", "LC_NUMERIC", "LANG"]
            .iter()
            .filter_map(|key| lookup(key))
            .find(|value| !value.trim().is_empty())
            .map(|tag| Locale::for_tag(&tag))
            .unwrap_or(Locale::C)
    }

    /// The process locale, resolved once
    pub fn current() -> Locale {
        *CURRENT_LOCALE
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::C
    }
}

/// Parse a numeric literal according to `mode`.
///
/// `locale` is consulted by [`SeparatorMode::Locale`] and [`SeparatorMode::BestGuess`].
pub fn parse_number(text: &str, mode: SeparatorMode, locale: &Locale) -> Result<f64, ParseError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ParseError::MissingNumber(text.to_string()));
    }

    let parsed = match mode {
        SeparatorMode::Programmatic => parse_with(text, '.', None),
        SeparatorMode::Locale => parse_with(text, locale.decimal, Some(locale.group)),
        SeparatorMode::BestGuess => parse_with(text, '.', None)
            .or_else(|| parse_with(text, locale.decimal, Some(locale.group)))
            .or_else(|| {
                let l = Locale::COMMA_DECIMAL_DOT_GROUP;
                parse_with(text, l.decimal, Some(l.group))
            })
            .or_else(|| {
                let l = Locale::COMMA_DECIMAL_SPACE_GROUP;
                parse_with(text, l.decimal, Some(l.group))
            }),
    };

    parsed.ok_or_else(|| ParseError::InvalidNumber(text.to_string()))
}

fn is_group_mark(c: char, group: char) -> bool {
    if group.is_whitespace() {
        c.is_whitespace()
    } else {
        c == group
    }
}

/// Normalize `text` into a Rust float literal, or `None` if it does not follow
/// the given conventions
fn parse_with(text: &str, decimal: char, group: Option<char>) -> Option<f64> {
    let (negative, body) = match text.chars().next()? {
        '-' => (true, &text[1..]),
        '+' => (false, &text[1..]),
        _ => (false, text),
    };

    let (integer, fraction) = match body.split_once(decimal) {
        Some((i, f)) => (i, Some(f)),
        None => (body, None),
    };

    let mut digits = String::with_capacity(text.len() + 1);
    if negative {
        digits.push('-');
    }

    match group {
        Some(g) if integer.chars().any(|c| is_group_mark(c, g)) => {
            let groups: Vec<&str> = integer.split(|c| is_group_mark(c, g)).collect();
            let first = groups[0];
            if first.is_empty() || first.len() > 3 || !first.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            digits.push_str(first);
            for rest in &groups[1..] {
                if rest.len() != 3 || !rest.bytes().all(|b| b.is_ascii_digit()) {
                    return None;
                }
                digits.push_str(rest);
            }
        }
        _ => {
            if !integer.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            digits.push_str(integer);
        }
    }

    let mut has_digits = !integer.is_empty();
    if let Some(fraction) = fraction {
        if !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        has_digits |= !fraction.is_empty();
        digits.push('.');
        digits.push_str(fraction);
        if fraction.is_empty() {
            digits.push('0');
        }
    }

    if !has_digits {
        return None;
    }
    digits.parse::<f64>().ok()
}

/// Most decimals rounding and formatting will produce; larger requests are clamped
pub const MAX_DIGITS: u32 = 15;

/// Round half away from zero to `digits` decimal places
pub fn round_to(value: f64, digits: u32) -> f64 {
    let digits = digits.min(MAX_DIGITS);
    if !value.is_finite() {
        return value;
    }
    let scale = 10f64.powi(digits as i32);
    let scaled = value * scale;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / scale
}

/// Round to the nearest multiple of `epsilon` (no-op for a zero epsilon)
pub fn round_to_epsilon(value: f64, epsilon: f64) -> f64 {
    if epsilon <= 0.0 || !value.is_finite() {
        return value;
    }
    (value / epsilon).round() * epsilon
}

/// Whether `a` and `b` differ by at most `epsilon`.
///
/// A few ULPs of the larger magnitude are added so that a value shifted by
/// exactly `epsilon` still compares equal.
pub fn epsilon_equal(a: f64, b: f64, epsilon: f64) -> bool {
    if a == b {
        return true;
    }
    let slack = 4.0 * f64::EPSILON * a.abs().max(b.abs());
    (a - b).abs() <= epsilon + slack
}

/// Format with exactly `digits` decimals using the given locale's marks
pub fn format_fixed(value: f64, digits: usize, locale: &Locale, with_group_separator: bool) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf".to_string() } else { "-inf".to_string() };
    }

    let digits = digits.min(MAX_DIGITS as usize);
    let mut text = format!("{:.*}", digits, round_to(value, digits as u32));
    // "-0.00" after rounding
    if text.starts_with('-') && text[1..].bytes().all(|b| b == b'0' || b == b'.') {
        text.remove(0);
    }

    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut out = String::with_capacity(text.len() + integer.len() / 3);
    out.push_str(sign);
    if with_group_separator {
        out.push_str(&group_digits(integer, locale.group));
    } else {
        out.push_str(integer);
    }
    if let Some(fraction) = fraction {
        out.push(locale.decimal);
        out.push_str(fraction);
    }
    out
}

fn group_digits(integer: &str, group: char) -> String {
    let len = integer.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in integer.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(group);
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separator_mode_from_str() {
        assert_eq!("programmatic".parse::<SeparatorMode>(), Ok(SeparatorMode::Programmatic));
        assert_eq!("Locale".parse::<SeparatorMode>(), Ok(SeparatorMode::Locale));
        assert_eq!("best_guess".parse::<SeparatorMode>(), Ok(SeparatorMode::BestGuess));
        assert!("sometimes".parse::<SeparatorMode>().is_err());
        assert_eq!(SeparatorMode::default(), SeparatorMode::BestGuess);
    }

    #[test]
    fn test_locale_for_tag() {
        assert_eq!(Locale::for_tag("de_DE.UTF-8"), Locale::COMMA_DECIMAL_DOT_GROUP);
        assert_eq!(Locale::for_tag("fr-FR"), Locale::COMMA_DECIMAL_SPACE_GROUP);
        assert_eq!(Locale::for_tag("de_CH"), Locale::new('.', '\''));
        assert_eq!(Locale::for_tag("en_US.UTF-8"), Locale::C);
        assert_eq!(Locale::for_tag("C"), Locale::C);
        assert_eq!(Locale::for_tag(""), Locale::C);
    }

    #[test]
    fn test_locale_from_lookup_precedence() {
        let locale = Locale::from_lookup(|key| match key {
            "LC_ALL" => Some(String::new()),
            "LC_NUMERIC" => Some("it_IT.UTF-8".to_string()),
            "LANG" => Some("en_GB.UTF-8".to_string()),
            _ => None,
        });
        assert_eq!(locale.decimal, ',');

        assert_eq!(Locale::from_lookup(|_| None), Locale::C);
    }

    #[test]
    fn test_parse_programmatic() {
        let c = Locale::C;
        assert_eq!(parse_number("33.0", SeparatorMode::Programmatic, &c), Ok(33.0));
        assert_eq!(parse_number("-33.123", SeparatorMode::Programmatic, &c), Ok(-33.123));
        assert_eq!(parse_number("+5", SeparatorMode::Programmatic, &c), Ok(5.0));
        assert_eq!(parse_number(".5", SeparatorMode::Programmatic, &c), Ok(0.5));
        assert!(parse_number("1,5", SeparatorMode::Programmatic, &c).is_err());
        assert!(parse_number("1,013.2", SeparatorMode::Programmatic, &c).is_err());
        assert!(parse_number("1.2.3", SeparatorMode::Programmatic, &c).is_err());
        assert!(parse_number("-", SeparatorMode::Programmatic, &c).is_err());
        assert!(parse_number(".", SeparatorMode::Programmatic, &c).is_err());
    }

    #[test]
    fn test_parse_locale() {
        let de = Locale::for_tag("de_DE");
        assert_eq!(parse_number("1.013,25", SeparatorMode::Locale, &de), Ok(1013.25));
        assert_eq!(parse_number("1013,25", SeparatorMode::Locale, &de), Ok(1013.25));
        assert!(parse_number("10.13,25", SeparatorMode::Locale, &de).is_err());

        let fr = Locale::for_tag("fr_FR");
        assert_eq!(parse_number("-1 013,2", SeparatorMode::Locale, &fr), Ok(-1013.2));
    }

    #[test]
    fn test_parse_best_guess() {
        let c = Locale::C;
        assert_eq!(parse_number("1013.2", SeparatorMode::BestGuess, &c), Ok(1013.2));
        assert_eq!(parse_number("1,5", SeparatorMode::BestGuess, &c), Ok(1.5));
        assert_eq!(parse_number("1.013,2", SeparatorMode::BestGuess, &c), Ok(1013.2));
        assert_eq!(parse_number("-1 013,2", SeparatorMode::BestGuess, &c), Ok(-1013.2));
        assert!(parse_number("1,2,3,4", SeparatorMode::BestGuess, &c).is_err());
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(53.9957, 0), 54.0);
        assert_eq!(round_to(1.005_1, 2), 1.01);
        assert_eq!(round_to(-2.5, 0), -3.0);
        assert!(round_to(f64::NAN, 2).is_nan());
    }

    #[test]
    fn test_round_to_epsilon() {
        assert!((round_to_epsilon(1.23456, 0.01) - 1.23).abs() < 1e-12);
        assert_eq!(round_to_epsilon(1.23456, 0.0), 1.23456);
    }

    #[test]
    fn test_epsilon_equal() {
        assert!(epsilon_equal(1.0, 1.0 + 1e-9, 1e-9));
        assert!(!epsilon_equal(1.0, 1.0 + 2e-9, 1e-9));
        assert!(epsilon_equal(1000.0, 1000.0 + 1e-9, 1e-9));
        assert!(!epsilon_equal(0.0, 1e-9, 0.0));
    }

    #[test]
    fn test_format_fixed() {
        let c = Locale::C;
        assert_eq!(format_fixed(33.0, 1, &c, false), "33.0");
        assert_eq!(format_fixed(-0.001, 2, &c, false), "0.00");
        assert_eq!(format_fixed(1234567.891, 2, &c, true), "1,234,567.89");
        assert_eq!(format_fixed(-1013.25, 1, &Locale::for_tag("de"), true), "-1.013,3");
        assert_eq!(format_fixed(0.125, 2, &c, false), "0.13");
        assert_eq!(format_fixed(12.0, 0, &c, true), "12");
    }

    #[test]
    fn test_digits_are_clamped() {
        let c = Locale::C;
        assert_eq!(format_fixed(0.5, 1_000_000, &c, false), format_fixed(0.5, MAX_DIGITS as usize, &c, false));
        assert_eq!(format_fixed(0.5, usize::MAX, &c, false), "0.500000000000000");
        assert_eq!(round_to(1.25, u32::MAX), 1.25);
    }
}
