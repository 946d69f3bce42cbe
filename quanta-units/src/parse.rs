//! Quantity string parsing - read text like "120.5kts" or "-1 013,2 hPa"
//!
//! The text is split into a numeric literal and a trailing unit symbol. The
//! number is read according to a [`SeparatorMode`]; the symbol is resolved
//! against one kind, or against every kind in [`KIND_PRIORITY`] order.
//! Failure is routine (the input is often untrusted) and never panics.

use std::str::FromStr;

use quanta_core::numeric::parse_number;
use quanta_core::{Locale, ParseError, SeparatorMode};
use tracing::{debug, trace};

use crate::any::{dispatch_kind, AnyQuantity, KindId, KIND_PRIORITY};
use crate::kind::UnitKind;
use crate::kinds::{Acceleration, Angle, Frequency, Length, Mass, Pressure, Speed, Temperature, Time};
use crate::quantity::Quantity;
use crate::unit::Unit;

/// Split collapsed text into its numeric literal and unit symbol
///
/// The literal is an optional sign followed by digits, `.`, `,` and spaces.
fn split_quantity(text: &str) -> Result<(String, String), ParseError> {
    let normalized = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if normalized.is_empty() {
        return Err(ParseError::Empty);
    }

    let mut end = 0;
    for (i, c) in normalized.char_indices() {
        let accepted = match c {
            '+' | '-' => i == 0,
            '0'..='9' | '.' | ',' | ' ' => true,
            _ => false,
        };
        if !accepted {
            break;
        }
        end = i + c.len_utf8();
    }

    let number = normalized[..end].trim();
    let symbol = normalized[end..].trim();
    if !number.bytes().any(|b| b.is_ascii_digit()) {
        return Err(ParseError::MissingNumber(normalized.clone()));
    }
    if symbol.is_empty() {
        return Err(ParseError::MissingUnit(normalized.clone()));
    }
    Ok((number.to_string(), symbol.to_string()))
}

/// Whether `text` holds a bare number (digits, separators and an optional sign)
fn is_number_only(text: &str) -> bool {
    let text = text.trim();
    let body = text.strip_prefix(['-', '+']).unwrap_or(text);
    !body.is_empty()
        && body.chars().any(|c| c.is_ascii_digit())
        && body.chars().all(|c| c.is_ascii_digit() || c == '.' || c == ',' || c == ' ')
}

/// Parser configuration: separator mode and the locale it consults
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuantityParser {
    mode: SeparatorMode,
    locale: Locale,
}

impl QuantityParser {
    /// Parser using the process locale
    pub fn new(mode: SeparatorMode) -> Self {
        QuantityParser {
            mode,
            locale: Locale::current(),
        }
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn mode(&self) -> SeparatorMode {
        self.mode
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    fn split_and_parse(&self, text: &str) -> Result<(f64, String), ParseError> {
        let (number, symbol) = split_quantity(text)?;
        let value = parse_number(&number, self.mode, &self.locale)?;
        Ok((value, symbol))
    }

    /// Parse a quantity of kind `K`, reporting why on failure
    pub fn try_parse<K: UnitKind>(&self, text: &str) -> Result<Quantity<K>, ParseError> {
        let result = self.split_and_parse(text).and_then(|(value, symbol)| {
            Unit::<K>::from_symbol(&symbol)
                .map(|unit| Quantity::new(value, unit))
                .ok_or(ParseError::UnknownUnit(symbol))
        });

        match result {
            Ok(q) => Ok(q),
            Err(err) => match K::parse_special(text, self.mode, &self.locale) {
                Some(q) => Ok(q),
                None => {
                    trace!(kind = K::NAME, text, error = %err, "rejected quantity text");
                    Err(err)
                }
            },
        }
    }

    /// Parse a quantity of kind `K`; the null quantity on failure
    pub fn parse<K: UnitKind>(&self, text: &str) -> Quantity<K> {
        self.try_parse(text).unwrap_or_default()
    }

    /// Parse a quantity of whichever kind owns the symbol, reporting why on failure
    pub fn try_parse_any(&self, text: &str) -> Result<AnyQuantity, ParseError> {
        let result = self.split_and_parse(text).and_then(|(value, symbol)| {
            KIND_PRIORITY
                .iter()
                .find_map(|kind| dispatch_kind!(kind, resolve_symbol(value, &symbol)))
                .ok_or(ParseError::UnknownUnit(symbol))
        });

        let result = result.or_else(|err| {
            KIND_PRIORITY
                .iter()
                .find_map(|kind| dispatch_kind!(kind, resolve_special(text, self.mode, &self.locale)))
                .ok_or(err)
        });

        match &result {
            Ok(q) => debug!(text, kind = %q.kind(), unit = q.unit_symbol(), "resolved quantity text"),
            Err(err) => debug!(text, error = %err, "rejected quantity text"),
        }
        result
    }

    /// Parse a quantity of whichever kind owns the symbol; `None` on failure
    pub fn parse_any(&self, text: &str) -> Option<AnyQuantity> {
        self.try_parse_any(text).ok()
    }
}

impl Default for QuantityParser {
    fn default() -> Self {
        QuantityParser::new(SeparatorMode::default())
    }
}

fn resolve_symbol<K: UnitKind>(value: f64, symbol: &str) -> Option<AnyQuantity> {
    Unit::<K>::from_symbol(symbol).map(|unit| K::into_any(Quantity::new(value, unit)))
}

fn resolve_special<K: UnitKind>(text: &str, mode: SeparatorMode, locale: &Locale) -> Option<AnyQuantity> {
    K::parse_special(text, mode, locale).map(K::into_any)
}

/// Kind that owns `symbol`, by [`KIND_PRIORITY`]
pub fn kind_of_symbol(symbol: &str) -> Option<KindId> {
    KIND_PRIORITY.iter().copied().find(|kind| kind.has_symbol(symbol))
}

/// Parse text of any kind with the process locale; `None` on failure
pub fn parse_any(text: &str, mode: SeparatorMode) -> Option<AnyQuantity> {
    QuantityParser::new(mode).parse_any(text)
}

pub fn try_parse_any(text: &str, mode: SeparatorMode) -> Result<AnyQuantity, ParseError> {
    QuantityParser::new(mode).try_parse_any(text)
}

impl<K: UnitKind> Quantity<K> {
    /// Parse text of this kind with the process locale; null on failure
    pub fn parse(text: &str, mode: SeparatorMode) -> Self {
        QuantityParser::new(mode).parse(text)
    }

    pub fn try_parse(text: &str, mode: SeparatorMode) -> Result<Self, ParseError> {
        QuantityParser::new(mode).try_parse(text)
    }

    /// Like [`parse`](Self::parse), reading a bare number as a value in `unit`
    pub fn parse_with_default_unit(text: &str, mode: SeparatorMode, unit: Unit<K>) -> Self {
        if is_number_only(text) && !unit.is_null() {
            let text = format!("{} {}", text.trim(), unit.symbol());
            return Self::parse(&text, mode);
        }
        Self::parse(text, mode)
    }
}

impl<K: UnitKind> FromStr for Quantity<K> {
    type Err = ParseError;

    /// Best-guess parsing with the process locale
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_parse(s, SeparatorMode::BestGuess)
    }
}
