//! Unit descriptors
//!
//! A [`UnitData`] is the immutable description of one unit (symbol, epsilon,
//! display digits, conversion strategy). Each kind declares its descriptors as
//! `static` items; a [`Unit<K>`] is a typed, copyable handle to one of them.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use quanta_core::Converter;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::kind::UnitKind;

/// Name and symbol shared by every kind's null unit
pub const NULL_SYMBOL: &str = "null";

/// Printed layout of a subdivision unit.
///
/// `marks[0]` follows the whole units, `marks[1]` the first sub-unit level,
/// `marks[2]` the second. `whole_width` zero-pads the whole units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupLayout {
    pub whole_width: usize,
    pub marks: [&'static str; 3],
}

/// Immutable description of a unit
#[derive(Debug, Clone, Copy)]
pub struct UnitData {
    pub name: &'static str,
    pub symbol: &'static str,
    pub aliases: &'static [&'static str],
    pub epsilon: f64,
    pub digits: u32,
    pub converter: Option<Converter>,
    pub layout: Option<GroupLayout>,
    pub null: bool,
}

impl UnitData {
    pub const DEFAULT_EPSILON: f64 = 1e-9;
    pub const DEFAULT_DIGITS: u32 = 2;

    pub const fn new(name: &'static str, symbol: &'static str, converter: Converter) -> Self {
        UnitData {
            name,
            symbol,
            aliases: &[],
            epsilon: Self::DEFAULT_EPSILON,
            digits: Self::DEFAULT_DIGITS,
            converter: Some(converter),
            layout: None,
            null: false,
        }
    }

    /// The "no measurement" sentinel of a kind
    pub const fn null() -> Self {
        UnitData {
            name: NULL_SYMBOL,
            symbol: NULL_SYMBOL,
            aliases: &[],
            epsilon: 0.0,
            digits: 0,
            converter: None,
            layout: None,
            null: true,
        }
    }

    pub const fn with_digits(self, digits: u32) -> Self {
        UnitData { digits, ..self }
    }

    pub const fn with_epsilon(self, epsilon: f64) -> Self {
        UnitData { epsilon, ..self }
    }

    pub const fn with_aliases(self, aliases: &'static [&'static str]) -> Self {
        UnitData { aliases, ..self }
    }

    pub const fn with_layout(self, whole_width: usize, marks: [&'static str; 3]) -> Self {
        UnitData {
            layout: Some(GroupLayout { whole_width, marks }),
            ..self
        }
    }
}

/// A unit of kind `K`.
///
/// Equality and hashing are by name, so two handles to the same descriptor
/// are interchangeable.
pub struct Unit<K: UnitKind> {
    data: &'static UnitData,
    _kind: PhantomData<fn() -> K>,
}

impl<K: UnitKind> Unit<K> {
    pub const fn new(data: &'static UnitData) -> Self {
        Unit {
            data,
            _kind: PhantomData,
        }
    }

    pub fn data(&self) -> &'static UnitData {
        self.data
    }

    pub fn name(&self) -> &'static str {
        self.data.name
    }

    pub fn symbol(&self) -> &'static str {
        self.data.symbol
    }

    pub fn aliases(&self) -> &'static [&'static str] {
        self.data.aliases
    }

    /// Largest difference, in this unit, still treated as equal
    pub fn epsilon(&self) -> f64 {
        self.data.epsilon
    }

    /// Default number of decimals when displaying
    pub fn digits(&self) -> u32 {
        self.data.digits
    }

    pub fn is_null(&self) -> bool {
        self.data.null
    }

    pub fn layout(&self) -> Option<GroupLayout> {
        self.data.layout
    }

    /// Conversion strategy of this unit.
    ///
    /// # Panics
    /// On the null unit, which has no scale to convert from or to.
    pub fn converter(&self) -> Converter {
        match self.data.converter {
            Some(converter) if !self.data.null => converter,
            _ => panic!("{} unit '{}' has no converter", K::NAME, self.data.name),
        }
    }

    /// Number of packed sub-unit levels (0 for flat scales)
    pub fn subdivision_levels(&self) -> u8 {
        self.data.converter.map_or(0, |c| c.subdivision_levels())
    }

    /// Convert `value` expressed in `from` into this unit.
    ///
    /// # Panics
    /// If either unit is null.
    pub fn convert_from(&self, value: f64, from: Unit<K>) -> f64 {
        if *self == from {
            return value;
        }
        self.converter().from_canonical(from.converter().to_canonical(value))
    }

    pub fn to_canonical(&self, value: f64) -> f64 {
        self.converter().to_canonical(value)
    }

    pub fn from_canonical(&self, value: f64) -> f64 {
        self.converter().from_canonical(value)
    }

    /// Whether `value` is zero within this unit's epsilon
    pub fn is_epsilon(&self, value: f64) -> bool {
        if value == 0.0 {
            return true;
        }
        value.abs() <= self.data.epsilon
    }

    pub fn round_to_epsilon(&self, value: f64) -> f64 {
        quanta_core::numeric::round_to_epsilon(value, self.data.epsilon)
    }

    /// Round to `digits` decimals, or to the unit's default when `None`
    pub fn round_value(&self, value: f64, digits: Option<u32>) -> f64 {
        quanta_core::numeric::round_to(value, digits.unwrap_or(self.data.digits))
    }

    /// Look up a non-null unit of this kind by symbol or alias
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        K::registry().find(symbol)
    }

    pub fn is_valid_symbol(symbol: &str) -> bool {
        Self::from_symbol(symbol).is_some()
    }

    /// The canonical unit of the kind
    pub fn default_unit() -> Self {
        K::default_unit()
    }

    pub fn null_unit() -> Self {
        K::null_unit()
    }

    /// Every non-null unit of the kind, canonical first
    pub fn all_units() -> &'static [Self] {
        K::all_units()
    }
}

impl<K: UnitKind> Clone for Unit<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: UnitKind> Copy for Unit<K> {}

impl<K: UnitKind> PartialEq for Unit<K> {
    fn eq(&self, other: &Self) -> bool {
        self.data.name == other.data.name
    }
}

impl<K: UnitKind> Eq for Unit<K> {}

impl<K: UnitKind> Hash for Unit<K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.data.name.hash(state);
    }
}

impl<K: UnitKind> fmt::Debug for Unit<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unit<{}>({})", K::NAME, self.data.symbol)
    }
}

impl<K: UnitKind> fmt::Display for Unit<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.data.symbol)
    }
}

impl<K: UnitKind> Default for Unit<K> {
    fn default() -> Self {
        K::default_unit()
    }
}

impl<K: UnitKind> Serialize for Unit<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.data.symbol)
    }
}

impl<'de, K: UnitKind> Deserialize<'de> for Unit<K> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let symbol = String::deserialize(deserializer)?;
        if symbol == NULL_SYMBOL {
            return Ok(K::null_unit());
        }
        Unit::from_symbol(&symbol).ok_or_else(|| {
            serde::de::Error::custom(quanta_core::ParseError::UnknownUnit(symbol))
        })
    }
}
