//! Quantity type - a value tagged with a unit of one kind
//!
//! The value is stored in whatever unit currently tags it and converted on
//! demand through the kind's canonical unit. A quantity without a unit is
//! "null" (no measurement), which is distinct from a measured zero.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use quanta_core::numeric::{epsilon_equal, format_fixed};
use quanta_core::{Locale, ParseError};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::format::format_with_unit;
use crate::kind::UnitKind;
use crate::unit::{Unit, NULL_SYMBOL};

/// A physical quantity of kind `K`
pub struct Quantity<K: UnitKind> {
    value: f64,
    unit: Option<Unit<K>>,
}

/// Structural `(value, unit symbol)` form used by serializers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuantityRecord {
    pub value: f64,
    pub unit: String,
}

impl<K: UnitKind> Quantity<K> {
    /// Create a quantity; passing the null unit yields the null quantity
    pub fn new(value: f64, unit: Unit<K>) -> Self {
        if unit.is_null() {
            return Self::null();
        }
        Quantity {
            value,
            unit: Some(unit),
        }
    }

    /// The "no measurement" quantity
    pub fn null() -> Self {
        Quantity {
            value: 0.0,
            unit: None,
        }
    }

    pub fn is_null(&self) -> bool {
        self.unit.is_none()
    }

    /// Value in the current unit (0 when null)
    pub fn value(&self) -> f64 {
        if self.is_null() {
            0.0
        } else {
            self.value
        }
    }

    /// Current unit, or the kind's null unit
    pub fn unit(&self) -> Unit<K> {
        self.unit.unwrap_or_else(K::null_unit)
    }

    /// Value converted to `unit` (0 when this quantity is null).
    ///
    /// # Panics
    /// If `unit` is the null unit.
    pub fn value_in(&self, unit: Unit<K>) -> f64 {
        assert!(!unit.is_null(), "cannot express a {} quantity in the null unit", K::NAME);
        match self.unit {
            Some(current) => unit.convert_from(self.value, current),
            None => 0.0,
        }
    }

    /// Value in the current unit rounded to `digits`, or to the unit's display digits
    pub fn value_rounded(&self, digits: Option<u32>) -> f64 {
        match self.unit {
            Some(unit) => unit.round_value(self.value, digits),
            None => 0.0,
        }
    }

    pub fn value_rounded_in(&self, unit: Unit<K>, digits: Option<u32>) -> f64 {
        unit.round_value(self.value_in(unit), digits)
    }

    /// Value in the current unit rounded to the nearest integer
    pub fn value_integer(&self) -> i64 {
        self.value().round() as i64
    }

    pub fn value_integer_in(&self, unit: Unit<K>) -> i64 {
        self.value_in(unit).round() as i64
    }

    /// Whether the current value is an integer within the unit's epsilon
    pub fn is_integer(&self) -> bool {
        match self.unit {
            Some(unit) => (self.value - self.value.round()).abs() <= unit.epsilon(),
            None => false,
        }
    }

    /// Convert in place; switching to the null unit nulls the quantity
    pub fn switch_unit(&mut self, unit: Unit<K>) -> &mut Self {
        if unit.is_null() {
            *self = Self::null();
            return self;
        }
        if let Some(current) = self.unit {
            if current != unit {
                self.value = unit.convert_from(self.value, current);
                self.unit = Some(unit);
            }
        }
        self
    }

    pub fn switched_unit(&self, unit: Unit<K>) -> Self {
        let mut copy = *self;
        copy.switch_unit(unit);
        copy
    }

    /// Replace the value, keeping the unit; ignored when null
    pub fn set_current_unit_value(&mut self, value: f64) {
        if !self.is_null() {
            self.value = value;
        }
    }

    /// Add a raw number in the current unit
    pub fn add_value_same_unit(&mut self, value: f64) {
        self.value += value;
    }

    pub fn subtract_value_same_unit(&mut self, value: f64) {
        self.value -= value;
    }

    /// Snap the value to the nearest multiple of the unit's epsilon
    pub fn round_to_epsilon(&mut self) {
        if let Some(unit) = self.unit {
            self.value = unit.round_to_epsilon(self.value);
        }
    }

    pub fn is_zero_epsilon_considered(&self) -> bool {
        match self.unit {
            Some(unit) => unit.is_epsilon(self.value),
            None => false,
        }
    }

    pub fn is_positive_with_epsilon_considered(&self) -> bool {
        !self.is_null() && !self.is_zero_epsilon_considered() && self.value > 0.0
    }

    pub fn is_negative_with_epsilon_considered(&self) -> bool {
        !self.is_null() && !self.is_zero_epsilon_considered() && self.value < 0.0
    }

    pub fn make_positive(&mut self) -> &mut Self {
        if !self.is_null() && self.value < 0.0 {
            self.value = -self.value;
        }
        self
    }

    pub fn make_negative(&mut self) -> &mut Self {
        if !self.is_null() && self.value > 0.0 {
            self.value = -self.value;
        }
        self
    }

    pub fn abs(&self) -> Self {
        let mut copy = *self;
        copy.make_positive();
        copy
    }

    /// The larger of two quantities; a null operand loses to any value
    pub fn max_value(a: Self, b: Self) -> Self {
        if a.is_null() {
            return b;
        }
        if b.is_null() {
            return a;
        }
        if a > b {
            a
        } else {
            b
        }
    }

    /// The smaller of two quantities; a null operand loses to any value
    pub fn min_value(a: Self, b: Self) -> Self {
        if a.is_null() {
            return b;
        }
        if b.is_null() {
            return a;
        }
        if a < b {
            a
        } else {
            b
        }
    }

    /// Formatted value and unit symbol in the current unit (`null` when null)
    pub fn value_rounded_with_unit(&self, digits: Option<u32>, with_group_separator: bool, i18n: bool) -> String {
        match self.unit {
            Some(unit) => format_with_unit(unit, self.value, digits, with_group_separator, &display_locale(i18n)),
            None => NULL_SYMBOL.to_string(),
        }
    }

    /// Formatted value and unit symbol in `unit` (`null` when this quantity is null).
    ///
    /// # Panics
    /// If `unit` is the null unit.
    pub fn value_rounded_with_unit_in(
        &self,
        unit: Unit<K>,
        digits: Option<u32>,
        with_group_separator: bool,
        i18n: bool,
    ) -> String {
        if self.is_null() {
            return NULL_SYMBOL.to_string();
        }
        let value = self.value_in(unit);
        format_with_unit(unit, value, digits, with_group_separator, &display_locale(i18n))
    }

    /// Rounded number only, locale-invariant, no unit symbol
    pub fn value_rounded_as_string(&self, unit: Unit<K>, digits: Option<u32>) -> String {
        let digits = digits.unwrap_or_else(|| unit.digits());
        format_fixed(self.value_in(unit), digits as usize, &Locale::C, false)
    }

    /// Formatted with the unit's display digits; `i18n` selects the process locale
    pub fn to_string_i18n(&self, i18n: bool) -> String {
        self.value_rounded_with_unit(None, false, i18n)
    }

    /// Value in the canonical unit, NaN when null
    pub fn canonical_value_or_nan(&self) -> f64 {
        match self.unit {
            Some(_) => self.value_in(K::default_unit()),
            None => f64::NAN,
        }
    }

    /// Inverse of [`canonical_value_or_nan`](Self::canonical_value_or_nan)
    pub fn from_canonical_or_nan(value: f64) -> Self {
        if value.is_nan() {
            Self::null()
        } else {
            Self::new(value, K::default_unit())
        }
    }

    pub fn to_record(&self) -> QuantityRecord {
        QuantityRecord {
            value: self.value(),
            unit: self.unit().symbol().to_string(),
        }
    }

    /// Rebuild from a record; the `null` symbol gives the null quantity
    pub fn from_record(record: &QuantityRecord) -> Result<Self, ParseError> {
        if record.unit == NULL_SYMBOL {
            return Ok(Self::null());
        }
        let unit = Unit::<K>::from_symbol(&record.unit)
            .ok_or_else(|| ParseError::UnknownUnit(record.unit.clone()))?;
        Ok(Self::new(record.value, unit))
    }
}

fn display_locale(i18n: bool) -> Locale {
    if i18n {
        Locale::current()
    } else {
        Locale::C
    }
}

impl<K: UnitKind> Clone for Quantity<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: UnitKind> Copy for Quantity<K> {}

impl<K: UnitKind> Default for Quantity<K> {
    fn default() -> Self {
        Self::null()
    }
}

impl<K: UnitKind> fmt::Debug for Quantity<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit {
            Some(unit) => write!(f, "{}({} {})", K::NAME, self.value, unit.symbol()),
            None => write!(f, "{}(null)", K::NAME),
        }
    }
}

impl<K: UnitKind> fmt::Display for Quantity<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_i18n(false))
    }
}

/// Tolerance equality: the difference, in the left operand's unit, is within
/// that unit's epsilon.
///
/// This is not an equivalence relation. It is not transitive, and with units of
/// different epsilons it is not symmetric, so `Quantity` implements
/// `PartialEq` only and cannot be a `HashMap`/`HashSet` key.
impl<K: UnitKind> PartialEq for Quantity<K> {
    fn eq(&self, other: &Self) -> bool {
        match (self.unit, other.unit) {
            (None, None) => true,
            (Some(_), None) | (None, Some(_)) => false,
            (Some(unit), Some(_)) => epsilon_equal(self.value, other.value_in(unit), unit.epsilon()),
        }
    }
}

impl<K: UnitKind> PartialOrd for Quantity<K> {
    /// Every measured value orders before null
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self.unit, other.unit) {
            (None, None) => Some(Ordering::Equal),
            (None, Some(_)) => Some(Ordering::Greater),
            (Some(_), None) => Some(Ordering::Less),
            (Some(unit), Some(_)) => {
                if self == other {
                    return Some(Ordering::Equal);
                }
                self.value.partial_cmp(&other.value_in(unit))
            }
        }
    }
}

/// Hash of the value rounded to the canonical unit's display digits.
///
/// Quantities equal under `==` hash alike unless they straddle a rounding
/// boundary of that display precision (`0.0049999999995 m` and `0.005 m`
/// compare equal but round to `0.00` and `0.01`).
impl<K: UnitKind> Hash for Quantity<K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self.unit {
            Some(_) => {
                let canonical = K::default_unit();
                let rounded = format_fixed(self.value_in(canonical), canonical.digits() as usize, &Locale::C, false);
                rounded.hash(state);
            }
            None => NULL_SYMBOL.hash(state),
        }
    }
}

impl<K: UnitKind> AddAssign for Quantity<K> {
    fn add_assign(&mut self, other: Self) {
        match (self.unit, other.unit) {
            (Some(unit), Some(_)) => self.value += other.value_in(unit),
            _ => *self = Self::null(),
        }
    }
}

impl<K: UnitKind> SubAssign for Quantity<K> {
    fn sub_assign(&mut self, other: Self) {
        match (self.unit, other.unit) {
            (Some(unit), Some(_)) => self.value -= other.value_in(unit),
            _ => *self = Self::null(),
        }
    }
}

impl<K: UnitKind> Add for Quantity<K> {
    type Output = Self;

    fn add(mut self, other: Self) -> Self {
        self += other;
        self
    }
}

impl<K: UnitKind> Sub for Quantity<K> {
    type Output = Self;

    fn sub(mut self, other: Self) -> Self {
        self -= other;
        self
    }
}

impl<K: UnitKind> MulAssign<f64> for Quantity<K> {
    fn mul_assign(&mut self, factor: f64) {
        if !self.is_null() {
            self.value *= factor;
        }
    }
}

impl<K: UnitKind> DivAssign<f64> for Quantity<K> {
    fn div_assign(&mut self, divisor: f64) {
        if !self.is_null() {
            self.value /= divisor;
        }
    }
}

impl<K: UnitKind> Mul<f64> for Quantity<K> {
    type Output = Self;

    fn mul(mut self, factor: f64) -> Self {
        self *= factor;
        self
    }
}

impl<K: UnitKind> Mul<Quantity<K>> for f64 {
    type Output = Quantity<K>;

    fn mul(self, quantity: Quantity<K>) -> Quantity<K> {
        quantity * self
    }
}

impl<K: UnitKind> Div<f64> for Quantity<K> {
    type Output = Self;

    fn div(mut self, divisor: f64) -> Self {
        self /= divisor;
        self
    }
}

impl<K: UnitKind> Neg for Quantity<K> {
    type Output = Self;

    fn neg(self) -> Self {
        self * -1.0
    }
}

impl<K: UnitKind> Serialize for Quantity<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_record().serialize(serializer)
    }
}

impl<'de, K: UnitKind> Deserialize<'de> for Quantity<K> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let record = QuantityRecord::deserialize(deserializer)?;
        Quantity::from_record(&record).map_err(serde::de::Error::custom)
    }
}
