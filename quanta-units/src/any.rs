//! Dynamically typed quantities
//!
//! [`AnyQuantity`] holds a quantity of whichever kind a parsed symbol
//! resolved to. [`KIND_PRIORITY`] is the fixed order in which kinds are
//! probed; a symbol valid in two kinds belongs to the earlier one.

use std::fmt;
use std::str::FromStr;

use quanta_core::ParseError;
use serde::{Deserialize, Serialize};

use crate::kind::UnitKind;
use crate::kinds::{Acceleration, Angle, Frequency, Length, Mass, Pressure, Speed, Temperature, Time};
use crate::quantity::{Quantity, QuantityRecord};
use crate::unit::{Unit, UnitData};

/// Runtime identifier of a quantity kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KindId {
    Acceleration,
    Angle,
    Frequency,
    Length,
    Mass,
    Pressure,
    Speed,
    Time,
    Temperature,
}

/// Order in which kinds are probed when resolving a unit symbol
pub const KIND_PRIORITY: [KindId; 9] = [
    KindId::Acceleration,
    KindId::Angle,
    KindId::Frequency,
    KindId::Length,
    KindId::Mass,
    KindId::Pressure,
    KindId::Speed,
    KindId::Time,
    KindId::Temperature,
];

/// Calls `$body` with `$q` bound to the typed quantity inside an [`AnyQuantity`]
macro_rules! with_quantity {
    ($any:expr, $q:ident => $body:expr) => {
        match $any {
            AnyQuantity::Acceleration($q) => $body,
            AnyQuantity::Angle($q) => $body,
            AnyQuantity::Frequency($q) => $body,
            AnyQuantity::Length($q) => $body,
            AnyQuantity::Mass($q) => $body,
            AnyQuantity::Pressure($q) => $body,
            AnyQuantity::Speed($q) => $body,
            AnyQuantity::Time($q) => $body,
            AnyQuantity::Temperature($q) => $body,
        }
    };
}

/// Calls the generic function `$f::<Kind>` matching a [`KindId`]
macro_rules! dispatch_kind {
    ($id:expr, $f:ident ( $($arg:expr),* )) => {
        match $id {
            KindId::Acceleration => $f::<Acceleration>($($arg),*),
            KindId::Angle => $f::<Angle>($($arg),*),
            KindId::Frequency => $f::<Frequency>($($arg),*),
            KindId::Length => $f::<Length>($($arg),*),
            KindId::Mass => $f::<Mass>($($arg),*),
            KindId::Pressure => $f::<Pressure>($($arg),*),
            KindId::Speed => $f::<Speed>($($arg),*),
            KindId::Time => $f::<Time>($($arg),*),
            KindId::Temperature => $f::<Temperature>($($arg),*),
        }
    };
}

pub(crate) use dispatch_kind;

impl KindId {
    pub fn name(&self) -> &'static str {
        dispatch_kind!(self, kind_name())
    }

    /// Descriptors of every non-null unit of the kind, canonical first
    pub fn units(&self) -> Vec<&'static UnitData> {
        dispatch_kind!(self, unit_data())
    }

    /// Whether `symbol` names a unit of this kind
    pub fn has_symbol(&self, symbol: &str) -> bool {
        dispatch_kind!(self, has_symbol(symbol))
    }
}

fn kind_name<K: UnitKind>() -> &'static str {
    K::NAME
}

fn unit_data<K: UnitKind>() -> Vec<&'static UnitData> {
    K::all_units().iter().map(|u| u.data()).collect()
}

fn has_symbol<K: UnitKind>(symbol: &str) -> bool {
    Unit::<K>::is_valid_symbol(symbol)
}

impl fmt::Display for KindId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for KindId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        KIND_PRIORITY
            .iter()
            .copied()
            .find(|k| k.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown quantity kind: {}", s))
    }
}

/// A quantity of any of the nine kinds
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnyQuantity {
    Acceleration(Quantity<Acceleration>),
    Angle(Quantity<Angle>),
    Frequency(Quantity<Frequency>),
    Length(Quantity<Length>),
    Mass(Quantity<Mass>),
    Pressure(Quantity<Pressure>),
    Speed(Quantity<Speed>),
    Time(Quantity<Time>),
    Temperature(Quantity<Temperature>),
}

impl AnyQuantity {
    pub fn kind(&self) -> KindId {
        with_quantity!(self, q => kind_of(q))
    }

    pub fn is_null(&self) -> bool {
        with_quantity!(self, q => q.is_null())
    }

    /// Value in the current unit
    pub fn value(&self) -> f64 {
        with_quantity!(self, q => q.value())
    }

    pub fn unit_symbol(&self) -> &'static str {
        with_quantity!(self, q => q.unit().symbol())
    }

    /// Default display digits of the current unit
    pub fn unit_digits(&self) -> u32 {
        with_quantity!(self, q => q.unit().digits())
    }

    /// The typed quantity, if it is of kind `K`
    pub fn downcast<K: UnitKind>(self) -> Option<Quantity<K>> {
        K::from_any(self)
    }

    /// Convert to the unit of the same kind named by `symbol`
    pub fn switched_unit(&self, symbol: &str) -> Result<AnyQuantity, ParseError> {
        with_quantity!(*self, q => switch_to_symbol(q, symbol))
    }

    pub fn value_rounded_with_unit(&self, digits: Option<u32>, with_group_separator: bool, i18n: bool) -> String {
        with_quantity!(self, q => q.value_rounded_with_unit(digits, with_group_separator, i18n))
    }

    pub fn to_record(&self) -> QuantityRecord {
        with_quantity!(self, q => q.to_record())
    }
}

fn kind_of<K: UnitKind>(_: &Quantity<K>) -> KindId {
    K::ID
}

fn switch_to_symbol<K: UnitKind>(q: Quantity<K>, symbol: &str) -> Result<AnyQuantity, ParseError> {
    let unit = Unit::<K>::from_symbol(symbol).ok_or_else(|| ParseError::UnknownUnit(symbol.to_string()))?;
    Ok(K::into_any(q.switched_unit(unit)))
}

impl<K: UnitKind> From<Quantity<K>> for AnyQuantity {
    fn from(quantity: Quantity<K>) -> Self {
        K::into_any(quantity)
    }
}

impl fmt::Display for AnyQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        with_quantity!(self, q => fmt::Display::fmt(q, f))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LengthUnit, MassUnit};

    #[test]
    fn test_priority_order() {
        let names: Vec<&str> = KIND_PRIORITY.iter().map(|k| k.name()).collect();
        assert_eq!(
            names,
            ["acceleration", "angle", "frequency", "length", "mass", "pressure", "speed", "time", "temperature"]
        );
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!("Length".parse::<KindId>(), Ok(KindId::Length));
        assert!("volume".parse::<KindId>().is_err());
    }

    #[test]
    fn test_kind_units() {
        let symbols: Vec<&str> = KindId::Mass.units().iter().map(|d| d.symbol).collect();
        assert_eq!(symbols, ["kg", "g", "t", "ton", "lb"]);
        assert!(KindId::Speed.has_symbol("kts"));
        assert!(!KindId::Speed.has_symbol("ft"));
    }

    #[test]
    fn test_from_and_downcast() {
        let any: AnyQuantity = Quantity::new(33.0, LengthUnit::ft()).into();
        assert_eq!(any.kind(), KindId::Length);
        assert_eq!(any.unit_symbol(), "ft");
        assert_eq!(any.value(), 33.0);
        assert!(any.downcast::<Length>().is_some());
        assert!(any.downcast::<Mass>().is_none());
    }

    #[test]
    fn test_switched_unit() {
        let any = AnyQuantity::from(Quantity::new(1000.0, MassUnit::kg()));
        let t = any.switched_unit("t").unwrap();
        assert_eq!(t.unit_symbol(), "t");
        assert!((t.value() - 1.0).abs() < 1e-12);
        assert_eq!(any.switched_unit("ft"), Err(ParseError::UnknownUnit("ft".to_string())));
    }

    #[test]
    fn test_display() {
        let any = AnyQuantity::from(Quantity::new(33.0, LengthUnit::ft()));
        assert_eq!(any.to_string(), "33.0 ft");
    }
}
