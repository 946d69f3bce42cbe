//! Quanta Units - Typed physical quantities and unit conversion
//!
//! Every measured value is a [`Quantity<K>`] of one kind `K`: a number tagged
//! with a [`Unit<K>`]. Quantities of different kinds never mix; conversion
//! between units of the same kind goes through the kind's canonical unit.
//!
//! Kinds (canonical unit first):
//! - Acceleration (m/s^2, ft/s^2)
//! - Angle (deg, rad, DMS, MinDec)
//! - Frequency (Hz, kHz, MHz, GHz)
//! - Length (m, NM, ft, km, cm, mi, SM)
//! - Mass (kg, g, t, ton, lb)
//! - Pressure (hPa, Pa, psi, bar, mbar, inHg, mmHg)
//! - Speed (m/s, kts, NM/h, ft/s, ft/min, km/h)
//! - Temperature (C, K, F)
//! - Time (s, ms, min, h, d, hms, hm, minsec)
//!
//! A quantity can also be "null", meaning no measurement; null is not zero.

mod any;
pub mod constants;
mod format;
mod kind;
pub mod kinds;
mod literals;
mod parse;
mod quantity;
mod registry;
mod unit;

pub use any::{AnyQuantity, KindId, KIND_PRIORITY};
pub use kind::UnitKind;
pub use kinds::{Acceleration, Angle, Frequency, Length, Mass, Pressure, Speed, Temperature, Time};
pub use literals::QuantityLiterals;
pub use parse::{kind_of_symbol, parse_any, try_parse_any, QuantityParser};
pub use quantity::{Quantity, QuantityRecord};
pub use registry::Registry;
pub use unit::{GroupLayout, Unit, UnitData, NULL_SYMBOL};

pub use quanta_core::{Locale, ParseError, SeparatorMode};

pub type AccelerationUnit = Unit<Acceleration>;
pub type AngleUnit = Unit<Angle>;
pub type FrequencyUnit = Unit<Frequency>;
pub type LengthUnit = Unit<Length>;
pub type MassUnit = Unit<Mass>;
pub type PressureUnit = Unit<Pressure>;
pub type SpeedUnit = Unit<Speed>;
pub type TemperatureUnit = Unit<Temperature>;
pub type TimeUnit = Unit<Time>;
