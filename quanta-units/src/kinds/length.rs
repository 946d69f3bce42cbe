//! Length units (canonical: meter)

use quanta_core::{Converter, CENTI, KILO};

use crate::unit::UnitData;

static METER: UnitData = UnitData::new("meter", "m", Converter::Identity);
static NAUTICAL_MILE: UnitData = UnitData::new("nautical mile", "NM", Converter::linear(1852.0)).with_digits(3);
static FOOT: UnitData = UnitData::new("foot", "ft", Converter::linear(0.3048)).with_digits(1);
static KILOMETER: UnitData = UnitData::new("kilometer", "km", Converter::linear(KILO)).with_digits(3);
static CENTIMETER: UnitData = UnitData::new("centimeter", "cm", Converter::linear(CENTI)).with_digits(1);
static MILE: UnitData = UnitData::new("mile", "mi", Converter::linear(1609.344)).with_digits(3);
static STATUTE_MILE: UnitData = UnitData::new("statute mile", "SM", Converter::linear(1609.3472)).with_digits(3);

define_kind! {
    /// Distance and altitude
    kind Length = "length", Length;
    units {
        m => METER,
        /// International nautical mile
        nm => NAUTICAL_MILE,
        ft => FOOT,
        km => KILOMETER,
        cm => CENTIMETER,
        /// International mile
        mi => MILE,
        /// US survey mile
        sm => STATUTE_MILE,
    }
}
