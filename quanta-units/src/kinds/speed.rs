//! Speed units (canonical: meter per second)

use quanta_core::Converter;

use crate::unit::UnitData;

const KNOT_FACTOR: f64 = 1852.0 / 3600.0;

static METER_PER_SECOND: UnitData = UnitData::new("meter per second", "m/s", Converter::Identity);
static KNOT: UnitData = UnitData::new("knot", "kts", Converter::linear(KNOT_FACTOR)).with_digits(1);
static NAUTICAL_MILE_PER_HOUR: UnitData =
    UnitData::new("nautical mile per hour", "NM/h", Converter::linear(KNOT_FACTOR)).with_digits(1);
static FOOT_PER_SECOND: UnitData =
    UnitData::new("foot per second", "ft/s", Converter::linear(0.3048)).with_digits(0);
static FOOT_PER_MINUTE: UnitData =
    UnitData::new("foot per minute", "ft/min", Converter::linear(0.3048 / 60.0)).with_digits(0);
static KILOMETER_PER_HOUR: UnitData =
    UnitData::new("kilometer per hour", "km/h", Converter::linear(1.0 / 3.6)).with_digits(1);

define_kind! {
    kind Speed = "speed", Speed;
    units {
        m_s => METER_PER_SECOND,
        kts => KNOT,
        nm_h => NAUTICAL_MILE_PER_HOUR,
        ft_s => FOOT_PER_SECOND,
        /// Typical vertical speed unit
        ft_min => FOOT_PER_MINUTE,
        km_h => KILOMETER_PER_HOUR,
    }
}
