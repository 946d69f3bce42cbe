//! Acceleration units (canonical: meter per second squared)

use quanta_core::Converter;

use crate::unit::UnitData;

static METER_PER_SECOND_SQUARED: UnitData =
    UnitData::new("meter per second squared", "m/s^2", Converter::Identity).with_digits(1);
static FOOT_PER_SECOND_SQUARED: UnitData =
    UnitData::new("foot per second squared", "ft/s^2", Converter::linear(0.3048)).with_digits(0);

define_kind! {
    kind Acceleration = "acceleration", Acceleration;
    units {
        m_s2 => METER_PER_SECOND_SQUARED,
        ft_s2 => FOOT_PER_SECOND_SQUARED,
    }
}
