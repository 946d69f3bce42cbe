//! Frequency units (canonical: hertz)

use quanta_core::{Converter, GIGA, KILO, MEGA};

use crate::unit::UnitData;

static HERTZ: UnitData = UnitData::new("hertz", "Hz", Converter::Identity);
static KILOHERTZ: UnitData = UnitData::new("kilohertz", "kHz", Converter::linear(KILO)).with_digits(1);
static MEGAHERTZ: UnitData = UnitData::new("megahertz", "MHz", Converter::linear(MEGA));
static GIGAHERTZ: UnitData = UnitData::new("gigahertz", "GHz", Converter::linear(GIGA));

define_kind! {
    kind Frequency = "frequency", Frequency;
    units {
        hz => HERTZ,
        khz => KILOHERTZ,
        mhz => MEGAHERTZ,
        ghz => GIGAHERTZ,
    }
}
