//! Angle units (canonical: degree)

use std::f64::consts::PI;

use quanta_core::{Converter, Subdivision};

use crate::quantity::Quantity;
use crate::unit::{Unit, UnitData};

const SEXAGESIMAL: Subdivision = Subdivision::in_each_hundred(60);

static DEGREE: UnitData = UnitData::new("degree", "deg", Converter::Identity).with_aliases(&["°"]);
static RADIAN: UnitData = UnitData::new("radian", "rad", Converter::linear(180.0 / PI));
static SEXAGESIMAL_DEGREE: UnitData =
    UnitData::new("sexagesimal degree", "DMS", Converter::subdivision2(1.0, SEXAGESIMAL))
        .with_digits(4)
        .with_layout(0, [" ", " ", ""]);
static SEXAGESIMAL_DEGREE_MINUTE: UnitData =
    UnitData::new("sexagesimal degree, minute", "MinDec", Converter::subdivision(1.0, SEXAGESIMAL))
        .with_digits(4)
        .with_layout(0, [" ", "", ""]);

define_kind! {
    /// Plane angle, including sexagesimal degree notations
    kind Angle = "angle", Angle;
    units {
        deg => DEGREE,
        rad => RADIAN,
        /// Degrees, minutes and seconds packed as `DD.MMSS`
        sexagesimal_deg => SEXAGESIMAL_DEGREE,
        /// Degrees and decimal minutes packed as `DD.MMmm`
        sexagesimal_deg_min => SEXAGESIMAL_DEGREE_MINUTE,
    }
}

impl Quantity<Angle> {
    /// Value in radians divided by pi
    pub fn pi_factor(&self) -> f64 {
        self.value_in(Unit::<Angle>::rad()) / PI
    }

    pub fn sin(&self) -> f64 {
        self.value_in(Unit::<Angle>::rad()).sin()
    }

    pub fn cos(&self) -> f64 {
        self.value_in(Unit::<Angle>::rad()).cos()
    }

    pub fn tan(&self) -> f64 {
        self.value_in(Unit::<Angle>::rad()).tan()
    }
}
