//! Literal-style constructors: `33.0_f64.ft()`, `122.8_f64.mhz()`, `250_i32.kts()`
//!
//! The minute literal is `mins()`; `min` would be shadowed by `f64::min`.

use crate::kinds::{Acceleration, Angle, Frequency, Length, Mass, Pressure, Speed, Temperature, Time};
use crate::quantity::Quantity;
use crate::unit::Unit;

macro_rules! literals {
    ($( $method:ident => $kind:ident :: $unit:ident ),+ $(,)?) => {
        $(
            fn $method(self) -> Quantity<$kind> {
                Quantity::new(self.literal_value(), Unit::<$kind>::$unit())
            }
        )+
    };
}

/// Build quantities directly from numbers
pub trait QuantityLiterals: Sized {
    fn literal_value(self) -> f64;

    literals! {
        m => Length::m,
        nm => Length::nm,
        ft => Length::ft,
        km => Length::km,
        cm => Length::cm,
        mi => Length::mi,
        sm => Length::sm,

        deg => Angle::deg,
        rad => Angle::rad,

        hz => Frequency::hz,
        khz => Frequency::khz,
        mhz => Frequency::mhz,
        ghz => Frequency::ghz,

        kg => Mass::kg,
        g => Mass::g,
        t => Mass::t,
        short_ton => Mass::short_ton,
        lb => Mass::lb,

        hpa => Pressure::hpa,
        pa => Pressure::pa,
        psi => Pressure::psi,
        bar => Pressure::bar,
        mbar => Pressure::mbar,
        in_hg => Pressure::in_hg,
        mm_hg => Pressure::mm_hg,

        m_s => Speed::m_s,
        kts => Speed::kts,
        nm_h => Speed::nm_h,
        ft_s => Speed::ft_s,
        ft_min => Speed::ft_min,
        km_h => Speed::km_h,

        celsius => Temperature::c,
        kelvin => Temperature::k,
        fahrenheit => Temperature::f,

        s => Time::s,
        ms => Time::ms,
        mins => Time::min,
        h => Time::h,
        d => Time::d,

        m_s2 => Acceleration::m_s2,
        ft_s2 => Acceleration::ft_s2,
    }
}

impl QuantityLiterals for f64 {
    fn literal_value(self) -> f64 {
        self
    }
}

impl QuantityLiterals for i32 {
    fn literal_value(self) -> f64 {
        f64::from(self)
    }
}
