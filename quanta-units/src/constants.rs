//! Reference values of the standard atmosphere

use crate::kinds::{Acceleration, Pressure, Temperature};
use crate::literals::QuantityLiterals;
use crate::quantity::Quantity;

/// ISA sea-level pressure, 1013.25 hPa
pub fn isa_standard_pressure() -> Quantity<Pressure> {
    1013.25_f64.hpa()
}

/// ISA sea-level temperature, 15 °C
pub fn isa_standard_temperature() -> Quantity<Temperature> {
    15.0_f64.celsius()
}

/// Standard gravity, 9.80665 m/s²
pub fn standard_gravity() -> Quantity<Acceleration> {
    9.80665_f64.m_s2()
}

/// Standard altimeter setting, 29.92 inHg
pub fn standard_altimeter_setting() -> Quantity<Pressure> {
    29.92_f64.in_hg()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AccelerationUnit, PressureUnit};

    #[test]
    fn test_isa_pressure_is_not_altimeter_setting() {
        assert_ne!(isa_standard_pressure(), standard_altimeter_setting());
        let in_hg = isa_standard_pressure().value_rounded_in(PressureUnit::in_hg(), None);
        assert_eq!(in_hg, 29.92);
    }

    #[test]
    fn test_gravity_in_feet() {
        let g = standard_gravity().value_rounded_in(AccelerationUnit::ft_s2(), Some(2));
        assert_eq!(g, 32.17);
    }

    #[test]
    fn test_isa_temperature() {
        assert_eq!(isa_standard_temperature().to_string(), "15.00 C");
    }
}
