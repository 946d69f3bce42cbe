//! Temperature units (canonical: degree Celsius)

use quanta_core::Converter;

use crate::unit::UnitData;

static CELSIUS: UnitData = UnitData::new("centigrade", "C", Converter::Identity).with_aliases(&["°C"]);
static KELVIN: UnitData = UnitData::new("Kelvin", "K", Converter::affine(1.0, 273.15));
static FAHRENHEIT: UnitData =
    UnitData::new("Fahrenheit", "F", Converter::affine(5.0 / 9.0, 32.0)).with_aliases(&["°F"]);

define_kind! {
    /// Temperature; conversions are affine, not proportional
    kind Temperature = "temperature", Temperature;
    units {
        c => CELSIUS,
        k => KELVIN,
        f => FAHRENHEIT,
    }
}

#[cfg(test)]
mod tests {
    use crate::{Quantity, Temperature, TemperatureUnit};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_celsius_to_kelvin() {
        let q = Quantity::<Temperature>::new(0.0, TemperatureUnit::c());
        assert_abs_diff_eq!(q.value_in(TemperatureUnit::k()), 273.15, epsilon = 1e-9);
    }

    #[test]
    fn test_fahrenheit() {
        let one = Quantity::<Temperature>::new(1.0, TemperatureUnit::f());
        assert_eq!(one.value_rounded_in(TemperatureUnit::c(), None), -17.22);

        let hot = Quantity::<Temperature>::new(220.15, TemperatureUnit::f());
        assert_eq!(hot.value_rounded_in(TemperatureUnit::c(), None), 104.53);

        let cold = Quantity::<Temperature>::new(10.0, TemperatureUnit::f());
        assert_eq!(cold.value_rounded_in(TemperatureUnit::k(), None), 260.93);
    }
}
