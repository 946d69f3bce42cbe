//! Pressure units (canonical: hectopascal)

use quanta_core::{Converter, CENTI, KILO};

use crate::unit::UnitData;

static HECTOPASCAL: UnitData = UnitData::new("hectopascal", "hPa", Converter::Identity);
static PASCAL: UnitData = UnitData::new("pascal", "Pa", Converter::linear(CENTI));
static PSI: UnitData = UnitData::new("pound per square inch", "psi", Converter::linear(68.948));
static BAR: UnitData = UnitData::new("bar", "bar", Converter::linear(KILO)).with_digits(1);
static MILLIBAR: UnitData = UnitData::new("millibar", "mbar", Converter::Identity).with_digits(1);
static INCH_OF_MERCURY: UnitData = UnitData::new("inch of mercury", "inHg", Converter::linear(33.86389));
static MILLIMETER_OF_MERCURY: UnitData =
    UnitData::new("millimeter of mercury", "mmHg", Converter::linear(1.33322387415));

define_kind! {
    /// Atmospheric and fluid pressure
    kind Pressure = "pressure", Pressure;
    units {
        hpa => HECTOPASCAL,
        pa => PASCAL,
        psi => PSI,
        bar => BAR,
        /// Same scale as hPa, kept distinct for display
        mbar => MILLIBAR,
        in_hg => INCH_OF_MERCURY,
        mm_hg => MILLIMETER_OF_MERCURY,
    }
}

#[cfg(test)]
mod tests {
    use crate::{Pressure, PressureUnit, Quantity};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_millibar_difference() {
        let diff = Quantity::<Pressure>::new(1013.2, PressureUnit::mbar())
            - Quantity::<Pressure>::new(918.0, PressureUnit::mbar());
        assert_abs_diff_eq!(diff.value(), 95.2, epsilon = 1e-9);
    }

    #[test]
    fn test_mercury_units() {
        let std_atmosphere = Quantity::<Pressure>::new(760.0, PressureUnit::mm_hg());
        assert_abs_diff_eq!(std_atmosphere.value_in(PressureUnit::hpa()), 1013.25, epsilon = 0.01);

        let altimeter = Quantity::<Pressure>::new(29.92, PressureUnit::in_hg());
        assert_abs_diff_eq!(altimeter.value_in(PressureUnit::hpa()), 1013.2, epsilon = 0.1);
        assert!(altimeter != Quantity::<Pressure>::new(1013.25, PressureUnit::hpa()));
    }

    #[test]
    fn test_hpa_and_mbar_are_distinct_units() {
        assert_ne!(PressureUnit::hpa(), PressureUnit::mbar());
        let hpa = Quantity::<Pressure>::new(1013.0, PressureUnit::hpa());
        let mbar = Quantity::<Pressure>::new(1013.0, PressureUnit::mbar());
        assert_eq!(hpa, mbar);
    }
}
