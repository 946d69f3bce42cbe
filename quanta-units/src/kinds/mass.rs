//! Mass units (canonical: kilogram)

use quanta_core::{Converter, KILO, MILLI};

use crate::unit::UnitData;

static KILOGRAM: UnitData = UnitData::new("kilogram", "kg", Converter::Identity).with_digits(1);
static GRAM: UnitData = UnitData::new("gram", "g", Converter::linear(MILLI)).with_digits(0);
static TONNE: UnitData = UnitData::new("tonne", "t", Converter::linear(KILO)).with_digits(3);
static SHORT_TON: UnitData = UnitData::new("short ton", "ton", Converter::linear(907.18474))
    .with_digits(3)
    .with_aliases(&["shortTon"]);
static POUND: UnitData = UnitData::new("pound", "lb", Converter::linear(0.45359237)).with_digits(1);

define_kind! {
    kind Mass = "mass", Mass;
    units {
        kg => KILOGRAM,
        g => GRAM,
        /// Metric ton
        t => TONNE,
        /// 2000 lb
        short_ton => SHORT_TON,
        lb => POUND,
    }
}

#[cfg(test)]
mod tests {
    use crate::{Mass, MassUnit, Quantity};
    use approx::assert_relative_eq;

    #[test]
    fn test_tonne() {
        let kg = Quantity::<Mass>::new(1000.0, MassUnit::kg());
        let t = Quantity::<Mass>::new(1.0, MassUnit::t());
        assert_eq!(kg, t);
        assert_relative_eq!(t.value_in(MassUnit::lb()), 2204.62, epsilon = 0.01);
    }

    #[test]
    fn test_short_ton() {
        let ton = Quantity::<Mass>::new(1.0, MassUnit::short_ton());
        assert_relative_eq!(ton.value_in(MassUnit::lb()), 2000.0, epsilon = 1e-9);
    }
}
