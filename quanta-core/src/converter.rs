//! Conversion strategies between a unit's own scale and its kind's canonical scale
//!
//! Every unit carries exactly one [`Converter`]. Converting between two units
//! of the same kind always goes through the canonical unit:
//! `target.from_canonical(source.to_canonical(value))`.

/// 10^-3
pub const MILLI: f64 = 1e-3;
/// 10^-2
pub const CENTI: f64 = 1e-2;
/// 10^2
pub const HECTO: f64 = 1e2;
/// 10^3
pub const KILO: f64 = 1e3;
/// 10^6
pub const MEGA: f64 = 1e6;
/// 10^9
pub const GIGA: f64 = 1e9;

const SNAP: f64 = 1e-9;

/// How the decimal digits of a packed value encode sub-units.
///
/// `fraction` is the decimal weight of one sub-unit level (100 = two digits),
/// `subfactor` is how many sub-units make one unit of the level above
/// (60 for minutes per degree or per hour).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Subdivision {
    pub fraction: f64,
    pub subfactor: f64,
}

impl Subdivision {
    /// Two decimal digits per level holding a count out of `subfactor`
    pub const fn in_each_hundred(subfactor: u32) -> Self {
        Subdivision {
            fraction: 100.0,
            subfactor: subfactor as f64,
        }
    }
}

/// Strategy converting a value to and from the canonical unit of its kind
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Converter {
    /// The canonical unit itself
    Identity,
    /// `canonical = value * factor`
    Linear { factor: f64 },
    /// `canonical = (value - offset) * factor`
    Affine { factor: f64, offset: f64 },
    /// Integer part in whole units, first two decimals a sub-unit count
    /// (e.g. `35.436` = 35°43.6')
    Subdivision { factor: f64, subdivision: Subdivision },
    /// Integer part in whole units, then two sub-unit levels
    /// (e.g. `35.4336` = 35°43'36")
    Subdivision2 { factor: f64, subdivision: Subdivision },
}

impl Converter {
    pub const fn linear(factor: f64) -> Self {
        Converter::Linear { factor }
    }

    pub const fn affine(factor: f64, offset: f64) -> Self {
        Converter::Affine { factor, offset }
    }

    pub const fn subdivision(factor: f64, subdivision: Subdivision) -> Self {
        Converter::Subdivision { factor, subdivision }
    }

    pub const fn subdivision2(factor: f64, subdivision: Subdivision) -> Self {
        Converter::Subdivision2 { factor, subdivision }
    }

    /// Number of packed sub-unit levels (0 for flat scales)
    pub fn subdivision_levels(&self) -> u8 {
        match self {
            Converter::Subdivision { .. } => 1,
            Converter::Subdivision2 { .. } => 2,
            _ => 0,
        }
    }

    /// Packing of the sub-unit levels, if any
    pub fn packing(&self) -> Option<Subdivision> {
        match *self {
            Converter::Subdivision { subdivision, .. } | Converter::Subdivision2 { subdivision, .. } => Some(subdivision),
            _ => None,
        }
    }

    /// Convert a value in this unit to the canonical unit
    pub fn to_canonical(&self, value: f64) -> f64 {
        match *self {
            Converter::Identity => value,
            Converter::Linear { factor } => value * factor,
            Converter::Affine { factor, offset } => (value - offset) * factor,
            Converter::Subdivision { factor, subdivision: sub } => {
                let part2 = value.fract() * sub.fraction;
                (value.trunc() + part2 / sub.subfactor) * factor
            }
            Converter::Subdivision2 { factor, subdivision: sub } => {
                let mut part2 = value.fract() * sub.fraction;
                if (part2.round() - part2).abs() < SNAP {
                    part2 = part2.round();
                }
                let part3 = part2.fract() * sub.fraction;
                let unpacked = value.trunc() + (part2.trunc() + part3 / sub.subfactor) / sub.subfactor;
                unpacked * factor
            }
        }
    }

    /// Convert a canonical value into this unit
    pub fn from_canonical(&self, value: f64) -> f64 {
        match *self {
            Converter::Identity => value,
            Converter::Linear { factor } => value / factor,
            Converter::Affine { factor, offset } => value / factor + offset,
            Converter::Subdivision { factor, subdivision: sub } => {
                let scaled = value / factor;
                let part1 = scaled.trunc();
                let part2 = (scaled % 1.0) * sub.subfactor;
                part1 + part2 / sub.fraction
            }
            Converter::Subdivision2 { factor, subdivision: sub } => {
                let scaled = value / factor;
                let mut part1 = scaled.trunc();
                let mut minutes = (scaled % 1.0) * sub.subfactor;
                // 4.9999999999 minutes is 5 minutes, not 4 minutes 59.99 seconds
                if (minutes.round() - minutes).abs() < SNAP {
                    minutes = minutes.round();
                }
                if minutes.abs() >= sub.subfactor {
                    part1 += minutes.signum();
                    minutes = 0.0;
                }
                let part2 = minutes.trunc();
                let part3 = (minutes % 1.0) * sub.subfactor;
                part1 + part2 / sub.fraction + part3 / (sub.fraction * sub.fraction)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const SEXAGESIMAL: Subdivision = Subdivision::in_each_hundred(60);

    #[test]
    fn test_identity() {
        assert_eq!(Converter::Identity.to_canonical(42.5), 42.5);
        assert_eq!(Converter::Identity.from_canonical(-3.0), -3.0);
    }

    #[test]
    fn test_linear() {
        let nm = Converter::linear(1852.0);
        assert_eq!(nm.to_canonical(2.0), 3704.0);
        assert_eq!(nm.from_canonical(926.0), 0.5);

        let km = Converter::linear(KILO);
        assert_eq!(km.to_canonical(1.5), 1500.0);
    }

    #[test]
    fn test_affine_kelvin() {
        let kelvin = Converter::affine(1.0, 273.15);
        assert_abs_diff_eq!(kelvin.to_canonical(273.15), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(kelvin.from_canonical(0.0), 273.15, epsilon = 1e-12);
    }

    #[test]
    fn test_affine_fahrenheit() {
        let fahrenheit = Converter::affine(5.0 / 9.0, 32.0);
        assert_abs_diff_eq!(fahrenheit.to_canonical(212.0), 100.0, epsilon = 1e-12);
        assert_abs_diff_eq!(fahrenheit.from_canonical(-40.0), -40.0, epsilon = 1e-12);
    }

    #[test]
    fn test_subdivision_one_level() {
        // 35 degrees 43.6 minutes
        let degmin = Converter::subdivision(1.0, SEXAGESIMAL);
        assert_abs_diff_eq!(degmin.to_canonical(35.436), 35.726_666_666, epsilon = 1e-6);
        assert_abs_diff_eq!(degmin.from_canonical(35.726_666_666_666_67), 35.436, epsilon = 1e-9);
    }

    #[test]
    fn test_subdivision_two_levels() {
        // 35 degrees 43 minutes 36 seconds
        let dms = Converter::subdivision2(1.0, SEXAGESIMAL);
        assert_abs_diff_eq!(dms.to_canonical(35.4336), 35.726_666_666, epsilon = 1e-6);
        assert_abs_diff_eq!(dms.from_canonical(35.726_666_666_666_67), 35.4336, epsilon = 1e-9);
    }

    #[test]
    fn test_subdivision_negative() {
        let dms = Converter::subdivision2(1.0, SEXAGESIMAL);
        assert_abs_diff_eq!(dms.to_canonical(-60.3015), -60.5042, epsilon = 1e-4);
    }

    #[test]
    fn test_subdivision_with_factor() {
        // 1h01m01s in seconds
        let hms = Converter::subdivision2(3600.0, SEXAGESIMAL);
        assert_abs_diff_eq!(hms.to_canonical(1.0101), 3661.0, epsilon = 1e-6);
        assert_abs_diff_eq!(hms.from_canonical(3661.0), 1.0101, epsilon = 1e-9);

        // 1.5h is 1h30m
        let hm = Converter::subdivision(3600.0, SEXAGESIMAL);
        assert_abs_diff_eq!(hm.from_canonical(5400.0), 1.3, epsilon = 1e-9);
    }

    #[test]
    fn test_subdivision_whole_minutes() {
        let dms = Converter::subdivision2(1.0, SEXAGESIMAL);
        assert_abs_diff_eq!(dms.to_canonical(35.43), 35.716_666_666, epsilon = 1e-6);
        let canonical = dms.to_canonical(10.05);
        assert_abs_diff_eq!(dms.from_canonical(canonical), 10.05, epsilon = 1e-9);
    }

    #[test]
    fn test_subdivision_levels() {
        assert_eq!(Converter::Identity.subdivision_levels(), 0);
        assert_eq!(Converter::subdivision(1.0, SEXAGESIMAL).subdivision_levels(), 1);
        assert_eq!(Converter::subdivision2(1.0, SEXAGESIMAL).subdivision_levels(), 2);
        assert_eq!(Converter::subdivision2(1.0, SEXAGESIMAL).packing(), Some(SEXAGESIMAL));
        assert_eq!(Converter::linear(2.0).packing(), None);
    }
}
