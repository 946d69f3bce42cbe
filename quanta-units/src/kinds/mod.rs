//! The nine quantity kinds and their unit tables
//!
//! Each kind is a zero-sized marker implementing [`UnitKind`](crate::UnitKind).
//! Its descriptors are `static` items; named accessors on `Unit<Kind>`
//! (`Unit::<Length>::ft()`, ...) hand out typed handles to them.

macro_rules! define_kind {
    (
        $(#[$meta:meta])*
        kind $kind:ident = $name:literal, $variant:ident;
        $(parse_special = $special:path;)?
        units {
            $( $(#[$umeta:meta])* $accessor:ident => $data:ident ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub struct $kind;

        static NULL_UNIT: $crate::unit::UnitData = $crate::unit::UnitData::null();

        static REGISTRY: std::sync::LazyLock<$crate::registry::Registry<$kind>> =
            std::sync::LazyLock::new(|| $crate::registry::Registry::new(&[&NULL_UNIT, $(&$data),+]));

        impl $crate::kind::UnitKind for $kind {
            const NAME: &'static str = $name;
            const ID: $crate::any::KindId = $crate::any::KindId::$variant;

            fn registry() -> &'static $crate::registry::Registry<Self> {
                &REGISTRY
            }

            fn into_any(quantity: $crate::quantity::Quantity<Self>) -> $crate::any::AnyQuantity {
                $crate::any::AnyQuantity::$variant(quantity)
            }

            fn from_any(any: $crate::any::AnyQuantity) -> Option<$crate::quantity::Quantity<Self>> {
                match any {
                    $crate::any::AnyQuantity::$variant(quantity) => Some(quantity),
                    _ => None,
                }
            }

            $(
                fn parse_special(
                    text: &str,
                    mode: quanta_core::SeparatorMode,
                    locale: &quanta_core::Locale,
                ) -> Option<$crate::quantity::Quantity<Self>> {
                    $special(text, mode, locale)
                }
            )?
        }

        impl $crate::unit::Unit<$kind> {
            $(
                $(#[$umeta])*
                pub fn $accessor() -> Self {
                    Self::new(&$data)
                }
            )+
        }
    };
}

mod acceleration;
mod angle;
mod frequency;
mod length;
mod mass;
mod pressure;
mod speed;
mod temperature;
mod time;

pub use acceleration::Acceleration;
pub use angle::Angle;
pub use frequency::Frequency;
pub use length::Length;
pub use mass::Mass;
pub use pressure::Pressure;
pub use speed::Speed;
pub use temperature::Temperature;
pub use time::Time;

#[cfg(test)]
mod tests {
    use crate::kind::UnitKind;
    use crate::*;

    fn assert_registry_valid<K: UnitKind>() {
        let units = K::all_units();
        assert!(!units.is_empty(), "{} has no units", K::NAME);
        assert_eq!(units[0], K::default_unit());
        assert!(K::null_unit().is_null());
        for unit in units {
            assert!(!unit.is_null());
            assert_eq!(Unit::<K>::from_symbol(unit.symbol()), Some(*unit), "{} {}", K::NAME, unit.symbol());
            for alias in unit.aliases() {
                assert_eq!(Unit::<K>::from_symbol(alias), Some(*unit));
            }
        }
    }

    #[test]
    fn test_all_registries_valid() {
        assert_registry_valid::<Acceleration>();
        assert_registry_valid::<Angle>();
        assert_registry_valid::<Frequency>();
        assert_registry_valid::<Length>();
        assert_registry_valid::<Mass>();
        assert_registry_valid::<Pressure>();
        assert_registry_valid::<Speed>();
        assert_registry_valid::<Temperature>();
        assert_registry_valid::<Time>();
    }

    #[test]
    fn test_canonical_units() {
        assert_eq!(Length::default_unit().symbol(), "m");
        assert_eq!(Angle::default_unit().symbol(), "deg");
        assert_eq!(Frequency::default_unit().symbol(), "Hz");
        assert_eq!(Mass::default_unit().symbol(), "kg");
        assert_eq!(Pressure::default_unit().symbol(), "hPa");
        assert_eq!(Speed::default_unit().symbol(), "m/s");
        assert_eq!(Temperature::default_unit().symbol(), "C");
        assert_eq!(Time::default_unit().symbol(), "s");
        assert_eq!(Acceleration::default_unit().symbol(), "m/s^2");
    }
}
