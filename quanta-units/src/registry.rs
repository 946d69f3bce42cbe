//! Per-kind unit registries
//!
//! Each kind owns one `Registry`, built lazily from its `static` descriptors
//! the first time it is used and never mutated afterwards.

use std::collections::HashMap;

use tracing::debug;

use crate::kind::UnitKind;
use crate::unit::{Unit, UnitData};

/// Registry of all units of one kind
pub struct Registry<K: UnitKind> {
    units: Vec<Unit<K>>,
    null: Unit<K>,
    symbols: HashMap<String, Unit<K>>,
    aliases: HashMap<String, Unit<K>>,
    case_sensitive: bool,
}

impl<K: UnitKind> Registry<K> {
    /// Build a registry from descriptors, canonical unit first.
    ///
    /// # Panics
    /// Unless the table holds exactly one null unit, a canonical unit with an
    /// identity converter, and a converter for every other unit.
    pub fn new(table: &[&'static UnitData]) -> Self {
        let nulls: Vec<_> = table.iter().filter(|d| d.null).collect();
        assert!(
            nulls.len() == 1,
            "{} registry needs exactly one null unit, found {}",
            K::NAME,
            nulls.len()
        );
        let null = Unit::new(*nulls[0]);

        let units: Vec<Unit<K>> = table
            .iter()
            .filter(|d| !d.null)
            .map(|d| {
                assert!(d.converter.is_some(), "{} unit '{}' has no converter", K::NAME, d.name);
                Unit::new(*d)
            })
            .collect();
        assert!(
            matches!(units.first().and_then(|u| u.data().converter), Some(quanta_core::Converter::Identity)),
            "{} registry must start with its canonical unit",
            K::NAME
        );

        let case_sensitive = has_case_collision(&units);
        let mut registry = Registry {
            units,
            null,
            symbols: HashMap::new(),
            aliases: HashMap::new(),
            case_sensitive,
        };
        for unit in registry.units.clone() {
            registry.register(unit);
        }

        debug!(
            kind = K::NAME,
            units = registry.units.len(),
            case_sensitive,
            "unit registry built"
        );
        registry
    }

    fn key(&self, symbol: &str) -> String {
        if self.case_sensitive {
            symbol.to_string()
        } else {
            symbol.to_lowercase()
        }
    }

    fn register(&mut self, unit: Unit<K>) {
        let key = self.key(unit.symbol());
        self.symbols.insert(key, unit);
        for alias in unit.aliases() {
            self.alias(alias, unit);
        }
    }

    fn alias(&mut self, alias: &str, unit: Unit<K>) {
        let key = self.key(alias);
        self.aliases.insert(key, unit);
    }

    /// Get a non-null unit by symbol, then by alias
    pub fn find(&self, symbol: &str) -> Option<Unit<K>> {
        let symbol = symbol.trim();
        if symbol.is_empty() {
            return None;
        }
        let key = self.key(symbol);
        self.symbols
            .get(&key)
            .or_else(|| self.aliases.get(&key))
            .copied()
    }

    /// Non-null units, canonical first
    pub fn units(&self) -> &[Unit<K>] {
        &self.units
    }

    pub fn default_unit(&self) -> Unit<K> {
        self.units[0]
    }

    pub fn null_unit(&self) -> Unit<K> {
        self.null
    }

    /// Whether symbol lookup distinguishes case
    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// All unit symbols
    pub fn symbols(&self) -> Vec<&'static str> {
        self.units.iter().map(|u| u.symbol()).collect()
    }
}

/// True if two symbols or aliases of the kind differ only by case
fn has_case_collision<K: UnitKind>(units: &[Unit<K>]) -> bool {
    let mut seen: HashMap<String, &str> = HashMap::new();
    for unit in units {
        for name in std::iter::once(unit.symbol()).chain(unit.aliases().iter().copied()) {
            if let Some(previous) = seen.insert(name.to_lowercase(), name) {
                if previous != name {
                    return true;
                }
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinds::{Mass, Pressure, Temperature};
    use quanta_core::Converter;

    static NULL: UnitData = UnitData::null();
    static MBAR: UnitData = UnitData::new("millibar", "mbar", Converter::Identity);
    static MEGABAR: UnitData = UnitData::new("megabar", "Mbar", Converter::linear(1e9));
    static NO_CONVERTER: UnitData = UnitData {
        converter: None,
        ..UnitData::new("broken", "brk", Converter::Identity)
    };

    #[test]
    fn test_case_insensitive_lookup() {
        let registry = Mass::registry();
        assert!(!registry.is_case_sensitive());
        assert_eq!(registry.find("KG").map(|u| u.symbol()), Some("kg"));
        assert_eq!(registry.find("shortton").map(|u| u.symbol()), Some("ton"));
    }

    #[test]
    fn test_case_sensitive_when_symbols_collide() {
        let registry: Registry<Pressure> = Registry::new(&[&NULL, &MBAR, &MEGABAR]);
        assert!(registry.is_case_sensitive());
        assert_eq!(registry.find("mbar").map(|u| u.name()), Some("millibar"));
        assert_eq!(registry.find("Mbar").map(|u| u.name()), Some("megabar"));
        assert!(registry.find("MBAR").is_none());
    }

    #[test]
    fn test_alias_lookup() {
        let registry = Temperature::registry();
        assert_eq!(registry.find("°C").map(|u| u.symbol()), Some("C"));
        assert_eq!(registry.find("°F").map(|u| u.symbol()), Some("F"));
    }

    #[test]
    fn test_null_not_findable() {
        assert!(Mass::registry().find("null").is_none());
        assert!(Mass::registry().find("").is_none());
        assert!(Mass::registry().null_unit().is_null());
    }

    #[test]
    fn test_canonical_first() {
        let registry = Pressure::registry();
        assert_eq!(registry.default_unit().symbol(), "hPa");
        assert_eq!(registry.units()[0], registry.default_unit());
        assert!(registry.symbols().contains(&"inHg"));
    }

    #[test]
    #[should_panic(expected = "exactly one null unit")]
    fn test_missing_null_panics() {
        let _: Registry<Pressure> = Registry::new(&[&MBAR]);
    }

    #[test]
    #[should_panic(expected = "exactly one null unit")]
    fn test_two_nulls_panics() {
        let _: Registry<Pressure> = Registry::new(&[&NULL, &NULL, &MBAR]);
    }

    #[test]
    #[should_panic(expected = "has no converter")]
    fn test_missing_converter_panics() {
        let _: Registry<Pressure> = Registry::new(&[&NULL, &MBAR, &NO_CONVERTER]);
    }
}
