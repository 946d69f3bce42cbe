//! The capability every quantity kind provides to the generic engine

use quanta_core::{Locale, SeparatorMode};

use crate::any::{AnyQuantity, KindId};
use crate::quantity::Quantity;
use crate::registry::Registry;
use crate::unit::Unit;

/// A family of mutually convertible units (length, speed, ...).
///
/// Implemented by zero-sized marker types; `Quantity<K>` and `Unit<K>` of
/// different kinds never mix.
pub trait UnitKind: Sized + Copy + Send + Sync + 'static {
    /// Lower-case kind name
    const NAME: &'static str;

    /// Runtime identifier used by dynamically typed quantities
    const ID: KindId;

    fn registry() -> &'static Registry<Self>;

    /// The canonical unit, through which every conversion is routed
    fn default_unit() -> Unit<Self> {
        Self::registry().default_unit()
    }

    fn null_unit() -> Unit<Self> {
        Self::registry().null_unit()
    }

    fn all_units() -> &'static [Unit<Self>] {
        Self::registry().units()
    }

    fn into_any(quantity: Quantity<Self>) -> AnyQuantity;

    fn from_any(any: AnyQuantity) -> Option<Quantity<Self>>;

    /// Kind-specific textual forms tried after the generic `<number> <symbol>`
    /// form fails
    fn parse_special(_text: &str, _mode: SeparatorMode, _locale: &Locale) -> Option<Quantity<Self>> {
        None
    }
}
