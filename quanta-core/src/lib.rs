//! Quanta Core - Fundamental types
//!
//! This crate provides the kind-agnostic building blocks used by `quanta-units`:
//! - `Converter`: conversion strategies to and from a canonical unit
//! - `numeric`: locale-aware number parsing, rounding and fixed-point formatting
//! - `ParseError`: why text could not be read as a quantity

mod converter;
mod error;
pub mod numeric;

pub use converter::{Converter, Subdivision, CENTI, GIGA, HECTO, KILO, MEGA, MILLI};
pub use error::{codes, ParseError};
pub use numeric::{Locale, SeparatorMode};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::error::codes;
    pub use crate::{Converter, Locale, ParseError, SeparatorMode, Subdivision};
}
