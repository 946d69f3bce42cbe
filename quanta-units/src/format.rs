//! Text rendering of unit values
//!
//! Flat units print as `<number> <symbol>`. Subdivision units print their
//! packed digits as separate groups following the unit's [`GroupLayout`]:
//! `35 43 36` (DMS), `51 23.45` (degree, decimal minute), `01h01m01s` (hms).

use quanta_core::numeric::{format_fixed, MAX_DIGITS};
use quanta_core::Locale;

use crate::kind::UnitKind;
use crate::unit::{GroupLayout, Unit};

/// Format `value` (expressed in `unit`) with `digits` decimals, or the unit's
/// display digits when `None`
pub(crate) fn format_with_unit<K: UnitKind>(
    unit: Unit<K>,
    value: f64,
    digits: Option<u32>,
    with_group_separator: bool,
    locale: &Locale,
) -> String {
    let digits = digits.unwrap_or_else(|| unit.digits());
    let packing = unit.data().converter.and_then(|c| c.packing());
    let grouped = match (unit.layout(), packing) {
        (Some(layout), Some(packing)) if value.is_finite() => format_grouped(
            value,
            digits,
            unit.subdivision_levels(),
            packing.subfactor as u64,
            layout,
            locale,
        ),
        _ => None,
    };
    grouped.unwrap_or_else(|| {
        format!(
            "{} {}",
            format_fixed(value, digits as usize, locale, with_group_separator),
            unit.symbol()
        )
    })
}

/// Split a packed value into whole units and one or two two-digit sub-unit
/// groups, the last group keeping any remaining decimals.
///
/// A group rounded up to a full `subfactor` carries into the level above.
/// `None` when the value is too large to split exactly.
fn format_grouped(
    value: f64,
    digits: u32,
    levels: u8,
    subfactor: u64,
    layout: GroupLayout,
    locale: &Locale,
) -> Option<String> {
    let levels = usize::from(levels);
    let digits = digits.max(2 * levels as u32).min(MAX_DIGITS);
    let scale = 10u64.pow(digits);
    let scaled = (value.abs() * scale as f64).round();
    if scaled >= u64::MAX as f64 {
        return None;
    }
    let scaled = scaled as u64;
    let mut whole = scaled / scale;
    let mut remainder = scaled % scale;

    let mut groups = [0u64; 2];
    let mut remaining_digits = digits;
    for group in groups.iter_mut().take(levels) {
        remaining_digits -= 2;
        let weight = 10u64.pow(remaining_digits);
        *group = remainder / weight;
        remainder %= weight;
    }

    for level in (0..levels).rev() {
        if groups[level] >= subfactor {
            groups[level] -= subfactor;
            if level == 0 {
                whole += 1;
            } else {
                groups[level - 1] += 1;
            }
        }
    }

    let mut out = String::new();
    if value < 0.0 && scaled > 0 {
        out.push('-');
    }
    out.push_str(&format!("{:0width$}", whole, width = layout.whole_width));
    out.push_str(layout.marks[0]);

    for (level, group) in groups.iter().take(levels).enumerate() {
        out.push_str(&format!("{:02}", group));
        if level + 1 == levels && remaining_digits > 0 {
            out.push(locale.decimal);
            out.push_str(&format!("{:0width$}", remainder, width = remaining_digits as usize));
        }
        out.push_str(layout.marks[level + 1]);
    }
    Some(out)
}
