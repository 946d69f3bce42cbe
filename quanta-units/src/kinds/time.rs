//! Time units (canonical: second) and clock notation

use std::time::Duration;

use quanta_core::{Converter, Locale, SeparatorMode, Subdivision, MILLI};

use crate::quantity::Quantity;
use crate::unit::{Unit, UnitData};

const SEXAGESIMAL: Subdivision = Subdivision::in_each_hundred(60);

static SECOND: UnitData = UnitData::new("second", "s", Converter::Identity).with_digits(1);
static MILLISECOND: UnitData = UnitData::new("millisecond", "ms", Converter::linear(MILLI)).with_digits(0);
static MINUTE: UnitData = UnitData::new("minute", "min", Converter::linear(60.0));
static HOUR: UnitData = UnitData::new("hour", "h", Converter::linear(3600.0)).with_digits(1);
static DAY: UnitData = UnitData::new("day", "d", Converter::linear(86400.0)).with_digits(1);
static HOUR_MINUTE_SECOND: UnitData =
    UnitData::new("hour, minute, second", "hms", Converter::subdivision2(3600.0, SEXAGESIMAL))
        .with_digits(4)
        .with_layout(2, ["h", "m", "s"]);
static HOUR_MINUTE: UnitData =
    UnitData::new("hour, minute", "hm", Converter::subdivision(3600.0, SEXAGESIMAL))
        .with_digits(3)
        .with_layout(2, ["h", "m", ""]);
static MINUTE_SECOND: UnitData =
    UnitData::new("minute, second", "minsec", Converter::subdivision(60.0, SEXAGESIMAL))
        .with_layout(2, ["m", "s", ""]);

define_kind! {
    /// Durations and clock times
    kind Time = "time", Time;
    parse_special = parse_clock;
    units {
        s => SECOND,
        ms => MILLISECOND,
        min => MINUTE,
        h => HOUR,
        d => DAY,
        /// Hours, minutes and seconds packed as `HH.MMSS`
        hms => HOUR_MINUTE_SECOND,
        /// Hours and decimal minutes packed as `HH.MMm`
        hm => HOUR_MINUTE,
        /// Minutes and seconds packed as `MM.SS`
        minsec => MINUTE_SECOND,
    }
}

/// Parse `H:MM` or `H:MM:SS`, optionally negative, into seconds
fn parse_clock(text: &str, _mode: SeparatorMode, _locale: &Locale) -> Option<Quantity<Time>> {
    let text = text.trim();
    let (negative, body) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };

    let fields: Vec<&str> = body.split(':').collect();
    if !(2..=3).contains(&fields.len()) {
        return None;
    }
    let hours = fields[0];
    if hours.is_empty() || !hours.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    for field in &fields[1..] {
        if field.len() != 2 || !field.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
    }

    let hours: u32 = hours.parse().ok()?;
    let minutes: u32 = fields[1].parse().ok()?;
    let seconds: u32 = match fields.get(2) {
        Some(s) => s.parse().ok()?,
        None => 0,
    };
    if minutes >= 60 || seconds >= 60 {
        return None;
    }

    let q = Quantity::<Time>::from_hms(hours, minutes, seconds);
    Some(if negative { -q } else { q })
}

impl Quantity<Time> {
    /// Quantity in seconds from clock components
    pub fn from_hms(hours: u32, minutes: u32, seconds: u32) -> Self {
        let total = f64::from(hours) * 3600.0 + f64::from(minutes) * 60.0 + f64::from(seconds);
        Quantity::new(total, Unit::<Time>::s())
    }

    /// Whole hours, minutes and seconds of the absolute value, and the sign.
    /// Kept in `f64` so very long durations do not saturate.
    fn clock_parts(&self) -> (bool, f64, f64, f64) {
        let seconds = self.value_in(Unit::<Time>::s());
        let total = seconds.abs().round();
        let hours = (total / 3600.0).floor();
        let minutes = ((total - hours * 3600.0) / 60.0).floor().clamp(0.0, 59.0);
        let secs = (total - hours * 3600.0 - minutes * 60.0).clamp(0.0, 59.0);
        (seconds < 0.0 && total > 0.0, hours, minutes, secs)
    }

    /// `HH:MM:SS`, hours not wrapped at 24; empty when null
    pub fn formatted_hrs_min_sec(&self) -> String {
        if self.is_null() {
            return String::new();
        }
        let (negative, h, m, s) = self.clock_parts();
        format!("{}{:02.0}:{:02.0}:{:02.0}", if negative { "-" } else { "" }, h, m, s)
    }

    /// `HH:MM`, seconds truncated; empty when null
    pub fn formatted_hrs_min(&self) -> String {
        if self.is_null() {
            return String::new();
        }
        let (negative, h, m, _) = self.clock_parts();
        format!("{}{:02.0}:{:02.0}", if negative { "-" } else { "" }, h, m)
    }

    /// Non-negative, non-null times as a std duration
    pub fn to_duration(&self) -> Option<Duration> {
        if self.is_null() {
            return None;
        }
        let seconds = self.value_in(Unit::<Time>::s());
        if seconds < 0.0 || !seconds.is_finite() {
            return None;
        }
        Some(Duration::from_secs_f64(seconds))
    }

    pub fn from_duration(duration: Duration) -> Self {
        Quantity::new(duration.as_secs_f64(), Unit::<Time>::s())
    }
}
