//! Runtime configuration read from `QUANTA_*` environment variables

use std::env;

use quanta_core::numeric::MAX_DIGITS;
use quanta_core::{Locale, SeparatorMode};
use tracing::warn;

pub const SEPARATOR_MODE_VAR: &str = "QUANTA_SEPARATOR_MODE";
pub const LOCALE_VAR: &str = "QUANTA_LOCALE";
pub const DIGITS_VAR: &str = "QUANTA_DIGITS";
pub const I18N_VAR: &str = "QUANTA_I18N";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// How numbers in request text are read
    pub mode: SeparatorMode,
    /// Locale consulted by the locale and best-guess modes
    pub locale: Locale,
    /// Display digits; `None` uses each unit's own
    pub digits: Option<u32>,
    /// Format responses with the process locale
    pub i18n: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            mode: SeparatorMode::default(),
            locale: Locale::current(),
            digits: None,
            i18n: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup. Invalid values are logged and
    /// replaced by their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(raw) = get(SEPARATOR_MODE_VAR) {
            match raw.parse::<SeparatorMode>() {
                Ok(mode) => config.mode = mode,
                Err(e) => warn!(var = SEPARATOR_MODE_VAR, value = %raw, error = %e, "ignoring invalid value"),
            }
        }

        if let Some(tag) = get(LOCALE_VAR) {
            config.locale = Locale::for_tag(&tag);
        }

        if let Some(raw) = get(DIGITS_VAR) {
            match raw.trim().parse::<u32>() {
                Ok(digits) if digits <= MAX_DIGITS => config.digits = Some(digits),
                _ => warn!(var = DIGITS_VAR, value = %raw, "ignoring invalid value"),
            }
        }

        if let Some(raw) = get(I18N_VAR) {
            match parse_flag(&raw) {
                Some(flag) => config.i18n = flag,
                None => warn!(var = I18N_VAR, value = %raw, "ignoring invalid value"),
            }
        }

        config
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
