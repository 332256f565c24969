//! Persisted generator settings.
//!
//! This is the configuration boundary: lengths are clamped and accrual rates
//! sanitized here before they reach the session.

mod file;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::entropy::collector::{
    POINTER_DEBOUNCE_MS, POINTER_POINTS_PER_PERCENT, TOUCH_DEBOUNCE_MS, TOUCH_POINTS_PER_EVENT,
    TOUCH_POINTS_PER_PERCENT,
};
use crate::entropy::{AccrualRates, ModalityRate};
use crate::error::SettingsError;
use crate::pass::{CharacterClassSelection, DEFAULT_LENGTH, GenerationConfig, clamp_length};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub length: usize,
    pub uppercase: bool,
    pub lowercase: bool,
    pub digits: bool,
    pub symbols: bool,
    pub pointer_points_per_percent: f64,
    pub touch_points_per_percent: f64,
    pub touch_points_per_event: usize,
    pub pointer_debounce_ms: u64,
    pub touch_debounce_ms: u64,
    pub export_file: PathBuf,
}

impl Settings {
    pub fn load_from_file() -> Result<Self, SettingsError> {
        Self::load_from(&file::default_path())
    }

    pub fn save_to_file(&self) -> Result<(), SettingsError> {
        self.save_to(&file::default_path())
    }

    /// Load from `path`, writing defaults there first if it doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        file::load(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        file::save(self, path)
    }

    pub fn selection(&self) -> CharacterClassSelection {
        CharacterClassSelection {
            uppercase: self.uppercase,
            lowercase: self.lowercase,
            digits: self.digits,
            symbols: self.symbols,
        }
    }

    pub fn set_selection(&mut self, selection: CharacterClassSelection) {
        self.uppercase = selection.uppercase;
        self.lowercase = selection.lowercase;
        self.digits = selection.digits;
        self.symbols = selection.symbols;
    }

    pub fn generation_config(&self) -> GenerationConfig {
        let length = clamp_length(self.length);
        if length != self.length {
            warn!(requested = self.length, length, "password length out of range, clamped");
        }
        GenerationConfig::new(length, self.selection())
    }

    pub fn accrual_rates(&self) -> AccrualRates {
        AccrualRates {
            pointer: ModalityRate {
                points_per_percent: positive_or(
                    "pointer_points_per_percent",
                    self.pointer_points_per_percent,
                    POINTER_POINTS_PER_PERCENT,
                ),
                points_per_event: 1,
                debounce_ms: self.pointer_debounce_ms,
            },
            touch: ModalityRate {
                points_per_percent: positive_or(
                    "touch_points_per_percent",
                    self.touch_points_per_percent,
                    TOUCH_POINTS_PER_PERCENT,
                ),
                points_per_event: self.touch_points_per_event.max(1),
                debounce_ms: self.touch_debounce_ms,
            },
        }
    }
}

fn positive_or(field: &str, value: f64, fallback: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        warn!(field, value, fallback, "accrual divisor must be positive, using default");
        fallback
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            uppercase: true,
            lowercase: true,
            digits: true,
            symbols: true,
            pointer_points_per_percent: POINTER_POINTS_PER_PERCENT,
            touch_points_per_percent: TOUCH_POINTS_PER_PERCENT,
            touch_points_per_event: TOUCH_POINTS_PER_EVENT,
            pointer_debounce_ms: POINTER_DEBOUNCE_MS,
            touch_debounce_ms: TOUCH_DEBOUNCE_MS,
            export_file: PathBuf::from("password.txt"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::{MAX_LENGTH, MIN_LENGTH};

    #[test]
    fn defaults_match_core_constants() {
        let settings = Settings::default();
        assert_eq!(settings.generation_config(), GenerationConfig::default());
        assert_eq!(settings.accrual_rates(), AccrualRates::default());
    }

    #[test]
    fn length_is_clamped_at_boundary() {
        let mut settings = Settings {
            length: 2,
            ..Default::default()
        };
        assert_eq!(settings.generation_config().length, MIN_LENGTH);
        settings.length = 99;
        assert_eq!(settings.generation_config().length, MAX_LENGTH);
    }

    #[test]
    fn bad_divisors_fall_back() {
        let settings = Settings {
            pointer_points_per_percent: 0.0,
            touch_points_per_percent: f64::NAN,
            touch_points_per_event: 0,
            ..Default::default()
        };
        let rates = settings.accrual_rates();
        assert_eq!(rates.pointer.points_per_percent, POINTER_POINTS_PER_PERCENT);
        assert_eq!(rates.touch.points_per_percent, TOUCH_POINTS_PER_PERCENT);
        assert_eq!(rates.touch.points_per_event, 1);
    }

    #[test]
    fn selection_round_trips_through_flags() {
        let mut settings = Settings::default();
        let selection = CharacterClassSelection {
            uppercase: false,
            lowercase: true,
            digits: false,
            symbols: true,
        };
        settings.set_selection(selection);
        assert_eq!(settings.selection(), selection);
        assert!(!settings.uppercase);
    }
}
