//! Crate configuration loaded from TOML.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::remap::Layout;
use crate::tuning::Tuning;

/// Tunable input settings, deserializable from a TOML profile.
///
/// Threshold fields are fractions of the backend's usable axis maximum, so
/// one profile works for both the unit-range and int16-range backends.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PadConfig {
    #[serde(default)]
    pub layout: Layout,
    #[serde(default = "default_dead_zone")]
    pub dead_zone: f32,
    #[serde(default = "default_trip_high")]
    pub trip_high: f32,
    #[serde(default = "default_trip_low")]
    pub trip_low: f32,
    #[serde(default = "default_button_threshold")]
    pub button_threshold: f32,
}

fn default_dead_zone() -> f32 {
    0.2
}
fn default_trip_high() -> f32 {
    0.75
}
fn default_trip_low() -> f32 {
    0.5
}
fn default_button_threshold() -> f32 {
    0.5
}

impl Default for PadConfig {
    fn default() -> Self {
        Self {
            layout: Layout::default(),
            dead_zone: default_dead_zone(),
            trip_high: default_trip_high(),
            trip_low: default_trip_low(),
            button_threshold: default_button_threshold(),
        }
    }
}

impl PadConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let mut config: PadConfig = toml::from_str(content)?;
        config.clamp();
        Ok(config)
    }

    /// Force the fractions into a usable shape: everything within `[0, 1]`,
    /// and the trip pair ordered so the hysteresis gap survives.
    fn clamp(&mut self) {
        self.dead_zone = self.dead_zone.clamp(0.0, 1.0);
        self.trip_high = self.trip_high.clamp(0.0, 1.0);
        self.trip_low = self.trip_low.clamp(0.0, self.trip_high);
        self.button_threshold = self.button_threshold.clamp(0.0, 1.0);
    }

    /// Threshold set for a backend with the given usable axis maximum.
    pub fn tuning_for(&self, axis_max: f32) -> Tuning {
        Tuning {
            axis_max,
            dead_zone: axis_max * self.dead_zone,
            trip_high: axis_max * self.trip_high,
            trip_low: axis_max * self.trip_low,
            button_threshold: self.button_threshold,
        }
    }
}
