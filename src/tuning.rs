//! Threshold constants governing stick and button interpretation.

/// Guard buffer subtracted from the unit axis range so hardware jitter at
/// full deflection still registers as maxed out.
const UNIT_GUARD: f32 = 0.03;

/// Guard buffer for signed 16-bit axis ranges.
const INT16_GUARD: f32 = 2000.0;

/// Threshold set for one controller, fixed for its lifetime.
///
/// All values are in the backend's native axis units except
/// `button_threshold`, which only applies to analog button banks (mask
/// banks use exact bit tests).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tuning {
    pub axis_max: f32,
    pub dead_zone: f32,
    pub trip_high: f32,
    pub trip_low: f32,
    pub button_threshold: f32,
}

impl Tuning {
    /// Derive the full threshold set from a usable axis maximum.
    pub fn from_axis_max(axis_max: f32) -> Self {
        Self {
            axis_max,
            dead_zone: axis_max * 0.2,
            trip_high: axis_max * 0.75,
            trip_low: axis_max * 0.5,
            button_threshold: 0.5,
        }
    }

    /// Thresholds for devices reporting axes in `[-1, 1]`.
    pub fn unit() -> Self {
        Self::from_axis_max(1.0 - UNIT_GUARD)
    }

    /// Thresholds for devices reporting axes as signed 16-bit counts.
    pub fn int16() -> Self {
        Self::from_axis_max(i16::MAX as f32 - INT16_GUARD)
    }
}
