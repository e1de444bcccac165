//! Raw device snapshots and the double-buffered state store.
//!
//! A [`RawPadState`] is one device's telemetry for a single tick, captured
//! by a backend and immutable afterwards. The [`StateBuffer`] keeps the
//! current and immediately-previous snapshot per device index so edge
//! detection can compare across ticks without re-polling hardware.

use serde::{Deserialize, Serialize};

/// Button state as reported by a backend.
///
/// The two backends encode buttons differently: the live host poll reports
/// one analog value per button in `[0, 1]`, while the plugin channel packs
/// the whole pad into a single bitmask. Controller logic consumes both
/// through one decision function per variant instead of branching
/// throughout.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ButtonBank {
    Analog(Vec<f32>),
    Mask(u32),
}

/// One device's telemetry for a single tick.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawPadState {
    pub axes: Vec<f32>,
    pub buttons: ButtonBank,
}

impl RawPadState {
    pub fn analog(axes: Vec<f32>, buttons: Vec<f32>) -> Self {
        Self {
            axes,
            buttons: ButtonBank::Analog(buttons),
        }
    }

    pub fn masked(axes: Vec<f32>, mask: u32) -> Self {
        Self {
            axes,
            buttons: ButtonBank::Mask(mask),
        }
    }
}

/// Current and immediately-previous snapshot per device index.
///
/// Invariant: `previous` is always the value `current` held before the
/// latest [`advance`](StateBuffer::advance). Both are absent before the
/// first tick and for any index with no connected device.
///
/// Written only by the registry's per-tick advance; every other access is a
/// read. Single-threaded by design — queries between ticks can never observe
/// a half-swapped buffer.
#[derive(Debug, Default)]
pub struct StateBuffer {
    current: Vec<RawPadState>,
    previous: Vec<RawPadState>,
}

impl StateBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a fresh snapshot sequence, demoting the old current states.
    ///
    /// Indices missing from the new sequence (shrunk or empty poll) read as
    /// absent afterwards.
    pub fn advance(&mut self, snapshot: Vec<RawPadState>) {
        self.previous = std::mem::replace(&mut self.current, snapshot);
    }

    /// Demote without fresh data: the current sequence is carried over
    /// unchanged. Used when a poll fails and the last-known-good sequence
    /// is held.
    pub fn hold(&mut self) {
        self.previous = self.current.clone();
    }

    pub fn current(&self, index: usize) -> Option<&RawPadState> {
        self.current.get(index)
    }

    pub fn previous(&self, index: usize) -> Option<&RawPadState> {
        self.previous.get(index)
    }

    /// Number of devices in the most recent snapshot.
    pub fn device_count(&self) -> usize {
        self.current.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pad(x: f32) -> RawPadState {
        RawPadState::analog(vec![x, 0.0], vec![0.0])
    }

    #[test]
    fn previous_is_what_current_was_before_advance() {
        let mut buffer = StateBuffer::new();
        assert!(buffer.current(0).is_none());
        assert!(buffer.previous(0).is_none());

        buffer.advance(vec![pad(0.1)]);
        assert_eq!(buffer.current(0), Some(&pad(0.1)));
        assert!(buffer.previous(0).is_none());

        buffer.advance(vec![pad(0.2)]);
        assert_eq!(buffer.current(0), Some(&pad(0.2)));
        assert_eq!(buffer.previous(0), Some(&pad(0.1)));
    }

    #[test]
    fn disconnected_index_reads_as_absent() {
        let mut buffer = StateBuffer::new();
        buffer.advance(vec![pad(0.1), pad(0.2)]);
        buffer.advance(vec![pad(0.3)]);
        assert!(buffer.current(1).is_none());
        assert_eq!(buffer.previous(1), Some(&pad(0.2)));
        assert_eq!(buffer.device_count(), 1);
    }

    #[test]
    fn hold_demotes_but_keeps_current() {
        let mut buffer = StateBuffer::new();
        buffer.advance(vec![pad(0.5)]);
        buffer.hold();
        assert_eq!(buffer.current(0), Some(&pad(0.5)));
        assert_eq!(buffer.previous(0), Some(&pad(0.5)));
    }
}
