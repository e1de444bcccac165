//! Live-poll backend: direct host queries with float axes and buttons.

use std::collections::VecDeque;

use super::PadBackend;
use crate::error::PollError;
use crate::state::RawPadState;
use crate::tuning::Tuning;

/// Host boundary for the live-poll input channel.
///
/// One entry per currently visible device; axes are already in the native
/// `[-1, 1]` range and buttons in `[0, 1]`. No devices means an empty
/// vector, never an error.
pub trait LiveSource {
    fn read_pads(&mut self) -> Vec<LivePad>;
}

/// Raw per-device readout from a [`LiveSource`].
#[derive(Clone, Debug, Default)]
pub struct LivePad {
    pub axes: Vec<f32>,
    pub buttons: Vec<f32>,
}

/// Backend that queries the host source directly every tick.
pub struct LiveBackend<S> {
    source: S,
}

impl<S: LiveSource> LiveBackend<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }
}

impl<S: LiveSource> PadBackend for LiveBackend<S> {
    fn snapshot(&mut self) -> Result<Vec<RawPadState>, PollError> {
        Ok(self
            .source
            .read_pads()
            .into_iter()
            .map(|pad| RawPadState::analog(pad.axes, pad.buttons))
            .collect())
    }

    fn tuning(&self) -> Tuning {
        Tuning::unit()
    }
}

/// In-memory source that replays pre-scripted frames, for demos and tests.
///
/// Once the script runs out, the last frame is repeated — a held stick
/// keeps reporting its deflection.
#[derive(Debug, Default)]
pub struct ScriptedSource {
    frames: VecDeque<Vec<LivePad>>,
    last: Vec<LivePad>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_frame(&mut self, pads: Vec<LivePad>) {
        self.frames.push_back(pads);
    }
}

impl LiveSource for ScriptedSource {
    fn read_pads(&mut self) -> Vec<LivePad> {
        if let Some(frame) = self.frames.pop_front() {
            self.last = frame;
        }
        self.last.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ButtonBank;

    #[test]
    fn empty_source_yields_empty_snapshot() {
        let mut backend = LiveBackend::new(ScriptedSource::new());
        assert!(backend.snapshot().unwrap().is_empty());
    }

    #[test]
    fn snapshot_is_tagged_analog() {
        let mut source = ScriptedSource::new();
        source.push_frame(vec![LivePad {
            axes: vec![0.5, -0.25],
            buttons: vec![1.0, 0.0],
        }]);

        let mut backend = LiveBackend::new(source);
        let snapshot = backend.snapshot().unwrap();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].axes, vec![0.5, -0.25]);
        assert_eq!(snapshot[0].buttons, ButtonBank::Analog(vec![1.0, 0.0]));
    }

    #[test]
    fn exhausted_script_repeats_last_frame() {
        let mut source = ScriptedSource::new();
        source.push_frame(vec![LivePad {
            axes: vec![0.9],
            buttons: vec![],
        }]);

        let mut backend = LiveBackend::new(source);
        backend.snapshot().unwrap();
        let repeat = backend.snapshot().unwrap();
        assert_eq!(repeat[0].axes, vec![0.9]);
    }
}
