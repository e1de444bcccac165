//! Plugin-channel backend: bitmask buttons over a JSON host component.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::PadBackend;
use crate::error::PollError;
use crate::state::RawPadState;
use crate::tuning::Tuning;

/// Host boundary for the installable plugin component.
///
/// `status` reports whether the component is installed and ready. While it
/// is false this backend presents zero devices; prompting the user to
/// install it is the embedding UI's concern, never this crate's.
pub trait PluginChannel {
    fn status(&self) -> bool;

    /// Latest JSON-encoded device sequence, if the component produced one
    /// this tick. `None` means "nothing new", not an error.
    fn poll_json(&mut self) -> Option<String>;
}

/// Wire format of one device entry in the plugin payload.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChannelPad {
    pub axes: Vec<i16>,
    pub buttons: u32,
}

/// Backend reading bitmask-encoded devices through a [`PluginChannel`].
///
/// Keeps the last successfully decoded sequence: ticks with no fresh
/// payload repeat it, and a malformed payload is reported to the registry
/// (which logs and holds) while decoding resumes on the next good payload.
pub struct ChannelBackend<C> {
    channel: C,
    last_good: Vec<RawPadState>,
}

impl<C: PluginChannel> ChannelBackend<C> {
    pub fn new(channel: C) -> Self {
        Self {
            channel,
            last_good: Vec::new(),
        }
    }

    fn decode(payload: &str) -> Result<Vec<RawPadState>, PollError> {
        let pads: Vec<ChannelPad> = serde_json::from_str(payload)?;
        Ok(pads
            .into_iter()
            .map(|pad| {
                let axes = pad.axes.iter().map(|&a| a as f32).collect();
                RawPadState::masked(axes, pad.buttons)
            })
            .collect())
    }
}

impl<C: PluginChannel> PadBackend for ChannelBackend<C> {
    fn snapshot(&mut self) -> Result<Vec<RawPadState>, PollError> {
        if !self.channel.status() {
            return Ok(Vec::new());
        }
        match self.channel.poll_json() {
            Some(payload) => {
                let pads = Self::decode(&payload)?;
                self.last_good = pads.clone();
                Ok(pads)
            }
            None => Ok(self.last_good.clone()),
        }
    }

    fn tuning(&self) -> Tuning {
        Tuning::int16()
    }
}

/// In-memory channel that replays scripted payloads, for demos and tests.
#[derive(Debug, Default)]
pub struct ScriptedChannel {
    ready: bool,
    payloads: VecDeque<String>,
}

impl ScriptedChannel {
    /// A channel whose component is installed and ready.
    pub fn installed() -> Self {
        Self {
            ready: true,
            payloads: VecDeque::new(),
        }
    }

    /// A channel whose component is not installed.
    pub fn missing() -> Self {
        Self::default()
    }

    pub fn push_payload(&mut self, payload: impl Into<String>) {
        self.payloads.push_back(payload.into());
    }
}

impl PluginChannel for ScriptedChannel {
    fn status(&self) -> bool {
        self.ready
    }

    fn poll_json(&mut self) -> Option<String> {
        self.payloads.pop_front()
    }
}
