//! Input backends for `padpoll`.
//!
//! Two structurally different snapshot producers implement [`PadBackend`]:
//!
//! - [`live`] — polls a host-provided source that reports float axes and
//!   float buttons, one entry per visible device.
//! - [`channel`] — reads a JSON-encoded device sequence from an installable
//!   host plugin that packs buttons into a bitmask.
//!
//! Backend selection happens once, when the registry is built, and is not
//! re-evaluated per tick.

use crate::error::PollError;
use crate::state::RawPadState;
use crate::tuning::Tuning;

pub mod channel;
pub mod live;

pub use channel::{ChannelBackend, ChannelPad, PluginChannel, ScriptedChannel};
pub use live::{LiveBackend, LivePad, LiveSource, ScriptedSource};

/// A producer of per-tick device snapshots.
///
/// The registry calls `snapshot` at most once per tick. Absent devices
/// yield an empty sequence, never an error; the one `Err` case is a
/// malformed plugin payload (see [`PollError`]).
pub trait PadBackend {
    fn snapshot(&mut self) -> Result<Vec<RawPadState>, PollError>;

    /// Threshold set matching this backend's native axis range.
    fn tuning(&self) -> Tuning;
}
