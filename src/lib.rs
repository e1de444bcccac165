//! padpoll — unified controller polling for game engines.
//!
//! Turns raw per-frame telemetry from two structurally different gamepad
//! backends — a live host poll reporting float arrays, and an installable
//! plugin channel reporting bitmask-packed buttons — into one consistent
//! query surface: dead-zone-filtered stick vectors, threshold-derived
//! digital buttons, rising-edge press detection, and a hysteresis-based
//! directional tap gesture.
//!
//! The host engine calls [`PadRegistry::tick`] (or the [`FrameHook`]
//! binding) once per frame; everything else is a pure read over the
//! double-buffered state.

pub mod backends;
pub mod config;
pub mod controller;
pub mod error;
pub mod registry;
pub mod remap;
pub mod state;
pub mod tuning;
pub mod vec2;

pub use backends::*;
pub use config::*;
pub use controller::*;
pub use error::*;
pub use registry::*;
pub use remap::*;
pub use state::*;
pub use tuning::*;
pub use vec2::*;
