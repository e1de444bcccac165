//! Controller registry: owns the backend, the state buffer, and the
//! per-index controller cache, and drives the per-tick advance.
//!
//! One registry per engine instance, constructed once and passed by
//! reference — there is no process-global device state. The registry is the
//! buffer's only writer; all controller queries between ticks are pure
//! reads (single-threaded, cooperative, no locks).

use log::error;

use crate::backends::PadBackend;
use crate::config::PadConfig;
use crate::controller::{Controller, Pad};
use crate::remap::{Layout, RemapTable};
use crate::state::StateBuffer;
use crate::tuning::Tuning;

/// Hook contract for the host engine's per-frame update phase.
///
/// The engine invokes `before_update` exactly once per frame, in
/// engine-defined order relative to other subsystems. For [`PadRegistry`]
/// it is an alias for [`tick`](PadRegistry::tick).
pub trait FrameHook {
    fn before_update(&mut self);
}

/// Caches one [`Controller`] per device index and advances the shared
/// [`StateBuffer`] once per tick.
pub struct PadRegistry<B> {
    backend: B,
    remap: RemapTable,
    tuning: Tuning,
    buffer: StateBuffer,
    controllers: Vec<Option<Controller>>,
}

impl<B: PadBackend> PadRegistry<B> {
    /// Build a registry over a backend with an explicitly chosen remap
    /// layout and the backend's native thresholds. Both are fixed for the
    /// registry's lifetime.
    pub fn new(backend: B, layout: Layout) -> Self {
        let tuning = backend.tuning();
        Self {
            backend,
            remap: RemapTable::new(layout),
            tuning,
            buffer: StateBuffer::new(),
            controllers: Vec::new(),
        }
    }

    /// Build a registry whose layout and threshold ratios come from a
    /// [`PadConfig`], scaled to the backend's native axis range.
    pub fn with_config(backend: B, config: &PadConfig) -> Self {
        let tuning = config.tuning_for(backend.tuning().axis_max);
        Self {
            backend,
            remap: RemapTable::new(config.layout),
            tuning,
            buffer: StateBuffer::new(),
            controllers: Vec::new(),
        }
    }

    /// Advance one input tick: poll the backend, swap the state buffer,
    /// then recompute trip/tap state for every cached controller.
    ///
    /// The buffer swap completes before any controller recomputation, so a
    /// controller never observes a half-updated buffer. A failed poll is
    /// logged and the last-known-good snapshot is held; the tick itself
    /// never fails.
    pub fn tick(&mut self) {
        match self.backend.snapshot() {
            Ok(snapshot) => self.buffer.advance(snapshot),
            Err(err) => {
                error!("input backend poll failed, holding last snapshot: {err}");
                self.buffer.hold();
            }
        }
        for controller in self.controllers.iter_mut().flatten() {
            controller.process_taps(&self.buffer);
        }
    }

    /// Controller view for a device index, creating and caching the
    /// controller on first request.
    ///
    /// Controllers live as long as the registry. An index with no connected
    /// device still answers every query, with neutral defaults.
    pub fn controller(&mut self, index: usize) -> Pad<'_> {
        if index >= self.controllers.len() {
            self.controllers.resize_with(index + 1, || None);
        }
        let remap = self.remap;
        let tuning = self.tuning;
        let controller = self.controllers[index]
            .get_or_insert_with(|| Controller::new(index, remap, tuning));
        Pad {
            controller,
            buffer: &self.buffer,
        }
    }

    /// Number of devices present in the current snapshot.
    pub fn device_count(&self) -> usize {
        self.buffer.device_count()
    }
}

impl<B: PadBackend> FrameHook for PadRegistry<B> {
    fn before_update(&mut self) {
        self.tick();
    }
}
