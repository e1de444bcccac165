//! Per-device controller: normalized sticks, digital buttons, edge and tap
//! detection over the buffered state.

use crate::remap::{Button, RemapTable};
use crate::state::{ButtonBank, RawPadState, StateBuffer};
use crate::tuning::Tuning;
use crate::vec2::{sign, Vec2};

/// Derived query surface for one device index.
///
/// Owns the remap table and the per-axis trip state; reads the shared
/// [`StateBuffer`] but never writes it. Every query degrades to a neutral
/// default when the device is absent — no controller method can fail.
#[derive(Debug)]
pub struct Controller {
    index: usize,
    remap: RemapTable,
    tuning: Tuning,
    trips: [bool; 2],
    tap: Vec2,
}

impl Controller {
    pub fn new(index: usize, remap: RemapTable, tuning: Tuning) -> Self {
        Self {
            index,
            remap,
            tuning,
            trips: [false; 2],
            tap: Vec2::ZERO,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    fn current<'a>(&self, buffer: &'a StateBuffer) -> Option<&'a RawPadState> {
        buffer.current(self.index)
    }

    fn previous<'a>(&self, buffer: &'a StateBuffer) -> Option<&'a RawPadState> {
        buffer.previous(self.index)
    }

    /// Remapped single-axis read. A missing device or axis reads as 0.0.
    pub fn axis(&self, buffer: &StateBuffer, n: usize) -> f32 {
        let native = self.remap.axis_index(n);
        self.current(buffer)
            .and_then(|state| state.axes.get(native))
            .copied()
            .unwrap_or(0.0)
    }

    /// Raw axis readings for the current tick, in native order.
    pub fn axes<'a>(&self, buffer: &'a StateBuffer) -> &'a [f32] {
        self.current(buffer)
            .map(|state| state.axes.as_slice())
            .unwrap_or(&[])
    }

    /// Raw button bank for the current tick, if a device is present.
    pub fn buttons<'a>(&self, buffer: &'a StateBuffer) -> Option<&'a ButtonBank> {
        self.current(buffer).map(|state| &state.buttons)
    }

    /// Dead-zone-filtered position of a stick's axis pair
    /// `(2*stick, 2*stick+1)`.
    ///
    /// Magnitudes beyond `axis_max` clamp to the unit circle with direction
    /// preserved; magnitudes inside the dead zone collapse to zero; in
    /// between, the magnitude is remapped linearly from 0 at the dead-zone
    /// edge to 1 at `axis_max`.
    pub fn position(&self, buffer: &StateBuffer, stick: usize) -> Vec2 {
        if self.current(buffer).is_none() {
            return Vec2::ZERO;
        }
        let p = Vec2::new(
            self.axis(buffer, 2 * stick),
            self.axis(buffer, 2 * stick + 1),
        );
        let magnitude = p.magnitude();
        let t = &self.tuning;
        if magnitude > t.axis_max {
            p.normalized()
        } else if magnitude <= t.dead_zone {
            Vec2::ZERO
        } else {
            let remapped = (magnitude - t.dead_zone) / (t.axis_max - t.dead_zone);
            p.scaled(remapped / magnitude)
        }
    }

    /// True while any of the named buttons is held.
    pub fn action_down(&self, buffer: &StateBuffer, buttons: &[Button]) -> bool {
        match self.current(buffer) {
            Some(state) => buttons.iter().any(|&button| {
                button_active(
                    &state.buttons,
                    button,
                    &self.remap,
                    self.tuning.button_threshold,
                )
            }),
            None => false,
        }
    }

    /// Rising edge: active this tick and not active in the previous one.
    ///
    /// With no previous snapshot (first tick, or the device just appeared)
    /// this is false rather than a comparison against missing state.
    pub fn button_pressed(&self, buffer: &StateBuffer, button: Button) -> bool {
        let threshold = self.tuning.button_threshold;
        let now = match self.current(buffer) {
            Some(state) => button_active(&state.buttons, button, &self.remap, threshold),
            None => return false,
        };
        // No previous snapshot (first tick, or the device just appeared):
        // there is no edge to detect yet.
        let before = match self.previous(buffer) {
            Some(state) => button_active(&state.buttons, button, &self.remap, threshold),
            None => return false,
        };
        now && !before
    }

    /// Tap vector from the most recent [`process_taps`](Self::process_taps).
    /// Components are -1.0, 0.0, or +1.0 per primary axis.
    pub fn tap(&self) -> Vec2 {
        self.tap
    }

    /// Per-tick trip hysteresis over the two primary axes.
    ///
    /// An axis must exceed `trip_high` to fire and fall below `trip_low`
    /// before it can fire again, so one sustained deflection yields exactly
    /// one non-zero tap component.
    pub fn process_taps(&mut self, buffer: &StateBuffer) {
        let mut components = [0.0f32; 2];
        for n in 0..2 {
            let value = self.axis(buffer, n);
            let a = value.abs();
            if !self.trips[n] && a > self.tuning.trip_high {
                self.trips[n] = true;
                components[n] = sign(value);
            } else if self.trips[n] && a < self.tuning.trip_low {
                self.trips[n] = false;
            }
        }
        self.tap = Vec2::new(components[0], components[1]);
    }

    /// Dump raw axis and button values to a diagnostics surface.
    pub fn draw_debug(&self, buffer: &StateBuffer, sink: &mut dyn DebugDraw) {
        const LINE_HEIGHT: f32 = 18.0;
        for (i, axis) in self.axes(buffer).iter().enumerate() {
            sink.draw_text(0.0, i as f32 * LINE_HEIGHT, &format!("{axis}"));
        }
        match self.buttons(buffer) {
            Some(ButtonBank::Analog(values)) => {
                for (i, value) in values.iter().enumerate() {
                    sink.draw_text(250.0, i as f32 * LINE_HEIGHT, &format!("{value}"));
                }
            }
            Some(ButtonBank::Mask(mask)) => {
                sink.draw_text(250.0, 0.0, &format!("{mask:#x}"));
            }
            None => {}
        }
    }
}

/// Single decision point for "is this button held" across the two button
/// representations.
fn button_active(bank: &ButtonBank, button: Button, remap: &RemapTable, threshold: f32) -> bool {
    match bank {
        ButtonBank::Analog(values) => match remap.analog_index(button) {
            Some(idx) => values.get(idx).is_some_and(|&v| v > threshold),
            // Button::Any: anything held on the pad counts.
            None => values.iter().any(|&v| v > threshold),
        },
        ButtonBank::Mask(mask) => mask & remap.mask_bits(button) != 0,
    }
}

/// Optional diagnostics surface a controller can render itself to.
/// Not required for correctness.
pub trait DebugDraw {
    fn draw_text(&mut self, x: f32, y: f32, text: &str);
}

/// Borrowed query view coupling a controller with the state buffer.
///
/// Returned by
/// [`PadRegistry::controller`](crate::registry::PadRegistry::controller).
/// Queries are pure reads and may be issued any number of times between
/// ticks.
pub struct Pad<'a> {
    pub(crate) controller: &'a Controller,
    pub(crate) buffer: &'a StateBuffer,
}

impl Pad<'_> {
    pub fn index(&self) -> usize {
        self.controller.index()
    }

    pub fn position(&self, stick: usize) -> Vec2 {
        self.controller.position(self.buffer, stick)
    }

    pub fn axis(&self, n: usize) -> f32 {
        self.controller.axis(self.buffer, n)
    }

    pub fn axes(&self) -> &[f32] {
        self.controller.axes(self.buffer)
    }

    pub fn buttons(&self) -> Option<&ButtonBank> {
        self.controller.buttons(self.buffer)
    }

    pub fn action_down(&self, buttons: &[Button]) -> bool {
        self.controller.action_down(self.buffer, buttons)
    }

    pub fn button_pressed(&self, button: Button) -> bool {
        self.controller.button_pressed(self.buffer, button)
    }

    pub fn tap(&self) -> Vec2 {
        self.controller.tap()
    }

    pub fn draw_debug(&self, sink: &mut dyn DebugDraw) {
        self.controller.draw_debug(self.buffer, sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remap::Layout;
    use crate::state::RawPadState;

    fn unit_controller() -> Controller {
        Controller::new(0, RemapTable::new(Layout::Standard), Tuning::unit())
    }

    fn buffer_with_axes(axes: Vec<f32>) -> StateBuffer {
        let mut buffer = StateBuffer::new();
        buffer.advance(vec![RawPadState::analog(axes, vec![])]);
        buffer
    }

    #[test]
    fn position_inside_dead_zone_is_exact_zero() {
        let ctrl = unit_controller();
        let buffer = buffer_with_axes(vec![0.1, 0.05]);
        assert_eq!(ctrl.position(&buffer, 0), Vec2::ZERO);
    }

    #[test]
    fn position_never_overshoots_unit_circle() {
        let ctrl = unit_controller();
        let buffer = buffer_with_axes(vec![0.99, 0.99]);
        let p = ctrl.position(&buffer, 0);
        assert!((p.magnitude() - 1.0).abs() < 1e-6);
        assert!((p.x - p.y).abs() < 1e-6);
    }

    #[test]
    fn mid_range_magnitude_is_linear_between_dead_zone_and_max() {
        // Pins the response curve: linear from the dead-zone edge, not a
        // quadratic (m / axis_max)^2 curve (which would give ~0.266 here).
        let ctrl = unit_controller();
        let buffer = buffer_with_axes(vec![0.5, 0.0]);
        let t = Tuning::unit();
        let expected = (0.5 - t.dead_zone) / (t.axis_max - t.dead_zone);
        let p = ctrl.position(&buffer, 0);
        assert!((p.x - expected).abs() < 1e-6);
        assert_eq!(p.y, 0.0);
    }

    #[test]
    fn position_with_no_device_is_zero() {
        let ctrl = unit_controller();
        let buffer = StateBuffer::new();
        assert_eq!(ctrl.position(&buffer, 0), Vec2::ZERO);
        assert_eq!(ctrl.position(&buffer, 1), Vec2::ZERO);
    }

    #[test]
    fn analog_any_matches_every_button() {
        let ctrl = unit_controller();
        let mut buffer = StateBuffer::new();
        buffer.advance(vec![RawPadState::analog(
            vec![],
            vec![0.0, 0.0, 0.0, 0.9],
        )]);
        assert!(ctrl.action_down(&buffer, &[Button::Any]));
        assert!(ctrl.action_down(&buffer, &[Button::Y]));
        assert!(!ctrl.action_down(&buffer, &[Button::A, Button::B]));
    }

    #[test]
    fn mask_buttons_use_exact_bit_tests() {
        let ctrl = Controller::new(0, RemapTable::new(Layout::Standard), Tuning::int16());
        let mut buffer = StateBuffer::new();
        buffer.advance(vec![RawPadState::masked(vec![], 0x21)]);
        assert!(ctrl.action_down(&buffer, &[Button::A]));
        assert!(ctrl.action_down(&buffer, &[Button::R1]));
        assert!(ctrl.action_down(&buffer, &[Button::Any]));
        assert!(!ctrl.action_down(&buffer, &[Button::B]));
    }

    #[test]
    fn edge_detection_with_missing_previous_is_false() {
        let ctrl = unit_controller();
        let mut buffer = StateBuffer::new();
        buffer.advance(vec![RawPadState::analog(vec![], vec![1.0])]);
        // First tick ever: the button is down but there is nothing to
        // compare against.
        assert!(ctrl.action_down(&buffer, &[Button::A]));
        assert!(!ctrl.button_pressed(&buffer, Button::A));
    }
}
