//! Polls a scripted live source and prints the derived controller state
//! per frame: stick position, held/pressed buttons, and taps.

use padpoll::backends::live::{LiveBackend, LivePad, ScriptedSource};
use padpoll::registry::PadRegistry;
use padpoll::remap::{Button, Layout};

fn main() {
    env_logger::init();

    let mut source = ScriptedSource::new();
    // Sweep the stick right over eight frames, pressing A halfway through.
    for i in 0..8 {
        let x = i as f32 / 7.0;
        let a = if i >= 4 { 1.0 } else { 0.0 };
        source.push_frame(vec![LivePad {
            axes: vec![x, 0.0],
            buttons: vec![a],
        }]);
    }

    let mut pads = PadRegistry::new(LiveBackend::new(source), Layout::Standard);
    for frame in 0..8 {
        pads.tick();
        let pad = pads.controller(0);
        let p = pad.position(0);
        println!(
            "frame {frame}: pos=({:+.3}, {:+.3}) a_down={} a_pressed={} tap=({:+.0}, {:+.0})",
            p.x,
            p.y,
            pad.action_down(&[Button::A]),
            pad.button_pressed(Button::A),
            pad.tap().x,
            pad.tap().y,
        );
    }
}
