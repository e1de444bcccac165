//! Drives the plugin-channel backend with scripted payloads and shows the
//! tap gesture firing once per stick excursion.

use padpoll::backends::channel::{ChannelBackend, ScriptedChannel};
use padpoll::registry::PadRegistry;
use padpoll::remap::Layout;

fn main() {
    env_logger::init();

    let mut channel = ScriptedChannel::installed();
    // Push right past the trip point, linger, release, then flick left.
    for axis in [0i16, 26000, 26000, 12000, 0, -26000, 0] {
        channel.push_payload(format!(
            r#"[{{"axes":[{axis},0,0,0,0,0],"buttons":0}}]"#
        ));
    }

    let mut pads = PadRegistry::new(ChannelBackend::new(channel), Layout::Standard);
    pads.controller(0);
    for frame in 0..7 {
        pads.tick();
        let tap = pads.controller(0).tap();
        if tap.x != 0.0 || tap.y != 0.0 {
            println!("frame {frame}: tap ({:+.0}, {:+.0})", tap.x, tap.y);
        } else {
            println!("frame {frame}: -");
        }
    }
}
