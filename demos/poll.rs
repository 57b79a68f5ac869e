//! Poll slot 0 at ~30 Hz and print the decoded state as JSON whenever the
//! driver's packet counter moves.
//!
//! ```text
//! cargo run --example poll
//! ```

#[cfg(windows)]
fn main() {
    use padsnap::{Controller, Error};
    use std::time::Duration;

    let pad = Controller::new(0, true).expect("slot index is valid");
    let mut last_packet = None;

    loop {
        match pad.state() {
            Ok(state) => {
                if last_packet != Some(state.packet_number) {
                    last_packet = Some(state.packet_number);
                    println!("{}", serde_json::to_string(&state).unwrap());
                }
            }
            Err(Error::DeviceAbsent { index }) => {
                if last_packet.take().is_some() {
                    eprintln!("slot {index}: controller unplugged");
                }
            }
            Err(err) => eprintln!("poll failed: {err}"),
        }

        // Keep CPU usage sane.
        std::thread::sleep(Duration::from_millis(33));
    }
}

#[cfg(not(windows))]
fn main() {
    eprintln!("the poll demo drives the system XInput backend and needs Windows");
}
