//! Ramp both motors on slot 0 from silent to full and back, then stop.
//!
//! ```text
//! cargo run --example rumble
//! ```

#[cfg(windows)]
fn main() {
    use padsnap::Controller;
    use std::time::Duration;

    let pad = Controller::new(0, true).expect("slot index is valid");

    let steps = 20;
    for i in (0..=steps).chain((0..steps).rev()) {
        let level = f64::from(i) / f64::from(steps);
        if let Err(err) = pad.rumble(level, None) {
            eprintln!("rumble failed: {err}");
            return;
        }
        std::thread::sleep(Duration::from_millis(100));
    }

    pad.stop_rumble().expect("motors stop");
}

#[cfg(not(windows))]
fn main() {
    eprintln!("the rumble demo drives the system XInput backend and needs Windows");
}
