//! padsnap: poll XInput gamepads and drive their rumble motors.
//!
//! A deliberately small binding: one [`Controller`] per XInput slot
//! (`0..=3`), a [`state`](Controller::state) poll that decodes buttons and
//! optionally rescales analog values, and a [`rumble`](Controller::rumble)
//! command. Each call is a single synchronous native round-trip; scheduling
//! the polling loop is the caller's job.
//!
//! ```no_run
//! # #[cfg(windows)]
//! # fn poll_once() -> Result<(), padsnap::Error> {
//! use padsnap::Controller;
//!
//! let pad = Controller::new(0, true)?;
//! let state = pad.state()?;
//! if state.buttons.a {
//!     pad.rumble(0.5, None)?;
//! }
//! # Ok(())
//! # }
//! ```
//!
//! The native seam is the [`native::XinputApi`] trait: `Controller::new`
//! binds the system backend on Windows, and [`Controller::with_api`] accepts
//! any implementation (see [`native::mock::MockXinput`]) on every platform.

pub mod buttons;
pub mod controller;
pub mod native;
pub mod state;

pub use buttons::Buttons;
pub use controller::{Controller, Error, ErrorPolicy};
pub use state::{Axes, PadState, RawAxes, ScaledAxes};
