//! Native XInput records and the call seam.
//!
//! The three `#[repr(C)]` records here must match the Windows XInput ABI
//! bit-for-bit: they are handed to the native functions as raw output/input
//! buffers. Sizes are pinned with compile-time assertions (4/12/16 bytes).
//!
//! The [`XinputApi`] trait is the single boundary this crate has with the
//! outside world. Production code uses [`windows::SystemXinput`]; tests and
//! host applications that want deterministic input inject their own
//! implementation (see [`mock::MockXinput`]).
//!
//! No validation happens at this layer. Whatever bytes the native call writes
//! are passed upward unchanged; the call contract is trusted entirely.

pub mod mock;

#[cfg(windows)]
#[cfg_attr(docsrs, doc(cfg(windows)))]
pub mod windows;

/// Status code for a successful native call.
pub const STATUS_SUCCESS: u32 = 0;

/// Status code reported when no controller occupies the polled slot
/// (`ERROR_DEVICE_NOT_CONNECTED`).
pub const STATUS_DEVICE_NOT_CONNECTED: u32 = 1167;

/// Highest valid XInput slot index (slots are `0..=3`).
pub const MAX_SLOT_INDEX: u32 = 3;

/// Vibration command: two motor intensities, `0..=65535` each.
///
/// Matches `XINPUT_VIBRATION`. The left motor is the low-frequency rumble
/// motor, the right motor the high-frequency one.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct XinputVibration {
    pub left_motor: u16,
    pub right_motor: u16,
}

/// Raw gamepad state: packed button bits plus six analog channels.
///
/// Matches `XINPUT_GAMEPAD`: field order and widths are ABI, do not reorder.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct XinputGamepad {
    pub buttons: u16,
    pub left_trigger: u8,
    pub right_trigger: u8,
    pub l_thumb_x: i16,
    pub l_thumb_y: i16,
    pub r_thumb_x: i16,
    pub r_thumb_y: i16,
}

/// State envelope: the gamepad record plus the driver's packet counter.
///
/// Matches `XINPUT_STATE`. `packet_number` increments whenever the controller
/// state changes; callers can compare it across polls to detect staleness.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct XinputState {
    pub packet_number: u32,
    pub gamepad: XinputGamepad,
}

// ABI layout pins. XInput packs these with no gaps.
const _: [(); 4] = [(); size_of::<XinputVibration>()];
const _: [(); 12] = [(); size_of::<XinputGamepad>()];
const _: [(); 16] = [(); size_of::<XinputState>()];
const _: [(); 2] = [(); align_of::<XinputGamepad>()];
const _: [(); 4] = [(); align_of::<XinputState>()];

/// The two XInput entry points this crate depends on.
///
/// Both calls are synchronous round-trips returning the platform status code
/// (`0` success, `1167` device not connected, anything else driver-defined).
/// Interpreting that code is the caller's business; implementations only relay
/// it.
pub trait XinputApi {
    /// Fill `state` with the current state of slot `index`.
    ///
    /// `state` arrives zeroed; on a non-zero status the native layer may have
    /// left it untouched.
    fn get_state(&self, index: u32, state: &mut XinputState) -> u32;

    /// Apply a vibration command to slot `index`.
    ///
    /// `None` marshals as a null command pointer, which the platform treats
    /// as a state reset (motors off, commanded state cleared).
    fn set_state(&self, index: u32, vibration: Option<&XinputVibration>) -> u32;
}

// Borrowed backends work too, so a test can keep its mock and hand the
// controller a reference.
impl<A: XinputApi + ?Sized> XinputApi for &A {
    fn get_state(&self, index: u32, state: &mut XinputState) -> u32 {
        (**self).get_state(index, state)
    }

    fn set_state(&self, index: u32, vibration: Option<&XinputVibration>) -> u32 {
        (**self).set_state(index, vibration)
    }
}
