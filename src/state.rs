//! Caller-facing poll results.
//!
//! [`PadState`] is the decoded form of one native state record: buttons
//! unpacked into named flags, the six analog channels either passed through
//! as native integers ([`RawAxes`]) or rescaled to fractions of their native
//! maximum ([`ScaledAxes`]), and the driver's packet counter exposed
//! untouched.
//!
//! # Scaling convention
//! Thumbstick values divide by `32767.0` and triggers by `255.0`. Because
//! the signed range is asymmetric (`-32768..=32767`), a fully-deflected
//! negative stick reads `-32768/32767 ≈ -1.00003` — slightly below `-1.0`.
//! That asymmetry is inherited from the hardware range and deliberately not
//! clamped; consumers that need a hard `[-1, 1]` envelope clamp themselves.

use crate::buttons::Buttons;
use crate::native::{XinputGamepad, XinputState};

use serde::{Deserialize, Serialize};

/// Divisor for thumbstick scaling (positive native maximum).
pub const THUMB_MAX: f32 = 32767.0;

/// Divisor for trigger scaling (native maximum).
pub const TRIGGER_MAX: f32 = 255.0;

/// Analog channels in native integer units, unchanged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawAxes {
    pub left_trigger: u8,
    pub right_trigger: u8,
    pub l_thumb_x: i16,
    pub l_thumb_y: i16,
    pub r_thumb_x: i16,
    pub r_thumb_y: i16,
}

/// Analog channels as fractions of their native maximum.
///
/// Triggers land in `[0.0, 1.0]`; thumbsticks in `[-32768/32767, 1.0]`
/// (see the module docs for why the lower bound dips below `-1.0`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScaledAxes {
    pub left_trigger: f32,
    pub right_trigger: f32,
    pub l_thumb_x: f32,
    pub l_thumb_y: f32,
    pub r_thumb_x: f32,
    pub r_thumb_y: f32,
}

/// Analog channels, tagged by the controller's scale mode.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Axes {
    Raw(RawAxes),
    Scaled(ScaledAxes),
}

impl RawAxes {
    fn from_gamepad(gp: &XinputGamepad) -> Self {
        Self {
            left_trigger: gp.left_trigger,
            right_trigger: gp.right_trigger,
            l_thumb_x: gp.l_thumb_x,
            l_thumb_y: gp.l_thumb_y,
            r_thumb_x: gp.r_thumb_x,
            r_thumb_y: gp.r_thumb_y,
        }
    }

    /// Rescale into fractional units. No clamping.
    pub fn scaled(&self) -> ScaledAxes {
        ScaledAxes {
            left_trigger: self.left_trigger as f32 / TRIGGER_MAX,
            right_trigger: self.right_trigger as f32 / TRIGGER_MAX,
            l_thumb_x: self.l_thumb_x as f32 / THUMB_MAX,
            l_thumb_y: self.l_thumb_y as f32 / THUMB_MAX,
            r_thumb_x: self.r_thumb_x as f32 / THUMB_MAX,
            r_thumb_y: self.r_thumb_y as f32 / THUMB_MAX,
        }
    }
}

/// Decoded controller state for one poll.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PadState {
    /// Driver-side change counter. Increments when any input changes; equal
    /// counters across polls mean nothing moved. Exposed, not interpreted.
    pub packet_number: u32,
    pub buttons: Buttons,
    pub axes: Axes,
}

impl PadState {
    /// Decode a native state record. `scale` selects fractional vs raw
    /// analog units.
    pub fn from_native(state: &XinputState, scale: bool) -> Self {
        let raw = RawAxes::from_gamepad(&state.gamepad);
        Self {
            packet_number: state.packet_number,
            buttons: Buttons::from_bits(state.gamepad.buttons),
            axes: if scale {
                Axes::Scaled(raw.scaled())
            } else {
                Axes::Raw(raw)
            },
        }
    }
}
