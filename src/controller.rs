//! Controller facade: one XInput slot, polled and rumbled synchronously.
//!
//! [`Controller`] pairs an immutable slot index (`0..=3`) with a scale mode
//! and an error policy, over an injected [`XinputApi`] backend. Every public
//! operation is a single blocking native round-trip; there is no internal
//! queue, cache, or background thread. The native layer is a process-wide
//! resource addressed by slot index, so callers sharing a slot across
//! threads serialize themselves.
//!
//! # Error policy
//! The native calls return a status code the reference binding never looked
//! at. [`ErrorPolicy::Strict`] (the default) surfaces it: an empty slot polls
//! as [`Error::DeviceAbsent`], anything else non-zero as [`Error::Native`].
//! [`ErrorPolicy::Legacy`] reproduces the historical behavior byte for byte:
//! the status is logged and dropped, and a failed poll decodes the zeroed
//! buffer (all buttons released, all axes centered).
//!
//! # Motor channel swap
//! [`rumble`](Controller::rumble) writes the logical *left* intensity into
//! the record's *right*-motor field and vice versa. The wiring is inherited
//! from the reference binding and kept for behavioral parity; callers that
//! care which physical motor (low- vs high-frequency) they drive should swap
//! their arguments accordingly.

use crate::native::{
    XinputApi, XinputState, XinputVibration, MAX_SLOT_INDEX, STATUS_DEVICE_NOT_CONNECTED,
    STATUS_SUCCESS,
};
use crate::state::PadState;

#[cfg(windows)]
use crate::native::windows::SystemXinput;

use log::{debug, trace, warn};
use thiserror::Error;

/// Full-scale motor intensity, the native maximum.
const MOTOR_MAX: f64 = 65535.0;

/// Failures surfaced by the facade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// Slot index outside `0..=3`. Rejected before any native call.
    #[error("controller index {index} out of range (valid slots are 0..=3)")]
    InvalidIndex { index: u32 },

    /// No controller occupies the addressed slot (native status 1167).
    #[error("no controller connected at slot {index}")]
    DeviceAbsent { index: u32 },

    /// Any other non-zero native status code, relayed verbatim.
    #[error("native call failed with status {code}")]
    Native { code: u32 },
}

/// How native status codes are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Surface non-zero status codes as [`Error`]s.
    #[default]
    Strict,
    /// Log and ignore status codes; polls decode whatever the buffer holds.
    Legacy,
}

/// Handle to one XInput slot.
///
/// A plain value: constructing one issues a single reset command to the
/// slot, and dropping one releases nothing.
#[derive(Debug, Clone)]
pub struct Controller<A: XinputApi> {
    api: A,
    index: u32,
    scale: bool,
    errors: ErrorPolicy,
}

#[cfg(windows)]
#[cfg_attr(docsrs, doc(cfg(windows)))]
impl Controller<SystemXinput> {
    /// Open slot `index` against the system XInput backend.
    ///
    /// `scale` selects fractional analog units (`[-1, 1]` thumbs, `[0, 1]`
    /// triggers and rumble) versus native integers.
    ///
    /// Note for callers porting from the reference binding: its constructor
    /// took `(scale, number)`; here the slot index comes first.
    pub fn new(index: u32, scale: bool) -> Result<Self, Error> {
        Self::with_api(SystemXinput, index, scale)
    }
}

impl<A: XinputApi> Controller<A> {
    /// Open slot `index` against an injected backend.
    ///
    /// Issues exactly one reset (null vibration command) as a side effect.
    /// The reset's status code is ignored in every policy: an absent
    /// controller silently no-ops here, matching the platform contract.
    pub fn with_api(api: A, index: u32, scale: bool) -> Result<Self, Error> {
        if index > MAX_SLOT_INDEX {
            return Err(Error::InvalidIndex { index });
        }
        debug!("slot {index}: reset (scale={scale})");
        api.set_state(index, None);
        Ok(Self {
            api,
            index,
            scale,
            errors: ErrorPolicy::default(),
        })
    }

    /// Replace the error policy. Builder-style, typically chained onto
    /// construction.
    pub fn error_policy(mut self, errors: ErrorPolicy) -> Self {
        self.errors = errors;
        self
    }

    /// The slot index this handle addresses.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Whether analog values are rescaled to fractional units.
    pub fn is_scaled(&self) -> bool {
        self.scale
    }

    /// Poll the slot once and decode the result.
    ///
    /// Blocks only for the native round-trip. Reading advances nothing on
    /// this side; the driver's packet counter moves on its own.
    pub fn state(&self) -> Result<PadState, Error> {
        let mut native = XinputState::default();
        let code = self.api.get_state(self.index, &mut native);
        self.check(code)?;
        trace!(
            "slot {}: poll packet={} buttons={:#06x}",
            self.index,
            native.packet_number,
            native.gamepad.buttons
        );
        Ok(PadState::from_native(&native, self.scale))
    }

    /// One poll round-trip, reduced to "is anything plugged in".
    ///
    /// Never errors regardless of policy; a non-success status is the answer.
    pub fn connected(&self) -> bool {
        let mut native = XinputState::default();
        self.api.get_state(self.index, &mut native) == STATUS_SUCCESS
    }

    /// Command the vibration motors.
    ///
    /// `right` defaults to `left` when omitted. In scale mode, intensities
    /// clamp to `[0.0, 1.0]` and stretch across the 16-bit motor range; in
    /// raw mode they clamp to `[0, 65535]` directly. Fractions truncate.
    /// See the module docs for the channel swap.
    pub fn rumble(&self, left: f64, right: Option<f64>) -> Result<(), Error> {
        let right = right.unwrap_or(left);
        let (left, right) = if self.scale {
            (
                (left.clamp(0.0, 1.0) * MOTOR_MAX) as u16,
                (right.clamp(0.0, 1.0) * MOTOR_MAX) as u16,
            )
        } else {
            (
                left.clamp(0.0, MOTOR_MAX) as u16,
                right.clamp(0.0, MOTOR_MAX) as u16,
            )
        };
        // Inherited wiring: logical left drives the right-motor field.
        let command = XinputVibration {
            left_motor: right,
            right_motor: left,
        };
        debug!(
            "slot {}: rumble left_motor={} right_motor={}",
            self.index, command.left_motor, command.right_motor
        );
        let code = self.api.set_state(self.index, Some(&command));
        self.check(code)
    }

    /// Stop both motors.
    pub fn stop_rumble(&self) -> Result<(), Error> {
        self.rumble(0.0, None)
    }

    fn check(&self, code: u32) -> Result<(), Error> {
        if code == STATUS_SUCCESS {
            return Ok(());
        }
        match self.errors {
            ErrorPolicy::Legacy => {
                warn!("slot {}: ignoring native status {code}", self.index);
                Ok(())
            }
            ErrorPolicy::Strict if code == STATUS_DEVICE_NOT_CONNECTED => {
                Err(Error::DeviceAbsent { index: self.index })
            }
            ErrorPolicy::Strict => Err(Error::Native { code }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buttons::{MASK_B, MASK_RSHOULDER};
    use crate::native::mock::{MockXinput, SentCommand};
    use crate::native::XinputGamepad;
    use crate::state::Axes;

    fn controller(mock: &MockXinput, scale: bool) -> Controller<&MockXinput> {
        Controller::with_api(mock, 0, scale).unwrap()
    }

    #[test]
    fn construction_sends_one_reset_before_anything_else() {
        let mock = MockXinput::new();
        let pad = controller(&mock, true);
        assert_eq!(
            mock.sent(),
            [SentCommand {
                index: 0,
                vibration: None
            }]
        );
        drop(pad);
        assert_eq!(mock.sent().len(), 1);
    }

    #[test]
    fn construction_ignores_reset_status() {
        let mock = MockXinput::new();
        mock.fail_commands_with(STATUS_DEVICE_NOT_CONNECTED);
        assert!(Controller::with_api(&mock, 3, true).is_ok());
    }

    #[test]
    fn controller_over_a_borrowed_mock_is_debuggable() {
        // `unwrap`/`unwrap_err` on facade results need the whole handle to
        // be `Debug`, mock backend included.
        let mock = MockXinput::new();
        let pad = controller(&mock, true);
        assert!(format!("{pad:?}").contains("Controller"));
    }

    #[test]
    fn out_of_range_index_is_rejected_without_native_calls() {
        let mock = MockXinput::new();
        let err = Controller::with_api(&mock, 4, true).unwrap_err();
        assert_eq!(err, Error::InvalidIndex { index: 4 });
        assert!(mock.sent().is_empty());
    }

    #[test]
    fn state_decodes_buttons_and_scaled_axes() {
        let mock = MockXinput::new();
        mock.push_gamepad(
            9,
            XinputGamepad {
                buttons: MASK_B | MASK_RSHOULDER,
                left_trigger: 255,
                right_trigger: 0,
                l_thumb_x: 32767,
                l_thumb_y: 0,
                r_thumb_x: 0,
                r_thumb_y: -32768,
            },
        );
        let pad = controller(&mock, true);
        let state = pad.state().unwrap();

        assert_eq!(state.packet_number, 9);
        assert!(state.buttons.b && state.buttons.rshoulder);
        assert!(!state.buttons.a);
        let Axes::Scaled(axes) = state.axes else {
            panic!("expected scaled axes");
        };
        assert_eq!(axes.left_trigger, 1.0);
        assert_eq!(axes.l_thumb_x, 1.0);
        assert_eq!(axes.r_thumb_y, -32768.0 / 32767.0);
    }

    #[test]
    fn state_in_raw_mode_keeps_native_units() {
        let mock = MockXinput::new();
        mock.push_gamepad(
            1,
            XinputGamepad {
                buttons: 0,
                left_trigger: 128,
                right_trigger: 7,
                l_thumb_x: -12345,
                l_thumb_y: 0,
                r_thumb_x: 0,
                r_thumb_y: 0,
            },
        );
        let state = controller(&mock, false).state().unwrap();
        let Axes::Raw(axes) = state.axes else {
            panic!("expected raw axes");
        };
        assert_eq!(axes.left_trigger, 128);
        assert_eq!(axes.right_trigger, 7);
        assert_eq!(axes.l_thumb_x, -12345);
    }

    #[test]
    fn strict_poll_reports_absent_device() {
        let mock = MockXinput::new();
        let pad = controller(&mock, true);
        assert_eq!(pad.state(), Err(Error::DeviceAbsent { index: 0 }));
    }

    #[test]
    fn strict_poll_relays_other_native_failures() {
        let mock = MockXinput::new();
        mock.push_state(5, XinputState::default());
        let pad = controller(&mock, true);
        assert_eq!(pad.state(), Err(Error::Native { code: 5 }));
    }

    #[test]
    fn legacy_poll_decodes_the_zeroed_buffer() {
        let mock = MockXinput::new();
        let pad = controller(&mock, true).error_policy(ErrorPolicy::Legacy);
        let state = pad.state().unwrap();
        assert_eq!(state.packet_number, 0);
        assert!(state.buttons.is_empty());
        let Axes::Scaled(axes) = state.axes else {
            panic!("expected scaled axes");
        };
        assert_eq!(axes.l_thumb_x, 0.0);
        assert_eq!(axes.left_trigger, 0.0);
    }

    #[test]
    fn connected_mirrors_poll_status() {
        let mock = MockXinput::new();
        mock.push_state(STATUS_SUCCESS, XinputState::default());
        let pad = controller(&mock, true);
        assert!(pad.connected());
        // Queue exhausted: the mock now reports an empty slot.
        assert!(!pad.connected());
    }

    #[test]
    fn scaled_rumble_swaps_channels() {
        let mock = MockXinput::new();
        controller(&mock, true).rumble(1.0, Some(0.0)).unwrap();
        assert_eq!(
            mock.sent()[1].vibration,
            Some(XinputVibration {
                left_motor: 0,
                right_motor: 65535
            })
        );
    }

    #[test]
    fn scaled_rumble_clamps_to_unit_range() {
        let mock = MockXinput::new();
        controller(&mock, true).rumble(2.5, Some(-0.5)).unwrap();
        assert_eq!(
            mock.sent()[1].vibration,
            Some(XinputVibration {
                left_motor: 0,
                right_motor: 65535
            })
        );
    }

    #[test]
    fn scaled_rumble_truncates_fractions() {
        let mock = MockXinput::new();
        controller(&mock, true).rumble(0.5, None).unwrap();
        // 0.5 * 65535 = 32767.5, truncated.
        assert_eq!(
            mock.sent()[1].vibration,
            Some(XinputVibration {
                left_motor: 32767,
                right_motor: 32767
            })
        );
    }

    #[test]
    fn raw_rumble_clamps_to_motor_range_with_same_swap() {
        let mock = MockXinput::new();
        controller(&mock, false).rumble(-5.0, Some(2.0)).unwrap();
        assert_eq!(
            mock.sent()[1].vibration,
            Some(XinputVibration {
                left_motor: 2,
                right_motor: 0
            })
        );
    }

    #[test]
    fn omitted_right_intensity_mirrors_left() {
        let mock = MockXinput::new();
        controller(&mock, false).rumble(1000.0, None).unwrap();
        assert_eq!(
            mock.sent()[1].vibration,
            Some(XinputVibration {
                left_motor: 1000,
                right_motor: 1000
            })
        );
    }

    #[test]
    fn stop_rumble_zeroes_both_motors() {
        let mock = MockXinput::new();
        controller(&mock, true).stop_rumble().unwrap();
        assert_eq!(
            mock.sent()[1].vibration,
            Some(XinputVibration::default())
        );
    }

    #[test]
    fn strict_rumble_surfaces_command_failures() {
        let mock = MockXinput::new();
        let pad = controller(&mock, true);
        mock.fail_commands_with(STATUS_DEVICE_NOT_CONNECTED);
        assert_eq!(
            pad.rumble(0.3, None),
            Err(Error::DeviceAbsent { index: 0 })
        );
    }

    #[test]
    fn legacy_rumble_swallows_command_failures() {
        let mock = MockXinput::new();
        let pad = controller(&mock, true).error_policy(ErrorPolicy::Legacy);
        mock.fail_commands_with(87);
        assert!(pad.rumble(0.3, None).is_ok());
    }
}
