#![cfg(windows)]

//! The real XInput backend, linked through `windows-sys`.
//!
//! DLL resolution is the loader's job: `windows-sys` emits an import for
//! `xinput`, and whichever ABI-compatible version the OS resolves
//! (`xinput1_4`, `xinput9_1_0`, ...) serves the calls. Nothing here retries,
//! caches, or reinterprets — each method is one FFI round-trip relaying the
//! platform status code.

use super::{XinputApi, XinputGamepad, XinputState, XinputVibration};

use windows_sys::Win32::UI::Input::XboxController::{
    XInputGetState, XInputSetState, XINPUT_STATE, XINPUT_VIBRATION,
};

/// Process-wide XInput entry points as an injectable value.
///
/// Zero-sized and `Copy`: the native layer is a process singleton addressed
/// purely by slot index, so every `SystemXinput` is the same backend.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemXinput;

impl XinputApi for SystemXinput {
    fn get_state(&self, index: u32, state: &mut XinputState) -> u32 {
        // FFI struct: must be manually zeroed before the call.
        let mut native: XINPUT_STATE = unsafe { std::mem::zeroed() };
        let code = unsafe { XInputGetState(index, &mut native) };

        state.packet_number = native.dwPacketNumber;
        state.gamepad = XinputGamepad {
            buttons: native.Gamepad.wButtons,
            left_trigger: native.Gamepad.bLeftTrigger,
            right_trigger: native.Gamepad.bRightTrigger,
            l_thumb_x: native.Gamepad.sThumbLX,
            l_thumb_y: native.Gamepad.sThumbLY,
            r_thumb_x: native.Gamepad.sThumbRX,
            r_thumb_y: native.Gamepad.sThumbRY,
        };
        code
    }

    fn set_state(&self, index: u32, vibration: Option<&XinputVibration>) -> u32 {
        match vibration {
            Some(v) => {
                let native = XINPUT_VIBRATION {
                    wLeftMotorSpeed: v.left_motor,
                    wRightMotorSpeed: v.right_motor,
                };
                unsafe { XInputSetState(index, &native) }
            }
            // Null command pointer: the platform treats this as a reset.
            None => unsafe { XInputSetState(index, std::ptr::null()) },
        }
    }
}
