//! Scriptable in-memory XInput backend.
//!
//! [`MockXinput`] stands in for the real driver in tests and host
//! applications that need deterministic input. Poll results are scripted as a
//! FIFO queue via [`push_state`](MockXinput::push_state); every `set_state`
//! call (vibration command or reset) is recorded for inspection via
//! [`sent`](MockXinput::sent).
//!
//! An unscripted mock behaves like an empty slot: polls report
//! [`STATUS_DEVICE_NOT_CONNECTED`](crate::native::STATUS_DEVICE_NOT_CONNECTED)
//! and leave the output buffer untouched, same as the real driver.

use super::{XinputApi, XinputState, XinputVibration, STATUS_DEVICE_NOT_CONNECTED};

use std::collections::VecDeque;
use std::sync::Mutex;

/// One recorded `set_state` call.
///
/// `vibration: None` is the null-command reset the facade issues at
/// construction time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SentCommand {
    /// Slot index the command addressed.
    pub index: u32,
    /// The marshaled payload, or `None` for a reset.
    pub vibration: Option<XinputVibration>,
}

#[derive(Debug, Default)]
struct Inner {
    polls: VecDeque<(u32, XinputState)>,
    set_status: u32,
    sent: Vec<SentCommand>,
}

/// Deterministic [`XinputApi`] implementation backed by scripted queues.
#[derive(Debug, Default)]
pub struct MockXinput {
    inner: Mutex<Inner>,
}

impl MockXinput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the `(status, state)` pair the next poll will observe.
    pub fn push_state(&self, status: u32, state: XinputState) {
        self.inner.lock().unwrap().polls.push_back((status, state));
    }

    /// Convenience: queue a successful poll of `gamepad` with a given packet
    /// counter.
    pub fn push_gamepad(&self, packet_number: u32, gamepad: super::XinputGamepad) {
        self.push_state(
            super::STATUS_SUCCESS,
            XinputState {
                packet_number,
                gamepad,
            },
        );
    }

    /// Set the status code returned by subsequent `set_state` calls.
    pub fn fail_commands_with(&self, status: u32) {
        self.inner.lock().unwrap().set_status = status;
    }

    /// Every `set_state` call recorded so far, oldest first.
    pub fn sent(&self) -> Vec<SentCommand> {
        self.inner.lock().unwrap().sent.clone()
    }
}

impl XinputApi for MockXinput {
    fn get_state(&self, _index: u32, state: &mut XinputState) -> u32 {
        match self.inner.lock().unwrap().polls.pop_front() {
            Some((status, scripted)) => {
                *state = scripted;
                status
            }
            // Empty slot: status only, buffer left as the caller zeroed it.
            None => STATUS_DEVICE_NOT_CONNECTED,
        }
    }

    fn set_state(&self, index: u32, vibration: Option<&XinputVibration>) -> u32 {
        let mut inner = self.inner.lock().unwrap();
        inner.sent.push(SentCommand {
            index,
            vibration: vibration.copied(),
        });
        inner.set_status
    }
}
