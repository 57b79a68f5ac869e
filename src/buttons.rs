//! Button bitmask decoding.
//!
//! XInput packs all digital inputs into one 16-bit field. [`Buttons`]
//! unpacks it into 14 named flags using the fixed [`BUTTON_MASKS`] table.
//! Bits `0x0400` and `0x0800` are reserved by the platform and never decoded.

use serde::{Deserialize, Serialize};

pub const MASK_UP: u16 = 0x0001;
pub const MASK_DOWN: u16 = 0x0002;
pub const MASK_LEFT: u16 = 0x0004;
pub const MASK_RIGHT: u16 = 0x0008;
pub const MASK_START: u16 = 0x0010;
pub const MASK_BACK: u16 = 0x0020;
pub const MASK_LTHUMB: u16 = 0x0040;
pub const MASK_RTHUMB: u16 = 0x0080;
pub const MASK_LSHOULDER: u16 = 0x0100;
pub const MASK_RSHOULDER: u16 = 0x0200;
pub const MASK_A: u16 = 0x1000;
pub const MASK_B: u16 = 0x2000;
pub const MASK_X: u16 = 0x4000;
pub const MASK_Y: u16 = 0x8000;

/// Name → bit position table, in mask order. Indices are stable; bindings
/// and UIs may rely on them.
pub const BUTTON_MASKS: [(&str, u16); 14] = [
    ("up", MASK_UP),
    ("down", MASK_DOWN),
    ("left", MASK_LEFT),
    ("right", MASK_RIGHT),
    ("start", MASK_START),
    ("back", MASK_BACK),
    ("lthumb", MASK_LTHUMB),
    ("rthumb", MASK_RTHUMB),
    ("lshoulder", MASK_LSHOULDER),
    ("rshoulder", MASK_RSHOULDER),
    ("a", MASK_A),
    ("b", MASK_B),
    ("x", MASK_X),
    ("y", MASK_Y),
];

/// Decoded button state: one flag per named button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Buttons {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub start: bool,
    pub back: bool,
    pub lthumb: bool,
    pub rthumb: bool,
    pub lshoulder: bool,
    pub rshoulder: bool,
    pub a: bool,
    pub b: bool,
    pub x: bool,
    pub y: bool,
}

impl Buttons {
    /// Decode a packed button field: bit set ⇒ flag true.
    pub fn from_bits(bits: u16) -> Self {
        Self {
            up: bits & MASK_UP != 0,
            down: bits & MASK_DOWN != 0,
            left: bits & MASK_LEFT != 0,
            right: bits & MASK_RIGHT != 0,
            start: bits & MASK_START != 0,
            back: bits & MASK_BACK != 0,
            lthumb: bits & MASK_LTHUMB != 0,
            rthumb: bits & MASK_RTHUMB != 0,
            lshoulder: bits & MASK_LSHOULDER != 0,
            rshoulder: bits & MASK_RSHOULDER != 0,
            a: bits & MASK_A != 0,
            b: bits & MASK_B != 0,
            x: bits & MASK_X != 0,
            y: bits & MASK_Y != 0,
        }
    }

    /// Look up a flag by its [`BUTTON_MASKS`] name. `None` for unknown names.
    pub fn get(&self, name: &str) -> Option<bool> {
        let value = match name {
            "up" => self.up,
            "down" => self.down,
            "left" => self.left,
            "right" => self.right,
            "start" => self.start,
            "back" => self.back,
            "lthumb" => self.lthumb,
            "rthumb" => self.rthumb,
            "lshoulder" => self.lshoulder,
            "rshoulder" => self.rshoulder,
            "a" => self.a,
            "b" => self.b,
            "x" => self.x,
            "y" => self.y,
            _ => return None,
        };
        Some(value)
    }

    /// Names of the buttons currently held, in [`BUTTON_MASKS`] order.
    pub fn pressed(&self) -> impl Iterator<Item = &'static str> + '_ {
        BUTTON_MASKS
            .iter()
            .copied()
            .filter(move |(name, _)| self.get(name) == Some(true))
            .map(|(name, _)| name)
    }

    /// True if no button is held.
    pub fn is_empty(&self) -> bool {
        self.pressed().next().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_bit_decodes_to_exactly_one_flag() {
        for &(name, mask) in BUTTON_MASKS.iter() {
            let decoded = Buttons::from_bits(mask);
            for &(other, _) in BUTTON_MASKS.iter() {
                let expected = other == name;
                assert_eq!(
                    decoded.get(other),
                    Some(expected),
                    "bit {mask:#06x} ({name}): flag {other}"
                );
            }
        }
    }

    #[test]
    fn zero_field_decodes_all_released() {
        assert!(Buttons::from_bits(0).is_empty());
        assert_eq!(Buttons::from_bits(0), Buttons::default());
    }

    #[test]
    fn reserved_bits_are_ignored() {
        // 0x0400 / 0x0800 are unassigned in the XInput layout.
        assert!(Buttons::from_bits(0x0400 | 0x0800).is_empty());
    }

    #[test]
    fn combined_bits_decode_together() {
        let decoded = Buttons::from_bits(MASK_A | MASK_START | MASK_UP);
        assert!(decoded.a && decoded.start && decoded.up);
        assert_eq!(decoded.pressed().collect::<Vec<_>>(), ["up", "start", "a"]);
    }

    #[test]
    fn unknown_name_is_none() {
        assert_eq!(Buttons::default().get("guide"), None);
    }
}
