use kbpad_bit_mask::Bitmask;
use kbpad_keyboard::KeyState;

use crate::keymap::KeyMap;
use crate::types::{Button, Buttons, Gamepad};

/// How the movement keys are read, chosen by the latch key on every poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementMode {
    /// Latch on: movement keys press the d-pad.
    DirectionalButtons,
    /// Latch off: movement keys push the left stick to its limits.
    StickDeflection,
}

impl MovementMode {
    pub fn from_latch(toggled: bool) -> Self {
        if toggled {
            MovementMode::DirectionalButtons
        } else {
            MovementMode::StickDeflection
        }
    }

    /// Reads the latch from `keys`.
    pub fn sample(keys: &impl KeyState, keymap: &KeyMap) -> Self {
        Self::from_latch(keys.is_toggled(keymap.latch))
    }
}

/// Maps the keyboard onto a controller. Triggers stay at rest.
pub fn map_gamepad(
    mode: MovementMode,
    keys: &impl KeyState,
    keymap: &KeyMap,
) -> Gamepad {
    let movement = &keymap.movement;
    let left = keys.is_down(movement.left);
    let right = keys.is_down(movement.right);
    let down = keys.is_down(movement.down);
    let up = keys.is_down(movement.up);

    let mut pad = Gamepad::default();
    let mut buttons: Buttons = Bitmask::empty();

    match mode {
        MovementMode::DirectionalButtons => {
            // Opposing directions may both be set.
            for (held, button) in [
                (left, Button::DPadLeft),
                (right, Button::DPadRight),
                (down, Button::DPadDown),
                (up, Button::DPadUp),
            ] {
                if held {
                    buttons.insert(button);
                }
            }
        }
        MovementMode::StickDeflection => {
            pad.thumb_lx = deflection(left, right);
            pad.thumb_ly = deflection(down, up);
        }
    }

    for (key, button) in keymap.bindings() {
        if keys.is_down(*key) {
            buttons.insert(*button);
        }
    }

    pad.set_pressed(buttons);
    pad
}

/// Full deflection towards the held side. Both sides held cancel to exactly
/// zero; `i16::MIN + i16::MAX` would leave -1.
fn deflection(negative: bool, positive: bool) -> i16 {
    match (negative, positive) {
        (true, false) => i16::MIN,
        (false, true) => i16::MAX,
        _ => 0,
    }
}
