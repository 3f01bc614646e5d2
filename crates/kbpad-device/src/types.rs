use std::fmt;

use kbpad_bit_derive::Bit;
use kbpad_bit_mask::Bitmask;

/// Device type tag of a gamepad.
pub const DEVICE_TYPE_GAMEPAD: u8 = 0x01;
/// Device subtype tag of a gamepad.
pub const DEVICE_SUBTYPE_GAMEPAD: u8 = 0x01;

/// Logical controller buttons, positioned at their ABI bits.
#[derive(Bit, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    DPadUp,
    DPadDown,
    DPadLeft,
    DPadRight,
    Start,
    Back,
    LeftThumb,
    RightThumb,
    LeftShoulder,
    RightShoulder,
    #[bit(12)]
    A,
    B,
    X,
    Y,
}

/// A set of pressed buttons.
pub type Buttons = Bitmask<Button>;

impl Button {
    pub const ALL: [Button; 14] = [
        Button::DPadUp,
        Button::DPadDown,
        Button::DPadLeft,
        Button::DPadRight,
        Button::Start,
        Button::Back,
        Button::LeftThumb,
        Button::RightThumb,
        Button::LeftShoulder,
        Button::RightShoulder,
        Button::A,
        Button::B,
        Button::X,
        Button::Y,
    ];

    /// Parse a button name as written in profiles.
    pub fn parse(input: &str) -> Option<Button> {
        Some(match input.to_ascii_lowercase().as_str() {
            "a" => Button::A,
            "b" => Button::B,
            "x" => Button::X,
            "y" => Button::Y,
            "back" | "select" => Button::Back,
            "start" => Button::Start,
            "dpad_up" => Button::DPadUp,
            "dpad_down" => Button::DPadDown,
            "dpad_left" => Button::DPadLeft,
            "dpad_right" => Button::DPadRight,
            "left_thumb" | "ls" => Button::LeftThumb,
            "right_thumb" | "rs" => Button::RightThumb,
            "left_shoulder" | "lb" => Button::LeftShoulder,
            "right_shoulder" | "rb" => Button::RightShoulder,
            _ => return None,
        })
    }
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Button::DPadUp => "dpad_up",
            Button::DPadDown => "dpad_down",
            Button::DPadLeft => "dpad_left",
            Button::DPadRight => "dpad_right",
            Button::Start => "start",
            Button::Back => "back",
            Button::LeftThumb => "left_thumb",
            Button::RightThumb => "right_thumb",
            Button::LeftShoulder => "left_shoulder",
            Button::RightShoulder => "right_shoulder",
            Button::A => "a",
            Button::B => "b",
            Button::X => "x",
            Button::Y => "y",
        })
    }
}

/// Buttons, triggers and sticks of a standard controller.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Gamepad {
    pub buttons: u16,
    pub left_trigger: u8,
    pub right_trigger: u8,
    pub thumb_lx: i16,
    pub thumb_ly: i16,
    pub thumb_rx: i16,
    pub thumb_ry: i16,
}

impl Gamepad {
    /// The button field as a typed set.
    pub fn pressed(&self) -> Buttons {
        Bitmask::from_bits(u64::from(self.buttons))
    }

    pub fn is_pressed(&self, button: Button) -> bool {
        self.pressed().contains(button)
    }

    /// Stores `buttons` into the ABI button field.
    pub fn set_pressed(&mut self, buttons: Buttons) {
        // Every button sits below bit 16.
        self.buttons = (buttons.bits() & 0xFFFF) as u16;
    }
}

/// A polled snapshot of the controller.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerState {
    pub packet_number: u32,
    pub gamepad: Gamepad,
}

/// Rumble motor speeds.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Vibration {
    pub left_motor_speed: u16,
    pub right_motor_speed: u16,
}

/// What the device reports it can do.
///
/// Gamepad fields hold the supported resolution of each control rather
/// than a value.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub device_type: u8,
    pub sub_type: u8,
    pub flags: u16,
    pub gamepad: Gamepad,
    pub vibration: Vibration,
}

/// A key transition reported through the keystroke query.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Keystroke {
    pub virtual_key: u16,
    pub unicode: u16,
    pub flags: u16,
    pub user_index: u8,
    pub hid_code: u8,
}
