mod device;
mod driver;
mod error;
mod keymap;
mod mapping;
mod slots;
mod types;

pub use crate::device::{VirtualController, INITIAL_PACKET_NUMBER, SUPPORTED_SLOT};
pub use crate::driver::InputDriver;
pub use crate::error::{DeviceError, Result, SUCCESS};
pub use crate::keymap::{KeyMap, Movement};
pub use crate::mapping::{map_gamepad, MovementMode};
pub use crate::slots::{SlotTable, MAX_SLOTS};
pub use crate::types::{
    Button, Buttons, Capabilities, ControllerState, Gamepad, Keystroke,
    Vibration, DEVICE_SUBTYPE_GAMEPAD, DEVICE_TYPE_GAMEPAD,
};
