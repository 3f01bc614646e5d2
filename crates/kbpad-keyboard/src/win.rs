use windows::Win32::UI::Input::KeyboardAndMouse::{GetAsyncKeyState, GetKeyState};

use crate::error::Result;
use crate::{Key, KeyState};

const DOWN_BIT: u16 = 0x8000;
const TOGGLED_BIT: u16 = 0x0001;

/// Win32 keyboard backed by `GetAsyncKeyState` and `GetKeyState`.
#[derive(Debug, Default)]
pub struct WinKeyboard;

impl WinKeyboard {
    pub fn open() -> Result<Self> {
        Ok(Self)
    }
}

impl KeyState for WinKeyboard {
    fn is_down(&self, key: Key) -> bool {
        let Some(vk) = key.virtual_key() else {
            return false;
        };
        // SAFETY: plain query of the async key table, no pointers involved.
        let state = unsafe { GetAsyncKeyState(i32::from(vk)) };
        state as u16 & DOWN_BIT == DOWN_BIT
    }

    fn is_toggled(&self, key: Key) -> bool {
        let Some(vk) = key.virtual_key() else {
            return false;
        };
        // SAFETY: plain query of the thread key state, no pointers involved.
        let state = unsafe { GetKeyState(i32::from(vk)) };
        state as u16 & TOGGLED_BIT == TOGGLED_BIT
    }
}
