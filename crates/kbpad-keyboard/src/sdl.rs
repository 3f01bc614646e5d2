use std::cell::{Cell, RefCell};

use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::{KeyboardUtil, Mod, Scancode};
use sdl2::video::Window;
use sdl2::{EventPump, Sdl};

use crate::error::{KeyboardError, Result};
use crate::{Key, KeyState};

const WINDOW_TITLE: &str = "kbpad";
const WINDOW_WIDTH: u32 = 320;
const WINDOW_HEIGHT: u32 = 120;

/// SDL2-backed keyboard.
///
/// SDL only tracks the keyboard while one of its windows has focus, so
/// opening the backend also opens a small window. Must stay on the thread
/// that created it.
pub struct SdlKeyboard {
    pump: RefCell<EventPump>,
    closed: Cell<bool>,
    keyboard: KeyboardUtil,
    _window: Window,
    _sdl: Sdl,
}

impl SdlKeyboard {
    pub fn open() -> Result<Self> {
        let sdl = sdl2::init().map_err(KeyboardError::BackendInit)?;
        let video = sdl.video().map_err(KeyboardError::BackendInit)?;
        let window = video
            .window(WINDOW_TITLE, WINDOW_WIDTH, WINDOW_HEIGHT)
            .position_centered()
            .build()
            .map_err(|e| KeyboardError::BackendInit(e.to_string()))?;
        let pump = sdl.event_pump().map_err(KeyboardError::BackendInit)?;
        let keyboard = sdl.keyboard();

        Ok(Self {
            pump: RefCell::new(pump),
            closed: Cell::new(false),
            keyboard,
            _window: window,
            _sdl: sdl,
        })
    }
}

impl KeyState for SdlKeyboard {
    fn refresh(&self) {
        if let Ok(mut pump) = self.pump.try_borrow_mut() {
            // Only the aggregated key state is read; events matter for quitting.
            for event in pump.poll_iter() {
                if is_quit(&event) {
                    self.closed.set(true);
                }
            }
        }
    }

    fn is_down(&self, key: Key) -> bool {
        let Some(code) = scancode(key) else {
            return false;
        };
        self.pump
            .try_borrow()
            .map(|pump| pump.keyboard_state().is_scancode_pressed(code))
            .unwrap_or(false)
    }

    fn is_toggled(&self, key: Key) -> bool {
        lock_toggled(self.keyboard.mod_state(), key)
    }

    fn is_closed(&self) -> bool {
        self.closed.get()
    }
}

/// The focus window was closed or the application was asked to quit.
fn is_quit(event: &Event) -> bool {
    matches!(
        event,
        Event::Quit { .. }
            | Event::Window {
                win_event: WindowEvent::Close,
                ..
            }
    )
}

fn lock_toggled(state: Mod, key: Key) -> bool {
    match key {
        Key::CapsLock => state.contains(Mod::CAPSMOD),
        Key::NumLock => state.contains(Mod::NUMMOD),
        // SDL 2.0.18+ reports Scroll Lock in the bit sdl2 names RESERVEDMOD.
        Key::ScrollLock => state.contains(Mod::RESERVEDMOD),
        _ => false,
    }
}

fn scancode(key: Key) -> Option<Scancode> {
    Some(match key {
        Key::Char(ch) => return char_scancode(ch),
        Key::Apostrophe => Scancode::Apostrophe,
        Key::Semicolon => Scancode::Semicolon,
        Key::Comma => Scancode::Comma,
        Key::Period => Scancode::Period,
        Key::Slash => Scancode::Slash,
        Key::Backslash => Scancode::Backslash,
        Key::Grave => Scancode::Grave,
        Key::Minus => Scancode::Minus,
        Key::Equal => Scancode::Equals,
        Key::LeftBracket => Scancode::LeftBracket,
        Key::RightBracket => Scancode::RightBracket,
        Key::CapsLock => Scancode::CapsLock,
        Key::NumLock => Scancode::NumLockClear,
        Key::ScrollLock => Scancode::ScrollLock,
        Key::UpArrow => Scancode::Up,
        Key::DownArrow => Scancode::Down,
        Key::LeftArrow => Scancode::Left,
        Key::RightArrow => Scancode::Right,
        Key::Space => Scancode::Space,
        Key::Return => Scancode::Return,
        Key::Escape => Scancode::Escape,
        Key::Tab => Scancode::Tab,
        Key::Backspace => Scancode::Backspace,
        Key::Shift => Scancode::LShift,
        Key::RShift => Scancode::RShift,
        Key::Control => Scancode::LCtrl,
        Key::RControl => Scancode::RCtrl,
        Key::Alt => Scancode::LAlt,
        Key::RAlt => Scancode::RAlt,
    })
}

fn char_scancode(ch: char) -> Option<Scancode> {
    Some(match ch.to_ascii_lowercase() {
        'a' => Scancode::A,
        'b' => Scancode::B,
        'c' => Scancode::C,
        'd' => Scancode::D,
        'e' => Scancode::E,
        'f' => Scancode::F,
        'g' => Scancode::G,
        'h' => Scancode::H,
        'i' => Scancode::I,
        'j' => Scancode::J,
        'k' => Scancode::K,
        'l' => Scancode::L,
        'm' => Scancode::M,
        'n' => Scancode::N,
        'o' => Scancode::O,
        'p' => Scancode::P,
        'q' => Scancode::Q,
        'r' => Scancode::R,
        's' => Scancode::S,
        't' => Scancode::T,
        'u' => Scancode::U,
        'v' => Scancode::V,
        'w' => Scancode::W,
        'x' => Scancode::X,
        'y' => Scancode::Y,
        'z' => Scancode::Z,
        '0' => Scancode::Num0,
        '1' => Scancode::Num1,
        '2' => Scancode::Num2,
        '3' => Scancode::Num3,
        '4' => Scancode::Num4,
        '5' => Scancode::Num5,
        '6' => Scancode::Num6,
        '7' => Scancode::Num7,
        '8' => Scancode::Num8,
        '9' => Scancode::Num9,
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_keys_have_scancodes() {
        let expected = [
            (Key::Char('a'), Scancode::A),
            (Key::Char('d'), Scancode::D),
            (Key::Char('s'), Scancode::S),
            (Key::Char('w'), Scancode::W),
            (Key::Char('l'), Scancode::L),
            (Key::Apostrophe, Scancode::Apostrophe),
            (Key::Semicolon, Scancode::Semicolon),
            (Key::Char('p'), Scancode::P),
            (Key::Char('z'), Scancode::Z),
            (Key::Char('x'), Scancode::X),
        ];
        for (key, code) in expected {
            assert_eq!(scancode(key), Some(code), "{key}");
        }
    }

    #[test]
    fn digits_and_uppercase_resolve() {
        assert_eq!(scancode(Key::Char('7')), Some(Scancode::Num7));
        assert_eq!(scancode(Key::Char('Q')), Some(Scancode::Q));
        assert_eq!(scancode(Key::Char('!')), None);
    }

    #[test]
    fn every_lock_key_reads_its_modifier() {
        assert!(lock_toggled(Mod::CAPSMOD, Key::CapsLock));
        assert!(lock_toggled(Mod::NUMMOD, Key::NumLock));
        assert!(lock_toggled(Mod::RESERVEDMOD, Key::ScrollLock));

        assert!(!lock_toggled(Mod::NOMOD, Key::ScrollLock));
        assert!(!lock_toggled(Mod::CAPSMOD, Key::ScrollLock));
        assert!(!lock_toggled(Mod::all(), Key::Shift));
    }

    #[test]
    fn quit_and_window_close_end_polling() {
        assert!(is_quit(&Event::Quit { timestamp: 0 }));
        assert!(is_quit(&Event::Window {
            timestamp: 0,
            window_id: 1,
            win_event: WindowEvent::Close,
        }));
        assert!(!is_quit(&Event::Window {
            timestamp: 0,
            window_id: 1,
            win_event: WindowEvent::FocusLost,
        }));
    }
}
