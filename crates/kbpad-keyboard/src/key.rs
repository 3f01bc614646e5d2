use std::fmt;

/// A physical keyboard key, independent of any host API.
///
/// `Char` holds a lowercase ASCII letter or a digit. Use [`Key::parse`] or
/// [`Key::from_char`] to build keys from user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),

    Apostrophe,
    Semicolon,
    Comma,
    Period,
    Slash,
    Backslash,
    Grave,
    Minus,
    Equal,
    LeftBracket,
    RightBracket,

    CapsLock,
    NumLock,
    ScrollLock,

    UpArrow,
    DownArrow,
    LeftArrow,
    RightArrow,

    Space,
    Return,
    Escape,
    Tab,
    Backspace,

    Shift,
    RShift,
    Control,
    RControl,
    Alt,
    RAlt,
}

impl Key {
    /// Maps a single typed character to its key.
    pub fn from_char(ch: char) -> Option<Key> {
        if ch.is_ascii_alphanumeric() {
            return Some(Key::Char(ch.to_ascii_lowercase()));
        }
        Some(match ch {
            '\'' => Key::Apostrophe,
            ';' => Key::Semicolon,
            ',' => Key::Comma,
            '.' => Key::Period,
            '/' => Key::Slash,
            '\\' => Key::Backslash,
            '`' => Key::Grave,
            '-' => Key::Minus,
            '=' => Key::Equal,
            '[' => Key::LeftBracket,
            ']' => Key::RightBracket,
            ' ' => Key::Space,
            _ => return None,
        })
    }

    /// Parse a key name as written in profiles.
    ///
    /// Accepts single characters (`"a"`, `"7"`, `"'"`) and names such as
    /// `"caps_lock"`, `"semicolon"` or `"left"`.
    ///
    /// ```
    /// use kbpad_keyboard::Key;
    ///
    /// assert_eq!(Key::parse("W"), Some(Key::Char('w')));
    /// assert_eq!(Key::parse("caps_lock"), Some(Key::CapsLock));
    /// ```
    pub fn parse(input: &str) -> Option<Key> {
        let mut chars = input.chars();
        if let (Some(ch), None) = (chars.next(), chars.next()) {
            return Key::from_char(ch);
        }

        match input.to_ascii_lowercase().as_str() {
            "apostrophe" | "quote" => Some(Key::Apostrophe),
            "semicolon" => Some(Key::Semicolon),
            "comma" => Some(Key::Comma),
            "period" | "dot" => Some(Key::Period),
            "slash" => Some(Key::Slash),
            "backslash" => Some(Key::Backslash),
            "grave" | "backtick" | "tilde" => Some(Key::Grave),
            "minus" => Some(Key::Minus),
            "equal" => Some(Key::Equal),
            "left_bracket" => Some(Key::LeftBracket),
            "right_bracket" => Some(Key::RightBracket),

            "caps_lock" | "capslock" | "caps" => Some(Key::CapsLock),
            "num_lock" | "numlock" => Some(Key::NumLock),
            "scroll_lock" | "scrolllock" => Some(Key::ScrollLock),

            "up" | "arrow_up" => Some(Key::UpArrow),
            "down" | "arrow_down" => Some(Key::DownArrow),
            "left" | "arrow_left" => Some(Key::LeftArrow),
            "right" | "arrow_right" => Some(Key::RightArrow),

            "space" => Some(Key::Space),
            "return" | "enter" => Some(Key::Return),
            "escape" | "esc" => Some(Key::Escape),
            "tab" => Some(Key::Tab),
            "backspace" => Some(Key::Backspace),

            "shift" => Some(Key::Shift),
            "rshift" => Some(Key::RShift),
            "ctrl" | "control" => Some(Key::Control),
            "rctrl" => Some(Key::RControl),
            "alt" | "option" => Some(Key::Alt),
            "ralt" => Some(Key::RAlt),
            _ => None,
        }
    }

    /// Whether the host keeps a sticky toggle state for this key.
    pub fn is_lock(&self) -> bool {
        matches!(self, Key::CapsLock | Key::NumLock | Key::ScrollLock)
    }

    /// Windows virtual-key code of the key.
    pub fn virtual_key(&self) -> Option<u16> {
        let code = match self {
            Key::Char(ch) if ch.is_ascii_alphanumeric() => {
                ch.to_ascii_uppercase() as u16
            }
            Key::Char(_) => return None,
            Key::Apostrophe => 0xDE,
            Key::Semicolon => 0xBA,
            Key::Comma => 0xBC,
            Key::Period => 0xBE,
            Key::Slash => 0xBF,
            Key::Backslash => 0xDC,
            Key::Grave => 0xC0,
            Key::Minus => 0xBD,
            Key::Equal => 0xBB,
            Key::LeftBracket => 0xDB,
            Key::RightBracket => 0xDD,
            Key::CapsLock => 0x14,
            Key::NumLock => 0x90,
            Key::ScrollLock => 0x91,
            Key::UpArrow => 0x26,
            Key::DownArrow => 0x28,
            Key::LeftArrow => 0x25,
            Key::RightArrow => 0x27,
            Key::Space => 0x20,
            Key::Return => 0x0D,
            Key::Escape => 0x1B,
            Key::Tab => 0x09,
            Key::Backspace => 0x08,
            Key::Shift => 0xA0,
            Key::RShift => 0xA1,
            Key::Control => 0xA2,
            Key::RControl => 0xA3,
            Key::Alt => 0xA4,
            Key::RAlt => 0xA5,
        };
        Some(code)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Key::Char(ch) => return write!(f, "{ch}"),
            Key::Apostrophe => "apostrophe",
            Key::Semicolon => "semicolon",
            Key::Comma => "comma",
            Key::Period => "period",
            Key::Slash => "slash",
            Key::Backslash => "backslash",
            Key::Grave => "grave",
            Key::Minus => "minus",
            Key::Equal => "equal",
            Key::LeftBracket => "left_bracket",
            Key::RightBracket => "right_bracket",
            Key::CapsLock => "caps_lock",
            Key::NumLock => "num_lock",
            Key::ScrollLock => "scroll_lock",
            Key::UpArrow => "up",
            Key::DownArrow => "down",
            Key::LeftArrow => "left",
            Key::RightArrow => "right",
            Key::Space => "space",
            Key::Return => "return",
            Key::Escape => "escape",
            Key::Tab => "tab",
            Key::Backspace => "backspace",
            Key::Shift => "shift",
            Key::RShift => "rshift",
            Key::Control => "ctrl",
            Key::RControl => "rctrl",
            Key::Alt => "alt",
            Key::RAlt => "ralt",
        };
        f.write_str(name)
    }
}
