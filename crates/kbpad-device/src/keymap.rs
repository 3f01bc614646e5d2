use kbpad_keyboard::Key;

use crate::types::Button;

/// The four keys that drive the d-pad or the left stick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Movement {
    pub left: Key,
    pub right: Key,
    pub down: Key,
    pub up: Key,
}

impl Default for Movement {
    fn default() -> Self {
        Self {
            left: Key::Char('a'),
            right: Key::Char('d'),
            down: Key::Char('s'),
            up: Key::Char('w'),
        }
    }
}

/// Which keys the virtual controller samples.
///
/// `latch` selects how `movement` is read on each poll. `bindings` press
/// their button whenever the key is held, whatever the latch says.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMap {
    pub latch: Key,
    pub movement: Movement,
    bindings: Vec<(Key, Button)>,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            latch: Key::CapsLock,
            movement: Movement::default(),
            bindings: vec![
                (Key::Char('l'), Button::X),
                (Key::Apostrophe, Button::B),
                (Key::Semicolon, Button::A),
                (Key::Char('p'), Button::Y),
                (Key::Char('z'), Button::Back),
                (Key::Char('x'), Button::Start),
            ],
        }
    }
}

impl KeyMap {
    /// A key map with the default latch and movement keys and no bindings.
    pub fn without_bindings() -> Self {
        Self {
            bindings: Vec::new(),
            ..Self::default()
        }
    }

    /// Binds `button` to `key`, replacing any key previously bound to it.
    pub fn bind(&mut self, button: Button, key: Key) {
        match self.bindings.iter_mut().find(|(_, b)| *b == button) {
            Some(binding) => binding.0 = key,
            None => self.bindings.push((key, button)),
        }
    }

    /// Removes the binding of `button`, if any.
    pub fn unbind(&mut self, button: Button) {
        self.bindings.retain(|(_, b)| *b != button);
    }

    /// The key bound to `button`.
    pub fn key_for(&self, button: Button) -> Option<Key> {
        self.bindings
            .iter()
            .find(|(_, b)| *b == button)
            .map(|(key, _)| *key)
    }

    pub fn bindings(&self) -> &[(Key, Button)] {
        &self.bindings
    }
}
