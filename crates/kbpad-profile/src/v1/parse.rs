use kbpad_device::{Button, KeyMap};
use kbpad_keyboard::Key;

use super::profile::{ProfileV1, ProfileV1Movement};
use super::Error;

impl ProfileV1 {
    /// Applies the profile on top of the default key map.
    pub fn to_keymap(&self) -> Result<KeyMap, Error> {
        let mut map = KeyMap::default();

        if let Some(latch) = self.latch.as_deref() {
            let key = parse_key(latch)?;
            if !key.is_lock() {
                return Err(Error::InvalidLatch(latch.to_string()));
            }
            map.latch = key;
        }

        apply_movement(&mut map, &self.movement)?;

        // Sorted so bindings come out in the same order on every load.
        let mut buttons: Vec<_> = self.buttons.iter().collect();
        buttons.sort_unstable_by(|a, b| a.0.cmp(b.0));
        for (button, key) in buttons {
            let button = Button::parse(button)
                .ok_or_else(|| Error::InvalidButton(button.clone()))?;
            match key.as_deref() {
                Some(key) => map.bind(button, parse_key(key)?),
                None => map.unbind(button),
            }
        }

        Ok(map)
    }
}

fn apply_movement(map: &mut KeyMap, movement: &ProfileV1Movement) -> Result<(), Error> {
    let slots = [
        (&movement.left, &mut map.movement.left),
        (&movement.right, &mut map.movement.right),
        (&movement.down, &mut map.movement.down),
        (&movement.up, &mut map.movement.up),
    ];
    for (name, target) in slots {
        if let Some(name) = name.as_deref() {
            *target = parse_key(name)?;
        }
    }
    Ok(())
}

fn parse_key(input: &str) -> Result<Key, Error> {
    Key::parse(input.trim()).ok_or_else(|| Error::InvalidKey(input.to_string()))
}
