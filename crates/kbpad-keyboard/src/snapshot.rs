use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use ahash::AHashSet;

use crate::{Key, KeyState};

#[derive(Debug, Default)]
struct Keys {
    down: AHashSet<Key>,
    toggled: AHashSet<Key>,
}

/// An in-memory keyboard whose state is set by the caller.
///
/// Safe to share between threads; every method takes `&self`.
#[derive(Debug, Default)]
pub struct KeySnapshot {
    keys: RwLock<Keys>,
}

impl KeySnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    // A panic while holding the lock cannot leave the sets half-updated,
    // so poisoning is ignored.
    fn read(&self) -> RwLockReadGuard<'_, Keys> {
        self.keys.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Keys> {
        self.keys.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Marks `key` as held.
    pub fn press(&self, key: Key) {
        self.write().down.insert(key);
    }

    /// Marks `key` as released.
    pub fn release(&self, key: Key) {
        self.write().down.remove(&key);
    }

    /// Releases every held key. Toggles are kept.
    pub fn release_all(&self) {
        self.write().down.clear();
    }

    /// Sets the sticky toggle of `key`.
    pub fn set_toggled(&self, key: Key, on: bool) {
        let mut keys = self.write();
        if on {
            keys.toggled.insert(key);
        } else {
            keys.toggled.remove(&key);
        }
    }

    /// Flips the sticky toggle of `key`, as a press of a lock key would.
    pub fn toggle(&self, key: Key) {
        let on = !self.is_toggled(key);
        self.set_toggled(key, on);
    }
}

impl KeyState for KeySnapshot {
    fn is_down(&self, key: Key) -> bool {
        self.read().down.contains(&key)
    }

    fn is_toggled(&self, key: Key) -> bool {
        self.read().toggled.contains(&key)
    }
}
