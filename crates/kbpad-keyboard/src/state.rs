use std::rc::Rc;
use std::sync::Arc;

use crate::Key;

/// Read access to the host keyboard.
pub trait KeyState {
    /// Whether `key` is held at this instant.
    fn is_down(&self, key: Key) -> bool;

    /// Whether the sticky toggle of `key` is on (Caps Lock and friends).
    fn is_toggled(&self, key: Key) -> bool;

    /// Brings the backend up to date before a round of queries.
    fn refresh(&self) {}

    /// Whether the backend has lost its keyboard for good, e.g. its focus
    /// window was closed.
    fn is_closed(&self) -> bool {
        false
    }
}

impl<K: KeyState + ?Sized> KeyState for &K {
    fn is_down(&self, key: Key) -> bool {
        (**self).is_down(key)
    }

    fn is_toggled(&self, key: Key) -> bool {
        (**self).is_toggled(key)
    }

    fn refresh(&self) {
        (**self).refresh();
    }

    fn is_closed(&self) -> bool {
        (**self).is_closed()
    }
}

impl<K: KeyState + ?Sized> KeyState for Box<K> {
    fn is_down(&self, key: Key) -> bool {
        (**self).is_down(key)
    }

    fn is_toggled(&self, key: Key) -> bool {
        (**self).is_toggled(key)
    }

    fn refresh(&self) {
        (**self).refresh();
    }

    fn is_closed(&self) -> bool {
        (**self).is_closed()
    }
}

impl<K: KeyState + ?Sized> KeyState for Arc<K> {
    fn is_down(&self, key: Key) -> bool {
        (**self).is_down(key)
    }

    fn is_toggled(&self, key: Key) -> bool {
        (**self).is_toggled(key)
    }

    fn refresh(&self) {
        (**self).refresh();
    }

    fn is_closed(&self) -> bool {
        (**self).is_closed()
    }
}

impl<K: KeyState + ?Sized> KeyState for Rc<K> {
    fn is_down(&self, key: Key) -> bool {
        (**self).is_down(key)
    }

    fn is_toggled(&self, key: Key) -> bool {
        (**self).is_toggled(key)
    }

    fn refresh(&self) {
        (**self).refresh();
    }

    fn is_closed(&self) -> bool {
        (**self).is_closed()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[derive(Default)]
    struct Closing {
        refreshed: Cell<u32>,
    }

    impl KeyState for Closing {
        fn is_down(&self, _key: Key) -> bool {
            false
        }

        fn is_toggled(&self, _key: Key) -> bool {
            false
        }

        fn refresh(&self) {
            self.refreshed.set(self.refreshed.get() + 1);
        }

        fn is_closed(&self) -> bool {
            self.refreshed.get() > 0
        }
    }

    #[test]
    fn closed_state_passes_through_wrappers() {
        let keys = Rc::new(Closing::default());
        let shared = keys.clone();
        assert!(!shared.is_closed());

        shared.refresh();
        assert!(keys.is_closed());
        assert!((&*keys).is_closed());
        assert!(!Box::new(Closing::default()).is_closed());
    }

    #[test]
    fn backends_stay_open_by_default() {
        let keys = Arc::new(crate::KeySnapshot::new());
        keys.refresh();
        assert!(!keys.is_closed());
    }
}
