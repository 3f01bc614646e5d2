use kbpad_device::{ControllerState, DeviceError, Gamepad, InputDriver, MAX_SLOTS};

/// What changed on a slot since the previous tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollEvent {
    /// The slot answered for the first time, or again after being absent.
    Connected(u32),
    /// The slot stopped answering.
    Disconnected(u32),
    /// The controller content differs from the previous poll.
    Changed { slot: u32, state: ControllerState },
}

/// Polls every slot of a driver once per tick and reports differences.
///
/// Packet numbers advance on every poll, so changes are detected by
/// comparing the gamepad content.
pub struct Poller<D> {
    driver: D,
    last: [Option<Gamepad>; MAX_SLOTS],
}

impl<D: InputDriver> Poller<D> {
    pub fn new(driver: D) -> Self {
        Self {
            driver,
            last: [None; MAX_SLOTS],
        }
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    /// Polls all slots, calling `sink` for each event in slot order.
    pub fn tick_with<F: FnMut(PollEvent)>(&mut self, mut sink: F) {
        for (index, last) in self.last.iter_mut().enumerate() {
            let slot = index as u32;
            match self.driver.poll_state(slot) {
                Ok(state) => {
                    if last.is_none() {
                        sink(PollEvent::Connected(slot));
                    }
                    if *last != Some(state.gamepad) {
                        *last = Some(state.gamepad);
                        sink(PollEvent::Changed { slot, state });
                    }
                }
                Err(DeviceError::DeviceNotConnected(_)) => {
                    if last.take().is_some() {
                        sink(PollEvent::Disconnected(slot));
                    }
                }
                Err(DeviceError::Empty) => {}
            }
        }
    }

    /// Polls all slots and collects the events.
    pub fn tick(&mut self) -> Vec<PollEvent> {
        let mut events = Vec::new();
        self.tick_with(|event| events.push(event));
        events
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use kbpad_device::{Button, SlotTable, VirtualController};
    use kbpad_keyboard::{Key, KeySnapshot};

    use super::*;

    fn poller() -> (Arc<KeySnapshot>, Poller<SlotTable>) {
        let keys = Arc::new(KeySnapshot::new());
        let mut table = SlotTable::new();
        table
            .configure(0, VirtualController::new(keys.clone()))
            .unwrap();
        (keys, Poller::new(table))
    }

    #[test]
    fn first_tick_connects_and_reports_state() {
        let (_, mut poller) = poller();
        let events = poller.tick();

        assert_eq!(events.len(), 2);
        assert_eq!(events[0], PollEvent::Connected(0));
        assert!(matches!(
            events[1],
            PollEvent::Changed { slot: 0, state } if state.gamepad == Gamepad::default()
        ));
    }

    #[test]
    fn unchanged_keyboard_reports_nothing() {
        let (keys, mut poller) = poller();
        keys.press(Key::Char('w'));
        poller.tick();

        assert!(poller.tick().is_empty());
        assert!(poller.tick().is_empty());
    }

    #[test]
    fn content_change_is_reported_once() {
        let (keys, mut poller) = poller();
        poller.tick();

        keys.press(Key::Semicolon);
        let events = poller.tick();
        assert_eq!(events.len(), 1);
        let PollEvent::Changed { slot, state } = events[0].clone() else {
            panic!("expected change, got {events:?}");
        };
        assert_eq!(slot, 0);
        assert!(state.gamepad.is_pressed(Button::A));

        assert!(poller.tick().is_empty());
    }

    #[test]
    fn cleared_slot_disconnects() {
        let keys = Arc::new(KeySnapshot::new());
        let mut table = SlotTable::new();
        table.configure(0, VirtualController::new(keys)).unwrap();
        let mut poller = Poller::new(table);
        poller.tick();

        poller.driver_mut().clear(0);
        assert_eq!(poller.tick(), vec![PollEvent::Disconnected(0)]);
        assert!(poller.tick().is_empty());
    }
}
