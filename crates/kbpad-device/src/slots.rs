use crate::driver::InputDriver;
use crate::error::{DeviceError, Result};
use crate::types::{Capabilities, ControllerState, Keystroke, Vibration};

/// Number of user slots a consumer can address.
pub const MAX_SLOTS: usize = 4;

enum Slot {
    Unconfigured,
    Driver(Box<dyn InputDriver>),
}

/// Routes slot-addressed requests to the driver configured for the slot.
///
/// Requests for an unconfigured or nonexistent slot fail with
/// [`DeviceError::DeviceNotConnected`], exactly as a driver does for a slot
/// it does not serve.
pub struct SlotTable {
    slots: [Slot; MAX_SLOTS],
}

impl Default for SlotTable {
    fn default() -> Self {
        Self::new()
    }
}

impl SlotTable {
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|_| Slot::Unconfigured),
        }
    }

    /// Places `driver` in `slot`, replacing whatever was there.
    pub fn configure(
        &mut self,
        slot: u32,
        driver: impl InputDriver + 'static,
    ) -> Result<()> {
        let entry = self.entry_mut(slot)?;
        *entry = Slot::Driver(Box::new(driver));
        log::debug!("configured slot {slot}");
        Ok(())
    }

    /// Returns `slot` to the unconfigured state.
    pub fn clear(&mut self, slot: u32) {
        if let Ok(entry) = self.entry_mut(slot) {
            *entry = Slot::Unconfigured;
        }
    }

    pub fn is_configured(&self, slot: u32) -> bool {
        self.driver(slot).is_ok()
    }

    /// Every addressable slot index.
    pub fn slots(&self) -> impl Iterator<Item = u32> {
        0..MAX_SLOTS as u32
    }

    fn entry_mut(&mut self, slot: u32) -> Result<&mut Slot> {
        usize::try_from(slot)
            .ok()
            .and_then(|index| self.slots.get_mut(index))
            .ok_or(DeviceError::DeviceNotConnected(slot))
    }

    fn driver(&self, slot: u32) -> Result<&dyn InputDriver> {
        let entry = usize::try_from(slot)
            .ok()
            .and_then(|index| self.slots.get(index));
        match entry {
            Some(Slot::Driver(driver)) => Ok(driver.as_ref()),
            _ => Err(DeviceError::DeviceNotConnected(slot)),
        }
    }
}

impl InputDriver for SlotTable {
    fn describe_capabilities(&self, slot: u32) -> Result<Capabilities> {
        self.driver(slot)?.describe_capabilities(slot)
    }

    fn poll_state(&self, slot: u32) -> Result<ControllerState> {
        self.driver(slot)?.poll_state(slot)
    }

    fn set_actuation(&self, slot: u32, vibration: Vibration) -> Result<()> {
        self.driver(slot)?.set_actuation(slot, vibration)
    }

    fn dequeue_keystroke(&self, slot: u32, flags: u32) -> Result<Keystroke> {
        self.driver(slot)?.dequeue_keystroke(slot, flags)
    }
}
