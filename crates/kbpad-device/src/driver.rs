use crate::error::Result;
use crate::types::{Capabilities, ControllerState, Keystroke, Vibration};

/// The operations a controller answers for the slot it is addressed by.
pub trait InputDriver {
    /// Describes the shape of the device. Has no side effects.
    fn describe_capabilities(&self, slot: u32) -> Result<Capabilities>;

    /// Samples the current controller state.
    fn poll_state(&self, slot: u32) -> Result<ControllerState>;

    /// Drives the rumble motors.
    fn set_actuation(&self, slot: u32, vibration: Vibration) -> Result<()>;

    /// Takes the next pending keystroke.
    fn dequeue_keystroke(&self, slot: u32, flags: u32) -> Result<Keystroke>;
}

impl<D: InputDriver + ?Sized> InputDriver for Box<D> {
    fn describe_capabilities(&self, slot: u32) -> Result<Capabilities> {
        (**self).describe_capabilities(slot)
    }

    fn poll_state(&self, slot: u32) -> Result<ControllerState> {
        (**self).poll_state(slot)
    }

    fn set_actuation(&self, slot: u32, vibration: Vibration) -> Result<()> {
        (**self).set_actuation(slot, vibration)
    }

    fn dequeue_keystroke(&self, slot: u32, flags: u32) -> Result<Keystroke> {
        (**self).dequeue_keystroke(slot, flags)
    }
}
