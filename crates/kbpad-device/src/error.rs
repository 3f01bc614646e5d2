use thiserror::Error;

/// Result code reported to callers for a successful operation.
pub const SUCCESS: u32 = 0x0000;

/// Errors returned by device operations.
///
/// Both variants end the call. Neither is worth retrying: the addressed
/// slot will not change within a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeviceError {
    /// No device answers at the addressed slot.
    #[error("device not connected at slot {0}")]
    DeviceNotConnected(u32),
    /// No keystroke event is available.
    #[error("no keystroke available")]
    Empty,
}

impl DeviceError {
    /// The numeric result code of the controller ABI.
    pub const fn code(&self) -> u32 {
        match self {
            DeviceError::DeviceNotConnected(_) => 0x048F,
            DeviceError::Empty => 0x10D2,
        }
    }
}

/// Convenient result alias for device operations.
pub type Result<T> = std::result::Result<T, DeviceError>;
