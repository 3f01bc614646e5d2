use thiserror::Error;

/// Errors raised while opening a host keyboard backend.
#[derive(Debug, Error)]
pub enum KeyboardError {
    /// The backend (SDL2 or its video subsystem) failed to start.
    #[error("keyboard backend init failed: {0}")]
    BackendInit(String),
}

/// Convenient result alias for keyboard backend operations.
pub type Result<T> = std::result::Result<T, KeyboardError>;
