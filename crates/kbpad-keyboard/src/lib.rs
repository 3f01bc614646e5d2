mod error;
mod key;
mod snapshot;
mod state;

#[cfg(feature = "sdl2-backend")]
mod sdl;
#[cfg(windows)]
mod win;

pub use error::{KeyboardError, Result};
pub use key::Key;
pub use snapshot::KeySnapshot;
pub use state::KeyState;

#[cfg(feature = "sdl2-backend")]
pub use sdl::SdlKeyboard;
#[cfg(windows)]
pub use win::WinKeyboard;

/// The preferred key-state backend for the current platform.
#[cfg(windows)]
pub type HostKeyboard = WinKeyboard;

/// The preferred key-state backend for the current platform.
#[cfg(all(not(windows), feature = "sdl2-backend"))]
pub type HostKeyboard = SdlKeyboard;
