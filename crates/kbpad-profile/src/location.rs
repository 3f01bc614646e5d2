use std::path::{Path, PathBuf};

use kbpad_device::KeyMap;

use crate::{parse_profile, ProfileError};

const DEFAULT_PROFILE_DIR: &str = ".config/kbpad";
const PROFILE_FILE_NAME: &str = "profile.yaml";

/// Where the profile is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileLocation {
    /// Given by the user; it must exist.
    Explicit(PathBuf),
    /// The per-user default; the default key map is used when it is absent.
    Default(PathBuf),
}

impl ProfileLocation {
    pub fn new(path: Option<&Path>) -> Result<Self, ProfileError> {
        match path {
            Some(path) => Ok(Self::Explicit(path.to_owned())),
            None => Ok(Self::Default(Self::default_path()?)),
        }
    }

    pub fn default_path() -> Result<PathBuf, ProfileError> {
        let path = std::env::var("HOME")
            .map(PathBuf::from)
            .map(|p| p.join(DEFAULT_PROFILE_DIR).join(PROFILE_FILE_NAME))
            .map_err(|_| ProfileError::EnvVarNotSet("HOME".to_string()))?;

        Ok(path)
    }

    pub fn path(&self) -> &Path {
        match self {
            Self::Explicit(path) | Self::Default(path) => path,
        }
    }

    /// Reads and parses the profile.
    ///
    /// Returns `None` when the default profile does not exist.
    pub fn load(&self) -> Result<Option<KeyMap>, ProfileError> {
        let path = self.path();
        if !path.exists() {
            return match self {
                Self::Explicit(_) => {
                    Err(ProfileError::ProfileNotFound(path.display().to_string()))
                }
                Self::Default(_) => Ok(None),
            };
        }
        if !path.is_file() {
            return Err(ProfileError::ProfileNotFound(path.display().to_string()));
        }

        let input = std::fs::read_to_string(path)?;
        parse_profile(&input).map(Some)
    }
}
