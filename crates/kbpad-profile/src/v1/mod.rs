mod parse;
mod profile;

use thiserror::Error;

pub(crate) use profile::ProfileV1;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid key: {0}")]
    InvalidKey(String),
    #[error("invalid button: {0}")]
    InvalidButton(String),
    #[error("latch must be a lock key, got {0}")]
    InvalidLatch(String),
}
