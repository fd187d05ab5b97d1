//! Error types for the MIDI wire subsystem.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The byte sink rejected a write. Non-fatal by contract: a dropped
    /// message must not stop the control loop.
    #[error("transmit failed: {0}")]
    Transmit(String),
}

pub type Result<T> = std::result::Result<T, Error>;
