//! Centralized error type for the tactus umbrella crate.
//!
//! Wraps subsystem errors so `?` propagates naturally across crate boundaries.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("touch: {0}")]
    Touch(#[from] tactus_touch::Error),

    #[error("MIDI: {0}")]
    Midi(#[from] tactus_midi::Error),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("engine not started")]
    NotStarted,
}

pub type Result<T> = std::result::Result<T, Error>;
