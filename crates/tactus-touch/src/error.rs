//! Error types for the touch sensing subsystem.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("sensor init failed: {0}")]
    SensorInit(String),

    #[error("sensor read failed: {0}")]
    SensorRead(String),

    #[error("electrode index {0} out of range")]
    InvalidElectrode(u8),
}

pub type Result<T> = std::result::Result<T, Error>;
