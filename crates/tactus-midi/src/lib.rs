//! MIDI wire subsystem for the tactus firmware core.
//!
//! Channel-voice message construction and byte-exact serialization over an
//! injected byte sink. Fire-and-forget: no parsing, no acknowledgement, no
//! flow control.

pub mod error;
pub use error::{Error, Result};

pub mod message;
pub use message::MidiMessage;

mod sink;
pub use sink::{ByteSink, VecSink};

mod transmitter;
pub use transmitter::{ActivityIndicator, MidiTransmitter, NullIndicator};
