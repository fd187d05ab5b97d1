//! # Tactus - touch-to-MIDI firmware core
//!
//! Turns capacitive-touch edges on a fixed set of electrodes into a real-time
//! stream of MIDI channel-voice messages over an injected byte sink.
//!
//! ## Architecture
//!
//! Tactus is an umbrella crate that coordinates:
//! - **tactus-touch** - electrode identity, touch masks, edge tracking
//! - **tactus-midi** - channel-voice message encoding and transmission
//! - **tactus** (this crate) - instrument configuration, note mapping, and
//!   the tick-driven dispatcher
//!
//! The capacitive-sensing peripheral and the serial transport stay outside:
//! the core consumes them through the [`TouchSensor`] and [`ByteSink`]
//! capability traits.
//!
//! ## Quick Start
//!
//! ```ignore
//! use tactus::{InstrumentMode, TouchMidiEngine};
//!
//! let mut engine = TouchMidiEngine::builder(sensor, serial)
//!     .mode(InstrumentMode::Percussion)
//!     .program(5)
//!     .build()?;
//!
//! // Sensor bring-up + volume/bank/program startup sequence
//! engine.start()?;
//!
//! // One poll-and-dispatch pass per scheduling tick
//! loop {
//!     engine.tick()?;
//! }
//! ```

pub mod error;
pub use error::{Error, Result};

mod config;
pub use config::{InstrumentConfig, InstrumentMode};

mod mapper;
pub use mapper::{NoteTable, DEFAULT_MELODIC, DEFAULT_PERCUSSION};

mod builder;
pub use builder::TouchMidiEngineBuilder;

mod engine;
pub use engine::{NoteEvent, NoteEventKind, NoteEventListener, TickOutcome, TouchMidiEngine};

/// Re-export of the touch subsystem for direct access
pub use tactus_touch as touch;

/// Re-export of the MIDI subsystem for direct access
pub use tactus_midi as midi;

pub use tactus_midi::{
    ActivityIndicator, ByteSink, MidiMessage, MidiTransmitter, NullIndicator, VecSink,
};
pub use tactus_touch::{
    ElectrodeId, TouchEdge, TouchEdges, TouchMask, TouchSensor, TouchTracker, ELECTRODE_COUNT,
};
