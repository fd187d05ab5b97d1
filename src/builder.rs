//! Builder for configuring and constructing a `TouchMidiEngine`.

use crate::config::{InstrumentConfig, InstrumentMode};
use crate::engine::{NoteEventListener, TouchMidiEngine};
use crate::Result;
use tactus_midi::{ActivityIndicator, ByteSink, MidiTransmitter};
use tactus_touch::{TouchSensor, TouchTracker};

/// The sensor and byte sink capabilities are injected up front; everything
/// else is optional with defaults from `InstrumentConfig::default()`.
///
/// # Example
///
/// ```ignore
/// use tactus::{InstrumentMode, TouchMidiEngine};
///
/// let mut engine = TouchMidiEngine::builder(sensor, serial)
///     .mode(InstrumentMode::Percussion)
///     .program(5)
///     .build()?;
/// ```
pub struct TouchMidiEngineBuilder<S, W> {
    sensor: S,
    sink: W,
    config: InstrumentConfig,
    listener: Option<Box<dyn NoteEventListener>>,
    indicator: Option<Box<dyn ActivityIndicator>>,
}

impl<S: TouchSensor, W: ByteSink> TouchMidiEngineBuilder<S, W> {
    pub(crate) fn new(sensor: S, sink: W) -> Self {
        Self {
            sensor,
            sink,
            config: InstrumentConfig::default(),
            listener: None,
            indicator: None,
        }
    }

    /// Replace the whole configuration at once.
    pub fn config(mut self, config: InstrumentConfig) -> Self {
        self.config = config;
        self
    }

    /// Default: `InstrumentMode::Melodic`
    pub fn mode(mut self, mode: InstrumentMode) -> Self {
        self.config.mode = mode;
        self
    }

    /// Default: 0
    pub fn program(mut self, program: u8) -> Self {
        self.config.program = program;
        self
    }

    /// Default: 0
    pub fn channel(mut self, channel: u8) -> Self {
        self.config.channel = channel;
        self
    }

    /// Default: 0x60, used for both note-on and note-off.
    pub fn velocity(mut self, velocity: u8) -> Self {
        self.config.velocity = velocity;
        self
    }

    /// Notification collaborator receiving every dispatched event.
    pub fn listener(mut self, listener: Box<dyn NoteEventListener>) -> Self {
        self.listener = Some(listener);
        self
    }

    /// Transmit-activity indicator asserted around each message write.
    pub fn indicator(mut self, indicator: Box<dyn ActivityIndicator>) -> Self {
        self.indicator = Some(indicator);
        self
    }

    /// Validate the configuration and assemble the engine. Does not touch the
    /// hardware; call [`TouchMidiEngine::start`] for that.
    pub fn build(self) -> Result<TouchMidiEngine<S, W>> {
        self.config.validate()?;
        let midi = match self.indicator {
            Some(indicator) => MidiTransmitter::with_indicator(self.sink, indicator),
            None => MidiTransmitter::new(self.sink),
        };
        Ok(TouchMidiEngine::from_parts(
            TouchTracker::new(self.sensor),
            midi,
            self.config,
            self.listener,
        ))
    }
}
