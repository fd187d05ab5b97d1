//! MIDI transmitter over an injected byte sink.

use tracing::trace;

use crate::message::MidiMessage;
use crate::sink::ByteSink;
use crate::Result;

/// Transmit-activity indicator, typically an LED owned by the board.
///
/// Asserted before the first byte of a message and deasserted after the last,
/// including when a write fails partway through.
pub trait ActivityIndicator {
    fn set_active(&mut self, active: bool);
}

/// Indicator that does nothing; the default when the board has none.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullIndicator;

impl ActivityIndicator for NullIndicator {
    fn set_active(&mut self, _active: bool) {}
}

/// Serializes channel-voice messages to a byte sink.
///
/// Wire rule: status, then data1, then data2 only for two-data-byte command
/// classes ([`MidiMessage::two_data_bytes`]).
pub struct MidiTransmitter<S> {
    sink: S,
    indicator: Box<dyn ActivityIndicator>,
}

impl<S: ByteSink> MidiTransmitter<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            indicator: Box::new(NullIndicator),
        }
    }

    pub fn with_indicator(sink: S, indicator: Box<dyn ActivityIndicator>) -> Self {
        Self { sink, indicator }
    }

    /// Serialize one message. The activity indicator is held asserted for the
    /// duration of the write.
    pub fn send(&mut self, message: MidiMessage) -> Result<()> {
        self.indicator.set_active(true);
        let result = self.write_message(&message);
        self.indicator.set_active(false);
        result
    }

    fn write_message(&mut self, message: &MidiMessage) -> Result<()> {
        self.sink.write(message.status)?;
        self.sink.write(message.data1)?;
        if message.two_data_bytes() {
            self.sink.write(message.data2)?;
        }
        trace!(status = message.status, data1 = message.data1, "midi out");
        Ok(())
    }

    pub fn note_on(&mut self, channel: u8, note: u8, velocity: u8) -> Result<()> {
        self.send(MidiMessage::note_on(channel, note, velocity))
    }

    pub fn note_off(&mut self, channel: u8, note: u8, velocity: u8) -> Result<()> {
        self.send(MidiMessage::note_off(channel, note, velocity))
    }

    pub fn control_change(&mut self, channel: u8, controller: u8, value: u8) -> Result<()> {
        self.send(MidiMessage::control_change(channel, controller, value))
    }

    pub fn program_change(&mut self, channel: u8, program: u8) -> Result<()> {
        self.send(MidiMessage::program_change(channel, program))
    }

    /// Generic send for setup-time messages built from a raw command byte.
    pub fn raw(&mut self, command: u8, data1: u8, data2: u8) -> Result<()> {
        self.send(MidiMessage::raw(command, data1, data2))
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}
