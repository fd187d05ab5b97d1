//! Tick-driven dispatcher coordinating the touch and MIDI subsystems.

use smallvec::SmallVec;
use tracing::{debug, warn};

use crate::config::InstrumentConfig;
use crate::{Error, Result};
use tactus_midi::{message, ByteSink, MidiMessage, MidiTransmitter};
use tactus_touch::{ElectrodeId, TouchEdge, TouchSensor, TouchTracker};

/// Whether a dispatched event started or stopped a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteEventKind {
    On,
    Off,
}

/// One dispatched note event, as reported to the listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoteEvent {
    pub electrode: ElectrodeId,
    pub note: u8,
    pub kind: NoteEventKind,
}

/// Notification capability fed every dispatched event. Format and transport
/// of the report are the implementation's business.
pub trait NoteEventListener {
    fn note_event(&mut self, event: NoteEvent);
}

/// Summary of one dispatch pass.
#[derive(Debug, Default, Clone)]
pub struct TickOutcome {
    /// Events dispatched this tick, ascending electrode order.
    pub events: SmallVec<[NoteEvent; 4]>,
    /// Messages the byte sink rejected. Non-fatal by contract.
    pub transmit_errors: usize,
}

/// Turns touch edges into MIDI note messages, one pass per scheduling tick.
///
/// Single-threaded and polling-driven: no operation suspends mid-pass, and
/// the retained touch state is owned exclusively by the tracker inside.
///
/// # Example
///
/// ```ignore
/// let mut engine = TouchMidiEngine::builder(sensor, serial)
///     .mode(InstrumentMode::Percussion)
///     .program(5)
///     .build()?;
///
/// engine.start()?;
/// loop {
///     engine.tick()?;
/// }
/// ```
pub struct TouchMidiEngine<S, W> {
    tracker: TouchTracker<S>,
    midi: MidiTransmitter<W>,
    config: InstrumentConfig,
    listener: Option<Box<dyn NoteEventListener>>,
    started: bool,
}

impl<S: TouchSensor, W: ByteSink> TouchMidiEngine<S, W> {
    /// Create a new engine builder around the injected capabilities.
    pub fn builder(sensor: S, sink: W) -> crate::TouchMidiEngineBuilder<S, W> {
        crate::TouchMidiEngineBuilder::new(sensor, sink)
    }

    pub(crate) fn from_parts(
        tracker: TouchTracker<S>,
        midi: MidiTransmitter<W>,
        config: InstrumentConfig,
        listener: Option<Box<dyn NoteEventListener>>,
    ) -> Self {
        Self {
            tracker,
            midi,
            config,
            listener,
            started: false,
        }
    }

    /// Bring up the sensor, then emit the startup sequence: channel volume,
    /// bank select for the configured mode, program change.
    ///
    /// Bank select must precede program change or the synthesizer may latch
    /// the wrong bank context. A sensor init failure is fatal and nothing is
    /// transmitted.
    pub fn start(&mut self) -> Result<()> {
        self.tracker.init()?;
        let channel = self.config.channel;
        self.midi
            .control_change(channel, message::CC_VOLUME, self.config.volume)?;
        self.midi
            .control_change(channel, message::CC_BANK_SELECT, self.config.mode.bank_select())?;
        self.midi.program_change(channel, self.config.program)?;
        debug!(
            mode = ?self.config.mode,
            program = self.config.program,
            "instrument configured"
        );
        self.started = true;
        Ok(())
    }

    /// One poll-and-dispatch pass.
    ///
    /// Rising edges emit note-on, falling edges note-off, ascending electrode
    /// order. Sensor read failures propagate; transmit failures are logged,
    /// counted in the outcome, and the pass continues with the remaining
    /// electrodes.
    pub fn tick(&mut self) -> Result<TickOutcome> {
        if !self.started {
            return Err(Error::NotStarted);
        }

        let mut outcome = TickOutcome::default();

        // Interrupt-style idle skip; an unchanged mask has no edges anyway.
        if !self.tracker.changed() {
            return Ok(outcome);
        }

        let edges = self.tracker.poll()?;
        for (electrode, edge) in edges.iter() {
            let note = self.config.note_for(electrode);
            let (msg, kind) = match edge {
                TouchEdge::Rising => (
                    MidiMessage::note_on(self.config.channel, note, self.config.velocity),
                    NoteEventKind::On,
                ),
                TouchEdge::Falling => (
                    MidiMessage::note_off(self.config.channel, note, self.config.velocity),
                    NoteEventKind::Off,
                ),
                TouchEdge::None => continue,
            };

            if let Err(err) = self.midi.send(msg) {
                warn!(%electrode, note, error = %err, "midi transmit failed");
                outcome.transmit_errors += 1;
                continue;
            }

            let event = NoteEvent {
                electrode,
                note,
                kind,
            };
            debug!(%electrode, note, kind = ?kind, "note event");
            if let Some(listener) = self.listener.as_mut() {
                listener.note_event(event);
            }
            outcome.events.push(event);
        }

        Ok(outcome)
    }

    /// CC 123: release anything still sounding. Host-side shutdown
    /// convenience; not part of the dispatch loop.
    pub fn all_notes_off(&mut self) -> Result<()> {
        self.midi
            .control_change(self.config.channel, message::CC_ALL_NOTES_OFF, 0)?;
        Ok(())
    }

    pub fn config(&self) -> &InstrumentConfig {
        &self.config
    }

    /// Access to the injected byte sink (e.g. to inspect captured bytes in
    /// tests, or to flush a buffered transport).
    pub fn sink(&self) -> &W {
        self.midi.sink()
    }

    pub fn sink_mut(&mut self) -> &mut W {
        self.midi.sink_mut()
    }
}
