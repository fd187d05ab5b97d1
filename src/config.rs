//! Instrument configuration applied at startup and consumed by the mapper.

use serde::{Deserialize, Serialize};

use crate::mapper::{NoteTable, DEFAULT_MELODIC, DEFAULT_PERCUSSION};
use crate::{Error, Result};
use tactus_touch::ElectrodeId;

/// Selects which note table the mapper uses and which bank the synthesizer is
/// pointed at before the program change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InstrumentMode {
    Melodic,
    Percussion,
}

impl InstrumentMode {
    /// Bank-select value sent at startup: 0x00 for melodic voices, 0x78 for
    /// the percussion kit.
    pub fn bank_select(self) -> u8 {
        match self {
            InstrumentMode::Melodic => 0x00,
            InstrumentMode::Percussion => 0x78,
        }
    }
}

/// Startup configuration. Constant for the duration of a run.
///
/// Channel and velocity default to the values the original hardware shipped
/// with (channel 0, velocity 0x60) but are plain configuration, not protocol
/// requirements.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstrumentConfig {
    pub mode: InstrumentMode,
    /// Program (voice) number sent after bank select.
    pub program: u8,
    /// MIDI channel for every message the engine emits.
    pub channel: u8,
    /// Velocity for both note-on and note-off.
    pub velocity: u8,
    /// Channel volume sent first in the startup sequence.
    pub volume: u8,
    pub melodic_table: NoteTable,
    pub percussion_table: NoteTable,
}

impl Default for InstrumentConfig {
    fn default() -> Self {
        Self {
            mode: InstrumentMode::Melodic,
            program: 0,
            channel: 0,
            velocity: 0x60,
            volume: 0x7F,
            melodic_table: DEFAULT_MELODIC,
            percussion_table: DEFAULT_PERCUSSION,
        }
    }
}

impl InstrumentConfig {
    pub fn validate(&self) -> Result<()> {
        if self.channel > 15 {
            return Err(Error::InvalidConfig(format!(
                "channel {} out of range (0-15)",
                self.channel
            )));
        }
        for (name, value) in [
            ("program", self.program),
            ("velocity", self.velocity),
            ("volume", self.volume),
        ] {
            if value > 127 {
                return Err(Error::InvalidConfig(format!(
                    "{name} {value} out of range (0-127)"
                )));
            }
        }
        // Tables built through NoteTable::new are already checked; this
        // covers tables that arrived through deserialization.
        for table in [&self.melodic_table, &self.percussion_table] {
            NoteTable::new(*table.notes())?;
        }
        Ok(())
    }

    /// Active note table for the configured mode.
    pub fn note_table(&self) -> &NoteTable {
        match self.mode {
            InstrumentMode::Melodic => &self.melodic_table,
            InstrumentMode::Percussion => &self.percussion_table,
        }
    }

    /// Note the given electrode plays under the configured mode.
    pub fn note_for(&self, electrode: ElectrodeId) -> u8 {
        self.note_table().note_for(electrode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = InstrumentConfig::default();
        assert_eq!(config.mode, InstrumentMode::Melodic);
        assert_eq!(config.channel, 0);
        assert_eq!(config.velocity, 0x60);
        assert_eq!(config.volume, 0x7F);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_bank_select_values() {
        assert_eq!(InstrumentMode::Melodic.bank_select(), 0x00);
        assert_eq!(InstrumentMode::Percussion.bank_select(), 0x78);
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let config = InstrumentConfig {
            channel: 16,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));

        let config = InstrumentConfig {
            program: 128,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = InstrumentConfig {
            velocity: 200,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_mode_selects_table() {
        let electrode = ElectrodeId::new(11).unwrap();

        let config = InstrumentConfig::default();
        assert_eq!(config.note_for(electrode), 60);

        let config = InstrumentConfig {
            mode: InstrumentMode::Percussion,
            ..Default::default()
        };
        assert_eq!(config.note_for(electrode), 49);
    }
}
