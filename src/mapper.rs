//! Electrode-to-note mapping tables.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};
use tactus_touch::{ElectrodeId, ELECTRODE_COUNT};

/// Twelve MIDI note numbers indexed by electrode after the fixed physical
/// reversal: the lowest electrode index sits at the top of the board and maps
/// to the last entry, electrode 11 to the first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteTable([u8; ELECTRODE_COUNT]);

/// Chromatic octave from middle C. Electrode 11 plays C4.
pub const DEFAULT_MELODIC: NoteTable = NoteTable([60, 61, 62, 63, 64, 65, 66, 67, 68, 69, 70, 71]);

/// General MIDI percussion keys. Electrode 11 plays the crash cymbal.
pub const DEFAULT_PERCUSSION: NoteTable =
    NoteTable([49, 35, 57, 36, 41, 51, 43, 28, 27, 83, 76, 58]);

impl NoteTable {
    /// Returns `InvalidConfig` if any entry exceeds the 7-bit MIDI range.
    pub fn new(notes: [u8; ELECTRODE_COUNT]) -> Result<Self> {
        if let Some(bad) = notes.iter().find(|n| **n > 127) {
            return Err(Error::InvalidConfig(format!(
                "note {bad} out of MIDI range (0-127)"
            )));
        }
        Ok(NoteTable(notes))
    }

    /// Note the given electrode plays, applying the physical reversal.
    pub fn note_for(&self, electrode: ElectrodeId) -> u8 {
        self.0[ELECTRODE_COUNT - 1 - electrode.index()]
    }

    pub fn notes(&self) -> &[u8; ELECTRODE_COUNT] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn electrode(index: u8) -> ElectrodeId {
        ElectrodeId::new(index).unwrap()
    }

    #[test]
    fn test_melodic_reversal() {
        assert_eq!(DEFAULT_MELODIC.note_for(electrode(11)), 60);
        assert_eq!(DEFAULT_MELODIC.note_for(electrode(0)), 71);
        assert_eq!(DEFAULT_MELODIC.note_for(electrode(5)), 66);
    }

    #[test]
    fn test_percussion_reversal() {
        assert_eq!(DEFAULT_PERCUSSION.note_for(electrode(11)), 49);
        assert_eq!(DEFAULT_PERCUSSION.note_for(electrode(0)), 58);
    }

    #[test]
    fn test_custom_table_validation() {
        assert!(NoteTable::new([0; ELECTRODE_COUNT]).is_ok());
        assert!(NoteTable::new([127; ELECTRODE_COUNT]).is_ok());

        let mut notes = [60; ELECTRODE_COUNT];
        notes[7] = 128;
        assert!(matches!(
            NoteTable::new(notes),
            Err(Error::InvalidConfig(_))
        ));
    }
}
