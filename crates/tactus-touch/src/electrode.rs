//! Electrode identity and packed touch state.

use std::fmt;

use crate::{Error, Result};

/// Number of capacitive sensor channels on the board.
pub const ELECTRODE_COUNT: usize = 12;

/// Index of one capacitive sensor channel (0-11).
///
/// Construction is fallible; once built, an `ElectrodeId` is always in range,
/// so table lookups downstream need no runtime checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElectrodeId(u8);

impl ElectrodeId {
    /// Returns `Error::InvalidElectrode` if `index >= ELECTRODE_COUNT`.
    pub fn new(index: u8) -> Result<Self> {
        if (index as usize) < ELECTRODE_COUNT {
            Ok(ElectrodeId(index))
        } else {
            Err(Error::InvalidElectrode(index))
        }
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// All electrodes in ascending order.
    pub fn all() -> impl Iterator<Item = ElectrodeId> {
        (0..ELECTRODE_COUNT as u8).map(ElectrodeId)
    }
}

impl fmt::Display for ElectrodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for ElectrodeId {
    type Error = Error;

    fn try_from(index: u8) -> Result<Self> {
        ElectrodeId::new(index)
    }
}

/// Per-electrode boolean touch state packed as the low 12 bits.
///
/// Produced wholesale by the sensor on every read; bit `n` set means
/// electrode `n` is currently touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TouchMask(u16);

impl TouchMask {
    pub const EMPTY: TouchMask = TouchMask(0);

    const VALID_BITS: u16 = (1 << ELECTRODE_COUNT) - 1;

    /// Sensors report full 16-bit registers; anything above bit 11 is noise
    /// and gets masked off.
    pub const fn from_bits(bits: u16) -> Self {
        TouchMask(bits & Self::VALID_BITS)
    }

    pub const fn bits(self) -> u16 {
        self.0
    }

    pub const fn is_touched(self, electrode: ElectrodeId) -> bool {
        self.0 & (1 << electrode.0) != 0
    }

    /// Copy of this mask with `electrode` marked touched.
    pub const fn with_touched(self, electrode: ElectrodeId) -> Self {
        TouchMask(self.0 | (1 << electrode.0))
    }

    pub const fn touched_count(self) -> u32 {
        self.0.count_ones()
    }
}
