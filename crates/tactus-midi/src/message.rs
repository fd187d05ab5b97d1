//! MIDI channel-voice message value type and its wire form.

/// Command nibbles for channel-voice messages.
pub const NOTE_OFF: u8 = 0x80;
pub const NOTE_ON: u8 = 0x90;
pub const POLY_PRESSURE: u8 = 0xA0;
pub const CONTROL_CHANGE: u8 = 0xB0;
pub const PROGRAM_CHANGE: u8 = 0xC0;
pub const CHANNEL_PRESSURE: u8 = 0xD0;

/// Controller numbers the engine uses.
pub const CC_BANK_SELECT: u8 = 0x00;
pub const CC_VOLUME: u8 = 0x07;
pub const CC_ALL_NOTES_OFF: u8 = 123;

/// One channel-voice message: status byte plus up to two data bytes.
///
/// `data2` is always carried in the value but only reaches the wire for
/// two-data-byte command classes (see [`MidiMessage::two_data_bytes`]).
/// Constructed and immediately serialized; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MidiMessage {
    pub status: u8,
    pub data1: u8,
    pub data2: u8,
}

impl MidiMessage {
    /// Generic message from a raw command byte. The channel is whatever the
    /// low nibble of `command` already carries; data bytes are masked to the
    /// 7-bit MIDI range.
    pub fn raw(command: u8, data1: u8, data2: u8) -> Self {
        Self {
            status: command,
            data1: data1 & 0x7F,
            data2: data2 & 0x7F,
        }
    }

    pub fn note_on(channel: u8, note: u8, velocity: u8) -> Self {
        Self::raw(NOTE_ON | channel.min(15), note, velocity)
    }

    pub fn note_off(channel: u8, note: u8, velocity: u8) -> Self {
        Self::raw(NOTE_OFF | channel.min(15), note, velocity)
    }

    pub fn control_change(channel: u8, controller: u8, value: u8) -> Self {
        Self::raw(CONTROL_CHANGE | channel.min(15), controller, value)
    }

    pub fn program_change(channel: u8, program: u8) -> Self {
        Self::raw(PROGRAM_CHANGE | channel.min(15), program, 0)
    }

    /// Whether this message carries a second data byte on the wire.
    ///
    /// Commands up to and including Control Change (0xB0) take two data
    /// bytes; Program Change (0xC0) and Channel Pressure (0xD0) take one.
    /// The boundary comparison is the rule; there is no per-command table.
    pub fn two_data_bytes(&self) -> bool {
        self.status & 0xF0 <= CONTROL_CHANGE
    }

    /// Exact wire form of this message.
    pub fn to_bytes(&self) -> Vec<u8> {
        if self.two_data_bytes() {
            vec![self.status, self.data1, self.data2]
        } else {
            vec![self.status, self.data1]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_on_wire_form() {
        let msg = MidiMessage::note_on(0, 60, 0x60);
        assert_eq!(msg.to_bytes(), vec![0x90, 0x3C, 0x60]);

        let msg = MidiMessage::note_on(15, 60, 100);
        assert_eq!(msg.to_bytes(), vec![0x9F, 60, 100]);
    }

    #[test]
    fn test_note_off_wire_form() {
        let msg = MidiMessage::note_off(0, 60, 0x60);
        assert_eq!(msg.to_bytes(), vec![0x80, 0x3C, 0x60]);
    }

    #[test]
    fn test_control_change_wire_form() {
        let msg = MidiMessage::control_change(0, CC_VOLUME, 0x7F);
        assert_eq!(msg.to_bytes(), vec![0xB0, 0x07, 0x7F]);
    }

    #[test]
    fn test_program_change_suppresses_data2() {
        // 0xC0 > 0xB0, so exactly two bytes go out even though the value
        // carries a data2 placeholder.
        let msg = MidiMessage::raw(0xC0, 5, 0);
        assert_eq!(msg.to_bytes(), vec![0xC0, 0x05]);

        let msg = MidiMessage::program_change(3, 40);
        assert_eq!(msg.to_bytes(), vec![0xC3, 40]);
    }

    #[test]
    fn test_two_data_byte_boundary() {
        // Two data bytes for everything up to and including 0xB0.
        for command in [NOTE_OFF, NOTE_ON, POLY_PRESSURE, CONTROL_CHANGE] {
            let msg = MidiMessage::raw(command, 1, 2);
            assert!(msg.two_data_bytes(), "command {command:#04X}");
            assert_eq!(msg.to_bytes().len(), 3);
        }
        // One data byte above the boundary.
        for command in [PROGRAM_CHANGE, CHANNEL_PRESSURE] {
            let msg = MidiMessage::raw(command, 1, 2);
            assert!(!msg.two_data_bytes(), "command {command:#04X}");
            assert_eq!(msg.to_bytes().len(), 2);
        }
        // Channel bits must not disturb the boundary check.
        assert!(MidiMessage::raw(0xBF, 1, 2).two_data_bytes());
        assert!(!MidiMessage::raw(0xC7, 1, 2).two_data_bytes());
    }

    #[test]
    fn test_channel_clamp_and_data_masking() {
        let msg = MidiMessage::note_on(200, 60, 100);
        assert_eq!(msg.status, 0x9F);

        let msg = MidiMessage::note_on(0, 0xFF, 0xFF);
        assert_eq!(msg.data1, 0x7F);
        assert_eq!(msg.data2, 0x7F);
    }
}
