//! Byte sink capability.

use crate::Result;

/// Ordered, fire-and-forget byte transport to the synthesizer chip.
///
/// No acknowledgement or backpressure exists. Baud rate and pin assignment
/// belong to the implementation, not the core. Transports that can fail
/// surface `Error::Transmit`; the dispatcher treats that as non-fatal.
pub trait ByteSink {
    fn write(&mut self, byte: u8) -> Result<()>;
}

impl<S: ByteSink + ?Sized> ByteSink for &mut S {
    fn write(&mut self, byte: u8) -> Result<()> {
        (**self).write(byte)
    }
}

/// In-memory sink capturing everything written, for tests and host-side use.
#[derive(Debug, Default)]
pub struct VecSink {
    bytes: Vec<u8>,
}

impl VecSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn clear(&mut self) {
        self.bytes.clear();
    }

    pub fn take(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.bytes)
    }
}

impl ByteSink for VecSink {
    fn write(&mut self, byte: u8) -> Result<()> {
        self.bytes.push(byte);
        Ok(())
    }
}
