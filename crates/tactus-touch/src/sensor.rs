//! Sensor capability consumed by the tracker.
//!
//! The core never talks to I2C addressing, thresholds, or filter calibration;
//! it consumes a per-electrode boolean state through this trait and leaves the
//! peripheral details to the implementation.

use crate::{Result, TouchMask};

pub trait TouchSensor {
    /// One-time bring-up. Failure is fatal: the control loop must not run
    /// against an uninitialized sensor.
    fn init(&mut self) -> Result<()> {
        Ok(())
    }

    /// Current touch state for all electrodes.
    ///
    /// A failed read must surface as `Error::SensorRead`, never as an
    /// all-untouched mask.
    fn read_touch_mask(&mut self) -> Result<TouchMask>;

    /// Change hint, typically backed by the sensor's interrupt line.
    ///
    /// Pollers may skip a cycle when this returns `false`. Correctness never
    /// depends on it: an unchanged mask produces no edges anyway.
    fn changed(&mut self) -> bool {
        true
    }
}
