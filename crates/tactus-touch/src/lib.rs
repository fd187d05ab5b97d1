//! Touch sensing subsystem for the tactus firmware core.
//!
//! Provides electrode identity, packed touch masks, the sensor capability
//! trait, and the retained-state tracker that turns consecutive sensor reads
//! into rising/falling edges.

pub mod error;
pub use error::{Error, Result};

mod electrode;
pub use electrode::{ElectrodeId, TouchMask, ELECTRODE_COUNT};

mod sensor;
pub use sensor::TouchSensor;

mod tracker;
pub use tracker::{TouchEdge, TouchEdges, TouchTracker};
