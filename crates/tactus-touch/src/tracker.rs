//! Retained-state edge derivation.

use tracing::trace;

use crate::{ElectrodeId, Result, TouchMask, TouchSensor, ELECTRODE_COUNT};

/// Transition of one electrode between consecutive polls.
///
/// Touch state is boolean, so a single poll can never yield both a rising and
/// a falling edge for the same electrode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TouchEdge {
    /// No transition this poll.
    #[default]
    None,
    /// Newly touched.
    Rising,
    /// Newly released.
    Falling,
}

/// Edge set for one poll, one entry per electrode. Not retained across polls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TouchEdges {
    edges: [TouchEdge; ELECTRODE_COUNT],
}

impl TouchEdges {
    fn from_masks(previous: TouchMask, current: TouchMask) -> Self {
        let mut edges = [TouchEdge::None; ELECTRODE_COUNT];
        for electrode in ElectrodeId::all() {
            let was = previous.is_touched(electrode);
            let now = current.is_touched(electrode);
            edges[electrode.index()] = match (was, now) {
                (false, true) => TouchEdge::Rising,
                (true, false) => TouchEdge::Falling,
                _ => TouchEdge::None,
            };
        }
        TouchEdges { edges }
    }

    pub fn edge(&self, electrode: ElectrodeId) -> TouchEdge {
        self.edges[electrode.index()]
    }

    /// Electrodes that changed state this poll, in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (ElectrodeId, TouchEdge)> + '_ {
        ElectrodeId::all()
            .map(|e| (e, self.edge(e)))
            .filter(|(_, edge)| *edge != TouchEdge::None)
    }

    pub fn is_empty(&self) -> bool {
        self.edges.iter().all(|e| *e == TouchEdge::None)
    }
}

/// Derives rising/falling edges from consecutive sensor reads.
///
/// Exclusively owns the retained mask. The first poll compares against an
/// all-untouched mask, so a true first press classifies as `Rising`.
pub struct TouchTracker<S> {
    sensor: S,
    previous: TouchMask,
}

impl<S: TouchSensor> TouchTracker<S> {
    pub fn new(sensor: S) -> Self {
        Self {
            sensor,
            previous: TouchMask::EMPTY,
        }
    }

    /// Bring up the underlying sensor. Fatal on failure.
    pub fn init(&mut self) -> Result<()> {
        self.sensor.init()
    }

    /// Forwarded change hint from the sensor.
    pub fn changed(&mut self) -> bool {
        self.sensor.changed()
    }

    /// Read the sensor, derive one edge per electrode, retain the new mask.
    ///
    /// A failed read propagates without updating retained state, so the next
    /// successful poll still compares against the last known-good mask.
    pub fn poll(&mut self) -> Result<TouchEdges> {
        let current = self.sensor.read_touch_mask()?;
        let edges = TouchEdges::from_masks(self.previous, current);
        if current != self.previous {
            trace!(
                previous = self.previous.bits(),
                current = current.bits(),
                "touch mask changed"
            );
        }
        self.previous = current;
        Ok(edges)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use std::collections::VecDeque;

    /// Sensor fed from a fixed script of reads.
    struct ScriptedSensor {
        script: VecDeque<Result<TouchMask>>,
    }

    impl ScriptedSensor {
        fn new(steps: impl IntoIterator<Item = u16>) -> Self {
            Self {
                script: steps
                    .into_iter()
                    .map(|bits| Ok(TouchMask::from_bits(bits)))
                    .collect(),
            }
        }

        fn push_failure(&mut self) {
            self.script
                .push_back(Err(Error::SensorRead("scripted failure".into())));
        }
    }

    impl TouchSensor for ScriptedSensor {
        fn read_touch_mask(&mut self) -> Result<TouchMask> {
            self.script
                .pop_front()
                .unwrap_or_else(|| Err(Error::SensorRead("script exhausted".into())))
        }
    }

    fn electrode(index: u8) -> ElectrodeId {
        ElectrodeId::new(index).unwrap()
    }

    #[test]
    fn test_first_press_is_rising() {
        let mut tracker = TouchTracker::new(ScriptedSensor::new([1 << 3]));
        let edges = tracker.poll().unwrap();
        assert_eq!(edges.edge(electrode(3)), TouchEdge::Rising);
        assert_eq!(edges.iter().count(), 1);
    }

    #[test]
    fn test_press_hold_release_cycle() {
        let mut tracker = TouchTracker::new(ScriptedSensor::new([1 << 5, 1 << 5, 0, 0]));

        let edges = tracker.poll().unwrap();
        assert_eq!(edges.edge(electrode(5)), TouchEdge::Rising);

        // Held: no edge until released.
        let edges = tracker.poll().unwrap();
        assert!(edges.is_empty());

        let edges = tracker.poll().unwrap();
        assert_eq!(edges.edge(electrode(5)), TouchEdge::Falling);

        // Released and idle: nothing.
        let edges = tracker.poll().unwrap();
        assert!(edges.is_empty());
    }

    #[test]
    fn test_exactly_one_edge_per_electrode_per_poll() {
        // Sweep every pairwise mask transition over three electrodes and
        // check each poll yields at most one edge per electrode.
        for from in 0u16..8 {
            for to in 0u16..8 {
                let mut tracker = TouchTracker::new(ScriptedSensor::new([from, to]));
                tracker.poll().unwrap();
                let edges = tracker.poll().unwrap();
                for e in ElectrodeId::all() {
                    let edge = edges.edge(e);
                    let was = from & (1 << e.index()) != 0;
                    let now = to & (1 << e.index()) != 0;
                    let expected = match (was, now) {
                        (false, true) => TouchEdge::Rising,
                        (true, false) => TouchEdge::Falling,
                        _ => TouchEdge::None,
                    };
                    assert_eq!(edge, expected, "from={from:#b} to={to:#b} e={e}");
                }
            }
        }
    }

    #[test]
    fn test_simultaneous_edges_iterate_ascending() {
        let press_0_and_11 = (1 << 0) | (1 << 11);
        let mut tracker = TouchTracker::new(ScriptedSensor::new([press_0_and_11]));
        let edges = tracker.poll().unwrap();
        let order: Vec<usize> = edges.iter().map(|(e, _)| e.index()).collect();
        assert_eq!(order, vec![0, 11]);
    }

    #[test]
    fn test_read_failure_preserves_retained_state() {
        let mut sensor = ScriptedSensor::new([1 << 2]);
        sensor.push_failure();
        sensor.script.push_back(Ok(TouchMask::from_bits(1 << 2)));

        let mut tracker = TouchTracker::new(sensor);
        assert_eq!(tracker.poll().unwrap().edge(electrode(2)), TouchEdge::Rising);

        assert!(matches!(tracker.poll(), Err(Error::SensorRead(_))));

        // Still held after the failed read: no spurious edge.
        let edges = tracker.poll().unwrap();
        assert!(edges.is_empty());
    }
}
