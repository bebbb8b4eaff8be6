//! Per-drag sample bookkeeping
//!
//! A drag is tracked from pointer down to pointer up. The tracker keeps the
//! latest cumulative offsets and the `|velocity|` history used for peak
//! acceleration, then hands the classifier a [`DragSummary`].

use super::Direction;

/// Summary of a finished drag, the classifier's only input
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSummary {
    /// Absolute horizontal displacement in px
    pub distance: f64,
    /// Absolute release velocity in px/s
    pub velocity: f64,
    /// Largest change between consecutive velocity samples
    pub peak_acceleration: f64,
    pub direction: Direction,
}

/// Per-drag sample accumulator
///
/// Samples are only accepted between `start()` and `finish()`; finishing
/// drains the velocity history.
#[derive(Debug, Default)]
pub struct DragTracker {
    active: bool,
    velocities: Vec<f64>,
    offset_x: f64,
    offset_y: f64,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a new drag, discarding anything left from a previous one
    pub fn start(&mut self) {
        self.active = true;
        self.velocities.clear();
        self.offset_x = 0.0;
        self.offset_y = 0.0;
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Record a pointer sample (cumulative offsets since drag start)
    pub fn record(&mut self, offset_x: f64, offset_y: f64, velocity_x: f64) {
        if !self.is_active() {
            return;
        }
        self.offset_x = offset_x;
        self.offset_y = offset_y;
        self.velocities.push(velocity_x.abs());
    }

    #[inline]
    pub fn offset(&self) -> (f64, f64) {
        (self.offset_x, self.offset_y)
    }

    #[inline]
    pub fn sample_count(&self) -> usize {
        self.velocities.len()
    }

    /// Largest absolute first difference of the recorded velocities
    pub fn peak_acceleration(&self) -> f64 {
        peak_acceleration(&self.velocities)
    }

    /// End the drag and summarize it from the release offset and velocity
    pub fn finish(&mut self, offset_x: f64, velocity_x: f64) -> DragSummary {
        let summary = DragSummary {
            distance: offset_x.abs(),
            velocity: velocity_x.abs(),
            peak_acceleration: self.peak_acceleration(),
            direction: Direction::from_drag_offset(offset_x),
        };
        self.active = false;
        self.velocities.clear();
        summary
    }
}

/// Peak of `|v[i] - v[i-1]|`; 0 with fewer than two samples
pub fn peak_acceleration(velocities: &[f64]) -> f64 {
    velocities
        .windows(2)
        .map(|pair| (pair[1] - pair[0]).abs())
        .fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peak_acceleration() {
        assert_eq!(peak_acceleration(&[]), 0.0);
        assert_eq!(peak_acceleration(&[120.0]), 0.0);
        assert_eq!(peak_acceleration(&[10.0, 40.0, 35.0, 90.0, 80.0]), 55.0);
    }

    #[test]
    fn test_samples_ignored_outside_drag() {
        let mut tracker = DragTracker::new();
        tracker.record(-10.0, 0.0, 100.0);
        assert_eq!(tracker.sample_count(), 0);

        tracker.start();
        tracker.record(-10.0, 2.0, -100.0);
        tracker.record(-30.0, 3.0, -160.0);
        assert_eq!(tracker.sample_count(), 2);
        assert_eq!(tracker.offset(), (-30.0, 3.0));
        assert_eq!(tracker.peak_acceleration(), 60.0);
    }

    #[test]
    fn test_finish_drains_history() {
        let mut tracker = DragTracker::new();
        tracker.start();
        tracker.record(-20.0, 0.0, -200.0);
        tracker.record(-60.0, 0.0, -260.0);

        let summary = tracker.finish(-75.0, -240.0);
        assert_eq!(summary.distance, 75.0);
        assert_eq!(summary.velocity, 240.0);
        assert_eq!(summary.peak_acceleration, 60.0);
        assert_eq!(summary.direction, Direction::Forward);

        assert!(!tracker.is_active());
        assert_eq!(tracker.sample_count(), 0);
        tracker.record(-80.0, 0.0, 10.0);
        assert_eq!(tracker.sample_count(), 0);
    }

    #[test]
    fn test_start_resets_previous_drag() {
        let mut tracker = DragTracker::new();
        tracker.start();
        tracker.record(40.0, 0.0, 300.0);
        tracker.start();
        assert_eq!(tracker.sample_count(), 0);
        assert_eq!(tracker.offset(), (0.0, 0.0));
    }
}
