//! Axis commitment for a single drag
//!
//! The first samples of a drag decide whether it belongs to the carousel
//! (horizontal) or to the page (vertical). The decision is made once and
//! holds until the drag ends.

use tracing::debug;

use crate::config::LockConfig;

/// Share of the displacement that must be horizontal when a decision is forced
const FORCED_HORIZONTAL_RATIO: f64 = 0.5;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LockState {
    #[default]
    Undetermined,
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Default)]
pub struct DirectionLock {
    config: LockConfig,
    state: LockState,
}

impl DirectionLock {
    pub fn new(config: LockConfig) -> Self {
        Self {
            config,
            state: LockState::Undetermined,
        }
    }

    #[inline]
    pub fn state(&self) -> LockState {
        self.state
    }

    /// Forget the previous drag's decision
    pub fn reset(&mut self) {
        self.state = LockState::Undetermined;
    }

    /// Native page scrolling must be blocked only once locked horizontal
    #[inline]
    pub fn suppresses_native_scroll(&self) -> bool {
        self.state == LockState::Horizontal
    }

    /// Feed the cumulative drag displacement and return the (possibly new) state
    pub fn observe(&mut self, offset_x: f64, offset_y: f64) -> LockState {
        if self.state != LockState::Undetermined {
            return self.state;
        }

        let total = offset_x.hypot(offset_y);
        if total < self.config.noise_floor {
            return self.state;
        }

        // Fold into the first quadrant so leftward and upward drags read the same
        let angle = offset_y.abs().atan2(offset_x.abs()).to_degrees();

        let decided = if angle < self.config.horizontal_max_angle {
            Some(LockState::Horizontal)
        } else if angle > self.config.vertical_min_angle {
            Some(LockState::Vertical)
        } else if total > self.config.decision_distance {
            if offset_x.abs() / total > FORCED_HORIZONTAL_RATIO {
                Some(LockState::Horizontal)
            } else {
                Some(LockState::Vertical)
            }
        } else {
            None
        };

        if let Some(state) = decided {
            debug!(?state, angle, total, "Direction locked");
            self.state = state;
        }
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_lock() -> DirectionLock {
        DirectionLock::new(LockConfig::default())
    }

    #[test]
    fn test_noise_floor() {
        let mut lock = new_lock();
        assert_eq!(lock.observe(2.0, 0.5), LockState::Undetermined);
        assert!(!lock.suppresses_native_scroll());
    }

    #[test]
    fn test_horizontal_lock_both_directions() {
        let mut lock = new_lock();
        assert_eq!(lock.observe(12.0, 2.0), LockState::Horizontal);
        assert!(lock.suppresses_native_scroll());

        let mut lock = new_lock();
        assert_eq!(lock.observe(-12.0, -2.0), LockState::Horizontal);
    }

    #[test]
    fn test_vertical_lock() {
        let mut lock = new_lock();
        assert_eq!(lock.observe(1.0, -10.0), LockState::Vertical);
        assert!(!lock.suppresses_native_scroll());
    }

    #[test]
    fn test_diagonal_waits_then_decides_by_ratio() {
        let mut lock = new_lock();
        // 45 degrees, 14px: too short to force a decision
        assert_eq!(lock.observe(10.0, 10.0), LockState::Undetermined);
        // ~50 degrees, ~31px: forced, horizontal share 0.64
        assert_eq!(lock.observe(20.0, 24.0), LockState::Horizontal);

        let mut lock = new_lock();
        // ~40 degrees, ~31px
        assert_eq!(lock.observe(-24.0, 20.0), LockState::Horizontal);

        let mut lock = new_lock();
        // ~59 degrees, still in the ambiguous band: horizontal share just over half
        assert_eq!(lock.observe(16.0, -26.0), LockState::Horizontal);
    }

    #[test]
    fn test_lock_is_irreversible_until_reset() {
        let mut lock = new_lock();
        lock.observe(20.0, 1.0);
        assert_eq!(lock.observe(0.0, 200.0), LockState::Horizontal);

        lock.reset();
        assert_eq!(lock.state(), LockState::Undetermined);
        assert_eq!(lock.observe(0.0, 200.0), LockState::Vertical);
    }
}
