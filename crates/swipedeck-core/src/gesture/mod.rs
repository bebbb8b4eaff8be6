//! Gesture interpretation for pointer drags
//!
//! - `tracker` - per-drag sample accumulation and drag summaries
//! - `lock` - one-time horizontal/vertical axis commitment
//! - `classifier` - tiered snap/glide classification of a finished drag

pub mod classifier;
pub mod lock;
pub mod tracker;

pub use classifier::{classify, ClassifyContext, GestureVerdict, GlideTier};
pub use lock::{DirectionLock, LockState};
pub use tracker::{DragSummary, DragTracker};

/// Direction of travel through the item sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards lower indices
    Backward,
    /// Towards higher indices
    Forward,
}

impl Direction {
    /// Dragging the track left reveals later items
    pub fn from_drag_offset(offset_x: f64) -> Self {
        if offset_x < 0.0 {
            Direction::Forward
        } else {
            Direction::Backward
        }
    }

    #[inline]
    pub fn sign(self) -> i64 {
        match self {
            Direction::Backward => -1,
            Direction::Forward => 1,
        }
    }
}
