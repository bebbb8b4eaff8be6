//! Time and interpolation helpers for frame-driven motion

use std::time::Duration;

/// Animation progress (0.0 to 1.0) after `elapsed` of a `duration`-long motion
#[inline]
pub fn progress(elapsed: Duration, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    let ratio = elapsed.as_secs_f64() / duration.as_secs_f64();
    ratio.clamp(0.0, 1.0)
}

/// Check if a motion of `duration` has run its course
#[inline]
pub fn is_complete(elapsed: Duration, duration: Duration) -> bool {
    elapsed >= duration
}

/// Linear interpolation between two values
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Frame interval for a target frame rate
#[inline]
pub fn frame_duration(frame_rate: u32) -> Duration {
    if frame_rate == 0 {
        Duration::from_millis(16) // ~60fps fallback
    } else {
        Duration::from_secs_f64(1.0 / frame_rate as f64)
    }
}
