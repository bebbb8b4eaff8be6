use super::timing::{is_complete, lerp, progress};
use super::{EasingType, MotionFrame, TweenParams};
use std::time::Duration;

/// Eased interpolation over a fixed duration
#[derive(Debug, Clone)]
pub struct TweenMotion {
    from: f64,
    to: f64,
    duration: Duration,
    easing: EasingType,
    elapsed: f64,
    position: f64,
    velocity: f64,
}

impl TweenMotion {
    pub fn new(from: f64, to: f64, params: TweenParams) -> Self {
        Self {
            from,
            to,
            duration: params.duration,
            easing: params.easing,
            elapsed: 0.0,
            position: from,
            velocity: 0.0,
        }
    }

    #[inline]
    pub fn position(&self) -> f64 {
        self.position
    }

    #[inline]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    #[inline]
    pub fn target(&self) -> f64 {
        self.to
    }

    fn is_finished(&self) -> bool {
        // Tolerate float drift from summed frame intervals
        is_complete(Duration::from_secs_f64(self.elapsed + 1e-9), self.duration)
    }

    pub fn advance(&mut self, dt: f64) -> MotionFrame {
        let previous = self.position;
        self.elapsed += dt.max(0.0);

        let settled = self.is_finished();
        self.position = if settled {
            self.to
        } else {
            let t = progress(Duration::from_secs_f64(self.elapsed), self.duration);
            lerp(self.from, self.to, self.easing.apply(t))
        };
        self.velocity = if settled || dt <= 0.0 {
            0.0
        } else {
            (self.position - previous) / dt
        };

        MotionFrame {
            position: self.position,
            velocity: self.velocity,
            settled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tween(easing: EasingType) -> TweenMotion {
        TweenMotion::new(
            0.0,
            -300.0,
            TweenParams {
                duration: Duration::from_millis(300),
                easing,
            },
        )
    }

    #[test]
    fn test_linear_midpoint() {
        let mut motion = tween(EasingType::Linear);
        let frame = motion.advance(0.15);
        assert!((frame.position - -150.0).abs() < 1e-6);
        assert!(!frame.settled);
        assert!((frame.velocity - -1000.0).abs() < 1e-6);
    }

    #[test]
    fn test_finishes_on_target() {
        let mut motion = tween(EasingType::EaseOut);
        motion.advance(0.2);
        let frame = motion.advance(0.2);
        assert!(frame.settled);
        assert_eq!(frame.position, -300.0);
        assert_eq!(frame.velocity, 0.0);
    }

    #[test]
    fn test_zero_duration_settles_immediately() {
        let mut motion = TweenMotion::new(
            10.0,
            20.0,
            TweenParams {
                duration: Duration::ZERO,
                easing: EasingType::Cubic,
            },
        );
        assert!(motion.advance(0.0).settled);
        assert_eq!(motion.position(), 20.0);
    }
}
