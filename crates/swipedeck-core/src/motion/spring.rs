use super::{MotionFrame, SpringParams};

/// Largest integration step; frames longer than this are sub-stepped
const MAX_STEP: f64 = 1.0 / 240.0;

/// Unit-mass damped spring pulling a value towards a fixed target
#[derive(Debug, Clone)]
pub struct SpringMotion {
    position: f64,
    velocity: f64,
    target: f64,
    stiffness: f64,
    damping: f64,
    rest_delta: f64,
    rest_speed: f64,
    settled: bool,
}

impl SpringMotion {
    pub fn new(from: f64, to: f64, params: SpringParams, rest_delta: f64, rest_speed: f64) -> Self {
        Self {
            position: from,
            velocity: params.velocity,
            target: to,
            stiffness: params.stiffness,
            damping: params.damping,
            rest_delta,
            rest_speed,
            settled: false,
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
        self.target
    }

    fn at_rest(&self) -> bool {
        (self.target - self.position).abs() < self.rest_delta
            && self.velocity.abs() < self.rest_speed
    }

    /// Largest step the explicit update stays stable for with these parameters
    ///
    /// Semi-implicit Euler is stable while `h * damping <= 1` and
    /// `h * sqrt(stiffness) <= 1`.
    fn max_step(&self) -> f64 {
        let mut step = MAX_STEP;
        if self.damping > 0.0 {
            step = step.min(1.0 / self.damping);
        }
        if self.stiffness > 0.0 {
            step = step.min(1.0 / self.stiffness.sqrt());
        }
        step
    }

    /// Semi-implicit Euler, sub-stepped for stiff or heavily damped springs
    pub fn advance(&mut self, dt: f64) -> MotionFrame {
        if !self.settled && dt > 0.0 {
            let steps = (dt / self.max_step()).ceil().max(1.0);
            let h = dt / steps;
            for _ in 0..steps as usize {
                let force = -self.stiffness * (self.position - self.target);
                let drag = -self.damping * self.velocity;
                self.velocity += (force + drag) * h;
                self.position += self.velocity * h;
            }
        }

        let diverged = !(self.position.is_finite() && self.velocity.is_finite());
        if !self.settled && (diverged || self.at_rest()) {
            // Land exactly on the target
            self.position = self.target;
            self.velocity = 0.0;
            self.settled = true;
        }

        MotionFrame {
            position: self.position,
            velocity: self.velocity,
            settled: self.settled,
        }
    }
}
