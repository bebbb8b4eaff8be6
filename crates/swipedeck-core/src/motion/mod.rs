//! Motion integrators that drive the track position between resting points
//!
//! ## Leaf modules
//! - `easing` - Pure easing curves (cubic, quintic, exponential)
//! - `timing` - Progress and interpolation helpers
//! - `spring` - Damped spring integration with velocity seeding
//! - `tween` - Duration-based eased interpolation
//!
//! The navigation controller only talks to the [`Integrator`] and [`Motion`]
//! traits. Cancelling a motion is dropping it after reading its live
//! position, so a cancelled motion cannot report anything afterwards.

pub mod easing;
pub mod spring;
pub mod timing;
pub mod tween;

use std::time::Duration;

use crate::config::{EasingType, MotionConfig};

pub use spring::SpringMotion;
pub use tween::TweenMotion;

/// Parameters for one spring invocation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringParams {
    pub stiffness: f64,
    pub damping: f64,
    /// Initial velocity in px/s
    pub velocity: f64,
}

/// Parameters for one tween invocation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenParams {
    pub duration: Duration,
    pub easing: EasingType,
}

/// What to run for one animation phase
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MotionSpec {
    Spring(SpringParams),
    Tween(TweenParams),
}

/// Snapshot after advancing a motion
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionFrame {
    pub position: f64,
    pub velocity: f64,
    /// The motion reached its target and will not move again
    pub settled: bool,
}

/// A single running animation of one scalar value
pub trait Motion: std::fmt::Debug {
    /// Advance by `dt` seconds and report the new state
    fn advance(&mut self, dt: f64) -> MotionFrame;

    /// Instantaneous value, readable at any time (including at cancellation)
    fn position(&self) -> f64;

    fn velocity(&self) -> f64;

    fn target(&self) -> f64;
}

/// Factory for motions; the controller's view of the animation engine
pub trait Integrator {
    type Motion: Motion;

    fn animate(&self, from: f64, to: f64, spec: &MotionSpec) -> Self::Motion;
}

/// Built-in integrator: unit-mass springs and eased tweens
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicsIntegrator {
    /// Distance from the target under which a spring may rest
    pub rest_delta: f64,
    /// Speed under which a spring may rest
    pub rest_speed: f64,
}

impl Default for PhysicsIntegrator {
    fn default() -> Self {
        Self::from(&MotionConfig::default())
    }
}

impl From<&MotionConfig> for PhysicsIntegrator {
    fn from(config: &MotionConfig) -> Self {
        Self {
            rest_delta: config.rest_delta,
            rest_speed: config.rest_speed,
        }
    }
}

/// Motion produced by [`PhysicsIntegrator`]
#[derive(Debug, Clone)]
pub enum PhysicsMotion {
    Spring(SpringMotion),
    Tween(TweenMotion),
}

impl Motion for PhysicsMotion {
    fn advance(&mut self, dt: f64) -> MotionFrame {
        match self {
            PhysicsMotion::Spring(m) => m.advance(dt),
            PhysicsMotion::Tween(m) => m.advance(dt),
        }
    }

    fn position(&self) -> f64 {
        match self {
            PhysicsMotion::Spring(m) => m.position(),
            PhysicsMotion::Tween(m) => m.position(),
        }
    }

    fn velocity(&self) -> f64 {
        match self {
            PhysicsMotion::Spring(m) => m.velocity(),
            PhysicsMotion::Tween(m) => m.velocity(),
        }
    }

    fn target(&self) -> f64 {
        match self {
            PhysicsMotion::Spring(m) => m.target(),
            PhysicsMotion::Tween(m) => m.target(),
        }
    }
}

impl Integrator for PhysicsIntegrator {
    type Motion = PhysicsMotion;

    fn animate(&self, from: f64, to: f64, spec: &MotionSpec) -> PhysicsMotion {
        match *spec {
            MotionSpec::Spring(params) => PhysicsMotion::Spring(SpringMotion::new(
                from,
                to,
                params,
                self.rest_delta,
                self.rest_speed,
            )),
            MotionSpec::Tween(params) => PhysicsMotion::Tween(TweenMotion::new(from, to, params)),
        }
    }
}
