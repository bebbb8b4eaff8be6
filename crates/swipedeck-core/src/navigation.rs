//! Navigation controller: index state plus transition sequencing
//!
//! Owns the current index and the live track position. Every index change
//! goes through [`NavigationController::go_to`], which cancels whatever is
//! running (keeping its live position as the new start) and launches a
//! transition:
//!
//! - `Snap` - one motion with the snap spring (or tween)
//! - `Glide` - a loose momentum phase, then a stiff settle phase towards
//!   the same target so multi-item glides land without oscillating
//! - `ColumnGlide` - one firmer spring, used for multi-column layouts when
//!   configured
//!
//! Hosts call [`NavigationController::tick`] once per frame and render
//! [`NavigationController::position`].

use std::time::Duration;

use tracing::{debug, trace};

use crate::config::{CarouselConfig, EdgeResistance, MotionConfig};
use crate::gesture::Direction;
use crate::layout::CarouselGeometry;
use crate::motion::{
    Integrator, Motion, MotionSpec, PhysicsIntegrator, SpringParams, TweenParams,
};

/// Distance under which the track counts as resting on its target
const POSITION_EPSILON: f64 = 1e-6;

/// Identifies one transition for the lifetime of a controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TransitionId(u64);

impl TransitionId {
    #[inline]
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Animation profile chosen for a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionProfile {
    Snap,
    Glide,
    ColumnGlide,
}

/// Report of a freshly started transition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionStart {
    pub id: TransitionId,
    pub index: usize,
    /// Live position the motion starts from
    pub start_position: f64,
    pub target_position: f64,
    pub profile: TransitionProfile,
}

/// Progress notifications produced by `tick`
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavigationEvent {
    /// A glide finished its momentum phase and started settling
    PhaseChanged { id: TransitionId, position: f64 },
    /// The final phase completed; the controller is idle again
    Settled { id: TransitionId, index: usize },
}

/// Read-only snapshot for renderers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavigationState {
    pub current_index: usize,
    pub position: f64,
    pub is_transitioning: bool,
    pub active_transition: Option<TransitionId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// The only phase of a snap or column glide
    Single,
    /// Phase A of a glide
    Momentum,
    /// Phase B of a glide
    Settle,
}

#[derive(Debug)]
struct Transition<M> {
    id: TransitionId,
    index: usize,
    target_position: f64,
    phase: Phase,
    motion: M,
}

/// Carousel navigation state machine (`idle` / `transitioning`)
#[derive(Debug)]
pub struct NavigationController<I: Integrator = PhysicsIntegrator> {
    config: MotionConfig,
    edge_resistance: EdgeResistance,
    integrator: I,
    geometry: CarouselGeometry,
    current_index: usize,
    position: f64,
    transition: Option<Transition<I::Motion>>,
    /// Track position when the current drag started
    drag_anchor: Option<f64>,
    next_id: u64,
}

impl NavigationController<PhysicsIntegrator> {
    /// Create a controller with the built-in spring/tween integrator
    pub fn new(config: &CarouselConfig, geometry: CarouselGeometry) -> Self {
        Self::with_integrator(
            config.motion.clone(),
            config.layout.edge_resistance,
            geometry,
            PhysicsIntegrator::from(&config.motion),
        )
    }
}

impl<I: Integrator> NavigationController<I> {
    /// Create a controller driven by a host-supplied integrator
    pub fn with_integrator(
        config: MotionConfig,
        edge_resistance: EdgeResistance,
        geometry: CarouselGeometry,
        integrator: I,
    ) -> Self {
        Self {
            config,
            edge_resistance,
            integrator,
            geometry,
            current_index: 0,
            position: 0.0,
            transition: None,
            drag_anchor: None,
            next_id: 0,
        }
    }

    #[inline]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Live track position in px (0 at the first item, negative beyond)
    #[inline]
    pub fn position(&self) -> f64 {
        self.position
    }

    #[inline]
    pub fn is_transitioning(&self) -> bool {
        self.transition.is_some()
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag_anchor.is_some()
    }

    #[inline]
    pub fn geometry(&self) -> &CarouselGeometry {
        &self.geometry
    }

    #[inline]
    pub fn config(&self) -> &MotionConfig {
        &self.config
    }

    /// Whether navigation is possible at all (measured layout, 2+ items)
    #[inline]
    pub fn is_interactive(&self) -> bool {
        self.geometry.is_ready() && !self.geometry.is_degenerate()
    }

    pub fn state(&self) -> NavigationState {
        NavigationState {
            current_index: self.current_index,
            position: self.position,
            is_transitioning: self.is_transitioning(),
            active_transition: self.transition.as_ref().map(|t| t.id),
        }
    }

    /// Target position of the active transition, or the resting position
    pub fn target_position(&self) -> f64 {
        self.transition
            .as_ref()
            .map(|t| t.target_position)
            .unwrap_or_else(|| self.geometry.position_for(self.current_index))
    }

    /// Replace the geometry after a resize or content change
    ///
    /// Any transition is dropped and the track jumps to the boundary of the
    /// (clamped) current index.
    pub fn set_geometry(&mut self, geometry: CarouselGeometry) {
        self.cancel_active();
        self.drag_anchor = None;
        self.geometry = geometry;
        self.current_index = self.current_index.min(geometry.max_index);
        self.position = geometry.position_for(self.current_index);
        debug!(
            item_width = geometry.item_width,
            max_index = geometry.max_index,
            index = self.current_index,
            "Geometry updated"
        );
    }

    /// Drag start: stop any transition where it is and anchor the drag there
    pub fn grab(&mut self) -> f64 {
        self.cancel_active();
        self.drag_anchor = Some(self.position);
        self.position
    }

    /// Follow the pointer during a drag
    ///
    /// The position is limited to the drag bounds, with rubber-banding when
    /// edge resistance is configured. No-op outside a drag or while the
    /// carousel is not interactive.
    pub fn drag_to(&mut self, offset_x: f64) -> f64 {
        if let Some(anchor) = self.drag_anchor {
            if self.is_interactive() {
                self.position = self
                    .geometry
                    .drag_bounds
                    .constrain(anchor + offset_x, self.edge_resistance);
            }
        }
        self.position
    }

    /// End a drag without navigating (the track stays where it was left)
    pub fn release(&mut self) {
        self.drag_anchor = None;
    }

    /// Transition to `target_index` (clamped into `[0, max_index]`)
    ///
    /// Returns `None` when nothing needs to move: layout not ready, fewer than
    /// two items, or already resting on the target.
    pub fn go_to(
        &mut self,
        target_index: i64,
        incoming_velocity: f64,
        is_multi_skip: bool,
    ) -> Option<TransitionStart> {
        if !self.is_interactive() {
            debug!(
                ready = self.geometry.is_ready(),
                total_items = self.geometry.total_items,
                "Navigation ignored, carousel not interactive"
            );
            return None;
        }

        let index = self.geometry.clamp_index(target_index);
        self.cancel_active();
        self.drag_anchor = None;

        let target_position = self.geometry.position_for(index);
        self.current_index = index;

        if (self.position - target_position).abs() < POSITION_EPSILON {
            self.position = target_position;
            return None;
        }

        let profile = if !is_multi_skip {
            TransitionProfile::Snap
        } else if self.config.multi_column_single_phase && self.geometry.inputs.columns > 1 {
            TransitionProfile::ColumnGlide
        } else {
            TransitionProfile::Glide
        };

        let (phase, spec) = match profile {
            TransitionProfile::Snap => (Phase::Single, snap_spec(&self.config, incoming_velocity)),
            TransitionProfile::Glide => {
                (Phase::Momentum, glide_spec(&self.config, incoming_velocity))
            }
            TransitionProfile::ColumnGlide => (
                Phase::Single,
                column_glide_spec(&self.config, incoming_velocity),
            ),
        };

        let id = TransitionId(self.next_id);
        self.next_id += 1;

        let motion = self.integrator.animate(self.position, target_position, &spec);
        let start = TransitionStart {
            id,
            index,
            start_position: self.position,
            target_position,
            profile,
        };
        debug!(
            id = id.get(),
            index,
            from = self.position,
            to = target_position,
            velocity = incoming_velocity,
            ?profile,
            "Transition started"
        );

        self.transition = Some(Transition {
            id,
            index,
            target_position,
            phase,
            motion,
        });
        Some(start)
    }

    /// Move one item forwards or backwards with the injected step velocity
    pub fn step(&mut self, direction: Direction) -> Option<TransitionStart> {
        let sign = direction.sign();
        self.go_to(
            self.current_index as i64 + sign,
            sign as f64 * self.config.step_velocity,
            true,
        )
    }

    /// Advance the active transition by one frame
    pub fn tick(&mut self, dt: Duration) -> Option<NavigationEvent> {
        let transition = self.transition.as_mut()?;
        let frame = transition.motion.advance(dt.as_secs_f64());
        self.position = frame.position;
        trace!(
            id = transition.id.get(),
            position = frame.position,
            velocity = frame.velocity,
            "Frame"
        );

        if !frame.settled {
            return None;
        }

        match transition.phase {
            Phase::Momentum => {
                // Phase B: stiff, zero-velocity spring onto the same target
                let spec = settle_spec(&self.config);
                transition.motion =
                    self.integrator
                        .animate(self.position, transition.target_position, &spec);
                transition.phase = Phase::Settle;
                debug!(id = transition.id.get(), position = self.position, "Glide settling");
                Some(NavigationEvent::PhaseChanged {
                    id: transition.id,
                    position: self.position,
                })
            }
            Phase::Single | Phase::Settle => {
                let id = transition.id;
                let index = transition.index;
                self.position = transition.target_position;
                self.transition = None;
                debug!(id = id.get(), index, "Transition settled");
                Some(NavigationEvent::Settled { id, index })
            }
        }
    }

    /// Drop the active transition, keeping its live position
    fn cancel_active(&mut self) {
        if let Some(transition) = self.transition.take() {
            self.position = transition.motion.position();
            debug!(
                id = transition.id.get(),
                position = self.position,
                "Transition cancelled"
            );
        }
    }
}

fn tween_params(config: &MotionConfig) -> Option<TweenParams> {
    (config.tween_duration_ms > 0).then(|| TweenParams {
        duration: Duration::from_millis(config.tween_duration_ms),
        easing: config.easing,
    })
}

fn snap_spec(config: &MotionConfig, velocity: f64) -> MotionSpec {
    match tween_params(config) {
        Some(params) => MotionSpec::Tween(params),
        None => MotionSpec::Spring(SpringParams {
            stiffness: config.snap_stiffness,
            damping: config.snap_damping,
            velocity,
        }),
    }
}

fn glide_spec(config: &MotionConfig, velocity: f64) -> MotionSpec {
    match tween_params(config) {
        Some(params) => MotionSpec::Tween(params),
        None => MotionSpec::Spring(SpringParams {
            stiffness: config.glide_stiffness,
            damping: config.glide_damping,
            velocity,
        }),
    }
}

fn settle_spec(config: &MotionConfig) -> MotionSpec {
    MotionSpec::Spring(SpringParams {
        stiffness: config.settle_stiffness,
        damping: config.settle_damping,
        velocity: 0.0,
    })
}

fn column_glide_spec(config: &MotionConfig, velocity: f64) -> MotionSpec {
    MotionSpec::Spring(SpringParams {
        stiffness: (config.glide_stiffness * 1.25).clamp(120.0, 200.0),
        damping: (config.glide_damping * 1.8).clamp(40.0, 80.0),
        velocity,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::LayoutInputs;
    use crate::motion::{MotionFrame, PhysicsMotion};
    use std::cell::RefCell;
    use std::rc::Rc;

    const FRAME: Duration = Duration::from_micros(16_667);

    fn geometry(container_width: f64, columns: usize, total_items: usize) -> CarouselGeometry {
        CarouselGeometry::compute(
            LayoutInputs {
                container_width,
                columns,
                gap: 8.0,
                horizontal_padding: 16.0,
                peek_amount: 16.0,
            },
            total_items,
        )
    }

    // 342px items, 350px stride, indices 0..=4
    fn controller() -> NavigationController {
        NavigationController::new(&CarouselConfig::default(), geometry(390.0, 1, 5))
    }

    fn run_until_idle<I: Integrator>(ctrl: &mut NavigationController<I>) -> Vec<NavigationEvent> {
        let mut events = Vec::new();
        for _ in 0..1200 {
            if let Some(event) = ctrl.tick(FRAME) {
                events.push(event);
            }
            if !ctrl.is_transitioning() {
                return events;
            }
        }
        panic!("transition never settled");
    }

    #[test]
    fn test_not_ready_is_noop() {
        let mut ctrl =
            NavigationController::new(&CarouselConfig::default(), geometry(0.0, 1, 5));
        assert!(ctrl.go_to(2, 0.0, false).is_none());
        assert!(ctrl.step(Direction::Forward).is_none());
        assert_eq!(ctrl.current_index(), 0);
        assert!(!ctrl.is_transitioning());
    }

    #[test]
    fn test_degenerate_content_is_noop() {
        for items in [0, 1] {
            let mut ctrl =
                NavigationController::new(&CarouselConfig::default(), geometry(390.0, 1, items));
            assert!(!ctrl.is_interactive());
            assert!(ctrl.go_to(1, 0.0, false).is_none());
            assert_eq!(ctrl.current_index(), 0);
        }
    }

    #[test]
    fn test_go_to_clamps_index() {
        let mut ctrl = controller();
        let start = ctrl.go_to(99, 0.0, false).unwrap();
        assert_eq!(start.index, 4);
        assert_eq!(ctrl.current_index(), 4);
        assert!((start.target_position - -1400.0).abs() < 1e-9);

        let start = ctrl.go_to(-7, 0.0, false).unwrap();
        assert_eq!(start.index, 0);
        assert_eq!(ctrl.current_index(), 0);
    }

    #[test]
    fn test_go_to_current_at_rest_is_idempotent() {
        let mut ctrl = controller();
        ctrl.go_to(2, 0.0, false);
        run_until_idle(&mut ctrl);
        let before = ctrl.state();

        assert!(ctrl.go_to(2, 0.0, false).is_none());
        assert_eq!(ctrl.state(), before);
        assert_eq!(ctrl.target_position(), before.position);
    }

    #[test]
    fn test_snap_runs_to_target() {
        let mut ctrl = controller();
        let start = ctrl.go_to(1, 0.0, false).unwrap();
        assert_eq!(start.profile, TransitionProfile::Snap);
        assert_eq!(start.start_position, 0.0);
        assert!(ctrl.is_transitioning());
        assert_eq!(ctrl.state().active_transition, Some(start.id));

        let events = run_until_idle(&mut ctrl);
        assert_eq!(
            events,
            vec![NavigationEvent::Settled {
                id: start.id,
                index: 1
            }]
        );
        assert!((ctrl.position() - -350.0).abs() < 1e-9);
        assert!(!ctrl.state().is_transitioning);
    }

    #[test]
    fn test_glide_runs_two_phases() {
        let mut ctrl = controller();
        let start = ctrl.go_to(3, -900.0, true).unwrap();
        assert_eq!(start.profile, TransitionProfile::Glide);

        let events = run_until_idle(&mut ctrl);
        assert_eq!(events.len(), 2);
        assert!(matches!(
            events[0],
            NavigationEvent::PhaseChanged { id, .. } if id == start.id
        ));
        assert_eq!(
            events[1],
            NavigationEvent::Settled {
                id: start.id,
                index: 3
            }
        );
        assert!((ctrl.position() - -1050.0).abs() < 1e-9);
    }

    #[test]
    fn test_interruption_starts_from_live_position() {
        let mut ctrl = controller();
        let first = ctrl.go_to(4, -1200.0, true).unwrap();
        for _ in 0..10 {
            ctrl.tick(FRAME);
        }
        let live = ctrl.position();
        assert!(live < 0.0 && live > first.target_position);

        let second = ctrl.go_to(1, 0.0, false).unwrap();
        assert_eq!(second.start_position, live);
        assert_ne!(second.start_position, first.target_position);
        assert_ne!(second.id, first.id);
        assert_eq!(ctrl.current_index(), 1);

        let events = run_until_idle(&mut ctrl);
        assert!(events.iter().all(|event| match event {
            NavigationEvent::PhaseChanged { id, .. } | NavigationEvent::Settled { id, .. } => {
                *id == second.id
            }
        }));
        assert!((ctrl.position() - -350.0).abs() < 1e-9);
    }

    #[test]
    fn test_heavily_damped_snap_converges() {
        let mut config = CarouselConfig::default();
        config.motion.snap_damping = 1000.0;
        assert!(config.validate().is_ok());

        let mut ctrl = NavigationController::new(&config, geometry(390.0, 1, 5));
        let start = ctrl.go_to(3, 0.0, false).unwrap();
        assert_eq!(start.profile, TransitionProfile::Snap);

        let mut settled = false;
        for _ in 0..6000 {
            ctrl.tick(FRAME);
            assert!(ctrl.position().is_finite());
            if !ctrl.is_transitioning() {
                settled = true;
                break;
            }
        }
        assert!(settled);
        assert!((ctrl.position() - -1050.0).abs() < 1e-9);
    }

    #[test]
    fn test_step_at_bounds_does_not_move() {
        let mut ctrl = NavigationController::new(&CarouselConfig::default(), geometry(390.0, 1, 4));
        ctrl.go_to(3, 0.0, false);
        run_until_idle(&mut ctrl);
        assert_eq!(ctrl.geometry().max_index, 3);

        assert!(ctrl.step(Direction::Forward).is_none());
        assert_eq!(ctrl.current_index(), 3);
        assert!(!ctrl.is_transitioning());

        let mut ctrl = controller();
        assert!(ctrl.step(Direction::Backward).is_none());
        assert_eq!(ctrl.current_index(), 0);
    }

    #[test]
    fn test_step_injects_artificial_velocity() {
        let recorder = Recorder::default();
        let mut ctrl = NavigationController::with_integrator(
            MotionConfig::default(),
            EdgeResistance::None,
            geometry(390.0, 1, 5),
            recorder.clone(),
        );
        let start = ctrl.step(Direction::Forward).unwrap();
        assert_eq!(start.index, 1);
        assert_eq!(start.profile, TransitionProfile::Glide);

        let calls = recorder.calls.borrow();
        assert_eq!(calls.len(), 1);
        match calls[0].2 {
            MotionSpec::Spring(params) => {
                assert_eq!(params.velocity, 200.0);
                assert_eq!(params.stiffness, 120.0);
                assert_eq!(params.damping, 25.0);
            }
            other => panic!("unexpected spec {:?}", other),
        }
    }

    #[test]
    fn test_settle_phase_uses_stiff_zero_velocity_spring() {
        let recorder = Recorder::default();
        let mut ctrl = NavigationController::with_integrator(
            MotionConfig::default(),
            EdgeResistance::None,
            geometry(390.0, 1, 5),
            recorder.clone(),
        );
        ctrl.go_to(3, -800.0, true);
        run_until_idle(&mut ctrl);

        let calls = recorder.calls.borrow();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[1].1, -1050.0);
        assert_eq!(
            calls[1].2,
            MotionSpec::Spring(SpringParams {
                stiffness: 1000.0,
                damping: 80.0,
                velocity: 0.0,
            })
        );
    }

    #[test]
    fn test_interrupted_motion_reported_start_matches_cancel_position() {
        let recorder = Recorder::default();
        let mut ctrl = NavigationController::with_integrator(
            MotionConfig::default(),
            EdgeResistance::None,
            geometry(390.0, 1, 5),
            recorder.clone(),
        );
        ctrl.go_to(4, 0.0, false);
        for _ in 0..5 {
            ctrl.tick(FRAME);
        }
        let live = ctrl.position();
        ctrl.go_to(2, 0.0, false);

        let calls = recorder.calls.borrow();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[1].0, live);
    }

    #[test]
    fn test_column_glide_single_phase() {
        let mut config = CarouselConfig::default();
        config.motion.multi_column_single_phase = true;
        let mut ctrl = NavigationController::new(&config, geometry(800.0, 3, 12));

        let start = ctrl.go_to(5, -600.0, true).unwrap();
        assert_eq!(start.profile, TransitionProfile::ColumnGlide);
        let events = run_until_idle(&mut ctrl);
        assert_eq!(events.len(), 1);
        assert_eq!(ctrl.current_index(), 5);

        assert_eq!(
            column_glide_spec(&config.motion, -600.0),
            MotionSpec::Spring(SpringParams {
                stiffness: 150.0,
                damping: 45.0,
                velocity: -600.0,
            })
        );
    }

    #[test]
    fn test_tween_mode() {
        let mut config = CarouselConfig::default();
        config.motion.tween_duration_ms = 200;
        let mut ctrl = NavigationController::new(&config, geometry(390.0, 1, 5));

        ctrl.go_to(2, 0.0, false);
        let mut frames = 0;
        while ctrl.is_transitioning() {
            ctrl.tick(Duration::from_millis(20));
            frames += 1;
        }
        assert_eq!(frames, 10);
        assert!((ctrl.position() - -700.0).abs() < 1e-9);
    }

    #[test]
    fn test_grab_cancels_and_drag_follows_pointer() {
        let mut ctrl = controller();
        let start = ctrl.go_to(2, 0.0, false).unwrap();
        for _ in 0..4 {
            ctrl.tick(FRAME);
        }
        let live = ctrl.position();

        assert_eq!(ctrl.grab(), live);
        assert!(!ctrl.is_transitioning());
        assert!(ctrl.is_dragging());
        // Cancelled transition never settles
        assert!(ctrl.tick(FRAME).is_none());
        assert_ne!(ctrl.state().active_transition, Some(start.id));

        assert_eq!(ctrl.drag_to(-30.0), live - 30.0);
        // Hard stop past the first item
        assert_eq!(ctrl.drag_to(10_000.0), 0.0);
        assert_eq!(ctrl.drag_to(-10_000.0), -1400.0);

        ctrl.go_to(2, 0.0, false);
        assert!(!ctrl.is_dragging());
    }

    #[test]
    fn test_drag_with_edge_resistance() {
        let mut config = CarouselConfig::default();
        config.layout.edge_resistance = EdgeResistance::Loose;
        let mut ctrl = NavigationController::new(&config, geometry(390.0, 1, 5));
        ctrl.grab();
        // 100px past the start at 0.35 resistance
        assert!((ctrl.drag_to(100.0) - 35.0).abs() < 1e-9);
        // Capped at 120px
        assert!((ctrl.drag_to(1000.0) - 120.0).abs() < 1e-9);
    }

    #[test]
    fn test_drag_to_without_grab_is_ignored() {
        let mut ctrl = controller();
        assert_eq!(ctrl.drag_to(-50.0), 0.0);

        ctrl.grab();
        ctrl.release();
        assert!(!ctrl.is_dragging());
        assert_eq!(ctrl.drag_to(-50.0), 0.0);
    }

    #[test]
    fn test_set_geometry_clamps_index() {
        let mut ctrl = controller();
        ctrl.go_to(4, 0.0, false);
        ctrl.tick(FRAME);

        ctrl.set_geometry(geometry(390.0, 1, 3));
        assert!(!ctrl.is_transitioning());
        assert_eq!(ctrl.current_index(), 2);
        assert!((ctrl.position() - -700.0).abs() < 1e-9);

        ctrl.set_geometry(geometry(500.0, 1, 3));
        // (500 - 32 - 16) + 8
        assert!((ctrl.position() - -920.0).abs() < 1e-9);
    }

    #[test]
    fn test_index_always_within_bounds() {
        let mut ctrl = controller();
        for target in [-100, -1, 0, 3, 4, 5, 17, i64::MAX, i64::MIN] {
            ctrl.go_to(target, 0.0, target % 2 == 0);
            let index = ctrl.current_index();
            assert!(index <= ctrl.geometry().max_index, "target {}", target);
            ctrl.tick(FRAME);
        }
    }

    /// Wraps the built-in integrator and records every invocation
    #[derive(Clone, Default)]
    struct Recorder {
        inner: PhysicsIntegrator,
        calls: Rc<RefCell<Vec<(f64, f64, MotionSpec)>>>,
    }

    impl Integrator for Recorder {
        type Motion = PhysicsMotion;

        fn animate(&self, from: f64, to: f64, spec: &MotionSpec) -> PhysicsMotion {
            self.calls.borrow_mut().push((from, to, *spec));
            self.inner.animate(from, to, spec)
        }
    }

    #[test]
    fn test_motion_frame_snapshot() {
        let integrator = PhysicsIntegrator::default();
        let mut motion = integrator.animate(0.0, 0.0, &settle_spec(&MotionConfig::default()));
        assert_eq!(
            motion.advance(0.0),
            MotionFrame {
                position: 0.0,
                velocity: 0.0,
                settled: true
            }
        );
    }
}
