//! Pointer drag adapter
//!
//! Owns the per-drag sample history and direction lock, follows the pointer
//! with the track while the drag is horizontal, and turns the release into a
//! classified navigation.

use swipedeck_core::{
    classify, CarouselConfig, ClassifyContext, DirectionLock, DragTracker, GestureConfig,
    GestureVerdict, Integrator, LockState, NavigationController, TransitionStart,
};
use tracing::debug;

/// What the host should do with the native scroll for one sample
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SampleResponse {
    pub lock: LockState,
    /// True once the drag is committed to the carousel
    pub suppress_native_scroll: bool,
}

/// Result of releasing a drag
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragOutcome {
    /// Classification applied to the release, absent for vertical drags
    pub verdict: Option<GestureVerdict>,
    pub transition: Option<TransitionStart>,
}

#[derive(Debug, Default)]
pub struct DragAdapter {
    tracker: DragTracker,
    lock: DirectionLock,
    gesture: GestureConfig,
}

impl DragAdapter {
    pub fn new(config: &CarouselConfig) -> Self {
        Self {
            tracker: DragTracker::new(),
            lock: DirectionLock::new(config.lock.clone()),
            gesture: config.gesture.clone(),
        }
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.tracker.is_active()
    }

    #[inline]
    pub fn lock_state(&self) -> LockState {
        self.lock.state()
    }

    /// Pointer down: interrupt any transition and start a fresh sample history
    pub fn on_drag_start<I: Integrator>(&mut self, controller: &mut NavigationController<I>) {
        self.tracker.start();
        self.lock.reset();
        let anchor = controller.grab();
        debug!(anchor, "Drag started");
    }

    /// Pointer move with offsets cumulative since drag start
    pub fn on_drag_sample<I: Integrator>(
        &mut self,
        controller: &mut NavigationController<I>,
        offset_x: f64,
        offset_y: f64,
        velocity_x: f64,
    ) -> SampleResponse {
        if !self.tracker.is_active() {
            return SampleResponse::default();
        }

        let lock = self.lock.observe(offset_x, offset_y);
        self.tracker.record(offset_x, offset_y, velocity_x);
        if lock == LockState::Horizontal {
            controller.drag_to(offset_x);
        }

        SampleResponse {
            lock,
            suppress_native_scroll: self.lock.suppresses_native_scroll(),
        }
    }

    /// Pointer up: classify the drag and hand the verdict to the controller
    ///
    /// Vertical drags resolve to a snap back onto the current index without
    /// classification.
    pub fn on_drag_end<I: Integrator>(
        &mut self,
        controller: &mut NavigationController<I>,
        offset_x: f64,
        velocity_x: f64,
    ) -> DragOutcome {
        if !self.tracker.is_active() {
            return DragOutcome::default();
        }

        let summary = self.tracker.finish(offset_x, velocity_x);
        let lock = self.lock.state();
        self.lock.reset();

        if !controller.is_interactive() {
            controller.release();
            return DragOutcome::default();
        }

        let current_index = controller.current_index();
        if lock == LockState::Vertical {
            debug!("Vertical drag released, restoring current item");
            return DragOutcome {
                verdict: None,
                transition: controller.go_to(current_index as i64, 0.0, false),
            };
        }

        if lock == LockState::Horizontal {
            controller.drag_to(offset_x);
        }
        let context = ClassifyContext {
            geometry: controller.geometry(),
            current_index,
            current_position: controller.position(),
        };
        let verdict = classify(&summary, &context, &self.gesture);
        let transition = controller.go_to(
            verdict.target_index(current_index),
            verdict.carried_velocity,
            verdict.is_multi_skip,
        );
        DragOutcome {
            verdict: Some(verdict),
            transition,
        }
    }
}
