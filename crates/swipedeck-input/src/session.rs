use std::time::Duration;

use crossterm::event::KeyEvent;
use swipedeck_core::{
    CarouselConfig, CarouselGeometry, LayoutInputs, NavigationController, NavigationEvent,
    TransitionStart,
};
use tracing::debug;

use crate::input::{Action, KeyboardAdapter};
use crate::keymap::Keymap;
use crate::pointer::{DragAdapter, DragOutcome, SampleResponse};

/// One carousel instance with its adapters
///
/// Owns the controller and every per-carousel buffer; hosts route pointer,
/// keyboard and frame events through it.
#[derive(Debug)]
pub struct CarouselSession {
    config: CarouselConfig,
    total_items: usize,
    controller: NavigationController,
    drag: DragAdapter,
    keyboard: KeyboardAdapter,
}

impl CarouselSession {
    pub fn new(config: CarouselConfig, container_width: f64, total_items: usize) -> Self {
        let geometry = CarouselGeometry::compute(
            LayoutInputs::from_config(&config.layout, container_width),
            total_items,
        );
        Self {
            controller: NavigationController::new(&config, geometry),
            drag: DragAdapter::new(&config),
            keyboard: KeyboardAdapter::new(Keymap::from_config(&config.keymap)),
            total_items,
            config,
        }
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn controller(&self) -> &NavigationController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut NavigationController {
        &mut self.controller
    }

    pub fn geometry(&self) -> &CarouselGeometry {
        self.controller.geometry()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Recompute the geometry for a new container width
    pub fn resize(&mut self, container_width: f64) {
        let geometry = CarouselGeometry::compute(
            LayoutInputs::from_config(&self.config.layout, container_width),
            self.total_items,
        );
        debug!(container_width, "Container resized");
        self.controller.set_geometry(geometry);
    }

    pub fn drag_start(&mut self) {
        self.drag.on_drag_start(&mut self.controller);
    }

    pub fn drag_sample(&mut self, offset_x: f64, offset_y: f64, velocity_x: f64) -> SampleResponse {
        self.drag
            .on_drag_sample(&mut self.controller, offset_x, offset_y, velocity_x)
    }

    pub fn drag_end(&mut self, offset_x: f64, velocity_x: f64) -> DragOutcome {
        self.drag.on_drag_end(&mut self.controller, offset_x, velocity_x)
    }

    /// Resolve and apply a key press, returning the action taken
    pub fn key(&mut self, key: KeyEvent) -> (Action, Option<TransitionStart>) {
        let action = self.keyboard.handle_key(key, &self.controller);
        let start = self.keyboard.apply(action, &mut self.controller);
        (action, start)
    }

    pub fn go_to(&mut self, index: usize) -> Option<TransitionStart> {
        self.keyboard.apply(Action::GoTo(index), &mut self.controller)
    }

    pub fn tick(&mut self, dt: Duration) -> Option<NavigationEvent> {
        self.controller.tick(dt)
    }
}
