use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use swipedeck_core::{Direction, Integrator, NavigationController, TransitionStart};
use tracing::debug;

use crate::keymap::{KeyBinding, Keymap};

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Previous,
    Next,
    First,
    Last,
    /// Jump to a specific item (pagination dot)
    GoTo(usize),
    None,
}

/// Keyboard and button adapter
///
/// Maps key presses to actions and applies them to a controller. Arrow and
/// dot activation mirror the on-screen prev/next buttons and pagination dots.
#[derive(Debug, Clone, Default)]
pub struct KeyboardAdapter {
    keymap: Keymap,
}

impl KeyboardAdapter {
    pub fn new(keymap: Keymap) -> Self {
        Self { keymap }
    }

    pub fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    /// Resolve a key press on the focused carousel
    ///
    /// Previous/Next resolve to `Action::None` when already at the matching
    /// end so the key can fall through to the host.
    pub fn handle_key<I: Integrator>(
        &self,
        key: KeyEvent,
        controller: &NavigationController<I>,
    ) -> Action {
        let action = self
            .keymap
            .get(&KeyBinding::from(key))
            .copied()
            .unwrap_or(Action::None);

        let current = controller.current_index();
        match action {
            Action::Previous if current == 0 => Action::None,
            Action::Next if current >= controller.geometry().max_index => Action::None,
            other => other,
        }
    }

    /// Activation of a prev/next arrow button
    pub fn handle_arrow_key(
        &self,
        key: KeyEvent,
        direction: Direction,
        disable_previous: bool,
        disable_next: bool,
    ) -> Action {
        if !is_activation(&key) {
            return Action::None;
        }
        match direction {
            Direction::Backward if !disable_previous => Action::Previous,
            Direction::Forward if !disable_next => Action::Next,
            _ => Action::None,
        }
    }

    /// Activation of the pagination dot for `index`
    pub fn handle_dot_key(&self, key: KeyEvent, index: usize) -> Action {
        if is_activation(&key) {
            Action::GoTo(index)
        } else {
            Action::None
        }
    }

    /// Apply a navigation action; `Quit` and `None` are left to the host
    pub fn apply<I: Integrator>(
        &self,
        action: Action,
        controller: &mut NavigationController<I>,
    ) -> Option<TransitionStart> {
        debug!(?action, index = controller.current_index(), "Keyboard action");
        match action {
            Action::Previous => controller.step(Direction::Backward),
            Action::Next => controller.step(Direction::Forward),
            Action::First => controller.go_to(0, 0.0, false),
            Action::Last => controller.go_to(controller.geometry().max_index as i64, 0.0, false),
            Action::GoTo(index) => controller.go_to(index as i64, 0.0, false),
            Action::Quit | Action::None => None,
        }
    }
}

/// Enter or Space without modifiers
fn is_activation(key: &KeyEvent) -> bool {
    matches!(
        (key.code, key.modifiers),
        (KeyCode::Enter, KeyModifiers::NONE) | (KeyCode::Char(' '), KeyModifiers::NONE)
    )
}
