// Pressed-key state tracking

use super::action::Action;
use super::InputSnapshot;
use std::collections::HashSet;

/// Tracks which actions are held, and which changed this frame
#[derive(Debug, Default)]
pub struct PlayerInput {
    /// Actions that are currently pressed
    pressed: HashSet<Action>,

    /// Actions that were pressed this frame (press events)
    just_pressed: HashSet<Action>,
}

impl PlayerInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if an action is currently pressed
    pub fn is_pressed(&self, action: Action) -> bool {
        self.pressed.contains(&action)
    }

    /// Check if an action was pressed this frame
    pub fn just_pressed(&self, action: Action) -> bool {
        self.just_pressed.contains(&action)
    }

    /// Register an action press
    pub(crate) fn press(&mut self, action: Action) {
        if self.pressed.insert(action) {
            self.just_pressed.insert(action);
        }
    }

    /// Register an action release
    pub(crate) fn release(&mut self, action: Action) {
        self.pressed.remove(&action);
    }

    /// Clear per-frame edges; call once per frame after the game consumed them
    pub(crate) fn update(&mut self) {
        self.just_pressed.clear();
    }

    /// Reset all input state (used when the window loses focus)
    pub fn reset(&mut self) {
        self.pressed.clear();
        self.just_pressed.clear();
    }

    /// Raw held-key state consumed by the game core
    pub fn snapshot(&self) -> InputSnapshot {
        InputSnapshot {
            left: self.is_pressed(Action::MoveLeft),
            right: self.is_pressed(Action::MoveRight),
            up: self.is_pressed(Action::Up),
            down: self.is_pressed(Action::Down),
            jump: self.is_pressed(Action::Jump),
        }
    }
}
