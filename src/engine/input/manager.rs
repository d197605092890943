// Input manager - turns winit keyboard events into game actions

use super::action::{Action, InputSource};
use super::config::InputConfig;
use super::player::PlayerInput;
use super::InputSnapshot;
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Coordinates key bindings and held-key state
#[derive(Debug)]
pub struct InputManager {
    config: InputConfig,
    player: PlayerInput,
}

impl InputManager {
    pub fn new(config: InputConfig) -> Self {
        Self {
            config,
            player: PlayerInput::new(),
        }
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        if let PhysicalKey::Code(key_code) = event.physical_key {
            let pressed = event.state == ElementState::Pressed;
            self.handle_key(key_code, pressed, event.repeat);
        }
    }

    /// Apply a single key transition
    pub fn handle_key(&mut self, key_code: KeyCode, pressed: bool, repeat: bool) {
        let Some(action) = self.config.get_action(InputSource::key(key_code)) else {
            return;
        };

        if pressed {
            // Key repeats carry no new information for held-state polling
            if !repeat {
                self.player.press(action);
            }
        } else {
            self.player.release(action);
        }
    }

    /// Clear per-frame edges; call once per frame after the game consumed them
    pub fn update(&mut self) {
        self.player.update();
    }

    /// Snapshot of the held movement keys for this frame
    pub fn snapshot(&self) -> InputSnapshot {
        self.player.snapshot()
    }

    pub fn just_pressed(&self, action: Action) -> bool {
        self.player.just_pressed(action)
    }

    pub fn is_pressed(&self, action: Action) -> bool {
        self.player.is_pressed(action)
    }

    /// Drop all held keys
    pub fn reset(&mut self) {
        self.player.reset();
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new(InputConfig::with_defaults())
    }
}
