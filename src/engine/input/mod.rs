// Input handling system
//
// - `action`: game actions and default key bindings
// - `config`: key -> action mapping
// - `player`: held / just-pressed state
// - `manager`: winit event processing
//
// The game core never sees key codes; it receives one `InputSnapshot` per
// frame.

pub mod action;
pub mod config;
pub mod manager;
pub mod player;

pub use action::Action;
pub use manager::InputManager;

/// Raw held-key state for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub jump: bool,
}

impl InputSnapshot {
    /// Horizontal direction when exactly one of left/right is held
    pub fn horizontal(&self) -> Option<f32> {
        match (self.left, self.right) {
            (true, false) => Some(-1.0),
            (false, true) => Some(1.0),
            _ => None,
        }
    }

    /// Vertical direction (y grows downward) when exactly one of up/down is held
    pub fn vertical(&self) -> Option<f32> {
        match (self.up, self.down) {
            (true, false) => Some(-1.0),
            (false, true) => Some(1.0),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizontal_requires_exactly_one_direction() {
        let mut input = InputSnapshot::default();
        assert_eq!(input.horizontal(), None);

        input.left = true;
        assert_eq!(input.horizontal(), Some(-1.0));

        input.right = true;
        assert_eq!(input.horizontal(), None);

        input.left = false;
        assert_eq!(input.horizontal(), Some(1.0));
    }

    #[test]
    fn test_vertical_is_screen_oriented() {
        let up = InputSnapshot {
            up: true,
            ..Default::default()
        };
        let down = InputSnapshot {
            down: true,
            ..Default::default()
        };
        assert_eq!(up.vertical(), Some(-1.0));
        assert_eq!(down.vertical(), Some(1.0));
    }
}
