// Game action definitions and default key bindings

use winit::keyboard::KeyCode;

/// Represents all possible in-game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Movement
    MoveLeft,
    MoveRight,
    Up,
    Down,
    Jump,

    // Meta actions
    DebugDump,
    Quit,
}

/// Represents an input source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSource {
    Keyboard(KeyCode),
}

impl InputSource {
    /// Create a keyboard input source
    pub fn key(code: KeyCode) -> Self {
        Self::Keyboard(code)
    }
}

/// Default keyboard bindings: arrows to move and climb, space to jump
pub fn default_bindings() -> Vec<(InputSource, Action)> {
    vec![
        (InputSource::key(KeyCode::ArrowLeft), Action::MoveLeft),
        (InputSource::key(KeyCode::ArrowRight), Action::MoveRight),
        (InputSource::key(KeyCode::ArrowUp), Action::Up),
        (InputSource::key(KeyCode::ArrowDown), Action::Down),
        (InputSource::key(KeyCode::Space), Action::Jump),
        (InputSource::key(KeyCode::KeyL), Action::DebugDump),
        (InputSource::key(KeyCode::Escape), Action::Quit),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_source_keyboard_creation() {
        let source = InputSource::key(KeyCode::Space);
        assert_eq!(source, InputSource::Keyboard(KeyCode::Space));
    }

    #[test]
    fn test_default_bindings_cover_movement() {
        let bindings = default_bindings();
        for action in [
            Action::MoveLeft,
            Action::MoveRight,
            Action::Up,
            Action::Down,
            Action::Jump,
            Action::Quit,
        ] {
            assert!(
                bindings.iter().any(|(_, bound)| *bound == action),
                "{action:?} has no default binding"
            );
        }
    }

    #[test]
    fn test_no_duplicate_default_sources() {
        let bindings = default_bindings();
        let mut seen_sources = std::collections::HashSet::new();
        for (source, _) in bindings {
            assert!(
                seen_sources.insert(source),
                "Duplicate input source found in default bindings"
            );
        }
    }
}
