// Game action definitions and mappings

use winit::keyboard::KeyCode;

/// Represents all possible in-game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Movement
    MoveLeft,
    MoveRight,
    Jump,

    // Meta actions
    Quit,
}

/// Default keyboard bindings: arrows or A/D to move, Space/W/Up to jump
pub fn default_bindings() -> Vec<(KeyCode, Action)> {
    vec![
        (KeyCode::ArrowLeft, Action::MoveLeft),
        (KeyCode::ArrowRight, Action::MoveRight),
        (KeyCode::KeyA, Action::MoveLeft),
        (KeyCode::KeyD, Action::MoveRight),
        (KeyCode::Space, Action::Jump),
        (KeyCode::ArrowUp, Action::Jump),
        (KeyCode::KeyW, Action::Jump),
        (KeyCode::Escape, Action::Quit),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_equality() {
        assert_eq!(Action::Jump, Action::Jump);
        assert_ne!(Action::Jump, Action::MoveLeft);
    }

    #[test]
    fn test_default_bindings_cover_movement() {
        let bindings = default_bindings();
        for action in [Action::MoveLeft, Action::MoveRight, Action::Jump, Action::Quit] {
            assert!(
                bindings.iter().any(|(_, a)| *a == action),
                "Missing binding for {:?}",
                action
            );
        }
    }

    #[test]
    fn test_no_duplicate_keys() {
        let bindings = default_bindings();
        let mut seen = std::collections::HashSet::new();
        for (key, _) in bindings {
            assert!(seen.insert(key), "Duplicate key found in bindings");
        }
    }
}
