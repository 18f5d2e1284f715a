// Keyboard state tracking for the local player

use super::action::{default_bindings, Action};
use super::snapshot::InputSnapshot;
use std::collections::{HashMap, HashSet};
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Tracks which bound keys are held and turns them into snapshots
#[derive(Debug)]
pub struct KeyboardState {
    /// Mapping from keys to actions
    bindings: HashMap<KeyCode, Action>,

    /// Bound keys currently held down
    held_keys: HashSet<KeyCode>,

    /// Set once a quit key is pressed
    quit_requested: bool,
}

impl Default for KeyboardState {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyboardState {
    /// Create keyboard state with the default bindings
    pub fn new() -> Self {
        Self::from_bindings(default_bindings())
    }

    /// Create keyboard state from a list of bindings
    pub fn from_bindings(bindings: Vec<(KeyCode, Action)>) -> Self {
        Self {
            bindings: bindings.into_iter().collect(),
            held_keys: HashSet::new(),
            quit_requested: false,
        }
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        // Only process physical key presses
        if let PhysicalKey::Code(key_code) = event.physical_key {
            let pressed = event.state == ElementState::Pressed;
            self.handle_key(key_code, pressed, event.repeat);
        }
    }

    /// Record a key press or release
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool, repeat: bool) {
        let Some(&action) = self.bindings.get(&key) else {
            return;
        };

        if pressed {
            if repeat {
                return;
            }
            self.held_keys.insert(key);
            if action == Action::Quit {
                self.quit_requested = true;
            }
        } else {
            self.held_keys.remove(&key);
        }
    }

    /// Check if any key bound to an action is held
    pub fn is_pressed(&self, action: Action) -> bool {
        self.held_keys
            .iter()
            .any(|key| self.bindings.get(key) == Some(&action))
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Sample the current held state for the next tick
    pub fn snapshot(&self) -> InputSnapshot {
        InputSnapshot {
            left: self.is_pressed(Action::MoveLeft),
            right: self.is_pressed(Action::MoveRight),
            jump: self.is_pressed(Action::Jump),
        }
    }

    /// Release everything, e.g. when the window loses focus
    pub fn reset(&mut self) {
        self.held_keys.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_snapshot_is_neutral() {
        let keyboard = KeyboardState::new();
        assert_eq!(keyboard.snapshot(), InputSnapshot::default());
        assert!(!keyboard.quit_requested());
    }

    #[test]
    fn test_press_and_release() {
        let mut keyboard = KeyboardState::new();
        keyboard.handle_key(KeyCode::ArrowRight, true, false);
        assert!(keyboard.snapshot().right);

        keyboard.handle_key(KeyCode::ArrowRight, false, false);
        assert!(!keyboard.snapshot().right);
    }

    #[test]
    fn test_two_keys_for_one_action() {
        let mut keyboard = KeyboardState::new();
        keyboard.handle_key(KeyCode::ArrowLeft, true, false);
        keyboard.handle_key(KeyCode::KeyA, true, false);
        keyboard.handle_key(KeyCode::KeyA, false, false);

        // Arrow key is still down
        assert!(keyboard.snapshot().left);
    }

    #[test]
    fn test_unbound_keys_ignored() {
        let mut keyboard = KeyboardState::new();
        keyboard.handle_key(KeyCode::KeyZ, true, false);
        assert_eq!(keyboard.snapshot(), InputSnapshot::default());
    }

    #[test]
    fn test_repeat_does_not_press() {
        let mut keyboard = KeyboardState::new();
        keyboard.handle_key(KeyCode::Space, true, true);
        assert!(!keyboard.snapshot().jump);
    }

    #[test]
    fn test_quit_requested() {
        let mut keyboard = KeyboardState::new();
        keyboard.handle_key(KeyCode::Escape, true, false);
        assert!(keyboard.quit_requested());
    }

    #[test]
    fn test_reset() {
        let mut keyboard = KeyboardState::new();
        keyboard.handle_key(KeyCode::Space, true, false);
        keyboard.handle_key(KeyCode::KeyD, true, false);
        keyboard.reset();
        assert_eq!(keyboard.snapshot(), InputSnapshot::default());
    }

    #[test]
    fn test_custom_bindings() {
        let mut keyboard = KeyboardState::from_bindings(vec![(KeyCode::KeyJ, Action::Jump)]);
        keyboard.handle_key(KeyCode::Space, true, false);
        assert!(!keyboard.snapshot().jump);
        keyboard.handle_key(KeyCode::KeyJ, true, false);
        assert!(keyboard.snapshot().jump);
    }
}
