// Input handling
//
// The simulation consumes an `InputSnapshot` per tick. This module is the glue
// that builds one from winit keyboard events.
//
// ## Architecture
//
// - `action`: Defines game actions and default key bindings
// - `keyboard`: Held-key tracking from winit events
// - `snapshot`: The per-tick input record the simulation reads
//
// ## Usage Example
//
// ```rust
// use springboard::engine::input::KeyboardState;
//
// let mut keyboard = KeyboardState::new();
//
// // In your event loop, process keyboard events
// keyboard.process_keyboard_event(&key_event);
//
// // Before each simulation tick, sample the held state
// let input = keyboard.snapshot();
// stage.step(dt, &input);
// ```

pub mod action;
pub mod keyboard;
pub mod snapshot;

// Re-export commonly used types
pub use action::Action;
pub use keyboard::KeyboardState;
pub use snapshot::InputSnapshot;
