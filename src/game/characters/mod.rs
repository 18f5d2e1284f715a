// Character system
//
// This module contains everything related to the playable character:
// - Character kinematics and the per-tick controller
// - Movement tuning and presets
// - Motion states and facing
// - Frame sequencers for sprite animation

pub mod animation;
pub mod character;
pub mod state;
pub mod stats;

// Re-export commonly used types
pub use animation::{AnimationBank, ClipGeometry, FrameSequencer, LoopRange, SourceRect};
pub use character::{Character, SpringReport};
pub use state::{Facing, MotionState};
pub use stats::CharacterStats;
