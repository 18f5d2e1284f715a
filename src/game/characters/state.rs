// Character motion states

use crate::core::math::Direction;

/// The discrete motion state of a character. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MotionState {
    /// Standing still on ground
    #[default]
    Idle,
    /// Moving slowly on ground
    Walk,
    /// Moving at or above the run threshold on ground
    Run,
    /// Airborne after a regular jump or walking off a ledge
    Jump,
    /// Launched upward by a vertical spring
    SpringJump,
    /// Boosted sideways by a horizontal spring
    SpringDash,
}

impl MotionState {
    /// Every state, in animation bank order
    pub const ALL: [MotionState; 6] = [
        Self::Idle,
        Self::Walk,
        Self::Run,
        Self::Jump,
        Self::SpringJump,
        Self::SpringDash,
    ];

    /// Number of states (and of clips in an animation bank)
    pub const COUNT: usize = Self::ALL.len();

    /// Index into the animation bank
    pub fn index(self) -> usize {
        match self {
            Self::Idle => 0,
            Self::Walk => 1,
            Self::Run => 2,
            Self::Jump => 3,
            Self::SpringJump => 4,
            Self::SpringDash => 5,
        }
    }

    /// Check if this state was caused by a spring
    pub fn is_spring(self) -> bool {
        matches!(self, Self::SpringJump | Self::SpringDash)
    }

    /// Get the animation name for this state
    pub fn animation_name(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Walk => "walk",
            Self::Run => "run",
            Self::Jump => "jump",
            Self::SpringJump => "spring_jump",
            Self::SpringDash => "spring_dash",
        }
    }
}

/// Which way the sprite is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Facing {
    /// Sprite as authored (facing right)
    #[default]
    Normal,
    /// Flipped horizontally (facing left)
    Mirrored,
}

impl Facing {
    pub fn from_direction(direction: Direction) -> Self {
        match direction {
            Direction::Left => Self::Mirrored,
            Direction::Right => Self::Normal,
        }
    }

    pub fn is_mirrored(self) -> bool {
        self == Self::Mirrored
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        assert_eq!(MotionState::default(), MotionState::Idle);
    }

    #[test]
    fn test_indices_match_bank_order() {
        for (i, state) in MotionState::ALL.iter().enumerate() {
            assert_eq!(state.index(), i);
        }
        assert_eq!(MotionState::COUNT, 6);
    }

    #[test]
    fn test_spring_states() {
        assert!(MotionState::SpringJump.is_spring());
        assert!(MotionState::SpringDash.is_spring());
        assert!(!MotionState::Jump.is_spring());
        assert!(!MotionState::Idle.is_spring());
    }

    #[test]
    fn test_animation_names() {
        assert_eq!(MotionState::Idle.animation_name(), "idle");
        assert_eq!(MotionState::Run.animation_name(), "run");
        assert_eq!(MotionState::SpringDash.animation_name(), "spring_dash");
    }

    #[test]
    fn test_facing_from_direction() {
        assert_eq!(Facing::from_direction(Direction::Left), Facing::Mirrored);
        assert_eq!(Facing::from_direction(Direction::Right), Facing::Normal);
        assert!(Facing::Mirrored.is_mirrored());
    }
}
