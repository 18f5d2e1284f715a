// Input snapshot handed to the simulation once per tick

use crate::core::math::Direction;

/// Held state of the controls, sampled before a tick.
///
/// The simulation never polls input itself; it only sees these flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputSnapshot {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

impl InputSnapshot {
    /// Horizontal direction held. Left wins when both are held.
    pub fn direction(&self) -> Option<Direction> {
        if self.left {
            Some(Direction::Left)
        } else if self.right {
            Some(Direction::Right)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutral() {
        assert_eq!(InputSnapshot::default().direction(), None);
    }

    #[test]
    fn test_single_direction() {
        let left = InputSnapshot {
            left: true,
            ..Default::default()
        };
        let right = InputSnapshot {
            right: true,
            ..Default::default()
        };
        assert_eq!(left.direction(), Some(Direction::Left));
        assert_eq!(right.direction(), Some(Direction::Right));
    }

    #[test]
    fn test_left_wins_when_both_held() {
        let both = InputSnapshot {
            left: true,
            right: true,
            jump: false,
        };
        assert_eq!(both.direction(), Some(Direction::Left));
    }
}
