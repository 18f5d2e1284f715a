// Character stats - movement tuning per playable character

use crate::game::{require_finite, require_non_negative, ConfigError};

/// Movement and spring-response tuning for one character
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharacterStats {
    // Movement
    /// Horizontal acceleration while a direction is held (units/second²)
    pub move_accel: f32,
    /// Horizontal speed cap under ordinary control (units/second)
    pub max_speed: f32,
    /// Vertical velocity applied on jump (negative is up)
    pub jump_velocity: f32,

    // State thresholds
    /// |velocity.x| above this counts as walking
    pub walk_threshold: f32,
    /// |velocity.x| at or above this counts as running
    pub run_threshold: f32,

    // Springs
    /// Multiplier turning `force / mass` into a launch speed
    pub impulse_scale: f32,
    /// How long a spring reaction holds the motion state (seconds)
    pub spring_lock_duration: f32,
    /// Body mass, divides vertical spring force
    pub mass: f32,

    // Dimensions
    /// Bounding box width in world units
    pub width: f32,
    /// Bounding box height in world units
    pub height: f32,
}

/// Sonic: quick off the mark, high top speed, big jump
pub const SONIC_STATS: CharacterStats = CharacterStats {
    move_accel: 1000.0,
    max_speed: 200.0,
    jump_velocity: -400.0,

    walk_threshold: 5.0,
    run_threshold: 150.0,

    impulse_scale: 100.0,
    spring_lock_duration: 0.4,
    mass: 50.0,

    width: 49.0,
    height: 49.0,
};

/// Knuckles: slower and heavier-footed
pub const KNUCKLES_STATS: CharacterStats = CharacterStats {
    move_accel: 700.0,
    max_speed: 150.0,
    jump_velocity: -330.0,
    ..SONIC_STATS
};

impl Default for CharacterStats {
    fn default() -> Self {
        SONIC_STATS
    }
}

impl CharacterStats {
    pub fn sonic() -> Self {
        SONIC_STATS
    }

    pub fn knuckles() -> Self {
        KNUCKLES_STATS
    }

    pub fn with_mass(mut self, mass: f32) -> Self {
        self.mass = mass;
        self
    }

    pub fn with_movement(mut self, move_accel: f32, max_speed: f32) -> Self {
        self.move_accel = move_accel;
        self.max_speed = max_speed;
        self
    }

    pub fn with_thresholds(mut self, walk_threshold: f32, run_threshold: f32) -> Self {
        self.walk_threshold = walk_threshold;
        self.run_threshold = run_threshold;
        self
    }

    pub fn with_jump_velocity(mut self, jump_velocity: f32) -> Self {
        self.jump_velocity = jump_velocity;
        self
    }

    /// Reject tunings that would break the simulation
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.mass > 0.0) || !self.mass.is_finite() {
            return Err(ConfigError::NonPositiveMass(self.mass));
        }
        if !(self.width > 0.0) || !(self.height > 0.0) {
            return Err(ConfigError::NonPositiveFrameSize);
        }

        require_non_negative("move_accel", self.move_accel)?;
        require_non_negative("max_speed", self.max_speed)?;
        require_finite("jump_velocity", self.jump_velocity)?;
        require_non_negative("walk_threshold", self.walk_threshold)?;
        require_non_negative("run_threshold", self.run_threshold)?;
        require_non_negative("impulse_scale", self.impulse_scale)?;
        require_non_negative("spring_lock_duration", self.spring_lock_duration)?;

        if self.walk_threshold > self.run_threshold {
            return Err(ConfigError::InvertedThresholds {
                walk: self.walk_threshold,
                run: self.run_threshold,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_sonic() {
        let stats = CharacterStats::default();
        assert_eq!(stats, SONIC_STATS);
        assert_eq!(stats.max_speed, 200.0);
        assert_eq!(stats.mass, 50.0);
    }

    #[test]
    fn test_knuckles_differs_in_movement_only() {
        let knuckles = CharacterStats::knuckles();
        assert_eq!(knuckles.move_accel, 700.0);
        assert_eq!(knuckles.max_speed, 150.0);
        assert_eq!(knuckles.jump_velocity, -330.0);
        assert_eq!(knuckles.impulse_scale, SONIC_STATS.impulse_scale);
        assert_eq!(knuckles.height, SONIC_STATS.height);
    }

    #[test]
    fn test_builders() {
        let stats = CharacterStats::sonic()
            .with_mass(80.0)
            .with_movement(500.0, 180.0)
            .with_thresholds(2.0, 120.0);
        assert_eq!(stats.mass, 80.0);
        assert_eq!(stats.move_accel, 500.0);
        assert_eq!(stats.max_speed, 180.0);
        assert_eq!(stats.run_threshold, 120.0);
    }

    #[test]
    fn test_validate_mass() {
        assert!(CharacterStats::sonic().validate().is_ok());
        assert_eq!(
            CharacterStats::sonic().with_mass(0.0).validate(),
            Err(ConfigError::NonPositiveMass(0.0))
        );
        assert_eq!(
            CharacterStats::sonic().with_mass(-5.0).validate(),
            Err(ConfigError::NonPositiveMass(-5.0))
        );
    }

    #[test]
    fn test_validate_movement() {
        assert_eq!(
            CharacterStats::sonic().with_movement(500.0, -10.0).validate(),
            Err(ConfigError::InvalidParameter {
                name: "max_speed",
                value: -10.0
            })
        );
        assert!(CharacterStats::sonic()
            .with_movement(f32::NAN, 200.0)
            .validate()
            .is_err());
        assert!(CharacterStats::sonic()
            .with_jump_velocity(f32::NEG_INFINITY)
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_spring_response() {
        let stats = CharacterStats {
            spring_lock_duration: -0.4,
            ..SONIC_STATS
        };
        assert_eq!(
            stats.validate(),
            Err(ConfigError::InvalidParameter {
                name: "spring_lock_duration",
                value: -0.4
            })
        );

        let stats = CharacterStats {
            impulse_scale: -100.0,
            ..SONIC_STATS
        };
        assert!(stats.validate().is_err());
    }

    #[test]
    fn test_validate_thresholds() {
        assert_eq!(
            CharacterStats::sonic().with_thresholds(160.0, 150.0).validate(),
            Err(ConfigError::InvertedThresholds {
                walk: 160.0,
                run: 150.0
            })
        );
        assert!(CharacterStats::sonic()
            .with_thresholds(5.0, -150.0)
            .validate()
            .is_err());
        assert!(CharacterStats::knuckles().validate().is_ok());
    }
}
