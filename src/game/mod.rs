// Game modules: characters, springs, world constants, stage

pub mod characters;
pub mod springs;
pub mod stage;
pub mod world;

pub use springs::{ActivationState, ImpulseDirection, SpringImpulse, SpringKind, SpringTrigger};
pub use stage::Stage;
pub use world::{WorldConstants, DEFAULT_WORLD};

/// Configuration errors, raised when a component is built or reconfigured.
///
/// Ticking never fails; every error here means bad content or bad tuning.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid loop range {start}..={end} for a clip of {frame_count} frames")]
    InvalidRange {
        start: usize,
        end: usize,
        frame_count: usize,
    },

    #[error("Animation clip has no frames")]
    EmptyClip,

    #[error("Frame duration must be positive, got {0}")]
    NonPositiveFrameDuration(f32),

    #[error("Frame width and height must be positive")]
    NonPositiveFrameSize,

    #[error("Mass must be positive, got {0}")]
    NonPositiveMass(f32),

    #[error("Spring force must be finite and non-negative, got {0}")]
    InvalidForce(f32),

    #[error("Invalid {name}: {value}")]
    InvalidParameter { name: &'static str, value: f32 },

    #[error("Walk threshold {walk} is above run threshold {run}")]
    InvertedThresholds { walk: f32, run: f32 },

    #[error("Wraparound needs a positive world width, got {0}")]
    InvalidWorldWidth(f32),
}

/// Reject NaN and infinities
pub(crate) fn require_finite(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::InvalidParameter { name, value })
    }
}

/// Reject NaN, infinities and negative values
pub(crate) fn require_non_negative(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidParameter { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidRange {
            start: 4,
            end: 12,
            frame_count: 10,
        };
        assert_eq!(
            err.to_string(),
            "Invalid loop range 4..=12 for a clip of 10 frames"
        );

        let err = ConfigError::NonPositiveMass(0.0);
        assert_eq!(err.to_string(), "Mass must be positive, got 0");

        let err = ConfigError::InvalidParameter {
            name: "max_speed",
            value: -10.0,
        };
        assert_eq!(err.to_string(), "Invalid max_speed: -10");
    }

    #[test]
    fn test_parameter_checks() {
        assert!(require_finite("gravity", -500.0).is_ok());
        assert!(require_finite("gravity", f32::INFINITY).is_err());
        assert!(require_non_negative("air_drag", 0.0).is_ok());
        assert!(require_non_negative("air_drag", -0.1).is_err());
        assert!(require_non_negative("air_drag", f32::NAN).is_err());
    }
}
