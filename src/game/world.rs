// World constants - fixed physics parameters shared by everything in a level

use crate::game::{require_finite, require_non_negative, ConfigError};

/// Physics parameters for one level.
///
/// Screen-space convention: +Y points down, so gravity is positive and jump
/// velocities are negative. The ground is a horizontal line at `ground_level`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldConstants {
    /// Downward acceleration (units/second²)
    pub gravity: f32,
    /// Y coordinate of the floor
    pub ground_level: f32,
    /// Horizontal drag while grounded (fraction lost per 1/60 s)
    pub ground_drag: f32,
    /// Horizontal drag while airborne (fraction lost per 1/60 s)
    pub air_drag: f32,
    /// Tolerance for the grounded check, absorbs float rounding at the floor
    pub ground_tolerance: f32,
    /// Horizontal speeds below this snap to zero once drag is applied
    pub drag_snap_threshold: f32,
    /// How far a character's feet may be from a vertical spring's top edge
    /// and still count as landing on it while airborne
    pub landing_tolerance: f32,
    /// Width of the playable area, used for horizontal wrap
    pub world_width: f32,
    /// Wrap position.x modulo `world_width`
    pub wrap_horizontal: bool,
}

/// Default level tuning
pub const DEFAULT_WORLD: WorldConstants = WorldConstants {
    gravity: 500.0,
    ground_level: 350.0,
    ground_drag: 0.8,
    air_drag: 0.2,
    ground_tolerance: 0.1,
    drag_snap_threshold: 0.5,
    landing_tolerance: 8.0,
    world_width: 800.0,
    wrap_horizontal: false,
};

impl Default for WorldConstants {
    fn default() -> Self {
        DEFAULT_WORLD
    }
}

impl WorldConstants {
    pub fn with_gravity(mut self, gravity: f32) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_ground_level(mut self, ground_level: f32) -> Self {
        self.ground_level = ground_level;
        self
    }

    /// Enable horizontal wraparound over a world of the given width
    pub fn with_wrap(mut self, world_width: f32) -> Self {
        self.world_width = world_width;
        self.wrap_horizontal = true;
        self
    }

    /// Reject tunings that would break the simulation
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_finite("gravity", self.gravity)?;
        require_finite("ground_level", self.ground_level)?;
        require_non_negative("ground_drag", self.ground_drag)?;
        require_non_negative("air_drag", self.air_drag)?;
        require_non_negative("ground_tolerance", self.ground_tolerance)?;
        require_non_negative("drag_snap_threshold", self.drag_snap_threshold)?;
        require_non_negative("landing_tolerance", self.landing_tolerance)?;

        if self.wrap_horizontal && !(self.world_width > 0.0 && self.world_width.is_finite()) {
            return Err(ConfigError::InvalidWorldWidth(self.world_width));
        }
        Ok(())
    }

    /// Highest allowed top-left Y for a body of the given height
    pub fn floor_for(&self, height: f32) -> f32 {
        self.ground_level - height
    }

    /// Drag coefficient for the current contact state
    pub fn drag(&self, grounded: bool) -> f32 {
        if grounded {
            self.ground_drag
        } else {
            self.air_drag
        }
    }
}
