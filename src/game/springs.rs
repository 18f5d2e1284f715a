// Springs - static trigger zones that launch characters

use glam::Vec2;
use log::debug;

use crate::core::math::{Direction, Rect};

use super::characters::animation::{ClipGeometry, FrameSequencer, SourceRect};
use super::world::WorldConstants;
use super::ConfigError;

/// Which way a spring pushes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpringKind {
    /// Launches upward; force is divided by the toucher's mass
    Vertical,
    /// Boosts sideways at a fixed speed
    Horizontal,
}

/// Activation state of a spring. While activating, the spring ignores contact.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ActivationState {
    #[default]
    Idle,
    /// Playing the activation animation; seconds since activation
    Activating(f32),
}

/// Direction of a spring impulse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImpulseDirection {
    Up,
    Horizontal(Direction),
}

/// What a spring hands back to the character that triggered it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringImpulse {
    pub direction: ImpulseDirection,
    /// Spring force the character turns into a velocity
    pub force: f32,
}

/// Snapshot of the character a spring needs to decide whether it fires
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    pub bounds: Rect,
    pub velocity: Vec2,
    pub grounded: bool,
    /// Horizontal input held this tick, if any
    pub input: Option<Direction>,
}

/// Standard vertical spring sheet: 6 frames at 20 FPS
pub const VERTICAL_SPRING_CLIP: ClipGeometry = ClipGeometry::new(38, 32, 6, 0.05);
/// Standard horizontal spring sheet: 5 frames at 20 FPS
pub const HORIZONTAL_SPRING_CLIP: ClipGeometry = ClipGeometry::new(25, 32, 5, 0.05);

pub const DEFAULT_VERTICAL_FORCE: f32 = 300.0;
pub const DEFAULT_HORIZONTAL_FORCE: f32 = 250.0;

/// A spring placed in the level
#[derive(Debug, Clone)]
pub struct SpringTrigger {
    /// Top-left corner in world units
    pub position: Vec2,
    kind: SpringKind,
    force: f32,
    /// Horizontal springs push left when nothing is held
    flip: bool,
    landing_tolerance: f32,
    state: ActivationState,
    sequencer: FrameSequencer,
}

impl SpringTrigger {
    /// Create a spring; its bounds come from the sprite sheet frame size
    pub fn new(
        kind: SpringKind,
        position: Vec2,
        force: f32,
        clip: ClipGeometry,
    ) -> Result<Self, ConfigError> {
        if !force.is_finite() || force < 0.0 {
            return Err(ConfigError::InvalidForce(force));
        }

        Ok(Self {
            position,
            kind,
            force,
            flip: false,
            landing_tolerance: WorldConstants::default().landing_tolerance,
            state: ActivationState::Idle,
            sequencer: FrameSequencer::new(clip)?,
        })
    }

    /// Vertical spring with the standard sheet
    pub fn vertical(position: Vec2, force: f32) -> Result<Self, ConfigError> {
        Self::new(SpringKind::Vertical, position, force, VERTICAL_SPRING_CLIP)
    }

    /// Horizontal spring with the standard sheet
    pub fn horizontal(position: Vec2, force: f32) -> Result<Self, ConfigError> {
        Self::new(SpringKind::Horizontal, position, force, HORIZONTAL_SPRING_CLIP)
    }

    /// Place the spring so it rests on the floor at `x`
    pub fn on_ground(mut self, x: f32, world: &WorldConstants) -> Self {
        self.position = Vec2::new(x, world.floor_for(self.size().y));
        self.landing_tolerance = world.landing_tolerance;
        self
    }

    pub fn with_flip(mut self, flip: bool) -> Self {
        self.flip = flip;
        self
    }

    pub fn with_landing_tolerance(mut self, tolerance: f32) -> Self {
        self.landing_tolerance = tolerance;
        self
    }

    pub fn kind(&self) -> SpringKind {
        self.kind
    }

    pub fn force(&self) -> f32 {
        self.force
    }

    pub fn state(&self) -> ActivationState {
        self.state
    }

    pub fn is_activating(&self) -> bool {
        matches!(self.state, ActivationState::Activating(_))
    }

    pub fn size(&self) -> Vec2 {
        let geometry = self.sequencer.geometry();
        Vec2::new(geometry.frame_width as f32, geometry.frame_height as f32)
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.position, self.size())
    }

    /// Fire the spring if the character qualifies.
    ///
    /// Requires overlap, an idle spring, and for vertical springs either a
    /// grounded character or one rising with its feet near the spring's top.
    pub fn try_activate(&mut self, contact: &Contact) -> Option<SpringImpulse> {
        if self.is_activating() {
            return None;
        }

        let bounds = self.bounds();
        if !contact.bounds.intersects(&bounds) {
            return None;
        }

        let direction = match self.kind {
            SpringKind::Vertical => {
                let feet_on_top =
                    (contact.bounds.bottom() - bounds.top()).abs() <= self.landing_tolerance;
                let rising = contact.velocity.y < 0.0;
                if !contact.grounded && !(rising && feet_on_top) {
                    return None;
                }
                ImpulseDirection::Up
            }
            SpringKind::Horizontal => {
                let direction = contact.input.unwrap_or(if self.flip {
                    Direction::Left
                } else {
                    Direction::Right
                });
                ImpulseDirection::Horizontal(direction)
            }
        };

        self.state = ActivationState::Activating(0.0);
        self.sequencer.reset();
        debug!(
            "{:?} spring at ({}, {}) fired {:?}, re-arms in {:.2}s",
            self.kind,
            self.position.x,
            self.position.y,
            direction,
            self.sequencer.geometry().total_duration()
        );

        Some(SpringImpulse {
            direction,
            force: self.force,
        })
    }

    /// Play the activation animation; re-arms after one full cycle
    pub fn advance(&mut self, dt: f32) {
        let ActivationState::Activating(elapsed) = self.state else {
            return;
        };

        if self.sequencer.advance(dt) {
            self.state = ActivationState::Idle;
            self.sequencer.reset();
            debug!(
                "{:?} spring at ({}, {}) re-armed after {:.2}s",
                self.kind,
                self.position.x,
                self.position.y,
                elapsed + dt
            );
        } else {
            self.state = ActivationState::Activating(elapsed + dt);
        }
    }

    /// Sprite-sheet rectangle of the current frame
    pub fn source_rect(&self) -> SourceRect {
        self.sequencer.current_source_rect()
    }

    /// Whether the sprite is drawn mirrored; only horizontal springs flip
    pub fn flipped(&self) -> bool {
        self.flip && self.kind == SpringKind::Horizontal
    }

    pub fn sequencer(&self) -> &FrameSequencer {
        &self.sequencer
    }
}
