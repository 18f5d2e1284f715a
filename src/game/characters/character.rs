// Character entity and its per-tick controller

use glam::Vec2;
use log::debug;

use crate::core::math::{self, Rect};
use crate::engine::input::InputSnapshot;
use crate::game::springs::{Contact, ImpulseDirection, SpringImpulse, SpringTrigger};
use crate::game::world::WorldConstants;
use crate::game::ConfigError;

use super::animation::{AnimationBank, FrameSequencer, SourceRect};
use super::state::{Facing, MotionState};
use super::stats::CharacterStats;

/// Default spawn column
pub const SPAWN_X: f32 = 200.0;

/// Details of the most recent spring launch, kept for HUD readouts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringReport {
    pub force: f32,
    /// `force / mass`
    pub acceleration: f32,
}

/// The playable character: kinematic state, motion state and animation bank
#[derive(Debug, Clone)]
pub struct Character {
    /// Top-left corner of the bounding box, world units
    pub position: Vec2,
    /// Units/second; +Y is down
    pub velocity: Vec2,
    stats: CharacterStats,
    world: WorldConstants,
    state: MotionState,
    /// While positive, the motion state is held by a spring reaction
    spring_lock: f32,
    facing: Facing,
    animations: AnimationBank,
    /// Jump held on the previous tick, for press detection
    jump_was_held: bool,
    last_spring: Option<SpringReport>,
}

impl Character {
    /// Create a character standing on the ground at `SPAWN_X`
    pub fn new(
        stats: CharacterStats,
        world: WorldConstants,
        animations: AnimationBank,
    ) -> Result<Self, ConfigError> {
        world.validate()?;
        stats.validate()?;

        Ok(Self {
            position: Vec2::new(SPAWN_X, world.floor_for(stats.height)),
            velocity: Vec2::ZERO,
            stats,
            world,
            state: MotionState::Idle,
            spring_lock: 0.0,
            facing: Facing::Normal,
            animations,
            jump_was_held: false,
            last_spring: None,
        })
    }

    /// Sonic with the standard sprite sheets
    pub fn sonic(world: WorldConstants) -> Result<Self, ConfigError> {
        Self::new(CharacterStats::sonic(), world, AnimationBank::standard()?)
    }

    /// Knuckles with the standard sprite sheets
    pub fn knuckles(world: WorldConstants) -> Result<Self, ConfigError> {
        Self::new(CharacterStats::knuckles(), world, AnimationBank::standard()?)
    }

    /// Teleport, clearing velocity. Y is clamped to the floor.
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.position = Vec2::new(x, y.min(self.floor()));
        self.velocity = Vec2::ZERO;
    }

    /// Advance the simulation by `dt` seconds.
    ///
    /// Springs resolve before movement, movement before state derivation,
    /// and state derivation before animation.
    pub fn tick(&mut self, dt: f32, input: &InputSnapshot, springs: &mut [SpringTrigger]) {
        let previous_state = self.state;
        let floor = self.floor();
        let direction = input.direction();

        let grounded = self.position.y >= floor - self.world.ground_tolerance;

        self.spring_lock = (self.spring_lock - dt).max(0.0);

        // First spring that fires wins; the rest wait for next tick
        let contact = Contact {
            bounds: self.bounds(),
            velocity: self.velocity,
            grounded,
            input: direction,
        };
        if let Some(impulse) = springs.iter_mut().find_map(|s| s.try_activate(&contact)) {
            self.apply_impulse(impulse);
        }

        if let Some(direction) = direction {
            self.facing = Facing::from_direction(direction);
        }

        if self.spring_lock == 0.0 {
            match direction {
                Some(direction) => {
                    self.velocity.x += self.stats.move_accel * direction.sign() * dt;
                    self.velocity.x = self
                        .velocity
                        .x
                        .clamp(-self.stats.max_speed, self.stats.max_speed);
                }
                None => self.apply_drag(grounded, dt),
            }
        }

        let jump_pressed = input.jump && !self.jump_was_held;
        self.jump_was_held = input.jump;
        if jump_pressed && grounded && self.spring_lock == 0.0 {
            self.velocity.y = self.stats.jump_velocity;
            self.state = MotionState::Jump;
        }

        if !grounded {
            self.velocity.y += self.world.gravity * dt;
        }

        self.position += self.velocity * dt;

        if self.position.y > floor {
            self.position.y = floor;
            self.velocity.y = 0.0;
        }
        // Re-read contact after moving so a fresh jump classifies as airborne
        let grounded = self.position.y >= floor - self.world.ground_tolerance;

        if self.world.wrap_horizontal {
            self.position.x = math::wrap(self.position.x, self.world.world_width);
        }

        if self.spring_lock == 0.0 {
            self.state = self.derive_state(grounded);
        }

        if self.state != previous_state {
            debug!("Motion state {:?} -> {:?}", previous_state, self.state);
            self.animations.switch(previous_state, self.state);
        }

        self.animations.get_mut(self.state).advance(dt);
    }

    fn apply_impulse(&mut self, impulse: SpringImpulse) {
        let acceleration = impulse.force / self.stats.mass;
        match impulse.direction {
            ImpulseDirection::Up => {
                self.velocity.y = -acceleration * self.stats.impulse_scale;
                self.state = MotionState::SpringJump;
            }
            ImpulseDirection::Horizontal(direction) => {
                self.velocity.x = impulse.force * direction.sign();
                self.state = MotionState::SpringDash;
            }
        }
        self.last_spring = Some(SpringReport {
            force: impulse.force,
            acceleration,
        });
        self.spring_lock = self.stats.spring_lock_duration;
    }

    fn apply_drag(&mut self, grounded: bool, dt: f32) {
        let factor = (1.0 - self.world.drag(grounded) * dt * 60.0).max(0.0);
        self.velocity.x *= factor;
        if self.velocity.x.abs() < self.world.drag_snap_threshold {
            self.velocity.x = 0.0;
        }
    }

    fn derive_state(&self, grounded: bool) -> MotionState {
        if !grounded {
            // Keep a spring arc going until landing
            return if self.state == MotionState::SpringJump {
                MotionState::SpringJump
            } else {
                MotionState::Jump
            };
        }

        let speed = self.velocity.x.abs();
        if speed >= self.stats.run_threshold {
            MotionState::Run
        } else if speed > self.stats.walk_threshold {
            MotionState::Walk
        } else {
            MotionState::Idle
        }
    }

    /// Highest allowed top-left Y
    pub fn floor(&self) -> f32 {
        self.world.floor_for(self.stats.height)
    }

    pub fn is_grounded(&self) -> bool {
        self.position.y >= self.floor() - self.world.ground_tolerance
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.position, Vec2::new(self.stats.width, self.stats.height))
    }

    pub fn state(&self) -> MotionState {
        self.state
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn spring_lock(&self) -> f32 {
        self.spring_lock
    }

    pub fn is_locked(&self) -> bool {
        self.spring_lock > 0.0
    }

    pub fn mass(&self) -> f32 {
        self.stats.mass
    }

    pub fn stats(&self) -> &CharacterStats {
        &self.stats
    }

    pub fn last_spring(&self) -> Option<SpringReport> {
        self.last_spring
    }

    /// Sequencer for the current motion state
    pub fn animation(&self) -> &FrameSequencer {
        self.animations.get(self.state)
    }

    /// Sprite-sheet rectangle to draw this frame
    pub fn current_source_rect(&self) -> SourceRect {
        self.animation().current_source_rect()
    }
}
