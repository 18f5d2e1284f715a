// Stage - one character and the springs it can touch

use glam::Vec2;
use log::info;

use crate::engine::input::InputSnapshot;

use super::characters::Character;
use super::springs::{SpringTrigger, DEFAULT_HORIZONTAL_FORCE, DEFAULT_VERTICAL_FORCE};
use super::world::WorldConstants;
use super::ConfigError;

/// Owns the simulated character and the level's springs
#[derive(Debug, Clone)]
pub struct Stage {
    pub world: WorldConstants,
    pub character: Character,
    pub springs: Vec<SpringTrigger>,
}

impl Stage {
    pub fn new(world: WorldConstants, character: Character) -> Self {
        Self {
            world,
            character,
            springs: Vec::new(),
        }
    }

    /// Add a spring; iteration order decides which of several overlapping
    /// springs fires first
    pub fn add_spring(&mut self, spring: SpringTrigger) {
        self.springs.push(spring);
    }

    /// The reference level: Sonic between a vertical spring at x=400 and a
    /// horizontal one at x=600, both resting on the floor
    pub fn demo(world: WorldConstants) -> Result<Self, ConfigError> {
        let mut stage = Self::new(world, Character::sonic(world)?);
        stage.add_spring(
            SpringTrigger::vertical(Vec2::ZERO, DEFAULT_VERTICAL_FORCE)?.on_ground(400.0, &world),
        );
        stage.add_spring(
            SpringTrigger::horizontal(Vec2::ZERO, DEFAULT_HORIZONTAL_FORCE)?
                .on_ground(600.0, &world),
        );
        info!(
            "Stage ready: {} springs, ground at y={}",
            stage.springs.len(),
            world.ground_level
        );
        Ok(stage)
    }

    /// Run one tick: the character resolves springs and moves, then every
    /// spring plays its own activation animation
    pub fn step(&mut self, dt: f32, input: &InputSnapshot) {
        self.character.tick(dt, input, &mut self.springs);
        for spring in &mut self.springs {
            spring.advance(dt);
        }
    }
}
