//! Fixed-timestep frame clock
//!
//! Rendering runs as fast as the window allows while the simulation always
//! advances in `FIXED_TIMESTEP` slices, so spring launches and jump arcs come
//! out the same at any frame rate.

use std::time::{Duration, Instant};

/// Target simulation rate (60 ticks per second)
pub const FIXED_TIMESTEP: f32 = 1.0 / 60.0;
const FIXED_TIMESTEP_DURATION: Duration = Duration::from_micros(16_667); // ~1/60 second

/// Maximum number of ticks per frame to prevent spiral of death
pub const MAX_STEPS_PER_FRAME: u32 = 5;

/// Frame clock state
#[derive(Debug)]
pub struct GameLoop {
    /// Accumulated time not yet consumed by ticks
    accumulator: Duration,

    /// Time of last frame
    last_frame_time: Instant,

    /// Current frame number
    frame_count: u64,

    /// Total ticks executed
    update_count: u64,
}

impl GameLoop {
    pub fn new() -> Self {
        Self {
            accumulator: Duration::ZERO,
            last_frame_time: Instant::now(),
            frame_count: 0,
            update_count: 0,
        }
    }

    /// Begin a new frame using wall-clock time, returns the number of ticks to run
    pub fn begin_frame(&mut self) -> u32 {
        let now = Instant::now();
        let frame_time = now.duration_since(self.last_frame_time);
        self.last_frame_time = now;
        self.accumulate(frame_time)
    }

    /// Feed an explicit frame duration, returns the number of ticks to run
    pub fn accumulate(&mut self, frame_time: Duration) -> u32 {
        self.frame_count += 1;
        self.accumulator += frame_time;

        let mut steps = 0;
        while self.accumulator >= FIXED_TIMESTEP_DURATION && steps < MAX_STEPS_PER_FRAME {
            self.accumulator -= FIXED_TIMESTEP_DURATION;
            steps += 1;
        }

        // Drop the backlog rather than carry it into the next frame
        if steps == MAX_STEPS_PER_FRAME && self.accumulator >= FIXED_TIMESTEP_DURATION {
            log::warn!(
                "Simulation fell behind by {:.1}ms, skipping",
                self.accumulator.as_secs_f32() * 1000.0
            );
            self.accumulator = Duration::ZERO;
        }

        self.update_count += steps as u64;
        steps
    }

    /// Tick length in seconds
    pub fn fixed_timestep(&self) -> f32 {
        FIXED_TIMESTEP
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn update_count(&self) -> u64 {
        self.update_count
    }
}

impl Default for GameLoop {
    fn default() -> Self {
        Self::new()
    }
}
