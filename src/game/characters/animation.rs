// Sprite animation: per-clip frame sequencers and the per-state bank

use crate::game::ConfigError;

use super::state::MotionState;

/// Geometry and timing of one sprite-sheet strip (frames laid out left to right)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipGeometry {
    /// Width of each frame in pixels
    pub frame_width: u32,
    /// Height of each frame in pixels
    pub frame_height: u32,
    /// Number of frames in the strip
    pub frame_count: usize,
    /// Duration of each frame in seconds
    pub frame_duration: f32,
}

impl ClipGeometry {
    pub const fn new(frame_width: u32, frame_height: u32, frame_count: usize, frame_duration: f32) -> Self {
        Self {
            frame_width,
            frame_height,
            frame_count,
            frame_duration,
        }
    }

    /// Get the total duration of one animation cycle
    pub fn total_duration(&self) -> f32 {
        self.frame_count as f32 * self.frame_duration
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.frame_count == 0 {
            return Err(ConfigError::EmptyClip);
        }
        if self.frame_width == 0 || self.frame_height == 0 {
            return Err(ConfigError::NonPositiveFrameSize);
        }
        if !(self.frame_duration > 0.0) {
            return Err(ConfigError::NonPositiveFrameDuration(self.frame_duration));
        }
        Ok(())
    }
}

/// Region of the sprite sheet to sample for the current frame, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Inclusive range of frames an animation cycles through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopRange {
    pub start: usize,
    pub end: usize,
}

/// Cyclic animation clock for a single clip.
///
/// `current_frame` always lies inside the active loop range. Stepping past the
/// end of the range wraps to its start and raises `completed_cycle` until the
/// next call to `advance`.
#[derive(Debug, Clone)]
pub struct FrameSequencer {
    geometry: ClipGeometry,
    loop_range: LoopRange,
    current_frame: usize,
    elapsed_in_frame: f32,
    completed_cycle: bool,
}

impl FrameSequencer {
    pub fn new(geometry: ClipGeometry) -> Result<Self, ConfigError> {
        geometry.validate()?;
        Ok(Self {
            loop_range: Self::full_range(&geometry),
            geometry,
            current_frame: 0,
            elapsed_in_frame: 0.0,
            completed_cycle: false,
        })
    }

    fn full_range(geometry: &ClipGeometry) -> LoopRange {
        LoopRange {
            start: 0,
            end: geometry.frame_count - 1,
        }
    }

    /// Advance the clock by `dt` seconds. Returns true if the loop wrapped.
    pub fn advance(&mut self, dt: f32) -> bool {
        self.completed_cycle = false;

        if self.geometry.frame_count <= 1 {
            return false;
        }

        let frame_duration = self.geometry.frame_duration;
        self.elapsed_in_frame += dt;
        if self.elapsed_in_frame < frame_duration {
            return false;
        }

        // Carry the remainder so frame timing does not drift
        let mut remainder = self.elapsed_in_frame.rem_euclid(frame_duration);
        if !remainder.is_finite() || remainder >= frame_duration {
            remainder = 0.0;
        }
        let steps = ((self.elapsed_in_frame - remainder) / frame_duration).round() as u64;
        self.elapsed_in_frame = remainder;
        self.step_frames(steps);

        self.completed_cycle
    }

    /// Move forward `steps` frames inside the loop range, wrapping at its end
    fn step_frames(&mut self, steps: u64) {
        let start = self.loop_range.start as u64;
        let len = (self.loop_range.end - self.loop_range.start + 1) as u64;
        let offset = (self.current_frame as u64 - start).saturating_add(steps);

        if offset >= len {
            self.completed_cycle = true;
        }
        self.current_frame = (start + offset % len) as usize;
    }

    /// Rewind to the start of the loop range
    pub fn reset(&mut self) {
        self.current_frame = self.loop_range.start;
        self.elapsed_in_frame = 0.0;
        self.completed_cycle = false;
    }

    /// Restrict playback to frames `start..=end`.
    ///
    /// If the current frame falls outside the new range it jumps to `start`.
    pub fn set_loop_range(&mut self, start: usize, end: usize) -> Result<(), ConfigError> {
        if start > end || end >= self.geometry.frame_count {
            return Err(ConfigError::InvalidRange {
                start,
                end,
                frame_count: self.geometry.frame_count,
            });
        }

        self.restrict(LoopRange { start, end });
        Ok(())
    }

    /// Apply a range already checked against this clip
    fn restrict(&mut self, range: LoopRange) {
        self.loop_range = range;
        if !(range.start..=range.end).contains(&self.current_frame) {
            self.current_frame = range.start;
            self.elapsed_in_frame = 0.0;
        }
    }

    /// Play the whole clip again
    pub fn clear_loop_range(&mut self) {
        self.loop_range = Self::full_range(&self.geometry);
    }

    /// Sprite-sheet rectangle of the current frame
    pub fn current_source_rect(&self) -> SourceRect {
        SourceRect {
            x: self.current_frame as u32 * self.geometry.frame_width,
            y: 0,
            width: self.geometry.frame_width,
            height: self.geometry.frame_height,
        }
    }

    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    pub fn completed_cycle(&self) -> bool {
        self.completed_cycle
    }

    pub fn loop_range(&self) -> LoopRange {
        self.loop_range
    }

    pub fn geometry(&self) -> &ClipGeometry {
        &self.geometry
    }
}

/// Standard character clips, indexed like `MotionState::ALL`
pub const STANDARD_CLIPS: [ClipGeometry; MotionState::COUNT] = [
    ClipGeometry::new(49, 49, 11, 0.1),  // idle
    ClipGeometry::new(49, 49, 13, 0.08), // walk
    ClipGeometry::new(49, 49, 23, 0.08), // run
    ClipGeometry::new(49, 49, 16, 0.08), // jump
    ClipGeometry::new(50, 49, 10, 0.08), // spring jump
    ClipGeometry::new(47, 49, 16, 0.06), // spring dash
];

/// Last five frames of the standard run strip, looped at top speed
pub const STANDARD_RUN_LOOP: (usize, usize) = (18, 22);

/// One sequencer per motion state, plus the high-speed loop for `Run`
#[derive(Debug, Clone)]
pub struct AnimationBank {
    sequencers: Vec<FrameSequencer>,
    run_loop: Option<LoopRange>,
}

impl AnimationBank {
    /// Build a bank from one clip per state (in `MotionState::ALL` order).
    ///
    /// `run_loop` is validated against the run clip up front.
    pub fn new(
        clips: [ClipGeometry; MotionState::COUNT],
        run_loop: Option<(usize, usize)>,
    ) -> Result<Self, ConfigError> {
        let sequencers = clips
            .into_iter()
            .map(FrameSequencer::new)
            .collect::<Result<Vec<_>, _>>()?;

        let run_loop = match run_loop {
            Some((start, end)) => {
                let frame_count = clips[MotionState::Run.index()].frame_count;
                if start > end || end >= frame_count {
                    return Err(ConfigError::InvalidRange {
                        start,
                        end,
                        frame_count,
                    });
                }
                Some(LoopRange { start, end })
            }
            None => None,
        };

        Ok(Self {
            sequencers,
            run_loop,
        })
    }

    /// Bank with the standard character sheets
    pub fn standard() -> Result<Self, ConfigError> {
        Self::new(STANDARD_CLIPS, Some(STANDARD_RUN_LOOP))
    }

    pub fn get(&self, state: MotionState) -> &FrameSequencer {
        &self.sequencers[state.index()]
    }

    pub fn get_mut(&mut self, state: MotionState) -> &mut FrameSequencer {
        &mut self.sequencers[state.index()]
    }

    pub fn run_loop(&self) -> Option<LoopRange> {
        self.run_loop
    }

    /// Switch the active clip from `from` to `to`.
    ///
    /// Leaving `Run` drops its high-speed loop; entering `Run` applies it. The
    /// newly selected sequencer always restarts.
    pub fn switch(&mut self, from: MotionState, to: MotionState) {
        if from == to {
            return;
        }

        if from == MotionState::Run {
            self.get_mut(MotionState::Run).clear_loop_range();
        }

        if to == MotionState::Run {
            if let Some(range) = self.run_loop {
                self.get_mut(MotionState::Run).restrict(range);
            }
        }

        self.get_mut(to).reset();
    }
}
