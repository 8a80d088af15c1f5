//! Fixed timestep accumulator
//!
//! Real frame time is accumulated and consumed in constant-size steps so the
//! simulation advances at the same rate regardless of frame rate.

/// Default simulation step in seconds
pub const DEFAULT_TIMESTEP: f32 = 0.02;

/// Longest frame time accepted before clamping (first frame, window drag, ...)
pub const DEFAULT_MAX_FRAME_TIME: f32 = 0.25;

/// Maximum steps taken in a single frame
pub const DEFAULT_MAX_STEPS: u32 = 8;

/// Accumulates frame time and hands out fixed steps
#[derive(Clone, Debug)]
pub struct FixedTimestep {
    step: f32,
    max_frame_time: f32,
    max_steps: u32,
    accumulator: f32,
    steps_this_frame: u32,
}

impl Default for FixedTimestep {
    fn default() -> Self {
        Self::new(DEFAULT_TIMESTEP)
    }
}

impl FixedTimestep {
    /// Create an accumulator with the given step size
    ///
    /// A step that is not a positive number falls back to [`DEFAULT_TIMESTEP`].
    pub fn new(step: f32) -> Self {
        let step = if step > 0.0 && step.is_finite() {
            step
        } else {
            log::warn!("Invalid timestep {}, using {}", step, DEFAULT_TIMESTEP);
            DEFAULT_TIMESTEP
        };
        Self {
            step,
            max_frame_time: DEFAULT_MAX_FRAME_TIME,
            max_steps: DEFAULT_MAX_STEPS,
            accumulator: 0.0,
            steps_this_frame: 0,
        }
    }

    /// Set the frame time clamp
    ///
    /// Negative or NaN values fall back to [`DEFAULT_MAX_FRAME_TIME`].
    pub fn with_max_frame_time(mut self, max_frame_time: f32) -> Self {
        self.max_frame_time = if max_frame_time >= 0.0 {
            max_frame_time
        } else {
            log::warn!(
                "Invalid max frame time {}, using {}",
                max_frame_time,
                DEFAULT_MAX_FRAME_TIME
            );
            DEFAULT_MAX_FRAME_TIME
        };
        self
    }

    pub fn with_max_steps(mut self, max_steps: u32) -> Self {
        self.max_steps = max_steps.max(1);
        self
    }

    /// Step size in seconds
    pub fn step(&self) -> f32 {
        self.step
    }

    /// Add the elapsed frame time and start a new frame
    pub fn accumulate(&mut self, frame_dt: f32) {
        self.accumulator += frame_dt.max(0.0).min(self.max_frame_time);
        self.steps_this_frame = 0;
    }

    /// Consume one step if enough time has accumulated
    ///
    /// Once `max_steps` have been taken in this frame the backlog is
    /// discarded so a slow frame cannot snowball.
    pub fn next_step(&mut self) -> bool {
        if self.accumulator < self.step {
            return false;
        }
        if self.steps_this_frame >= self.max_steps {
            log::trace!("Dropping {:.3}s of simulation backlog", self.accumulator);
            self.accumulator = 0.0;
            return false;
        }
        self.accumulator -= self.step;
        self.steps_this_frame += 1;
        true
    }

    /// Fraction of a step left in the accumulator
    ///
    /// Reported in frame diagnostics; the renderer draws the latest state
    /// without interpolating.
    pub fn alpha(&self) -> f32 {
        self.accumulator / self.step
    }
}
