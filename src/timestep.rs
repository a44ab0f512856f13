//! Fixed-timestep scheduler
//!
//! Decouples variable wall-clock frame delivery from the constant
//! simulation step: leftover frame time accumulates until it covers
//! whole steps, the caller runs exactly that many `tick`s, then renders
//! once. Simulation results are identical at any display refresh rate;
//! under extreme frame-time variance this shows as stutter, which is
//! the accepted tradeoff.

use crate::consts::{MAX_FRAME_TIME, SIM_DT};

/// Accumulates frame time and pays it out as whole fixed steps
#[derive(Debug, Clone, Default)]
pub struct FixedTimestep {
    accumulator: f32,
    last_time: Option<f64>,
}

impl FixedTimestep {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a frame timestamp (seconds) and get back the number of
    /// fixed steps to run before rendering this frame.
    ///
    /// Frame time is clamped to [`MAX_FRAME_TIME`] so a suspended tab
    /// does not come back as a burst of catch-up steps. The first call
    /// records the baseline and returns 0.
    pub fn advance(&mut self, now: f64) -> u32 {
        let Some(last) = self.last_time else {
            self.last_time = Some(now);
            return 0;
        };
        let frame_time = ((now - last) as f32).clamp(0.0, MAX_FRAME_TIME);
        self.last_time = Some(now);
        self.accumulator += frame_time;

        let mut steps = 0;
        while self.accumulator >= SIM_DT {
            self.accumulator -= SIM_DT;
            steps += 1;
        }
        steps
    }

    /// Unconsumed simulation time, always in `[0, SIM_DT)`
    pub fn leftover(&self) -> f32 {
        self.accumulator
    }

    /// Drop accumulated time and the frame baseline
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
        self.last_time = None;
    }
}
