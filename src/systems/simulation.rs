//! Game simulation system
//!
//! Manages the simulation side of the frame loop:
//! - Delta time calculation
//! - Applying input actions to the world
//! - Fixed-step world updates

use std::time::Instant;

use pong3d_sim::{FixedTimestep, PongWorld, Side};

/// Owns the world and advances it in fixed steps
pub struct SimulationSystem {
    world: PongWorld,
    timestep: FixedTimestep,
    last_frame: Instant,
}

impl SimulationSystem {
    pub fn new(world: PongWorld, timestep: FixedTimestep) -> Self {
        Self {
            world,
            timestep,
            last_frame: Instant::now(),
        }
    }

    /// Current world state (for rendering)
    pub fn world(&self) -> &PongWorld {
        &self.world
    }

    /// Fraction of a step carried over to the next frame
    pub fn alpha(&self) -> f32 {
        self.timestep.alpha()
    }

    /// Reverse a paddle's vertical direction
    pub fn flip_paddle(&mut self, side: Side) {
        self.world.flip_paddle(side);
        log::debug!("Flipped {:?} paddle, velocity now {:.2}", side, self.world.paddle(side).velocity.y);
    }

    /// Run one frame's worth of simulation using wall-clock time
    ///
    /// Returns the number of fixed steps taken.
    pub fn update(&mut self) -> u32 {
        let now = Instant::now();
        let frame_dt = (now - self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.advance(frame_dt)
    }

    /// Run the simulation for `frame_dt` seconds of elapsed time
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        self.timestep.accumulate(frame_dt);

        let dt = self.timestep.step();
        let mut steps = 0;
        while self.timestep.next_step() {
            self.world.step(dt);
            steps += 1;
        }
        steps
    }
}
