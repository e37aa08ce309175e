use rand::seq::SliceRandom;
use rand::Rng;

use crate::{Config, Side};

/// Converts host frame time into whole simulation ticks
///
/// The physics is defined per tick, so a host with a variable frame rate
/// feeds elapsed seconds here and runs the returned number of `update()`s.
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub fixed_dt: f32,    // Seconds per tick
    pub max_dt: f32,      // Largest frame delta accepted in one call
    pub accumulator: f32, // Unconsumed time carried to the next frame
    pub now: f32,         // Total simulated time
}

impl Time {
    pub fn new(fixed_dt: f32, max_dt: f32) -> Self {
        Self {
            fixed_dt,
            max_dt,
            accumulator: 0.0,
            now: 0.0,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.fixed_dt(), config.max_frame_dt)
    }

    /// Add a frame delta and return how many fixed ticks are now due
    pub fn ticks_due(&mut self, dt: f32) -> u32 {
        // Clamp dt to prevent large jumps
        let clamped_dt = dt.clamp(0.0, self.max_dt);
        self.accumulator += clamped_dt;

        let mut ticks = 0;
        while self.accumulator >= self.fixed_dt {
            self.accumulator -= self.fixed_dt;
            self.now += self.fixed_dt;
            ticks += 1;
        }
        ticks
    }
}

impl Default for Time {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Match score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub player: u32,
    pub ai: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Player => self.player += 1,
            Side::Ai => self.ai += 1,
        }
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Player => self.player,
            Side::Ai => self.ai,
        }
    }

    pub fn has_winner(&self, score_to_win: u32) -> Option<Side> {
        if self.player >= score_to_win {
            Some(Side::Player)
        } else if self.ai >= score_to_win {
            Some(Side::Ai)
        } else {
            None
        }
    }
}

/// Random number generator for serve randomization
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::from_entropy())
    }

    /// -1.0 or 1.0 with equal probability
    pub fn sign(&mut self) -> f32 {
        if self.0.gen_bool(0.5) {
            1.0
        } else {
            -1.0
        }
    }

    pub fn choose(&mut self, choices: &[f32]) -> Option<f32> {
        choices.choose(&mut self.0).copied()
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

impl std::fmt::Debug for GameRng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameRng").finish_non_exhaustive()
    }
}
