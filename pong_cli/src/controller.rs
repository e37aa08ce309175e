//! Scripted stand-in for the keyboard

use game_core::{Direction, MatchEngine};

/// Chases the ball while it approaches, with a wider dead-zone than the
/// opponent; idles while the ball heads away
#[derive(Debug, Clone, Copy)]
pub struct Controller {
    pub dead_zone: f32,
}

impl Controller {
    pub fn new(dead_zone: f32) -> Self {
        Self { dead_zone }
    }

    pub fn steer(&self, engine: &MatchEngine) -> Direction {
        let ball = engine.ball();
        if ball.vel.x >= 0.0 {
            return Direction::Stop;
        }

        let center = engine.player().center_y();
        if ball.pos.y < center - self.dead_zone {
            Direction::Up
        } else if ball.pos.y > center + self.dead_zone {
            Direction::Down
        } else {
            Direction::Stop
        }
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new(25.0)
    }
}
