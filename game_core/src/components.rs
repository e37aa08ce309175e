use glam::Vec2;
use serde::Serialize;

use crate::{Config, ConfigError, Field, GameRng, MatchEvent, Params, Rect};

/// Which end of the field a paddle defends, or who scored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Side {
    Player, // left, human-controlled
    #[serde(rename = "AI")]
    Ai, // right, auto-tracking
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Player => Side::Ai,
            Side::Ai => Side::Player,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Player => f.write_str("Player"),
            Side::Ai => f.write_str("AI"),
        }
    }
}

/// Vertical input for the player paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Up,
    Down,
    #[default]
    Stop,
}

impl Direction {
    /// -1 = up, 0 = stop, 1 = down
    pub fn from_axis(dir: i8) -> Self {
        match dir.signum() {
            -1 => Direction::Up,
            1 => Direction::Down,
            _ => Direction::Stop,
        }
    }

    /// Signed Y displacement for a paddle moving at `speed`
    pub fn delta(self, speed: f32) -> f32 {
        match self {
            Direction::Up => -speed,
            Direction::Down => speed,
            Direction::Stop => 0.0,
        }
    }
}

/// Paddle - fixed X, clamped Y
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub pos: Vec2, // top-left corner
    pub size: Vec2,
    pub speed: f32, // units per tick
    pub dead_zone: f32,
    pub field: Field,
}

impl Paddle {
    pub fn new(side: Side, pos: Vec2, size: Vec2, speed: f32, field: Field) -> Self {
        let mut paddle = Self {
            side,
            pos,
            size,
            speed,
            dead_zone: Params::TRACKING_DEAD_ZONE,
            field,
        };
        paddle.pos.y = field.clamp_y(pos.y, size.y);
        paddle
    }

    pub fn from_config(side: Side, config: &Config) -> Self {
        let (x, speed) = match side {
            Side::Player => (config.player_paddle_x, config.player_paddle_speed),
            Side::Ai => (config.opponent_paddle_x(), config.opponent_paddle_speed),
        };
        Self {
            dead_zone: config.tracking_dead_zone,
            ..Self::new(
                side,
                Vec2::new(x, config.paddle_start_y()),
                Vec2::new(config.paddle_width, config.paddle_height),
                speed,
                Field::new(config.field_width, config.field_height),
            )
        }
    }

    /// Shift vertically by `dy`, then clamp to the field
    pub fn move_by(&mut self, dy: f32) {
        self.pos.y = self.field.clamp_y(self.pos.y + dy, self.size.y);
    }

    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }

    /// Step toward the ball unless it is inside the dead-zone around our center
    pub fn auto_track(&mut self, ball: &Ball) -> Direction {
        let center = self.center_y();
        let dir = if ball.pos.y < center - self.dead_zone {
            Direction::Up
        } else if ball.pos.y > center + self.dead_zone {
            Direction::Down
        } else {
            Direction::Stop
        };
        self.move_by(dir.delta(self.speed));
        dir
    }

    pub fn bounds_rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }
}

/// Ball - constant velocity, reflected by walls and paddles
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub pos: Vec2, // top-left corner
    pub vel: Vec2, // units per tick
    pub size: Vec2,
    pub origin: Vec2, // serve position restored by reset
    pub field: Field,
    pub serve_speeds_y: Vec<f32>,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, size: Vec2, field: Field) -> Self {
        Self {
            pos,
            vel,
            size,
            origin: pos,
            field,
            serve_speeds_y: Params::SERVE_SPEEDS_Y.to_vec(),
        }
    }

    /// Ball at the config's serve position with a random serve
    pub fn from_config(config: &Config, rng: &mut GameRng) -> Result<Self, ConfigError> {
        let vel_x = config.serve_speed_x.abs() * rng.sign();
        let vel_y = rng
            .choose(&config.serve_speeds_y)
            .ok_or(ConfigError::EmptyServeChoices)?;
        Ok(Self {
            serve_speeds_y: config.serve_speeds_y.clone(),
            ..Self::new(
                config.ball_origin(),
                Vec2::new(vel_x, vel_y),
                Vec2::splat(config.ball_size),
                Field::new(config.field_width, config.field_height),
            )
        })
    }

    /// Advance one tick; reflect off the top and bottom walls
    pub fn advance(&mut self) -> Option<MatchEvent> {
        self.pos += self.vel;

        if self.pos.y <= 0.0 || self.pos.y + self.size.y >= self.field.height {
            self.vel.y = -self.vel.y;
            // Clamp position to prevent stuck
            self.pos.y = self.field.clamp_y(self.pos.y, self.size.y);
            return Some(MatchEvent::WallBounce);
        }
        None
    }

    /// Reflect off either paddle the ball overlaps and is moving toward
    pub fn check_collision(&mut self, near: &Paddle, far: &Paddle) -> Option<MatchEvent> {
        let near_hit = self.bounce_off(near);
        let far_hit = self.bounce_off(far);
        far_hit.or(near_hit)
    }

    fn bounce_off(&mut self, paddle: &Paddle) -> Option<MatchEvent> {
        if !self.bounds_rect().intersects(&paddle.bounds_rect()) {
            return None;
        }

        // Only bounce while approaching, so a ball still overlapping the
        // paddle on the next tick is not flipped back into it
        let approaching = match paddle.side {
            Side::Player => self.vel.x < 0.0,
            Side::Ai => self.vel.x > 0.0,
        };
        if !approaching {
            return None;
        }

        self.vel.x = -self.vel.x;
        Some(MatchEvent::PaddleHit { side: paddle.side })
    }

    /// Back to the serve position, heading the other way
    pub fn reset(&mut self, rng: &mut GameRng) {
        self.pos = self.origin;
        self.vel.x = -self.vel.x;
        if let Some(vel_y) = rng.choose(&self.serve_speeds_y) {
            self.vel.y = vel_y;
        }
    }

    pub fn bounds_rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }
}
