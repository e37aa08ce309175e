use serde::{Deserialize, Serialize};

use crate::{ConfigError, Params, Side};

/// Match and field configuration
///
/// Missing fields fall back to [`Params`] when deserialized, so a host can
/// ship a partial JSON file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub field_width: f32,
    pub field_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub player_paddle_x: f32,
    pub opponent_paddle_inset: f32,
    pub player_paddle_speed: f32,
    pub opponent_paddle_speed: f32,
    pub tracking_dead_zone: f32,
    pub ball_size: f32,
    pub serve_speed_x: f32,
    pub serve_speeds_y: Vec<f32>,
    pub default_max_score: u32,
    pub match_lengths: Vec<u32>,
    pub tick_rate_hz: f32,
    pub max_frame_dt: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: Params::FIELD_WIDTH,
            field_height: Params::FIELD_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            player_paddle_x: Params::PLAYER_PADDLE_X,
            opponent_paddle_inset: Params::OPPONENT_PADDLE_INSET,
            player_paddle_speed: Params::PLAYER_PADDLE_SPEED,
            opponent_paddle_speed: Params::OPPONENT_PADDLE_SPEED,
            tracking_dead_zone: Params::TRACKING_DEAD_ZONE,
            ball_size: Params::BALL_SIZE,
            serve_speed_x: Params::SERVE_SPEED_X,
            serve_speeds_y: Params::SERVE_SPEEDS_Y.to_vec(),
            default_max_score: Params::DEFAULT_MAX_SCORE,
            match_lengths: Params::MATCH_LENGTHS.to_vec(),
            tick_rate_hz: Params::TICK_RATE_HZ,
            max_frame_dt: Params::MAX_FRAME_DT,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// X position of the opponent paddle (right side)
    pub fn opponent_paddle_x(&self) -> f32 {
        self.field_width - self.opponent_paddle_inset
    }

    /// Initial paddle Y, vertically centered
    pub fn paddle_start_y(&self) -> f32 {
        self.field_height / 2.0 - self.paddle_height / 2.0
    }

    /// Serve position of the ball's top-left corner
    pub fn ball_origin(&self) -> glam::Vec2 {
        glam::Vec2::new(self.field_width / 2.0, self.field_height / 2.0)
    }

    /// Seconds per tick
    pub fn fixed_dt(&self) -> f32 {
        1.0 / self.tick_rate_hz
    }

    /// Whether `max_score` is one of the lengths a host should offer
    pub fn is_selectable(&self, max_score: u32) -> bool {
        self.match_lengths.contains(&max_score)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let dimensions = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("player_paddle_speed", self.player_paddle_speed),
            ("opponent_paddle_speed", self.opponent_paddle_speed),
            ("ball_size", self.ball_size),
            ("max_frame_dt", self.max_frame_dt),
        ];
        for (name, value) in dimensions {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::InvalidDimension { name, value });
            }
        }

        if self.paddle_height > self.field_height {
            return Err(ConfigError::PaddleTooTall {
                paddle_height: self.paddle_height,
                field_height: self.field_height,
            });
        }
        if self.ball_size >= self.field_width || self.ball_size >= self.field_height {
            return Err(ConfigError::BallTooLarge {
                ball_size: self.ball_size,
                field_width: self.field_width,
                field_height: self.field_height,
            });
        }
        let max_x = self.field_width - self.paddle_width;
        for (side, x) in [
            (Side::Player, self.player_paddle_x),
            (Side::Ai, self.opponent_paddle_x()),
        ] {
            if !(x.is_finite() && (0.0..=max_x).contains(&x)) {
                return Err(ConfigError::PaddleOutOfField { side, x, max: max_x });
            }
        }
        if !(self.tracking_dead_zone.is_finite() && self.tracking_dead_zone >= 0.0) {
            return Err(ConfigError::InvalidDeadZone {
                value: self.tracking_dead_zone,
            });
        }
        if self.serve_speed_x == 0.0 || !self.serve_speed_x.is_finite() {
            return Err(ConfigError::ZeroServeSpeed);
        }
        if self.serve_speeds_y.is_empty() {
            return Err(ConfigError::EmptyServeChoices);
        }
        if let Some(&value) = self.serve_speeds_y.iter().find(|v| !v.is_finite()) {
            return Err(ConfigError::InvalidServeSpeed { value });
        }
        if self.match_lengths.is_empty() || self.match_lengths.contains(&0) {
            return Err(ConfigError::EmptyMatchLengths);
        }
        if !(self.tick_rate_hz.is_finite() && self.tick_rate_hz > 0.0) {
            return Err(ConfigError::InvalidTickRate {
                hz: self.tick_rate_hz,
            });
        }

        score_to_win(self.default_max_score).map(|_| ())
    }
}

/// Points needed to take a best-of-`max_score` match
pub fn score_to_win(max_score: u32) -> Result<u32, ConfigError> {
    if max_score == 0 {
        return Err(ConfigError::InvalidMatchLength { max_score });
    }
    Ok(max_score / 2 + 1)
}
