use thiserror::Error;

use crate::Side;

/// Rejected match or field configuration
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("invalid match length {max_score}: best-of-N needs N >= 1")]
    InvalidMatchLength { max_score: u32 },
    #[error("{name} must be positive and finite (got {value})")]
    InvalidDimension { name: &'static str, value: f32 },
    #[error("paddle height {paddle_height} does not fit in field height {field_height}")]
    PaddleTooTall {
        paddle_height: f32,
        field_height: f32,
    },
    #[error("ball size {ball_size} does not fit in a {field_width}x{field_height} field")]
    BallTooLarge {
        ball_size: f32,
        field_width: f32,
        field_height: f32,
    },
    #[error("{side} paddle x {x} is outside 0..={max}")]
    PaddleOutOfField { side: Side, x: f32, max: f32 },
    #[error("tracking dead-zone must be finite and non-negative (got {value})")]
    InvalidDeadZone { value: f32 },
    #[error("horizontal serve speed must be non-zero")]
    ZeroServeSpeed,
    #[error("vertical serve speed set is empty")]
    EmptyServeChoices,
    #[error("vertical serve speed must be finite (got {value})")]
    InvalidServeSpeed { value: f32 },
    #[error("selectable match lengths must be non-empty and positive")]
    EmptyMatchLengths,
    #[error("tick rate must be positive and finite (got {hz})")]
    InvalidTickRate { hz: f32 },
}
