/// Game tuning parameters for Pong
///
/// All speeds are in field units per tick. One `update()` is one tick.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Field
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PLAYER_PADDLE_X: f32 = 10.0;
    pub const OPPONENT_PADDLE_INSET: f32 = 20.0; // distance from the right edge
    pub const PLAYER_PADDLE_SPEED: f32 = 10.0;
    pub const OPPONENT_PADDLE_SPEED: f32 = 7.0;
    pub const TRACKING_DEAD_ZONE: f32 = 10.0;

    // Ball
    pub const BALL_SIZE: f32 = 7.0;
    pub const SERVE_SPEED_X: f32 = 5.0;
    pub const SERVE_SPEEDS_Y: [f32; 2] = [-3.0, 3.0];

    // Match
    pub const DEFAULT_MAX_SCORE: u32 = 5;
    pub const MATCH_LENGTHS: [u32; 3] = [3, 5, 7];

    // Clock
    pub const TICK_RATE_HZ: f32 = 60.0;
    pub const MAX_FRAME_DT: f32 = 0.25; // Clamp to prevent large catch-up bursts
}
