use crate::{Ball, Direction, Events, Paddle};

/// Apply one tick of player input
pub fn apply_input(paddle: &mut Paddle, dir: Direction) {
    paddle.move_by(dir.delta(paddle.speed));
}

/// Move ball based on velocity, recording a wall bounce
pub fn move_ball(ball: &mut Ball, events: &mut Events) {
    if let Some(event) = ball.advance() {
        events.push(event);
    }
}

/// Let the opponent paddle follow the ball
pub fn track_ball(paddle: &mut Paddle, ball: &Ball) -> Direction {
    paddle.auto_track(ball)
}
