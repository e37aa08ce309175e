use crate::{Ball, Events, Paddle};

/// Check ball collisions with both paddles
pub fn check_collisions(ball: &mut Ball, player: &Paddle, opponent: &Paddle, events: &mut Events) {
    if let Some(event) = ball.check_collision(player, opponent) {
        events.push(event);
    }
}
