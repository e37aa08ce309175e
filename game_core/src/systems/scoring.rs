use crate::{Ball, Events, GameRng, MatchEvent, Score, Side};

/// Check if ball crossed a goal line (scoring)
///
/// The ball's left edge is tested against both lines, so a ball is only
/// awarded to the player once it has fully left the right side.
pub fn check_scoring(
    ball: &mut Ball,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) -> Option<Side> {
    let scorer = if ball.pos.x <= 0.0 {
        Side::Ai
    } else if ball.pos.x >= ball.field.width {
        Side::Player
    } else {
        return None;
    };

    score.increment(scorer);
    events.push(MatchEvent::Score { scorer });

    // Reset ball
    ball.reset(rng);
    Some(scorer)
}

/// Winner once either side reaches `score_to_win`
pub fn check_win(score: &Score, score_to_win: u32) -> Option<Side> {
    score.has_winner(score_to_win)
}
