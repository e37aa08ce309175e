//! Notification consumers: a logging sink in place of sound effects, and a
//! tally built from polled per-tick events

use game_core::{EventSink, Events, MatchEvent, Side};
use tracing::{debug, info};

/// Logs each notification the way an audio layer would play a cue
#[derive(Debug, Default)]
pub struct LogSink;

impl EventSink for LogSink {
    fn notify(&mut self, event: &MatchEvent) {
        match event {
            MatchEvent::WallBounce => debug!(cue = "wall", "bounce"),
            MatchEvent::PaddleHit { side } => debug!(cue = "paddle", %side, "hit"),
            MatchEvent::Score { scorer } => info!(cue = "score", %scorer, "point"),
            MatchEvent::MatchEnded { winner } => info!(%winner, "game over"),
        }
    }
}

/// Counts of polled events across a session
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub wall_bounces: u64,
    pub paddle_hits: u64,
    pub player_points: u64,
    pub ai_points: u64,
    pub player_wins: u64,
    pub ai_wins: u64,
}

impl Tally {
    pub fn record(&mut self, events: &Events) {
        for event in events.iter() {
            match event {
                MatchEvent::WallBounce => self.wall_bounces += 1,
                MatchEvent::PaddleHit { .. } => self.paddle_hits += 1,
                MatchEvent::Score {
                    scorer: Side::Player,
                } => self.player_points += 1,
                MatchEvent::Score { scorer: Side::Ai } => self.ai_points += 1,
                MatchEvent::MatchEnded {
                    winner: Side::Player,
                } => self.player_wins += 1,
                MatchEvent::MatchEnded { winner: Side::Ai } => self.ai_wins += 1,
            }
        }
    }
}
