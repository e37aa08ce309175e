use serde::Serialize;

use crate::{Rect, Side};

/// Read-only view of a match for rendering
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MatchSnapshot {
    pub tick: u64,
    pub ball: Rect,
    pub player: Rect,
    pub opponent: Rect,
    pub player_score: u32,
    pub ai_score: u32,
    pub max_score: u32,
    pub score_to_win: u32,
    pub active: bool,
    pub winner: Option<Side>,
}
