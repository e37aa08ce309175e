//! Match notifications
//!
//! Ball and paddle logic returns event values; the engine buffers them per
//! tick and forwards each one to every subscribed [`EventSink`]. Sinks are
//! fire-and-forget consumers such as an audio layer.

use serde::Serialize;

use crate::Side;

/// Something a host may want to react to (sound, flash, menu)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MatchEvent {
    /// Ball bounced off the top or bottom wall
    WallBounce,
    /// Ball was returned by a paddle
    PaddleHit { side: Side },
    /// Ball crossed a goal line
    Score { scorer: Side },
    /// Win threshold reached
    MatchEnded { winner: Side },
}

/// Observer for match notifications
pub trait EventSink {
    fn notify(&mut self, event: &MatchEvent);
}

impl<F> EventSink for F
where
    F: FnMut(&MatchEvent),
{
    fn notify(&mut self, event: &MatchEvent) {
        self(event)
    }
}

/// Events that occurred during the last tick
#[derive(Debug, Clone, Default)]
pub struct Events {
    list: Vec<MatchEvent>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.list.clear();
    }

    pub fn push(&mut self, event: MatchEvent) {
        self.list.push(event);
    }

    pub fn iter(&self) -> impl Iterator<Item = &MatchEvent> {
        self.list.iter()
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn contains(&self, event: &MatchEvent) -> bool {
        self.list.contains(event)
    }

    pub fn ball_hit_wall(&self) -> bool {
        self.contains(&MatchEvent::WallBounce)
    }

    pub fn ball_hit_paddle(&self) -> bool {
        self.list
            .iter()
            .any(|e| matches!(e, MatchEvent::PaddleHit { .. }))
    }

    pub fn scored(&self) -> Option<Side> {
        self.list.iter().find_map(|e| match e {
            MatchEvent::Score { scorer } => Some(*scorer),
            _ => None,
        })
    }
}
