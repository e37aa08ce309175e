//! Match engine
//!
//! Owns the ball, both paddles and the match state. One call to
//! [`MatchEngine::update`] is one fixed tick; hosts with a variable frame
//! rate go through [`MatchEngine::advance`] instead.

use tracing::{debug, info, warn};

use crate::systems::*;
use crate::{
    score_to_win, Ball, Config, ConfigError, Direction, EventSink, Events, GameRng, MatchEvent,
    MatchSnapshot, Paddle, Score, Side, Time,
};

pub struct MatchEngine {
    config: Config,
    ball: Ball,
    player: Paddle,
    opponent: Paddle,
    score: Score,
    max_score: u32,
    score_to_win: u32,
    active: bool,
    winner: Option<Side>,
    tick: u64,
    events: Events,
    sinks: Vec<Box<dyn EventSink>>,
    rng: GameRng,
}

impl MatchEngine {
    /// Build an engine and start a match of `config.default_max_score`
    pub fn new(config: Config, mut rng: GameRng) -> Result<Self, ConfigError> {
        config.validate()?;
        let score_to_win = score_to_win(config.default_max_score)?;

        let ball = Ball::from_config(&config, &mut rng)?;
        let player = Paddle::from_config(Side::Player, &config);
        let opponent = Paddle::from_config(Side::Ai, &config);

        info!(
            max_score = config.default_max_score,
            score_to_win, "match started"
        );

        Ok(Self {
            max_score: config.default_max_score,
            score_to_win,
            config,
            ball,
            player,
            opponent,
            score: Score::new(),
            active: true,
            winner: None,
            tick: 0,
            events: Events::new(),
            sinks: Vec::new(),
            rng,
        })
    }

    /// Register a notification listener
    pub fn subscribe<S>(&mut self, sink: S)
    where
        S: EventSink + 'static,
    {
        self.sinks.push(Box::new(sink));
    }

    /// Move the player paddle one step; ignored once the match is over
    pub fn handle_input(&mut self, dir: Direction) {
        if !self.active {
            return;
        }
        apply_input(&mut self.player, dir);
    }

    /// Run one tick
    pub fn update(&mut self) {
        // Clear events at start of tick, so an ended match reports none
        self.events.clear();
        if !self.active {
            return;
        }

        self.tick += 1;

        // 1. Move ball (top/bottom walls)
        move_ball(&mut self.ball, &mut self.events);

        // 2. Ball vs paddles
        check_collisions(
            &mut self.ball,
            &self.player,
            &self.opponent,
            &mut self.events,
        );

        // 3. Goal lines
        check_scoring(
            &mut self.ball,
            &mut self.score,
            &mut self.events,
            &mut self.rng,
        );

        // 4. Opponent follows the ball
        track_ball(&mut self.opponent, &self.ball);

        // 5. Win condition
        if let Some(winner) = check_win(&self.score, self.score_to_win) {
            self.active = false;
            self.winner = Some(winner);
            self.events.push(MatchEvent::MatchEnded { winner });
            info!(
                %winner,
                player = self.score.player,
                ai = self.score.ai,
                tick = self.tick,
                "match ended"
            );
        }

        self.dispatch();
    }

    /// Feed `dt` seconds of host time and run every fixed tick that is due
    ///
    /// Stops early when the match ends; returns the ticks actually run.
    pub fn advance(&mut self, time: &mut Time, dt: f32) -> u32 {
        let due = time.ticks_due(dt);
        let mut ran = 0;
        while ran < due && self.active {
            self.update();
            ran += 1;
        }
        ran
    }

    /// Start a new best-of-`new_max_score` match from any state
    pub fn reset_game(&mut self, new_max_score: u32) -> Result<(), ConfigError> {
        let score_to_win = score_to_win(new_max_score).inspect_err(|err| {
            warn!(%err, "rejected match length");
        })?;

        self.score = Score::new();
        self.max_score = new_max_score;
        self.score_to_win = score_to_win;
        self.active = true;
        self.winner = None;
        self.events.clear();
        self.ball.reset(&mut self.rng);

        info!(max_score = new_max_score, score_to_win, "match reset");
        Ok(())
    }

    fn dispatch(&mut self) {
        for event in self.events.iter() {
            debug!(?event, tick = self.tick, "match event");
            for sink in self.sinks.iter_mut() {
                sink.notify(event);
            }
        }
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn player(&self) -> &Paddle {
        &self.player
    }

    pub fn opponent(&self) -> &Paddle {
        &self.opponent
    }

    pub fn player_score(&self) -> u32 {
        self.score.player
    }

    pub fn ai_score(&self) -> u32 {
        self.score.ai
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn max_score(&self) -> u32 {
        self.max_score
    }

    pub fn score_to_win(&self) -> u32 {
        self.score_to_win
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Meaningful only once the match has ended
    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Events raised by the most recent tick
    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot {
            tick: self.tick,
            ball: self.ball.bounds_rect(),
            player: self.player.bounds_rect(),
            opponent: self.opponent.bounds_rect(),
            player_score: self.score.player,
            ai_score: self.score.ai,
            max_score: self.max_score,
            score_to_win: self.score_to_win,
            active: self.active,
            winner: self.winner,
        }
    }

    /// Mutable access for tests that stage exact ball positions
    #[cfg(test)]
    pub(crate) fn ball_mut(&mut self) -> &mut Ball {
        &mut self.ball
    }
}

impl std::fmt::Debug for MatchEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatchEngine")
            .field("ball", &self.ball)
            .field("player", &self.player)
            .field("opponent", &self.opponent)
            .field("score", &self.score)
            .field("max_score", &self.max_score)
            .field("active", &self.active)
            .field("winner", &self.winner)
            .field("tick", &self.tick)
            .field("sinks", &self.sinks.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn engine() -> MatchEngine {
        MatchEngine::new(Config::new(), GameRng::new(12345)).expect("default config is valid")
    }

    fn recorder(engine: &mut MatchEngine) -> Rc<RefCell<Vec<MatchEvent>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        engine.subscribe(move |event: &MatchEvent| sink.borrow_mut().push(*event));
        seen
    }

    /// Place the ball one tick from crossing the left goal line
    fn stage_ai_point(engine: &mut MatchEngine) {
        let ball = engine.ball_mut();
        ball.pos = Vec2::new(3.0, 100.0);
        ball.vel = Vec2::new(-5.0, 3.0);
    }

    fn stage_player_point(engine: &mut MatchEngine) {
        let ball = engine.ball_mut();
        ball.pos = Vec2::new(797.0, 100.0);
        ball.vel = Vec2::new(5.0, 3.0);
    }

    #[test]
    fn test_new_engine_is_active() {
        let engine = engine();
        assert!(engine.is_active());
        assert_eq!(engine.winner(), None);
        assert_eq!(engine.max_score(), 5);
        assert_eq!(engine.score_to_win(), 3);
        assert_eq!(engine.player_score(), 0);
        assert_eq!(engine.ai_score(), 0);
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = Config {
            default_max_score: 0,
            ..Config::new()
        };
        let err = MatchEngine::new(config, GameRng::default()).unwrap_err();
        assert_eq!(err, ConfigError::InvalidMatchLength { max_score: 0 });
    }

    #[test]
    fn test_handle_input_moves_player_only() {
        let mut engine = engine();
        let start = engine.player().pos.y;
        let opponent = *engine.opponent();

        engine.handle_input(Direction::Up);
        assert_eq!(engine.player().pos.y, start - 10.0);
        engine.handle_input(Direction::Stop);
        assert_eq!(engine.player().pos.y, start - 10.0);
        assert_eq!(*engine.opponent(), opponent);
    }

    #[test]
    fn test_update_moves_ball_one_step() {
        let mut engine = engine();
        let before = engine.ball().clone();

        engine.update();

        assert_eq!(engine.ball().pos, before.pos + before.vel);
        assert_eq!(engine.tick(), 1);
    }

    #[test]
    fn test_ai_point_resets_ball_and_notifies() {
        let mut engine = engine();
        let seen = recorder(&mut engine);
        stage_ai_point(&mut engine);

        engine.update();

        assert_eq!(engine.ai_score(), 1);
        assert_eq!(engine.player_score(), 0);
        assert_eq!(engine.ball().pos, engine.ball().origin);
        assert_eq!(engine.ball().vel.x, 5.0, "Serve flips direction");
        assert!(seen
            .borrow()
            .contains(&MatchEvent::Score { scorer: Side::Ai }));
    }

    #[test]
    fn test_player_point() {
        let mut engine = engine();
        stage_player_point(&mut engine);

        engine.update();

        assert_eq!(engine.player_score(), 1);
        assert_eq!(engine.events().scored(), Some(Side::Player));
    }

    #[test]
    fn test_match_ends_at_score_to_win() {
        let mut engine = engine();
        let seen = recorder(&mut engine);

        for _ in 0..3 {
            assert!(engine.is_active());
            stage_ai_point(&mut engine);
            engine.update();
        }

        assert!(!engine.is_active());
        assert_eq!(engine.winner(), Some(Side::Ai));
        assert_eq!(engine.ai_score(), 3);
        assert_eq!(
            seen.borrow().last(),
            Some(&MatchEvent::MatchEnded { winner: Side::Ai })
        );
    }

    #[test]
    fn test_ended_match_ignores_update_and_input() {
        let mut engine = engine();
        for _ in 0..3 {
            stage_player_point(&mut engine);
            engine.update();
        }
        assert_eq!(engine.winner(), Some(Side::Player));

        let frozen = engine.snapshot();
        engine.update();
        engine.handle_input(Direction::Down);

        assert_eq!(engine.snapshot(), frozen, "No transition without reset");
    }

    #[test]
    fn test_ended_match_reports_no_events() {
        let mut engine = engine();
        let seen = recorder(&mut engine);
        for _ in 0..3 {
            stage_ai_point(&mut engine);
            engine.update();
        }
        assert!(engine.events().contains(&MatchEvent::MatchEnded { winner: Side::Ai }));
        let delivered = seen.borrow().len();

        for _ in 0..3 {
            engine.update();
            assert!(engine.events().is_empty(), "No cues replayed after the end");
        }
        assert_eq!(seen.borrow().len(), delivered, "Sinks hear nothing new");
    }

    #[test]
    fn test_advance_stops_when_match_ends() {
        let mut engine = engine();
        let mut time = Time::new(0.5, 4.0);
        for _ in 0..2 {
            stage_ai_point(&mut engine);
            engine.update();
        }
        stage_ai_point(&mut engine);

        let ran = engine.advance(&mut time, 2.0);

        assert_eq!(ran, 1, "Only the deciding tick runs");
        assert!(!engine.is_active());
        assert_eq!(engine.tick(), 3);
        assert_eq!(engine.advance(&mut time, 1.0), 0);
    }

    #[test]
    fn test_reset_game_starts_rematch() {
        let mut engine = engine();
        for _ in 0..3 {
            stage_ai_point(&mut engine);
            engine.update();
        }
        assert!(!engine.is_active());

        engine.reset_game(3).expect("best of 3 is valid");

        assert!(engine.is_active());
        assert_eq!(engine.winner(), None);
        assert_eq!(engine.player_score(), 0);
        assert_eq!(engine.ai_score(), 0);
        assert_eq!(engine.max_score(), 3);
        assert_eq!(engine.score_to_win(), 2);
        assert_eq!(engine.ball().pos, engine.ball().origin);
    }

    #[test]
    fn test_reset_game_mid_match() {
        let mut engine = engine();
        stage_player_point(&mut engine);
        engine.update();
        engine.update();

        engine.reset_game(7).expect("best of 7 is valid");

        assert!(engine.is_active());
        assert_eq!(engine.player_score(), 0);
        assert_eq!(engine.score_to_win(), 4);
        assert_eq!(engine.ball().pos, engine.ball().origin);
    }

    #[test]
    fn test_reset_game_rejects_zero() {
        let mut engine = engine();
        stage_player_point(&mut engine);
        engine.update();

        let err = engine.reset_game(0).unwrap_err();

        assert_eq!(err, ConfigError::InvalidMatchLength { max_score: 0 });
        assert_eq!(engine.player_score(), 1, "Rejected reset leaves state alone");
        assert_eq!(engine.max_score(), 5);
    }

    #[test]
    fn test_engine_without_sinks_still_runs() {
        let mut engine = engine();
        for _ in 0..1_000 {
            engine.update();
        }
        assert!(engine.tick() > 0);
    }

    #[test]
    fn test_advance_runs_due_ticks() {
        let mut engine = engine();
        let mut time = Time::new(0.5, 2.0);

        assert_eq!(engine.advance(&mut time, 0.25), 0);
        assert_eq!(engine.tick(), 0);
        assert_eq!(engine.advance(&mut time, 1.0), 2);
        assert_eq!(engine.tick(), 2);
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let engine = engine();
        let snapshot = engine.snapshot();
        assert_eq!(snapshot.ball, engine.ball().bounds_rect());
        assert_eq!(snapshot.player.x, 10.0);
        assert_eq!(snapshot.opponent.x, 780.0);
        assert!(snapshot.active);
        assert_eq!(snapshot.winner, None);
    }
}
