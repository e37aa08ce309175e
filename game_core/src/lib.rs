//! Deterministic two-paddle Pong match simulation
//!
//! [`MatchEngine`] is the only entry point a host needs: feed it
//! [`Direction`]s and call [`MatchEngine::update`] once per tick, then read
//! [`MatchEngine::snapshot`] to draw and subscribe an [`EventSink`] for
//! sound cues.

pub mod components;
pub mod config;
pub mod engine;
pub mod error;
pub mod events;
pub mod map;
pub mod params;
pub mod resources;
pub mod snapshot;
pub mod systems;

pub use components::*;
pub use config::*;
pub use engine::*;
pub use error::*;
pub use events::*;
pub use map::*;
pub use params::*;
pub use resources::*;
pub use snapshot::*;
