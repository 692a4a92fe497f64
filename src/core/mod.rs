//! Core types: dice, players, state, RNG, configuration and errors.

pub mod config;
pub mod die;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use config::GameConfig;
pub use die::{Die, Hand};
pub use error::GameError;
pub use player::{PlayerId, PlayerMap};
pub use rng::{DiceSource, GameRng, ScriptedDice};
pub use state::{GameState, Player, PlayerView, Snapshot};
