//! # dice-pass
//!
//! Round engine for a pass-the-dice elimination game.
//!
//! Every player starts with the same number of dice. Each round, in
//! ascending player order, every die is read:
//!
//! - **6**: the holder scores a point and the die leaves play
//! - **1**: the die leaves the holder and a freshly rolled die goes to the
//!   next player still holding dice
//! - **2-5**: the die stays
//!
//! Passed dice arrive only after everyone has been evaluated. Then every
//! die in play is re-rolled. The game ends once at most one player holds
//! dice.
//!
//! ## Design Principles
//!
//! 1. **Explicit randomness**: every roll comes from a `DiceSource` passed
//!    in by the caller. Same seed, same game.
//!
//! 2. **Stable order**: players live in an ID-indexed `PlayerMap`, so
//!    evaluation and display always run in ascending ID order.
//!
//! 3. **Observable, not printing**: the engine reports `GameEvent`s to a
//!    `GameObserver`; formatting belongs to the display sinks.
//!
//! ## Modules
//!
//! - `core`: dice, players, state, RNG, configuration, errors
//! - `rules`: die evaluation, turn order, round driver
//! - `display`: observers that render or record game events
//!
//! ## Example
//!
//! ```
//! use dice_pass::{EventLog, Game, GameConfig};
//!
//! let config = GameConfig::new(3, 4).unwrap().with_seed(7);
//! let mut game = Game::seeded(&config);
//! let mut log = EventLog::new();
//!
//! let summary = game.run(&mut log);
//! assert!(summary.rounds >= 1);
//! assert!(game.state().is_game_over());
//! ```

pub mod core;
pub mod display;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    DiceSource, Die, GameConfig, GameError, GameRng, GameState, Hand, Player, PlayerId,
    PlayerMap, PlayerView, ScriptedDice, Snapshot,
};

pub use crate::rules::{
    evaluate, next_active, DieOutcome, Game, GameSummary, RoundPhase, RoundReport, TurnReport,
};

pub use crate::display::{
    ConsoleDisplay, EventLog, GameEvent, GameObserver, JsonLinesDisplay, PassEvent,
};
