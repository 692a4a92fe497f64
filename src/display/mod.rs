//! Display sinks for game progress.
//!
//! The engine reports what happens as a stream of `GameEvent`s to a
//! `GameObserver`. It never formats output itself.
//!
//! ## Observers
//!
//! - `ConsoleDisplay`: human-readable text
//! - `JsonLinesDisplay`: one JSON object per event
//! - `EventLog`: keeps every event in memory
//! - `()`: ignores everything

mod console;
mod json;

pub use console::ConsoleDisplay;
pub use json::JsonLinesDisplay;

use serde::{Deserialize, Serialize};

use crate::core::{Die, PlayerId, Snapshot};
use crate::rules::GameSummary;

/// A die handed from one player to another.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassEvent {
    pub from: PlayerId,
    pub to: PlayerId,
    /// The freshly rolled replacement the recipient will get.
    pub die: Die,
}

/// Something observable that happened during a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    /// Hands as dealt, before any round.
    InitialState { state: Snapshot },
    /// A round is about to be evaluated. Rounds count from 1.
    RoundStart { round: u32 },
    /// A player rolled a 1 and passed a die.
    Pass(PassEvent),
    /// Scores and re-rolled hands after a round.
    RoundEnd { state: Snapshot },
    /// The end condition holds; no more rounds follow.
    GameOver(GameSummary),
}

/// Receives game events as they happen.
pub trait GameObserver {
    fn notify(&mut self, event: &GameEvent);
}

impl GameObserver for () {
    fn notify(&mut self, _event: &GameEvent) {}
}

impl<O: GameObserver + ?Sized> GameObserver for &mut O {
    fn notify(&mut self, event: &GameEvent) {
        (**self).notify(event);
    }
}

/// Records every event, in order.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// All events so far.
    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Passes only.
    pub fn passes(&self) -> impl Iterator<Item = &PassEvent> {
        self.events.iter().filter_map(|e| match e {
            GameEvent::Pass(pass) => Some(pass),
            _ => None,
        })
    }

    /// Number of `RoundStart` events seen.
    #[must_use]
    pub fn rounds_started(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, GameEvent::RoundStart { .. }))
            .count()
    }
}

impl GameObserver for EventLog {
    fn notify(&mut self, event: &GameEvent) {
        self.events.push(event.clone());
    }
}
