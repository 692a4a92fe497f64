//! Round driver: runs the game one round at a time.
//!
//! Each round walks a fixed sequence of phases:
//!
//! ```text
//! RoundStart -> Evaluating -> Merging -> Rerolling -> EndCheck -> RoundStart | GameOver
//! ```
//!
//! - **RoundStart**: freeze the active-player order, open an empty pass buffer
//! - **Evaluating**: players in ascending ID order score 6s, pass 1s and keep
//!   the rest; passed dice wait in the buffer
//! - **Merging**: buffered dice join their recipients' hands
//! - **Rerolling**: every die still in play is rolled again
//! - **EndCheck**: the game is over once at most one player holds dice
//!
//! Passed dice only reach a hand after every player has been evaluated, so
//! a die is never evaluated twice in the same round.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::evaluator::{evaluate, DieOutcome};
use super::turn_order::next_active;
use crate::core::{
    DiceSource, Die, GameConfig, GameRng, GameState, Hand, PlayerId, PlayerMap, Snapshot,
};
use crate::display::{GameEvent, GameObserver, PassEvent};

/// Where the driver is in the round cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundPhase {
    RoundStart,
    Evaluating,
    Merging,
    Rerolling,
    EndCheck,
    /// Terminal.
    GameOver,
}

/// Dice passed this round, keyed by recipient, in the order they were rolled.
type PassBuffer = PlayerMap<Hand>;

/// What one player's evaluation did during a round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    pub player: PlayerId,
    /// Who any of this player's 1s went to.
    pub recipient: PlayerId,
    /// The hand as it stood when the player's turn began.
    pub evaluated: Vec<Die>,
    pub scored: u32,
    pub passed: Vec<PassEvent>,
    pub kept: Vec<Die>,
}

impl TurnReport {
    /// Total dice accounted for by scoring, passing and keeping.
    #[must_use]
    pub fn outcome_count(&self) -> usize {
        self.scored as usize + self.passed.len() + self.kept.len()
    }
}

/// Everything that happened in one round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundReport {
    /// Round number, counting from 1.
    pub round: u32,
    /// Active players frozen at the start of the round.
    pub active_order: Vec<PlayerId>,
    /// One entry per player that held dice, in ascending ID order.
    pub turns: Vec<TurnReport>,
    pub game_over: bool,
}

impl RoundReport {
    /// Look up a player's turn.
    #[must_use]
    pub fn turn(&self, player: PlayerId) -> Option<&TurnReport> {
        self.turns.iter().find(|t| t.player == player)
    }

    /// All passes this round, in the order they happened.
    pub fn passes(&self) -> impl Iterator<Item = &PassEvent> {
        self.turns.iter().flat_map(|t| t.passed.iter())
    }
}

/// Final result of a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    /// Rounds played.
    pub rounds: u32,
    /// The one player still holding dice, if any.
    pub last_standing: Option<PlayerId>,
    pub final_state: Snapshot,
}

/// A game in progress: the table plus the dice source that drives it.
pub struct Game<D: DiceSource> {
    state: GameState,
    dice: D,
    phase: RoundPhase,
}

impl Game<GameRng> {
    /// Deal a game using the configured seed, or a fresh one from entropy.
    #[must_use]
    pub fn seeded(config: &GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        debug!(seed = rng.seed(), "game rng seeded");
        Self::new(config, rng)
    }

    /// The seed driving this game.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.dice.seed()
    }
}

impl<D: DiceSource> Game<D> {
    /// Deal opening hands from `dice` and get ready for the first round.
    pub fn new(config: &GameConfig, mut dice: D) -> Self {
        let state = GameState::initialize(config, &mut dice);
        debug!(
            players = config.player_count,
            dice_per_player = config.dice_per_player,
            "game dealt"
        );
        Self::from_state(state, dice)
    }

    /// Continue from an existing table.
    pub fn from_state(state: GameState, dice: D) -> Self {
        Self {
            state,
            dice,
            phase: RoundPhase::RoundStart,
        }
    }

    /// Current table.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Current phase. Between rounds this is `RoundStart` or `GameOver`.
    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Has the game reached its end?
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase == RoundPhase::GameOver
    }

    /// Play from the opening hands until the game ends.
    ///
    /// Reports the initial table, then every round. At least one round is
    /// always played, even if the deal already meets the end condition.
    pub fn run(&mut self, observer: &mut impl GameObserver) -> GameSummary {
        observer.notify(&GameEvent::InitialState {
            state: self.state.snapshot(),
        });

        while self.play_round(observer).is_some() {}

        self.summary()
    }

    /// Play one full round.
    ///
    /// Returns `None` once the game is over.
    pub fn play_round(&mut self, observer: &mut impl GameObserver) -> Option<RoundReport> {
        if self.is_over() {
            return None;
        }

        let round = self.state.round() + 1;
        observer.notify(&GameEvent::RoundStart { round });

        let active_order = self.state.active_players();
        let mut buffer = PassBuffer::with_default(self.state.player_count());
        debug!(round, active = active_order.len(), "round start");

        self.enter(RoundPhase::Evaluating);
        let turns = self.evaluate_players(&active_order, &mut buffer, observer);

        self.enter(RoundPhase::Merging);
        self.merge(buffer);

        self.enter(RoundPhase::Rerolling);
        self.reroll();

        self.enter(RoundPhase::EndCheck);
        self.state.finish_round();
        observer.notify(&GameEvent::RoundEnd {
            state: self.state.snapshot(),
        });

        let game_over = self.state.is_game_over();
        debug!(
            round,
            active = self.state.active_count(),
            dice_in_play = self.state.dice_in_play(),
            game_over,
            "round complete"
        );

        if game_over {
            self.enter(RoundPhase::GameOver);
            observer.notify(&GameEvent::GameOver(self.summary()));
        } else {
            self.enter(RoundPhase::RoundStart);
        }

        Some(RoundReport {
            round,
            active_order,
            turns,
            game_over,
        })
    }

    /// Summarize the table as it stands.
    #[must_use]
    pub fn summary(&self) -> GameSummary {
        GameSummary {
            rounds: self.state.round(),
            last_standing: self.state.last_standing(),
            final_state: self.state.snapshot(),
        }
    }

    fn enter(&mut self, phase: RoundPhase) {
        trace!(from = ?self.phase, to = ?phase, "phase");
        self.phase = phase;
    }

    fn evaluate_players(
        &mut self,
        active_order: &[PlayerId],
        buffer: &mut PassBuffer,
        observer: &mut impl GameObserver,
    ) -> Vec<TurnReport> {
        let mut turns = Vec::with_capacity(active_order.len());

        for id in PlayerId::all(self.state.player_count()) {
            let Some(player) = self.state.player_mut(id) else {
                continue;
            };
            if !player.is_active() {
                continue;
            }

            let recipient = next_active(id, active_order);
            let hand = player.take_hand();
            let mut report = TurnReport {
                player: id,
                recipient,
                evaluated: hand.to_vec(),
                scored: 0,
                passed: Vec::new(),
                kept: Vec::new(),
            };
            let mut kept = Hand::new();

            for die in hand {
                let outcome = evaluate(die);
                trace!(player = %id, %die, ?outcome, "die evaluated");

                match outcome {
                    DieOutcome::Score => {
                        player.add_point();
                        report.scored += 1;
                    }
                    DieOutcome::Pass => {
                        let replacement = self.dice.roll();
                        buffer[recipient].push(replacement);

                        let pass = PassEvent {
                            from: id,
                            to: recipient,
                            die: replacement,
                        };
                        observer.notify(&GameEvent::Pass(pass));
                        report.passed.push(pass);
                    }
                    DieOutcome::Keep => kept.push(die),
                }
            }

            report.kept = kept.to_vec();
            player.set_hand(kept);
            turns.push(report);
        }

        turns
    }

    fn merge(&mut self, buffer: PassBuffer) {
        for (recipient, dice) in buffer.iter() {
            if dice.is_empty() {
                continue;
            }
            if let Some(player) = self.state.player_mut(recipient) {
                player.receive(dice);
            }
        }
    }

    fn reroll(&mut self) {
        for player in self.state.players_mut().filter(|p| p.is_active()) {
            player.reroll(&mut self.dice);
        }
    }
}
