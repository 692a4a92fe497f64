//! Game state: every player's score and dice.
//!
//! ## Player
//!
//! - Score: count of dice that came up 6, never decreases
//! - Hand: ordered dice, shrinks by scoring and passing, grows only by
//!   receiving passed dice
//!
//! A player whose hand empties is out for good. Nothing in the engine deals
//! dice to an empty hand.
//!
//! ## GameState
//!
//! Owns all players in an ID-indexed `PlayerMap`, so every walk over the
//! table runs in ascending ID order.

use serde::{Deserialize, Serialize};

use super::config::GameConfig;
use super::die::{Die, Hand};
use super::player::{PlayerId, PlayerMap};
use super::rng::DiceSource;

/// One seat at the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    score: u32,
    dice: Hand,
}

impl Player {
    fn new(id: PlayerId, dice: Hand) -> Self {
        Self { id, score: 0, dice }
    }

    /// This player's ID.
    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// Dice scored so far.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Current hand.
    #[must_use]
    pub fn dice(&self) -> &[Die] {
        &self.dice
    }

    /// Does this player still hold dice?
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.dice.is_empty()
    }

    pub(crate) fn add_point(&mut self) {
        self.score += 1;
    }

    pub(crate) fn take_hand(&mut self) -> Hand {
        std::mem::take(&mut self.dice)
    }

    pub(crate) fn set_hand(&mut self, dice: Hand) {
        self.dice = dice;
    }

    pub(crate) fn receive(&mut self, dice: &[Die]) {
        self.dice.extend_from_slice(dice);
    }

    pub(crate) fn reroll(&mut self, source: &mut impl DiceSource) {
        for die in &mut self.dice {
            *die = source.roll();
        }
    }
}

/// Read-only view of one player for display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub id: PlayerId,
    pub score: u32,
    pub dice: Vec<Die>,
}

/// Read-only view of the whole table, in ascending ID order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Rounds completed when the snapshot was taken.
    pub round: u32,
    pub players: Vec<PlayerView>,
}

impl Snapshot {
    /// Look up a player's view.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&PlayerView> {
        self.players.iter().find(|p| p.id == id)
    }
}

/// Full game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    players: PlayerMap<Player>,

    /// Rounds completed so far.
    round: u32,
}

impl GameState {
    /// Deal the opening hands.
    ///
    /// Players are numbered `1..=player_count`; each receives
    /// `dice_per_player` rolls from `dice`, player 1 first.
    #[must_use]
    pub fn initialize(config: &GameConfig, dice: &mut impl DiceSource) -> Self {
        let players = PlayerMap::new(config.player_count, |id| {
            let hand: Hand = (0..config.dice_per_player).map(|_| dice.roll()).collect();
            Player::new(id, hand)
        });

        Self { players, round: 0 }
    }

    /// Build a state from explicit hands, player 1 first.
    ///
    /// Useful for setting up a specific table.
    #[must_use]
    pub fn with_hands(hands: impl IntoIterator<Item = Hand>) -> Self {
        let mut hands: Vec<Hand> = hands.into_iter().collect();
        let players = PlayerMap::new(hands.len(), |id| {
            Player::new(id, std::mem::take(&mut hands[id.index()]))
        });

        Self { players, round: 0 }
    }

    /// Get player count.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    /// Rounds completed so far.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    pub(crate) fn finish_round(&mut self) {
        self.round += 1;
    }

    /// Get a player.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id)
    }

    pub(crate) fn player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.get_mut(id)
    }

    /// Iterate over players in ascending ID order.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.values()
    }

    pub(crate) fn players_mut(&mut self) -> impl Iterator<Item = &mut Player> {
        self.players.iter_mut().map(|(_, p)| p)
    }

    /// IDs of players still holding dice, in ascending order.
    #[must_use]
    pub fn active_players(&self) -> Vec<PlayerId> {
        self.players()
            .filter(|p| p.is_active())
            .map(Player::id)
            .collect()
    }

    /// Number of players still holding dice.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.players().filter(|p| p.is_active()).count()
    }

    /// Dice in play across the table.
    #[must_use]
    pub fn dice_in_play(&self) -> usize {
        self.players().map(|p| p.dice().len()).sum()
    }

    /// The game ends once at most one player holds dice.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.active_count() <= 1
    }

    /// The only player left holding dice, if exactly one is.
    #[must_use]
    pub fn last_standing(&self) -> Option<PlayerId> {
        let mut active = self.players().filter(|p| p.is_active());
        match (active.next(), active.next()) {
            (Some(p), None) => Some(p.id()),
            _ => None,
        }
    }

    /// Capture scores and hands for display.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            round: self.round,
            players: self
                .players()
                .map(|p| PlayerView {
                    id: p.id(),
                    score: p.score(),
                    dice: p.dice().to_vec(),
                })
                .collect(),
        }
    }
}
