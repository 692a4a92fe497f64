//! Game configuration.
//!
//! A `GameConfig` fixes how many players sit down and how many dice each
//! starts with. The rules themselves are not configurable.

use serde::{Deserialize, Serialize};

use super::error::GameError;

/// Largest supported table.
pub const MAX_PLAYERS: usize = u32::MAX as usize;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of players (at least 1).
    pub player_count: usize,

    /// Dice dealt to each player at the start (may be 0).
    pub dice_per_player: usize,

    /// RNG seed. `None` draws one from entropy when the game starts.
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Create a new game configuration.
    pub fn new(player_count: usize, dice_per_player: usize) -> Result<Self, GameError> {
        if player_count < 1 {
            return Err(GameError::InvalidConfiguration(
                "must have at least 1 player".to_string(),
            ));
        }
        if player_count > MAX_PLAYERS {
            return Err(GameError::InvalidConfiguration(format!(
                "at most {MAX_PLAYERS} players supported, got {player_count}"
            )));
        }

        Ok(Self {
            player_count,
            dice_per_player,
            seed: None,
        })
    }

    /// Create a configuration from signed input, such as parsed arguments.
    ///
    /// Rejects a player count below 1 and a negative dice count.
    pub fn from_raw(player_count: i64, dice_per_player: i64) -> Result<Self, GameError> {
        let players = usize::try_from(player_count).map_err(|_| {
            GameError::InvalidConfiguration(format!(
                "must have at least 1 player, got {player_count}"
            ))
        })?;
        let dice = usize::try_from(dice_per_player).map_err(|_| {
            GameError::InvalidConfiguration(format!(
                "dice per player cannot be negative, got {dice_per_player}"
            ))
        })?;

        Self::new(players, dice)
    }

    /// Fix the RNG seed for a reproducible game.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
