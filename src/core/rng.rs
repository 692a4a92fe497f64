//! Random die sources.
//!
//! ## Key Features
//!
//! - **Explicit**: the engine never touches ambient global randomness; every
//!   roll goes through a `DiceSource` handed to it by the caller
//! - **Deterministic**: `GameRng` with the same seed produces the same game
//! - **Scriptable**: `ScriptedDice` replays a fixed sequence of faces
//!
//! ## Usage
//!
//! ```
//! use dice_pass::core::{DiceSource, GameRng};
//!
//! let mut rng1 = GameRng::new(42);
//! let mut rng2 = GameRng::new(42);
//!
//! // Same seed, same rolls
//! assert_eq!(rng1.roll(), rng2.roll());
//! ```

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::die::Die;

/// A source of uniformly distributed die faces.
///
/// The engine draws from this for initial hands, pass replacements and
/// end-of-round re-rolls, always in player ID order then hand order.
pub trait DiceSource {
    /// Roll one die.
    fn roll(&mut self) -> Die;
}

impl<D: DiceSource + ?Sized> DiceSource for &mut D {
    fn roll(&mut self) -> Die {
        (**self).roll()
    }
}

/// Seeded RNG for games.
///
/// Uses ChaCha8 for speed while keeping a reproducible stream per seed.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG with a seed drawn from the thread RNG.
    ///
    /// The chosen seed is available via [`GameRng::seed`] so the game
    /// can be replayed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl DiceSource for GameRng {
    fn roll(&mut self) -> Die {
        let face = self.inner.gen_range(1..=Die::FACES);
        Die::new(face).unwrap_or(Die::MIN)
    }
}

/// Replays a fixed sequence of faces, for reproducing exact scenarios.
///
/// # Panics
///
/// `roll` panics once the script is exhausted; a scenario that draws more
/// dice than it scripted is a broken scenario.
#[derive(Clone, Debug, Default)]
pub struct ScriptedDice {
    faces: VecDeque<Die>,
    drawn: usize,
}

impl ScriptedDice {
    /// Create a script from raw face values.
    ///
    /// # Panics
    ///
    /// Panics if any value is outside `1..=6`.
    #[must_use]
    pub fn new(faces: impl IntoIterator<Item = u8>) -> Self {
        let faces = faces
            .into_iter()
            .map(|v| Die::new(v).unwrap_or_else(|| panic!("scripted face out of range: {v}")))
            .collect();
        Self { faces, drawn: 0 }
    }

    /// Faces not yet drawn.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.faces.len()
    }

    /// Faces drawn so far.
    #[must_use]
    pub fn drawn(&self) -> usize {
        self.drawn
    }
}

impl DiceSource for ScriptedDice {
    fn roll(&mut self) -> Die {
        match self.faces.pop_front() {
            Some(die) => {
                self.drawn += 1;
                die
            }
            None => panic!("scripted dice exhausted after {} rolls", self.drawn),
        }
    }
}
