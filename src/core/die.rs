//! Six-sided die values.
//!
//! A `Die` is a face value in `1..=6`. Construction is checked, so every
//! `Die` in a hand is a legal face and rule code can match on it exhaustively.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A single die face in `1..=6`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Die(u8);

impl Die {
    /// Number of faces.
    pub const FACES: u8 = 6;

    /// Lowest face.
    pub const MIN: Die = Die(1);

    /// Highest face.
    pub const MAX: Die = Die(6);

    /// Create a die showing `value`.
    ///
    /// Returns `None` if `value` is not in `1..=6`.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value >= 1 && value <= Self::FACES {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Get the face value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Iterate over every face, lowest first.
    pub fn all() -> impl Iterator<Item = Die> {
        (1..=Self::FACES).map(Die)
    }
}

impl TryFrom<u8> for Die {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Die::new(value).ok_or_else(|| format!("die face out of range: {value}"))
    }
}

impl From<Die> for u8 {
    fn from(die: Die) -> Self {
        die.0
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A player's dice, in the order they were rolled or received.
///
/// Inline capacity covers typical starting hands without allocating.
pub type Hand = SmallVec<[Die; 8]>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_die_range() {
        assert_eq!(Die::new(0), None);
        assert_eq!(Die::new(7), None);
        assert_eq!(Die::new(1), Some(Die::MIN));
        assert_eq!(Die::new(6), Some(Die::MAX));
        assert_eq!(Die::new(4).map(Die::value), Some(4));
    }

    #[test]
    fn test_all_faces() {
        let faces: Vec<u8> = Die::all().map(Die::value).collect();
        assert_eq!(faces, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_die_serde() {
        let die = Die::new(5).unwrap();
        let json = serde_json::to_string(&die).unwrap();
        assert_eq!(json, "5");

        let back: Die = serde_json::from_str(&json).unwrap();
        assert_eq!(back, die);

        assert!(serde_json::from_str::<Die>("9").is_err());
    }
}
