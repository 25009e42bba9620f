//! Match outcomes.

use serde::{Deserialize, Serialize};

use super::item::Item;

/// The result of comparing two items, from the first player's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Tie,
    FirstWins,
    SecondWins,
}

impl Outcome {
    /// Returns the outcome as seen from the other player's side.
    pub const fn flipped(self) -> Outcome {
        match self {
            Outcome::Tie => Outcome::Tie,
            Outcome::FirstWins => Outcome::SecondWins,
            Outcome::SecondWins => Outcome::FirstWins,
        }
    }

    /// Returns the winning item for this outcome, or `None` on a tie.
    pub const fn winner(self, first: Item, second: Item) -> Option<Item> {
        match self {
            Outcome::Tie => None,
            Outcome::FirstWins => Some(first),
            Outcome::SecondWins => Some(second),
        }
    }
}
