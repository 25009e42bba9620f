//! Rulesets: which items are in play.
//!
//! A ruleset selects a canonical prefix of [`ALL_ITEMS`]: the classic game
//! plays over the first three items, the extended game over all five.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::item::{Item, ALL_ITEMS, CLASSIC_ITEMS};

/// The set of items a game is played over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ruleset {
    /// Rock, Paper, Scissors.
    Classic,
    /// Rock, Paper, Scissors, Spock, Lizard.
    Extended,
}

impl Ruleset {
    /// Returns the items in play, in canonical order.
    pub const fn items(self) -> &'static [Item] {
        match self {
            Ruleset::Classic => &CLASSIC_ITEMS,
            Ruleset::Extended => &ALL_ITEMS,
        }
    }

    /// Returns a short display name for this ruleset.
    pub const fn name(self) -> &'static str {
        match self {
            Ruleset::Classic => "classic",
            Ruleset::Extended => "extended",
        }
    }

    /// Returns true if the item is playable under this ruleset.
    pub const fn contains(self, item: Item) -> bool {
        item.index() < self.items().len()
    }

    /// Draws a uniformly random item from this ruleset.
    pub fn random_item<R: Rng>(self, rng: &mut R) -> Item {
        let items = self.items();
        items[rng.gen_range(0..items.len())]
    }

    /// Parses an item by full name, rejecting items outside this ruleset.
    pub fn parse_name(self, s: &str) -> Option<Item> {
        Item::from_name(s).filter(|&item| self.contains(item))
    }

    /// Parses an item by abbreviation, rejecting items outside this ruleset.
    pub fn parse_abbr(self, s: &str) -> Option<Item> {
        Item::from_abbr(s).filter(|&item| self.contains(item))
    }
}
